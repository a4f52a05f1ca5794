//! Dashboard-specific components

pub mod detail_modal;
pub mod distribution_chart;
pub mod filter_bar;
pub mod pagination_bar;
pub mod stats_panel;

pub use detail_modal::{DetailModal, DetailModalProps};
pub use distribution_chart::{DistributionChart, DistributionChartProps, bar_string};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use pagination_bar::{PaginationBar, PaginationBarProps};
pub use stats_panel::{StatsPanel, StatsPanelProps};
