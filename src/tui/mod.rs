//! Terminal user interface
//!
//! - `dashboard` - the support ticket dashboard
//! - `components` - building blocks shared by screens
//! - `theme` - colors

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use theme::Theme;
