//! Interactive support ticket dashboard

pub mod components;
pub mod model;
pub mod view;

pub use model::{
    DASHBOARD_TITLE, DashboardViewModel, compute_dashboard_view_model, key_to_action,
};
pub use view::{Dashboard, DashboardProps};
