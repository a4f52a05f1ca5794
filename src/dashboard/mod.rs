//! Dashboard model: fetch controller, view filter, state and reducer.
//!
//! Nothing here depends on the terminal; the TUI renders from
//! [`DashboardState`] and feeds user input back through
//! [`TicketFetchController::dispatch`].

pub mod controller;
pub mod distribution;
pub mod fetch_state;
pub mod filter;
pub mod state;

pub use controller::TicketFetchController;
pub use distribution::{CategoryCount, compute_category_distribution};
pub use fetch_state::FetchState;
pub use filter::{Selector, ViewFilter, filter_tickets};
pub use state::{
    DashboardAction, DashboardState, Effect, TOAST_TTL, Toast, ToastLevel, next_page_size, reduce,
};
