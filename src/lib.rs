pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod logging;
pub mod paths;
pub mod tui;
pub mod types;

pub use api::{HttpTicketApi, TicketApi};
pub use dashboard::{DashboardState, TicketFetchController, ViewFilter};
pub use error::{DeskError, Result};
pub use types::{Category, PageQuery, Ticket, TicketId, TicketPage, TicketStatus};
