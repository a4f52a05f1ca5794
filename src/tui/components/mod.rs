//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal;
pub mod ticket_card;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
pub use modal::{Modal, ModalProps};
pub use ticket_card::{TicketCard, TicketCardProps};
pub use toast::{render_toast, toast_color};
