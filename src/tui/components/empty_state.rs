//! Empty state component
//!
//! Shown in place of the ticket list when there is nothing to list.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The loaded page has no tickets, or none pass the filter
    #[default]
    NoTickets,
    /// First load still in flight
    Loading,
    /// The listing failed and no earlier page is available
    LoadFailed,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Message for `LoadFailed`
    pub message: Option<String>,
}

/// Icon, title, message and hint for each kind
pub fn empty_state_text(kind: EmptyStateKind) -> (&'static str, &'static str, &'static str, &'static str) {
    match kind {
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "No tickets found matching your criteria",
            "Press 'c' or 't' to change filters, '0' to clear them.",
        ),
        EmptyStateKind::Loading => ("~", "Loading", "Loading tickets...", ""),
        EmptyStateKind::LoadFailed => (
            "!",
            "Error",
            "Failed to load tickets. Please try again.",
            "Press 'r' to retry.",
        ),
    }
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, default_message, hint) = empty_state_text(props.kind);
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| default_message.to_string());
    let is_error = props.kind == EmptyStateKind::LoadFailed;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: if is_error { theme.error } else { theme.border },
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: if is_error { theme.error } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: if is_error { theme.error } else { theme.text },
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(if !hint.is_empty() {
                Some(element! {
                    View(margin_top: 2) {
                        Text(
                            content: hint,
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}
