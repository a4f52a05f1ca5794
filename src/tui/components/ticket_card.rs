//! Ticket card component
//!
//! One support ticket in the dashboard list: code, date and status on the
//! first row, sender, message preview, then category and confidence.

use iocraft::prelude::*;

use crate::display::{format_confidence, format_created_date, truncate_message};
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    pub ticket: Option<Ticket>,
    pub is_selected: bool,
}

/// Layout:
/// ```text
/// +------------------------------------------------+
/// |> TCK-1042                 2024-05-01  [Open]   |
/// | ana@example.com                                 |
/// | My refund has not arrived after two weeks...    |
/// | Read more (Enter)                               |
/// | Refund  87.5% confident                         |
/// +------------------------------------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.as_ref() else {
        return element! { View() };
    };

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { ">" } else { " " };
    let (preview, truncated) = truncate_message(&ticket.message);
    let preview = preview.replace(['\n', '\r'], " ");

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                Text(
                    content: ticket.ticket_id.clone(),
                    color: theme.id_color,
                    weight: Weight::Bold,
                )
                View(flex_grow: 1.0)
                Text(
                    content: format_created_date(&ticket.created_at),
                    color: theme.text_dimmed,
                )
                Text(
                    content: format!("[{}]", ticket.status),
                    color: theme.status_color(ticket.status),
                    weight: Weight::Bold,
                )
            }
            Text(content: ticket.sender_email.clone(), color: theme.text_dimmed)
            Text(content: preview, color: theme.text)
            #(truncated.then(|| element! {
                Text(content: "Read more (Enter)", color: theme.highlight)
            }))
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: ticket.category.to_string(),
                    color: theme.category_color(ticket.category),
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("{} confident", format_confidence(ticket.confidence)),
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
