//! Text formatting shared by the CLI and the dashboard.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::dashboard::CategoryCount;
use crate::types::{Category, StatKind, Ticket, TicketStatus};

/// Characters of a message shown before it is cut off in list views
pub const MESSAGE_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Shorten a message for a card or list line.
///
/// Returns the preview and whether anything was cut.
pub fn truncate_message(message: &str) -> (String, bool) {
    truncate_chars(message, MESSAGE_PREVIEW_CHARS)
}

pub fn truncate_chars(text: &str, max: usize) -> (String, bool) {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => (format!("{}{ELLIPSIS}", &text[..byte_idx]), true),
        None => (text.to_string(), false),
    }
}

/// Classifier confidence as a percentage with one decimal, e.g. `87.5%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Date part of a creation timestamp, for cards
pub fn format_created_date(created_at: &jiff::civil::DateTime) -> String {
    created_at.strftime("%Y-%m-%d").to_string()
}

/// Full creation timestamp, for the detail view
pub fn format_created_at(created_at: &jiff::civil::DateTime) -> String {
    created_at.strftime("%Y-%m-%d %H:%M:%S").to_string()
}

/// "Showing N of M tickets" with the server-side total
pub fn format_showing(shown: usize, total_elements: u64) -> String {
    format!("Showing {shown} of {total_elements} tickets")
}

/// One-based page position, e.g. "Page 2 of 5"
pub fn format_page_position(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page + 1, total_pages)
}

pub fn format_status_colored(status: TicketStatus) -> String {
    let badge = format!("[{status}]");
    match status {
        TicketStatus::Open => badge.yellow().to_string(),
        TicketStatus::Resolved => badge.green().to_string(),
    }
}

pub fn format_category_colored(category: Category) -> String {
    let label = category.as_str();
    match category {
        Category::Technology => label.blue().to_string(),
        Category::Accounts => label.magenta().to_string(),
        Category::Delivery => label.cyan().to_string(),
        Category::Finance => label.green().to_string(),
        Category::Product => label.yellow().to_string(),
        Category::Refund => label.red().to_string(),
    }
}

/// Format a ticket for single-line display with colors
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let code = format!("{:10}", ticket.ticket_id);
    let (preview, _) = truncate_chars(&ticket.message, 60);
    let preview = preview.replace(['\n', '\r'], " ");

    format!(
        "{} {} {} {} {} - {}",
        code.cyan(),
        format_status_colored(ticket.status),
        format_category_colored(ticket.category),
        format!("({})", format_confidence(ticket.confidence)).dimmed(),
        ticket.sender_email,
        preview
    )
}

/// Multi-line description of one ticket, used by `ls --full`
pub fn format_ticket_detail(ticket: &Ticket) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        ticket.ticket_id.cyan().bold(),
        format_status_colored(ticket.status)
    ));
    out.push_str(&format!("  From:     {}\n", ticket.sender_email));
    out.push_str(&format!(
        "  Category: {} ({} match)\n",
        format_category_colored(ticket.category),
        format_confidence(ticket.confidence)
    ));
    out.push_str(&format!(
        "  Created:  {}\n",
        format_created_at(&ticket.created_at)
    ));
    out.push_str(&format!("  Id:       {}\n\n", ticket.id));
    out.push_str(&ticket.message);
    out
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Statistic")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render fetched statistics as a table. Missing values show as `-`.
pub fn stats_table(rows: &[(StatKind, Option<String>)]) -> String {
    let rows: Vec<StatRow> = rows
        .iter()
        .map(|(kind, value)| StatRow {
            label: kind.label().to_string(),
            value: value.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tickets")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Render a per-page category distribution as a table
pub fn distribution_table(distribution: &[CategoryCount]) -> String {
    let total: usize = distribution.iter().map(|c| c.count).sum();
    let rows: Vec<CategoryRow> = distribution
        .iter()
        .map(|c| CategoryRow {
            category: c.category.to_string(),
            count: c.count,
            share: format!("{:.0}%", share(c.count, total) * 100.0),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Fraction of `total` that `count` represents, 0 when total is 0
pub fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
