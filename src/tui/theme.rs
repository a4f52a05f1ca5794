//! Theme system for TUI colors and styles
//!
//! Status and category colors match the CLI output in `display`.

use iocraft::prelude::Color;

use crate::types::{Category, TicketStatus};

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_open: Color,
    pub status_resolved: Color,

    // Category colors
    pub category_technology: Color,
    pub category_accounts: Color,
    pub category_delivery: Color,
    pub category_finance: Color,
    pub category_product: Color,
    pub category_refund: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
    pub bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_resolved: Color::Green,

            category_technology: Color::Blue,
            category_accounts: Color::Magenta,
            category_delivery: Color::Cyan,
            category_finance: Color::Green,
            category_product: Color::Yellow,
            category_refund: Color::Red,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            info: Color::Cyan,
            bar: Color::Rgb {
                r: 136,
                g: 132,
                b: 216,
            },
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::Resolved => self.status_resolved,
        }
    }

    /// Get the color for a category label
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Technology => self.category_technology,
            Category::Accounts => self.category_accounts,
            Category::Delivery => self.category_delivery,
            Category::Finance => self.category_finance,
            Category::Product => self.category_product,
            Category::Refund => self.category_refund,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
