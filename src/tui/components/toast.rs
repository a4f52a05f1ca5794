//! Toast notification rendering

use iocraft::prelude::*;

use crate::dashboard::{Toast, ToastLevel};
use crate::tui::theme::theme;

/// Color associated with a toast level
pub fn toast_color(level: ToastLevel) -> Color {
    let theme = theme();
    match level {
        ToastLevel::Info => theme.info,
        ToastLevel::Error => theme.error,
        ToastLevel::Success => theme.success,
    }
}

/// Render a toast notification as an optional element
///
/// Convenience for `element!` blocks that conditionally show a toast.
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        let color = toast_color(t.level);
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(content: t.message.clone(), color: color, weight: Weight::Bold)
            }
        }
        .into_any()
    })
}
