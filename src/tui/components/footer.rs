//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Enter", "n/→")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Details")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the ticket list
pub fn dashboard_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Move"),
        Shortcut::new("Enter", "Details"),
        Shortcut::new("x", "Resolve"),
        Shortcut::new("p/n", "Page"),
        Shortcut::new("s", "Page Size"),
        Shortcut::new("c", "Category"),
        Shortcut::new("t", "Status"),
        Shortcut::new("0", "Clear Filters"),
        Shortcut::new("r", "Refresh"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts while the detail modal is open
pub fn detail_shortcuts(can_resolve: bool) -> Vec<Shortcut> {
    let mut shortcuts = Vec::with_capacity(3);
    if can_resolve {
        shortcuts.push(Shortcut::new("x", "Mark as Resolved"));
    }
    shortcuts.push(Shortcut::new("Esc", "Close"));
    shortcuts.push(Shortcut::new("q", "Quit"));
    shortcuts
}

/// Shortcuts when the listing failed and nothing is shown
pub fn error_shortcuts() -> Vec<Shortcut> {
    vec![Shortcut::new("r", "Retry"), Shortcut::new("q", "Quit")]
}
