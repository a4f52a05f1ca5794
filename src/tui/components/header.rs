//! App header bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    pub title: String,
    /// Shown after the title, e.g. the backend host
    pub subtitle: Option<String>,
    /// Right-aligned status text
    pub status: Option<String>,
}

/// App header bar showing title and a status indicator
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let left_text = match &props.subtitle {
        Some(sub) => format!("{} - {}", props.title, sub),
        None => props.title.clone(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            #(props.status.clone().map(|status| element! {
                Text(content: status, color: theme.highlight_text)
            }))
        }
    }
}
