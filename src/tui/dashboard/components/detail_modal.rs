use iocraft::prelude::*;

use crate::tui::components::Modal;
use crate::tui::dashboard::model::DetailViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct DetailModalProps {
    pub detail: Option<DetailViewModel>,
}

/// Full view of one ticket, with the resolve hint for open tickets
#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(detail) = props.detail.clone() else {
        return element! { View() }.into_any();
    };

    let footer = if detail.can_resolve {
        "x: Mark as Resolved | Esc: Close"
    } else {
        "Esc: Close"
    };

    element! {
        Modal(
            title: detail.title.clone(),
            badge: Some((format!("[{}]", detail.status), theme.status_color(detail.status))),
            footer_text: Some(footer.to_string()),
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "From:", color: theme.text_dimmed)
                Text(content: detail.sender.clone(), color: theme.text)
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "Category:", color: theme.text_dimmed)
                Text(
                    content: detail.category.to_string(),
                    color: theme.category_color(detail.category),
                    weight: Weight::Bold,
                )
                Text(content: format!("({})", detail.confidence), color: theme.text_dimmed)
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: "Created:", color: theme.text_dimmed)
                Text(content: detail.created_at.clone(), color: theme.text)
            }
            View(margin_top: 1) {
                Text(content: detail.message.clone(), color: theme.text)
            }
        }
    }
    .into_any()
}
