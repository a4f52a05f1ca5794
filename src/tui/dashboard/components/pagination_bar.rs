use iocraft::prelude::*;

use crate::tui::dashboard::model::PaginationViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct PaginationBarProps {
    pub pagination: PaginationViewModel,
}

/// "Showing N of M tickets", page position, prev/next and page size.
/// Disabled controls are drawn dimmed.
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let p = &props.pagination;
    let control_color = |enabled: bool| if enabled { theme.highlight } else { theme.text_dimmed };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            gap: 2,
        ) {
            Text(content: p.showing.clone(), color: theme.text)
            View(flex_grow: 1.0)
            Text(content: "< Prev (p)", color: control_color(p.can_prev))
            Text(content: p.position.clone(), color: theme.text, weight: Weight::Bold)
            Text(content: "Next (n) >", color: control_color(p.can_next))
            Text(content: format!("{} / page (s)", p.page_size), color: theme.text_dimmed)
        }
    }
}
