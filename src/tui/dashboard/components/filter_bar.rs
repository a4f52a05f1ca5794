use iocraft::prelude::*;

use crate::tui::dashboard::model::FilterBarViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct FilterBarProps {
    pub filter: FilterBarViewModel,
}

/// Current category and status selectors
#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let f = &props.filter;

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            gap: 1,
        ) {
            Text(content: "Category (c):", color: theme.text_dimmed)
            Text(content: f.category.clone(), color: theme.id_color, weight: Weight::Bold)
            Text(content: " Status (t):", color: theme.text_dimmed)
            Text(content: f.status.clone(), color: theme.id_color, weight: Weight::Bold)
            #(if f.is_filtered {
                Some(element! {
                    Text(content: " [filtered: 0 to clear]", color: theme.status_open)
                })
            } else {
                None
            })
        }
    }
}
