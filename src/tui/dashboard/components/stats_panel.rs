use iocraft::prelude::*;

use crate::tui::dashboard::model::StatViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct StatsPanelProps {
    pub stats: Vec<StatViewModel>,
}

/// Row of boxes with the aggregate statistics
#[component]
pub fn StatsPanel(props: &StatsPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Row, flex_shrink: 0.0, gap: 1) {
            #(props.stats.iter().map(|stat| element! {
                View(
                    flex_grow: 1.0,
                    flex_basis: 0,
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Round,
                    border_color: theme.border,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(content: stat.label, color: theme.text_dimmed)
                    Text(content: stat.value.clone(), color: theme.text, weight: Weight::Bold)
                }
            }))
        }
    }
}
