use iocraft::prelude::*;

use crate::tui::dashboard::model::DistributionBarViewModel;
use crate::tui::theme::theme;

const BAR_CHAR: char = '█';

/// Widest category label, so bars line up
const LABEL_WIDTH: usize = 10;

#[derive(Default, Props)]
pub struct DistributionChartProps {
    pub bars: Vec<DistributionBarViewModel>,
    /// Columns available for the longest bar
    pub bar_width: u16,
}

/// A bar of `fraction * width` cells; non-zero fractions get at least one
pub fn bar_string(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let mut cells = (fraction * width as f64).round() as usize;
    if fraction > 0.0 && cells == 0 && width > 0 {
        cells = 1;
    }
    std::iter::repeat_n(BAR_CHAR, cells).collect()
}

/// Horizontal bar chart of the category split of the loaded page
#[component]
pub fn DistributionChart(props: &DistributionChartProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let width = props.bar_width as usize;

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "Categories (this page)", color: theme.text_dimmed, weight: Weight::Bold)
            #(if props.bars.is_empty() {
                Some(element! {
                    Text(content: "No data", color: theme.text_dimmed)
                })
            } else {
                None
            })
            #(props.bars.iter().map(|bar| element! {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(
                        content: format!("{:<LABEL_WIDTH$}", bar.category.as_str()),
                        color: theme.category_color(bar.category),
                    )
                    Text(content: bar_string(bar.fraction, width), color: theme.bar)
                    Text(content: bar.count.to_string(), color: theme.text)
                }
            }))
        }
    }
}
