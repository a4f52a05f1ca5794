//! Modal dialog component
//!
//! A centered, bordered box drawn over the rest of the screen with a title
//! row, a content area and an optional footer hint.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Background drawn behind the modal box
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the Modal component
#[derive(Default, Props)]
pub struct ModalProps<'a> {
    pub title: String,
    /// Width as a percentage of the terminal (default 70)
    pub width_percent: Option<u32>,
    /// Border color (default: focused border)
    pub border_color: Option<Color>,
    /// Shown right-aligned in the title row
    pub badge: Option<(String, Color)>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn Modal<'a>(props: &mut ModalProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.border_color.unwrap_or(theme.border_focused);
    let width = props.width_percent.unwrap_or(70).clamp(20, 100);
    let badge = props.badge.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            View(
                width: Size::Percent(width as f32),
                max_height: 90pct,
                background_color: MODAL_BACKDROP,
                border_style: BorderStyle::Double,
                border_color: border_color,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(
                        content: props.title.clone(),
                        color: theme.id_color,
                        weight: Weight::Bold,
                    )
                    View(flex_grow: 1.0)
                    #(badge.map(|(label, color)| element! {
                        Text(content: label, color: color, weight: Weight::Bold)
                    }))
                }

                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::Hidden,
                ) {
                    #(std::mem::take(&mut props.children))
                }

                #(footer.map(|text| element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: text, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_props_default() {
        let props = ModalProps::default();
        assert!(props.title.is_empty());
        assert!(props.badge.is_none());
        assert!(props.footer_text.is_none());
    }
}
