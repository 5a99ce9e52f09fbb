use crate::layout::{measure_text, Measurer, TextStyle};
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// How bullet markers are drawn and how far item text hangs from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletStyle {
    /// The string drawn in front of the first line of every item
    pub marker: String,
    /// Space between items. Not applied by [`layout_bullets`]; arrangements
    /// that want extra space between items add it themselves.
    pub gap: Px,
    /// Horizontal distance from the marker to the item text
    pub indent: Px,
}

impl Default for BulletStyle {
    fn default() -> Self {
        BulletStyle {
            marker: "•".to_string(),
            gap: Px(12.0),
            indent: Px(48.0),
        }
    }
}

pub struct BulletLayoutRequest<'a> {
    pub items: &'a [String],
    pub style: &'a TextStyle,
    pub frame_width: Px,
    pub bullet: &'a BulletStyle,
}

/// A single laid-out line of a bulleted list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletLine {
    pub text: String,
    /// Only the first line of each item carries the marker
    pub marker: Option<String>,
    /// Offset of the text from the left of the frame
    pub x_offset: Px,
    /// Offset of the line from the top of the frame
    pub y_offset: Px,
    /// Which item this line belongs to
    pub item_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletLayout {
    pub lines: Vec<BulletLine>,
    pub total_height: Px,
}

impl BulletLayout {
    /// The lines belonging to one item
    pub fn item(&self, index: usize) -> impl Iterator<Item = &BulletLine> {
        self.lines.iter().filter(move |line| line.item_index == index)
    }
}

/// Lays out a list of items with a hanging indent: every line of an item,
/// including wrapped continuation lines, starts at `bullet.indent`, so the
/// continuation lines align under the item text rather than under the marker.
///
/// Items are wrapped against `frame_width - indent`. Empty items still take up
/// one line carrying the marker, so placeholder bullets keep the vertical
/// rhythm of the list. The total height is always the number of lines times
/// the style's line height.
pub fn layout_bullets<M: Measurer + ?Sized>(
    measurer: &mut M,
    request: &BulletLayoutRequest<'_>,
) -> BulletLayout {
    let BulletLayoutRequest {
        items,
        style,
        frame_width,
        bullet,
    } = *request;

    let text_width = (frame_width - bullet.indent).max(Px::ZERO);
    let mut lines: Vec<BulletLine> = Vec::new();

    for (item_index, item) in items.iter().enumerate() {
        if item.trim().is_empty() {
            lines.push(BulletLine {
                text: String::new(),
                marker: Some(bullet.marker.clone()),
                x_offset: bullet.indent,
                y_offset: style.line_height * lines.len() as f32,
                item_index,
            });
            continue;
        }

        let wrapped = measure_text(measurer, item, style, text_width);
        for (i, line) in wrapped.lines.into_iter().enumerate() {
            lines.push(BulletLine {
                text: line.text,
                marker: (i == 0).then(|| bullet.marker.clone()),
                x_offset: bullet.indent,
                y_offset: style.line_height * lines.len() as f32,
                item_index,
            });
        }
    }

    let total_height = style.line_height * lines.len() as f32;
    BulletLayout {
        lines,
        total_height,
    }
}
