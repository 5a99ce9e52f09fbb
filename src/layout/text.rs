use crate::colour::{colours, Colour};
use crate::layout::Measurer;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Everything needed to measure and paint a run of text. `line_height` is an
/// explicit pixel value rather than something derived from font metrics, so
/// that lines stack identically whatever font ends up being used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: Px,
    pub line_height: Px,
    #[serde(default)]
    pub letter_spacing: Px,
    pub color: Colour,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_family: "Inter".to_string(),
            font_weight: 400,
            font_size: Px(32.0),
            line_height: Px(44.0),
            letter_spacing: Px(0.0),
            color: colours::BLACK,
        }
    }
}

/// Horizontal alignment of lines within their frame
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The x offset of a line of `line_width` inside a frame of `frame_width`
    pub fn offset(&self, frame_width: Px, line_width: Px) -> Px {
        match self {
            TextAlign::Left => Px::ZERO,
            TextAlign::Center => ((frame_width - line_width) / 2.0).max(Px::ZERO),
            TextAlign::Right => (frame_width - line_width).max(Px::ZERO),
        }
    }
}

/// A single wrapped line and its measured width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub width: Px,
}

/// The result of wrapping a string to a maximum width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayout {
    pub lines: Vec<TextLine>,
    pub line_height: Px,
    pub total_height: Px,
}

impl TextLayout {
    /// The width of the widest line
    pub fn width(&self) -> Px {
        self.lines
            .iter()
            .map(|line| line.width)
            .fold(Px::ZERO, Px::max)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into alternating runs of whitespace and non-whitespace. The
/// whitespace runs are kept as tokens of their own so that joining the tokens
/// reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (i, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                tokens.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Wraps text into lines no wider than `max_width` using greedy line breaking.
///
/// Text is split into tokens at whitespace boundaries and tokens are added to
/// the current line for as long as the line still fits. When a token would
/// overflow a non-empty line, the line is committed and the token starts the
/// next line with its leading whitespace removed. Hard newlines in the input
/// always end a line.
///
/// A single token wider than `max_width` is never split: it sits alone on its
/// own line and overflows horizontally.
///
/// Empty or whitespace-only text produces no lines and a total height of 0.
/// Otherwise the total height is exactly `lines × style.line_height`.
pub fn measure_text<M: Measurer + ?Sized>(
    measurer: &mut M,
    text: &str,
    style: &TextStyle,
    max_width: Px,
) -> TextLayout {
    let mut lines: Vec<TextLine> = Vec::new();

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_start();
        if paragraph.is_empty() {
            continue;
        }

        let mut current = String::new();
        for token in tokenize(paragraph) {
            let candidate = format!("{current}{token}");
            if !current.is_empty() && measurer.width_of(&candidate, style) > max_width {
                commit(measurer, &mut lines, &current, style, max_width);
                current = token.trim_start().to_string();
            } else {
                current = candidate;
            }
        }
        commit(measurer, &mut lines, &current, style, max_width);
    }

    let total_height = style.line_height * lines.len() as f32;
    TextLayout {
        lines,
        line_height: style.line_height,
        total_height,
    }
}

fn commit<M: Measurer + ?Sized>(
    measurer: &mut M,
    lines: &mut Vec<TextLine>,
    line: &str,
    style: &TextStyle,
    max_width: Px,
) {
    let text = line.trim_end();
    if text.is_empty() {
        return;
    }

    let width = measurer.width_of(text, style);
    if width > max_width {
        log::warn!("`{text}` is {width} wide and overflows its {max_width} line");
    }
    lines.push(TextLine {
        text: text.to_string(),
        width,
    });
}
