//! Theme tokens and their resolution.
//!
//! A [`Theme`] is produced fresh for every render by layering, later layers
//! winning:
//!
//! 1. the light or dark default token tables (or a template's own tables)
//! 2. the brand: its primary colour and optional heading/body fonts
//! 3. adjustments for the layout kind being rendered
//!
//! Layout arrangements read every gap, inset and size they use from the
//! resolved theme.

use crate::colour::Colour;
use crate::layout::TextStyle;
use crate::schema::LayoutKind;
use crate::slide::Brand;
use crate::units::Px;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
    pub background: Colour,
    pub surface: Colour,
    pub text: Colour,
    pub text_muted: Colour,
}

pub const LIGHT_COLORS: ColorPalette = ColorPalette {
    primary: Colour::new_rgb(0x25, 0x63, 0xeb),
    secondary: Colour::new_rgb(0x7c, 0x3a, 0xed),
    accent: Colour::new_rgb(0xf5, 0x9e, 0x0b),
    background: Colour::new_rgb(0xff, 0xff, 0xff),
    surface: Colour::new_rgb(0xf3, 0xf4, 0xf6),
    text: Colour::new_rgb(0x11, 0x18, 0x27),
    text_muted: Colour::new_rgb(0x6b, 0x72, 0x80),
};

pub const DARK_COLORS: ColorPalette = ColorPalette {
    primary: Colour::new_rgb(0x60, 0xa5, 0xfa),
    secondary: Colour::new_rgb(0xa7, 0x8b, 0xfa),
    accent: Colour::new_rgb(0xfb, 0xbf, 0x24),
    background: Colour::new_rgb(0x0f, 0x17, 0x2a),
    surface: Colour::new_rgb(0x1e, 0x29, 0x3b),
    text: Colour::new_rgb(0xf9, 0xfa, 0xfb),
    text_muted: Colour::new_rgb(0x9c, 0xa3, 0xaf),
};

/// The typographic bucket a piece of text is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleBucket {
    Display,
    H1,
    H2,
    Body,
    Caption,
    Stat,
    Quote,
}

impl StyleBucket {
    /// Whether the bucket is set in the heading font rather than the body font
    pub fn is_heading(&self) -> bool {
        !matches!(self, StyleBucket::Body | StyleBucket::Caption)
    }
}

/// A single entry of the typography scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeToken {
    pub font_family: Cow<'static, str>,
    pub font_weight: u16,
    pub font_size: Px,
    pub line_height: Px,
    #[serde(default)]
    pub letter_spacing: Px,
}

const fn token(weight: u16, size: f32, line_height: f32, letter_spacing: f32) -> TypeToken {
    TypeToken {
        font_family: Cow::Borrowed("Inter"),
        font_weight: weight,
        font_size: Px(size),
        line_height: Px(line_height),
        letter_spacing: Px(letter_spacing),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyScale {
    pub display: TypeToken,
    pub h1: TypeToken,
    pub h2: TypeToken,
    pub body: TypeToken,
    pub caption: TypeToken,
    pub stat: TypeToken,
    pub quote: TypeToken,
}

pub const DEFAULT_TYPOGRAPHY: TypographyScale = TypographyScale {
    display: token(800, 96.0, 104.0, -1.0),
    h1: token(700, 64.0, 72.0, -0.5),
    h2: token(600, 44.0, 52.0, 0.0),
    body: token(400, 32.0, 44.0, 0.0),
    caption: token(400, 22.0, 30.0, 0.0),
    stat: token(800, 160.0, 168.0, -2.0),
    quote: token(500, 48.0, 60.0, 0.0),
};

impl TypographyScale {
    pub fn get(&self, bucket: StyleBucket) -> &TypeToken {
        match bucket {
            StyleBucket::Display => &self.display,
            StyleBucket::H1 => &self.h1,
            StyleBucket::H2 => &self.h2,
            StyleBucket::Body => &self.body,
            StyleBucket::Caption => &self.caption,
            StyleBucket::Stat => &self.stat,
            StyleBucket::Quote => &self.quote,
        }
    }

    pub fn get_mut(&mut self, bucket: StyleBucket) -> &mut TypeToken {
        match bucket {
            StyleBucket::Display => &mut self.display,
            StyleBucket::H1 => &mut self.h1,
            StyleBucket::H2 => &mut self.h2,
            StyleBucket::Body => &mut self.body,
            StyleBucket::Caption => &mut self.caption,
            StyleBucket::Stat => &mut self.stat,
            StyleBucket::Quote => &mut self.quote,
        }
    }

    fn tokens_mut(&mut self) -> [(StyleBucket, &mut TypeToken); 7] {
        [
            (StyleBucket::Display, &mut self.display),
            (StyleBucket::H1, &mut self.h1),
            (StyleBucket::H2, &mut self.h2),
            (StyleBucket::Body, &mut self.body),
            (StyleBucket::Caption, &mut self.caption),
            (StyleBucket::Stat, &mut self.stat),
            (StyleBucket::Quote, &mut self.quote),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingScale {
    pub baseline: Px,
    pub safe_inset: Px,
    /// Space between consecutive blocks in a stack
    pub block_gap: Px,
    /// Space between the two columns of columnar layouts
    pub column_gap: Px,
    pub bullet_indent: Px,
    pub bullet_gap: Px,
    /// Space separating the groups of centred layouts (a stat and its label, a
    /// quote and its attribution)
    pub vertical_gap: Px,
    /// Natural height of an image block
    pub image_height: Px,
}

pub const DEFAULT_SPACING: SpacingScale = SpacingScale {
    baseline: Px(8.0),
    safe_inset: Px(64.0),
    block_gap: Px(24.0),
    column_gap: Px(48.0),
    bullet_indent: Px(48.0),
    bullet_gap: Px(12.0),
    vertical_gap: Px(32.0),
    image_height: Px(420.0),
};

/// Cover slides breathe more
const COVER_SAFE_INSET: Px = Px(96.0);
const COVER_VERTICAL_GAP: Px = Px(48.0);

/// Two-column layouts have half the width per block, so set text smaller
const COMPACT_TYPE: [(StyleBucket, f32, f32); 4] = [
    (StyleBucket::H1, 48.0, 56.0),
    (StyleBucket::H2, 34.0, 42.0),
    (StyleBucket::Body, 26.0, 36.0),
    (StyleBucket::Caption, 18.0, 26.0),
];
const COMPACT_BULLET_GAP: Px = Px(8.0);

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn colors(&self) -> ColorPalette {
        match self {
            ThemeMode::Light => LIGHT_COLORS,
            ThemeMode::Dark => DARK_COLORS,
        }
    }
}

/// A template's description of its theme. Any table left out comes from the
/// defaults for the chosen mode.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefinition {
    pub mode: ThemeMode,
    pub colors: Option<ColorPalette>,
    pub typography: Option<TypographyScale>,
    pub spacing: Option<SpacingScale>,
}

/// A fully resolved theme. The flat `primary`, `text`, `text_muted` and
/// `background` fields mirror `colors` for consumers that predate the
/// token tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: Colour,
    pub text: Colour,
    pub text_muted: Colour,
    pub background: Colour,
    pub colors: ColorPalette,
    pub typography: TypographyScale,
    pub spacing: SpacingScale,
}

impl Theme {
    fn from_tables(colors: ColorPalette, typography: TypographyScale, spacing: SpacingScale) -> Theme {
        Theme {
            primary: colors.primary,
            text: colors.text,
            text_muted: colors.text_muted,
            background: colors.background,
            colors,
            typography,
            spacing,
        }
    }

    /// A text style for the given bucket, in the given colour
    pub fn text_style(&self, bucket: StyleBucket, color: Colour) -> TextStyle {
        let token = self.typography.get(bucket);
        TextStyle {
            font_family: token.font_family.to_string(),
            font_weight: token.font_weight,
            font_size: token.font_size,
            line_height: token.line_height,
            letter_spacing: token.letter_spacing,
            color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_tables(LIGHT_COLORS, DEFAULT_TYPOGRAPHY, DEFAULT_SPACING)
    }
}

/// Resolve the theme for one render of one slide
pub fn resolve_theme(brand: &Brand, base: Option<&ThemeDefinition>, kind: LayoutKind) -> Theme {
    let definition = base.cloned().unwrap_or_default();
    let mut colors = definition.colors.unwrap_or_else(|| definition.mode.colors());
    let mut typography = definition.typography.unwrap_or(DEFAULT_TYPOGRAPHY);
    let mut spacing = definition.spacing.unwrap_or(DEFAULT_SPACING);

    colors.primary = brand.primary;
    for (bucket, token) in typography.tokens_mut() {
        let family = if bucket.is_heading() {
            brand.font_head.as_deref()
        } else {
            brand.font_body.as_deref()
        };
        if let Some(family) = family {
            token.font_family = Cow::Owned(family.to_string());
        }
    }

    match kind {
        LayoutKind::Cover => {
            spacing.safe_inset = COVER_SAFE_INSET;
            spacing.vertical_gap = COVER_VERTICAL_GAP;
        }
        LayoutKind::TwoCol | LayoutKind::Comparison => {
            for (bucket, size, line_height) in COMPACT_TYPE {
                let token = typography.get_mut(bucket);
                token.font_size = Px(size);
                token.line_height = Px(line_height);
            }
            spacing.bullet_gap = COMPACT_BULLET_GAP;
        }
        _ => {}
    }

    Theme::from_tables(colors, typography, spacing)
}
