//! The slide data handed to the layout core. Everything here is created and
//! edited elsewhere; layout only ever reads it.

use crate::colour::Colour;
use crate::layout::TextAlign;
use crate::theme::LIGHT_COLORS;
use crate::units::Px;
use crate::LayoutError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub brand: Option<Brand>,
}

impl Project {
    /// Parse a project from its JSON representation
    pub fn from_json(json: &str) -> Result<Project, LayoutError> {
        serde_json::from_str(json).map_err(Into::into)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    /// An explicit layout choice; when absent the first layout of the
    /// template is used
    #[serde(default)]
    pub layout_id: Option<String>,
    #[serde(default)]
    pub theme_variant: Option<String>,
    #[serde(default)]
    pub blocks: Vec<SlideBlock>,
}

impl Slide {
    /// The text blocks of the slide, in order
    pub fn text_blocks(&self) -> impl Iterator<Item = &SlideBlock> {
        self.blocks.iter().filter(|b| b.text_role().is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub primary: Colour,
    #[serde(default)]
    pub font_head: Option<String>,
    #[serde(default)]
    pub font_body: Option<String>,
}

impl Default for Brand {
    fn default() -> Self {
        Brand {
            primary: LIGHT_COLORS.primary,
            font_head: None,
            font_body: None,
        }
    }
}

/// Per-block overrides of the theme's text styling
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default)]
    pub color: Option<Colour>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub text_align: Option<TextAlign>,
    #[serde(default)]
    pub uppercase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub style: Option<BlockStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletsBlock {
    pub id: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub style: Option<BlockStyle>,
}

/// How an image fills its frame
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub fit: ImageFit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundBlock {
    pub id: String,
    #[serde(default)]
    pub color: Option<Colour>,
    #[serde(default)]
    pub image: Option<String>,
    /// Opacity of a darkening overlay over a background image, 0.0 to 1.0
    #[serde(default)]
    pub overlay: Option<f32>,
}

/// How a decorative element is drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorativeVariant {
    Arrow,
    Divider,
    Shape,
    /// Drawn by a specialised sub-renderer chosen from `props.decoratorType`
    Icon,
}

/// A non-editable element, either authored on the slide or derived from the
/// slide's position in its deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorativeBlock {
    pub id: String,
    pub variant: DecorativeVariant,
    pub x: Px,
    pub y: Px,
    #[serde(default)]
    pub width: Option<Px>,
    #[serde(default)]
    pub height: Option<Px>,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// The role a text block plays on the slide
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
    Body,
    Bullets,
}

impl TextRole {
    /// The name slots refer to this role by
    pub fn slot_name(&self) -> &'static str {
        match self {
            TextRole::Title => "title",
            TextRole::Subtitle => "subtitle",
            TextRole::Body => "body",
            TextRole::Bullets => "bullets",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlideBlock {
    Title(TextBlock),
    Subtitle(TextBlock),
    Body(TextBlock),
    Bullets(BulletsBlock),
    Image(ImageBlock),
    Background(BackgroundBlock),
    Decorative(DecorativeBlock),
}

impl SlideBlock {
    pub fn id(&self) -> &str {
        match self {
            SlideBlock::Title(b) | SlideBlock::Subtitle(b) | SlideBlock::Body(b) => &b.id,
            SlideBlock::Bullets(b) => &b.id,
            SlideBlock::Image(b) => &b.id,
            SlideBlock::Background(b) => &b.id,
            SlideBlock::Decorative(b) => &b.id,
        }
    }

    pub fn text_role(&self) -> Option<TextRole> {
        match self {
            SlideBlock::Title(_) => Some(TextRole::Title),
            SlideBlock::Subtitle(_) => Some(TextRole::Subtitle),
            SlideBlock::Body(_) => Some(TextRole::Body),
            SlideBlock::Bullets(_) => Some(TextRole::Bullets),
            SlideBlock::Image(_) | SlideBlock::Background(_) | SlideBlock::Decorative(_) => None,
        }
    }

    /// The style override of a text block
    pub fn block_style(&self) -> Option<&BlockStyle> {
        match self {
            SlideBlock::Title(b) | SlideBlock::Subtitle(b) | SlideBlock::Body(b) => {
                b.style.as_ref()
            }
            SlideBlock::Bullets(b) => b.style.as_ref(),
            SlideBlock::Image(_) | SlideBlock::Background(_) | SlideBlock::Decorative(_) => None,
        }
    }
}
