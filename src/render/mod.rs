//! Turning a slide into positioned, styled blocks.
//!
//! [`SchemaRenderer`] is the entry point: given a template schema, a slide, a
//! brand and optionally the slide's place in its deck, it resolves the theme,
//! picks the layout, injects the template's decorators and hands the content
//! blocks to the arrangement for the layout's kind. The result is a
//! [`RenderedSlide`] that an external painter can draw without doing any
//! layout of its own.
//!
//! Rendering is a pure function of its inputs; nothing about a render is kept
//! between calls except whatever state the [`Measurer`] itself holds.
//!
//! # Example
//!
//! ```
//! use slide_layout::layout::MonospaceMeasurer;
//! use slide_layout::render::SchemaRenderer;
//! use slide_layout::templates::TemplateRegistry;
//! use slide_layout::{Brand, DeckPosition, Slide};
//!
//! let registry = TemplateRegistry::builtin();
//! let template = registry.get("carousel").expect("builtin template");
//! let slide: Slide = serde_json::from_str(r#"{
//!     "id": "intro",
//!     "layoutId": "title",
//!     "blocks": [{ "kind": "title", "id": "t", "text": "Hello" }]
//! }"#).expect("valid slide");
//!
//! let mut renderer = SchemaRenderer::new(MonospaceMeasurer::default());
//! let rendered = renderer
//!     .render(&template.schema, &slide, &Brand::default(), Some(&template.theme), Some(DeckPosition::new(0, 3)))
//!     .expect("schema has layouts");
//! assert_eq!(rendered.blocks[0].id, "t");
//! ```

mod arrange;

use crate::artboard::{self, content_rect, ArtboardSpec};
use crate::colour::Colour;
use crate::decorators::{decorate, DeckPosition};
use crate::frame::Frame;
use crate::layout::{BulletLine, Measurer, TextAlign, TextLine, TextStyle};
use crate::schema::{LayoutDefinition, LayoutKind, TemplateSchema, TemplateTheme};
use crate::slide::*;
use crate::templates::TemplateRegistry;
use crate::theme::{resolve_theme, Theme};
use crate::units::Px;
use crate::LayoutError;
use arrange::{Arranger, Content};
use serde::{Deserialize, Serialize};

/// What a rendered block shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderedContent {
    #[serde(rename_all = "camelCase")]
    Text {
        lines: Vec<TextLine>,
        line_height: Px,
    },
    Bullets {
        lines: Vec<BulletLine>,
    },
    Image {
        src: String,
        alt: Option<String>,
        fit: ImageFit,
    },
    Background {
        color: Option<Colour>,
        image: Option<String>,
        overlay: Option<f32>,
    },
    Decoration {
        variant: DecorativeVariant,
        props: serde_json::Map<String, serde_json::Value>,
    },
}

/// A block with its final frame on the artboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    /// The id of the slide block this was rendered from
    pub id: String,
    pub frame: Frame,
    pub style: Option<TextStyle>,
    pub align: TextAlign,
    pub content: RenderedContent,
    /// The block's content is taller than its frame. Advisory only; the
    /// frame is already clamped to the space that was available.
    pub overflow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSlide {
    pub slide_id: String,
    pub layout_id: String,
    pub layout_kind: LayoutKind,
    /// Fill for the whole artboard, beneath every block
    pub background: Colour,
    pub theme: Theme,
    /// Backgrounds first, then content in slide order, then decorations
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedSlide {
    pub fn block(&self, id: &str) -> Option<&RenderedBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn has_overflow(&self) -> bool {
        self.blocks.iter().any(|block| block.overflow)
    }
}

/// Renders slides against template schemas. The renderer owns its measurer
/// for the length of a rendering session; renders that should run in
/// parallel need a renderer (and measurer) each.
pub struct SchemaRenderer<M: Measurer> {
    measurer: M,
    artboard: ArtboardSpec,
}

impl<M: Measurer> SchemaRenderer<M> {
    /// A renderer for the standard square artboard
    pub fn new(measurer: M) -> SchemaRenderer<M> {
        SchemaRenderer::with_artboard(measurer, artboard::SQUARE)
    }

    pub fn with_artboard(measurer: M, artboard: ArtboardSpec) -> SchemaRenderer<M> {
        SchemaRenderer { measurer, artboard }
    }

    pub fn artboard(&self) -> &ArtboardSpec {
        &self.artboard
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn into_measurer(self) -> M {
        self.measurer
    }

    /// Render one slide.
    ///
    /// The layout is the schema's layout matching `slide.layout_id`, or the
    /// schema's first layout. When `deck` is given, the template's decorators
    /// for that position (and its progress bar, if enabled) are added to this
    /// render; the slide itself is never modified.
    ///
    /// Fails only if the schema has no layouts at all.
    pub fn render(
        &mut self,
        schema: &TemplateSchema,
        slide: &Slide,
        brand: &Brand,
        template_theme: Option<&TemplateTheme>,
        deck: Option<DeckPosition>,
    ) -> Result<RenderedSlide, LayoutError> {
        let layout = active_layout(schema, slide)?;
        let definition =
            template_theme.and_then(|t| t.definition(slide.theme_variant.as_deref()));
        let theme = resolve_theme(brand, definition, layout.kind);

        let mut backgrounds: Vec<&BackgroundBlock> = Vec::new();
        let mut contents: Vec<Content> = Vec::new();
        let mut decorations: Vec<&DecorativeBlock> = Vec::new();
        for block in slide.blocks.iter() {
            match block {
                SlideBlock::Title(b) => contents.push(Content::Text(TextRole::Title, b)),
                SlideBlock::Subtitle(b) => contents.push(Content::Text(TextRole::Subtitle, b)),
                SlideBlock::Body(b) => contents.push(Content::Text(TextRole::Body, b)),
                SlideBlock::Bullets(b) => contents.push(Content::Bullets(b)),
                SlideBlock::Image(b) => contents.push(Content::Image(b)),
                SlideBlock::Background(b) => backgrounds.push(b),
                SlideBlock::Decorative(b) => decorations.push(b),
            }
        }

        let injected = deck
            .map(|deck| decorate(deck, schema, self.artboard.width, self.artboard.height))
            .unwrap_or_default();
        decorations.extend(injected.iter());

        let rect = content_rect(
            &self
                .artboard
                .with_spacing(theme.spacing.safe_inset, theme.spacing.baseline),
        );
        log::debug!(
            "rendering slide `{}` with layout `{}` ({:?}) in {:?}",
            slide.id,
            layout.id,
            layout.kind,
            rect
        );

        let arranged = Arranger::new(&mut self.measurer, &theme, layout, rect).arrange(&contents);

        let bounds = self.artboard.bounds();
        let mut blocks: Vec<RenderedBlock> =
            Vec::with_capacity(backgrounds.len() + arranged.len() + decorations.len());
        blocks.extend(backgrounds.into_iter().map(|b| background_block(b, bounds)));
        blocks.extend(arranged);
        blocks.extend(decorations.into_iter().map(decoration_block));

        let background = match layout.kind {
            LayoutKind::SectionBreak => theme.colors.primary,
            _ => theme.colors.background,
        };

        Ok(RenderedSlide {
            slide_id: slide.id.clone(),
            layout_id: layout.id.clone(),
            layout_kind: layout.kind,
            background,
            theme,
            blocks,
        })
    }

    /// Render every slide of a project in order, each with its position in
    /// the deck. Slides use their own `template_id`, or `default_template_id`
    /// when they have none; the project's brand applies to all of them.
    pub fn render_deck(
        &mut self,
        registry: &TemplateRegistry,
        project: &Project,
        default_template_id: &str,
    ) -> Result<Vec<RenderedSlide>, LayoutError> {
        let brand = project.brand.clone().unwrap_or_default();
        let total = project.slides.len();

        project
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let template_id = slide.template_id.as_deref().unwrap_or(default_template_id);
                let template = registry.require(template_id)?;
                self.render(
                    &template.schema,
                    slide,
                    &brand,
                    Some(&template.theme),
                    Some(DeckPosition::new(index, total)),
                )
            })
            .collect()
    }
}

/// The slide's chosen layout, or the schema's first one
fn active_layout<'a>(
    schema: &'a TemplateSchema,
    slide: &Slide,
) -> Result<&'a LayoutDefinition, LayoutError> {
    if let Some(id) = slide.layout_id.as_deref() {
        match schema.layout(id) {
            Some(layout) => return Ok(layout),
            None => log::debug!(
                "layout `{id}` is not in schema `{}`; using its first layout",
                schema.id
            ),
        }
    }
    schema.layouts.first().ok_or(LayoutError::NoLayouts)
}

fn background_block(block: &BackgroundBlock, bounds: Frame) -> RenderedBlock {
    RenderedBlock {
        id: block.id.clone(),
        frame: bounds,
        style: None,
        align: TextAlign::default(),
        content: RenderedContent::Background {
            color: block.color,
            image: block.image.clone(),
            overlay: block.overlay,
        },
        overflow: false,
    }
}

fn decoration_block(block: &DecorativeBlock) -> RenderedBlock {
    RenderedBlock {
        id: block.id.clone(),
        frame: Frame {
            x: block.x,
            y: block.y,
            w: block.width.unwrap_or_default(),
            h: block.height.unwrap_or_default(),
        },
        style: None,
        align: TextAlign::default(),
        content: RenderedContent::Decoration {
            variant: block.variant,
            props: block.props.clone(),
        },
        overflow: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::DeckPosition;
    use crate::layout::MonospaceMeasurer;
    use crate::schema::*;
    use crate::theme::{ThemeDefinition, ThemeMode, DARK_COLORS, LIGHT_COLORS};
    use serde_json::json;

    fn slide(value: serde_json::Value) -> Slide {
        serde_json::from_value(value).unwrap()
    }

    fn schema(kinds: &[(&str, LayoutKind)]) -> TemplateSchema {
        TemplateSchema {
            id: "test".into(),
            layouts: kinds
                .iter()
                .map(|(id, kind)| LayoutDefinition::new(*id, *kind))
                .collect(),
            decorators: DecoratorPolicy::default(),
            progress_bar: None,
        }
    }

    fn renderer() -> SchemaRenderer<MonospaceMeasurer> {
        SchemaRenderer::new(MonospaceMeasurer::default())
    }

    #[test]
    fn empty_schema_is_fatal() {
        let err = renderer()
            .render(&schema(&[]), &Slide::default(), &Brand::default(), None, None)
            .unwrap_err();
        assert!(matches!(err, LayoutError::NoLayouts));
        assert_eq!(err.to_string(), "Template schema has no layouts defined");
    }

    #[test]
    fn honours_layout_id_and_falls_back_to_first() {
        let schema = schema(&[("a", LayoutKind::List), ("b", LayoutKind::Quote)]);
        let mut r = renderer();
        let chosen = slide(json!({ "id": "s", "layoutId": "b" }));
        assert_eq!(
            r.render(&schema, &chosen, &Brand::default(), None, None)
                .unwrap()
                .layout_id,
            "b"
        );
        let missing = slide(json!({ "id": "s", "layoutId": "zzz" }));
        assert_eq!(
            r.render(&schema, &missing, &Brand::default(), None, None)
                .unwrap()
                .layout_id,
            "a"
        );
    }

    #[test]
    fn blocks_are_layered_background_content_decoration() {
        let schema = schema(&[("a", LayoutKind::List)]);
        let s = slide(json!({
            "id": "s",
            "blocks": [
                { "kind": "decorative", "id": "deco", "variant": "shape", "x": 0, "y": 0 },
                { "kind": "title", "id": "t", "text": "Title" },
                { "kind": "background", "id": "bg", "color": "#101010" },
                { "kind": "body", "id": "b", "text": "Body" }
            ]
        }));
        let rendered = renderer()
            .render(&schema, &s, &Brand::default(), None, None)
            .unwrap();
        let ids: Vec<&str> = rendered.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bg", "t", "b", "deco"]);
        assert_eq!(rendered.blocks[0].frame, Frame::new(0, 0, 1080, 1080));
    }

    #[test]
    fn deck_position_injects_decorators_without_touching_slide() {
        let mut schema = schema(&[("a", LayoutKind::List)]);
        schema.decorators.first.push(DecoratorDefinition {
            kind: DecoratorType::Arrow,
            position: DecoratorPosition::anchored(Anchor::CenterRight, Px(-40.0), Px(0.0)),
            props: Default::default(),
        });
        schema.progress_bar = Some(ProgressBarConfig {
            enabled: true,
            position: ProgressBarPosition::Bottom,
            thickness: Px(8.0),
            color: None,
            track_color: None,
        });
        let s = slide(json!({ "id": "s", "blocks": [{ "kind": "title", "id": "t", "text": "Hi" }] }));
        let before = s.clone();

        let mut r = renderer();
        let first = r
            .render(&schema, &s, &Brand::default(), None, Some(DeckPosition::new(0, 4)))
            .unwrap();
        assert_eq!(first.blocks.len(), 3);
        assert_eq!(first.blocks[1].id, "decorator-arrow-1040-540");
        assert_eq!(first.blocks[2].frame, Frame::new(0, 1072, 1080, 8));

        let middle = r
            .render(&schema, &s, &Brand::default(), None, Some(DeckPosition::new(1, 4)))
            .unwrap();
        assert_eq!(middle.blocks.len(), 2);

        let standalone = r.render(&schema, &s, &Brand::default(), None, None).unwrap();
        assert_eq!(standalone.blocks.len(), 1);
        assert_eq!(s, before);
    }

    #[test]
    fn theme_variant_selects_template_theme() {
        let schema = schema(&[("a", LayoutKind::List)]);
        let theme = TemplateTheme {
            base: None,
            variants: [(
                "night".to_string(),
                ThemeDefinition {
                    mode: ThemeMode::Dark,
                    ..ThemeDefinition::default()
                },
            )]
            .into_iter()
            .collect(),
        };
        let mut r = renderer();
        let night = slide(json!({ "id": "s", "themeVariant": "night" }));
        let rendered = r
            .render(&schema, &night, &Brand::default(), Some(&theme), None)
            .unwrap();
        assert_eq!(rendered.background, DARK_COLORS.background);

        let plain = slide(json!({ "id": "s" }));
        let rendered = r
            .render(&schema, &plain, &Brand::default(), Some(&theme), None)
            .unwrap();
        assert_eq!(rendered.background, LIGHT_COLORS.background);
    }

    #[test]
    fn renders_a_whole_deck() {
        let registry = TemplateRegistry::builtin();
        let project = Project::from_json(
            &json!({
                "id": "p",
                "title": "Deck",
                "brand": { "primary": "#ff0066" },
                "slides": [
                    { "id": "one", "layoutId": "cover",
                      "blocks": [{ "kind": "title", "id": "t1", "text": "Welcome" }] },
                    { "id": "two", "templateId": "minimal",
                      "blocks": [{ "kind": "title", "id": "t2", "text": "Plain" }] },
                    { "id": "three",
                      "blocks": [{ "kind": "title", "id": "t3", "text": "Bye" }] }
                ]
            })
            .to_string(),
        )
        .unwrap();

        let slides = renderer().render_deck(&registry, &project, "carousel").unwrap();
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].layout_kind, LayoutKind::Cover);
        assert_eq!(slides[0].theme.primary, Colour::new_rgb(0xff, 0x00, 0x66));
        // carousel: page number + arrow + progress bar on the first slide
        assert_eq!(slides[0].blocks.len(), 4);
        // minimal has no decorators
        assert_eq!(slides[1].blocks.len(), 1);
        // last carousel slide: page number + progress bar, no arrow
        assert_eq!(slides[2].blocks.len(), 3);

        let unknown = Project {
            slides: vec![Slide {
                id: "x".into(),
                template_id: Some("missing".into()),
                ..Slide::default()
            }],
            ..project
        };
        assert!(matches!(
            renderer().render_deck(&registry, &unknown, "carousel"),
            Err(LayoutError::UnknownTemplate(_))
        ));
    }
}
