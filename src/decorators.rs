//! Position-aware decorations: navigation arrows, page numbers, progress bars
//! and other elements whose placement and content follow from where a slide
//! sits in its deck rather than from anything authored on the slide.

use crate::frame::Point;
use crate::schema::*;
use crate::slide::{DecorativeBlock, DecorativeVariant};
use crate::units::Px;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Where a slide sits in its deck
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlidePosition {
    First,
    Middle,
    Last,
}

/// A slide's index within a deck of `total` slides
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPosition {
    pub index: usize,
    pub total: usize,
}

impl DeckPosition {
    pub fn new(index: usize, total: usize) -> DeckPosition {
        DeckPosition { index, total }
    }
}

/// Classify a slide as the first, a middle, or the last slide of its deck. A
/// deck of one slide only has a first slide.
pub fn get_slide_position(slide_index: usize, total_slides: usize) -> SlidePosition {
    if total_slides <= 1 || slide_index == 0 {
        SlidePosition::First
    } else if slide_index == total_slides - 1 {
        SlidePosition::Last
    } else {
        SlidePosition::Middle
    }
}

/// Resolve a decorator position to absolute artboard coordinates. Explicit
/// `x` and `y` are used verbatim when both are present; otherwise the anchor
/// (center if missing or unknown) gives a base point that the offsets shift.
pub fn calculate_position(position: &DecoratorPosition, slide_width: Px, slide_height: Px) -> Point {
    if let (Some(x), Some(y)) = (position.x, position.y) {
        return Point { x, y };
    }

    let (left, center, right) = (Px::ZERO, slide_width / 2.0, slide_width);
    let (top, middle, bottom) = (Px::ZERO, slide_height / 2.0, slide_height);
    let (x, y) = match position.anchor.unwrap_or_default() {
        Anchor::TopLeft => (left, top),
        Anchor::TopCenter => (center, top),
        Anchor::TopRight => (right, top),
        Anchor::CenterLeft => (left, middle),
        Anchor::CenterRight => (right, middle),
        Anchor::BottomLeft => (left, bottom),
        Anchor::BottomCenter => (center, bottom),
        Anchor::BottomRight => (right, bottom),
        Anchor::Center | Anchor::Unknown => (center, middle),
    };

    Point {
        x: x + position.offset_x.unwrap_or_default(),
        y: y + position.offset_y.unwrap_or_default(),
    }
}

/// The decorators that apply to a slide: everything in `all`, followed by
/// the decorators for the slide's position
pub fn resolve_decorators(
    slide_index: usize,
    total_slides: usize,
    schema: &TemplateSchema,
) -> Vec<DecoratorDefinition> {
    let policy = &schema.decorators;
    let positional = match get_slide_position(slide_index, total_slides) {
        SlidePosition::First => &policy.first,
        SlidePosition::Middle => &policy.middle,
        SlidePosition::Last => &policy.last,
    };
    policy.all.iter().chain(positional.iter()).cloned().collect()
}

/// Turn a decorator definition into a block the renderer can draw.
///
/// Arrows, dividers and shapes map onto their own variants. Page numbers,
/// progress bars and custom decorators are all drawn as icons, with the
/// original type kept in `props.decoratorType` so the painter can pick a
/// specialised sub-renderer.
///
/// The block id is derived from the type and resolved position only, so two
/// decorators of the same type resolving to the same point share an id.
pub fn decorator_to_block(
    def: &DecoratorDefinition,
    slide_index: usize,
    total_slides: usize,
    slide_width: Px,
    slide_height: Px,
) -> DecorativeBlock {
    let point = calculate_position(&def.position, slide_width, slide_height);
    let mut props = def.props.clone();

    let variant = match def.kind {
        DecoratorType::Arrow => DecorativeVariant::Arrow,
        DecoratorType::Divider => DecorativeVariant::Divider,
        DecoratorType::Shape => DecorativeVariant::Shape,
        DecoratorType::PageNumber | DecoratorType::ProgressBar | DecoratorType::Custom => {
            props.insert("decoratorType".into(), json!(def.kind.name()));
            DecorativeVariant::Icon
        }
    };

    match def.kind {
        DecoratorType::PageNumber => {
            props.insert("pageNumber".into(), json!(slide_index + 1));
            props.insert("totalSlides".into(), json!(total_slides));
        }
        DecoratorType::ProgressBar => {
            props
                .entry("progress")
                .or_insert_with(|| json!(calculate_progress(slide_index, total_slides).progress));
        }
        _ => {}
    }

    DecorativeBlock {
        id: format!("decorator-{}-{}-{}", def.kind.name(), *point.x, *point.y),
        variant,
        x: point.x,
        y: point.y,
        width: dimension(&props, "width"),
        height: dimension(&props, "height"),
        props,
    }
}

fn dimension(props: &Map<String, Value>, key: &str) -> Option<Px> {
    props.get(key).and_then(Value::as_f64).map(|v| Px(v as f32))
}

/// How far through its deck a slide is
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// 0.0 on the first slide, 1.0 on the last
    pub progress: f32,
    /// Start of this slide's segment of the deck, in whole percent
    pub start_percent: u32,
    /// End of this slide's segment of the deck, in whole percent
    pub end_percent: u32,
}

pub fn calculate_progress(slide_index: usize, total_slides: usize) -> Progress {
    if total_slides <= 1 {
        return Progress {
            progress: 1.0,
            start_percent: 0,
            end_percent: 100,
        };
    }

    let total = total_slides as f32;
    let index = slide_index.min(total_slides - 1) as f32;
    Progress {
        progress: index / (total - 1.0),
        start_percent: (index / total * 100.0).round() as u32,
        end_percent: ((index + 1.0) / total * 100.0).round() as u32,
    }
}

/// Build the decorator for a template's progress bar. Horizontal bars (top,
/// bottom) span the full width of the slide; vertical bars (left, right) span
/// its full height.
pub fn create_progress_bar_decorator(
    config: &ProgressBarConfig,
    slide_index: usize,
    total_slides: usize,
    slide_width: Px,
    slide_height: Px,
) -> DecoratorDefinition {
    let thickness = config.thickness;
    let (x, y, width, height) = match config.position {
        ProgressBarPosition::Top => (Px::ZERO, Px::ZERO, slide_width, thickness),
        ProgressBarPosition::Bottom => {
            (Px::ZERO, slide_height - thickness, slide_width, thickness)
        }
        ProgressBarPosition::Left => (Px::ZERO, Px::ZERO, thickness, slide_height),
        ProgressBarPosition::Right => (slide_width - thickness, Px::ZERO, thickness, slide_height),
    };
    let orientation = match config.position {
        ProgressBarPosition::Top | ProgressBarPosition::Bottom => "horizontal",
        ProgressBarPosition::Left | ProgressBarPosition::Right => "vertical",
    };

    let progress = calculate_progress(slide_index, total_slides);
    let mut props = Map::new();
    props.insert("width".into(), json!(*width));
    props.insert("height".into(), json!(*height));
    props.insert("orientation".into(), json!(orientation));
    props.insert("progress".into(), json!(progress.progress));
    props.insert("startPercent".into(), json!(progress.start_percent));
    props.insert("endPercent".into(), json!(progress.end_percent));
    if let Some(color) = config.color {
        props.insert("color".into(), json!(color.to_hex()));
    }
    if let Some(track) = config.track_color {
        props.insert("trackColor".into(), json!(track.to_hex()));
    }

    DecoratorDefinition {
        kind: DecoratorType::ProgressBar,
        position: DecoratorPosition::absolute(x, y),
        props,
    }
}

/// Every decorative block a slide gets from its template: the resolved
/// decorators, then the progress bar if the template enables one
pub fn decorate(
    deck: DeckPosition,
    schema: &TemplateSchema,
    slide_width: Px,
    slide_height: Px,
) -> Vec<DecorativeBlock> {
    let mut definitions = resolve_decorators(deck.index, deck.total, schema);
    if let Some(config) = schema.progress_bar.as_ref().filter(|c| c.enabled) {
        definitions.push(create_progress_bar_decorator(
            config,
            deck.index,
            deck.total,
            slide_width,
            slide_height,
        ));
    }

    definitions
        .iter()
        .map(|def| decorator_to_block(def, deck.index, deck.total, slide_width, slide_height))
        .collect()
}
