//! Declarative template descriptions: which layouts a template offers, what
//! content each layout expects, and which decorators appear on which slides.
//! Schemas describe *what* goes on a slide; how each layout kind arranges it
//! lives in [`render`](crate::render).

use crate::colour::Colour;
use crate::slide::TextRole;
use crate::theme::{StyleBucket, ThemeDefinition};
use crate::units::Px;
use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the fixed arrangement strategies a layout can use
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Title,
    List,
    TwoCol,
    Stat,
    Quote,
    Cover,
    ImageFocus,
    Comparison,
    Timeline,
    SectionBreak,
    /// Any kind this crate doesn't know; arranged like [`LayoutKind::List`]
    #[serde(other)]
    Unknown,
}

/// The type of content a slot expects
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotContent {
    Text,
    Image,
    Bullets,
    Number,
}

/// A named content expectation of a layout, e.g. "title: text set in h1"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub content: SlotContent,
    #[serde(default)]
    pub style: Option<StyleBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    pub id: String,
    pub kind: LayoutKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl LayoutDefinition {
    pub fn new<S: ToString>(id: S, kind: LayoutKind) -> LayoutDefinition {
        LayoutDefinition {
            id: id.to_string(),
            kind,
            name: None,
            slots: Vec::new(),
        }
    }

    pub fn with_slot<S: ToString>(
        mut self,
        name: S,
        content: SlotContent,
        style: Option<StyleBucket>,
    ) -> LayoutDefinition {
        self.slots.push(Slot {
            name: name.to_string(),
            content,
            style,
        });
        self
    }

    /// The style bucket the layout declares for text in the given role, if
    /// it has a slot of that name with a style
    pub fn bucket_for(&self, role: TextRole) -> Option<StyleBucket> {
        self.slots
            .iter()
            .find(|slot| slot.name == role.slot_name())
            .and_then(|slot| slot.style)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecoratorType {
    Arrow,
    Divider,
    Shape,
    PageNumber,
    ProgressBar,
    /// Also any type this crate doesn't know
    #[serde(other)]
    Custom,
}

impl DecoratorType {
    pub fn name(&self) -> &'static str {
        match self {
            DecoratorType::Arrow => "arrow",
            DecoratorType::Divider => "divider",
            DecoratorType::Shape => "shape",
            DecoratorType::PageNumber => "pageNumber",
            DecoratorType::ProgressBar => "progressBar",
            DecoratorType::Custom => "custom",
        }
    }
}

/// A point on the 9-point anchor grid of the artboard
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// An anchor name this crate doesn't know; resolves like [`Anchor::Center`]
    #[serde(other)]
    Unknown,
}

/// Where a decorator sits: either absolute `x`/`y`, or an anchor plus offsets
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorPosition {
    #[serde(default)]
    pub anchor: Option<Anchor>,
    #[serde(default)]
    pub x: Option<Px>,
    #[serde(default)]
    pub y: Option<Px>,
    #[serde(default)]
    pub offset_x: Option<Px>,
    #[serde(default)]
    pub offset_y: Option<Px>,
}

impl DecoratorPosition {
    pub fn anchored(anchor: Anchor, offset_x: Px, offset_y: Px) -> DecoratorPosition {
        DecoratorPosition {
            anchor: Some(anchor),
            offset_x: Some(offset_x),
            offset_y: Some(offset_y),
            ..DecoratorPosition::default()
        }
    }

    pub fn absolute(x: Px, y: Px) -> DecoratorPosition {
        DecoratorPosition {
            x: Some(x),
            y: Some(y),
            ..DecoratorPosition::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratorDefinition {
    #[serde(rename = "type")]
    pub kind: DecoratorType,
    pub position: DecoratorPosition,
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

/// Which decorators appear on which slides. `all` applies everywhere; the
/// others apply by the slide's position in the deck.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorPolicy {
    pub all: Vec<DecoratorDefinition>,
    pub first: Vec<DecoratorDefinition>,
    pub middle: Vec<DecoratorDefinition>,
    pub last: Vec<DecoratorDefinition>,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBarPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBarConfig {
    pub enabled: bool,
    #[serde(default)]
    pub position: ProgressBarPosition,
    #[serde(default = "default_progress_thickness")]
    pub thickness: Px,
    #[serde(default)]
    pub color: Option<Colour>,
    #[serde(default)]
    pub track_color: Option<Colour>,
}

fn default_progress_thickness() -> Px {
    Px(8.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSchema {
    pub id: String,
    pub layouts: Vec<LayoutDefinition>,
    #[serde(default)]
    pub decorators: DecoratorPolicy,
    #[serde(default)]
    pub progress_bar: Option<ProgressBarConfig>,
}

impl TemplateSchema {
    /// Parse a schema from its JSON representation
    pub fn from_json(json: &str) -> Result<TemplateSchema, LayoutError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    pub fn layout(&self, id: &str) -> Option<&LayoutDefinition> {
        self.layouts.iter().find(|layout| layout.id == id)
    }
}

/// The themes a template offers: a base definition and named variants that
/// slides can opt into with `themeVariant`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateTheme {
    pub base: Option<ThemeDefinition>,
    pub variants: BTreeMap<String, ThemeDefinition>,
}

impl TemplateTheme {
    /// The definition for a slide's variant choice, falling back to the base
    pub fn definition(&self, variant: Option<&str>) -> Option<&ThemeDefinition> {
        variant
            .and_then(|name| self.variants.get(name))
            .or(self.base.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_schema_json() {
        let schema = TemplateSchema::from_json(
            &json!({
                "id": "t",
                "layouts": [
                    { "id": "l1", "kind": "two-col",
                      "slots": [{ "name": "title", "content": "text", "style": "h1" }] },
                    { "id": "l2", "kind": "hexagon-grid" }
                ],
                "decorators": {
                    "last": [{ "type": "pageNumber",
                               "position": { "anchor": "bottom-right", "offsetX": -40 } }]
                },
                "progressBar": { "enabled": true, "position": "top" }
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(schema.layouts[0].kind, LayoutKind::TwoCol);
        assert_eq!(schema.layouts[1].kind, LayoutKind::Unknown);
        assert_eq!(
            schema.layouts[0].bucket_for(TextRole::Title),
            Some(StyleBucket::H1)
        );
        assert_eq!(schema.layouts[0].bucket_for(TextRole::Body), None);
        assert!(schema.decorators.all.is_empty());
        let last = &schema.decorators.last[0];
        assert_eq!(last.kind, DecoratorType::PageNumber);
        assert_eq!(last.position.anchor, Some(Anchor::BottomRight));
        assert_eq!(last.position.offset_x, Some(Px(-40.0)));
        let bar = schema.progress_bar.unwrap();
        assert_eq!(bar.position, ProgressBarPosition::Top);
        assert_eq!(bar.thickness, Px(8.0));
    }

    #[test]
    fn unknown_anchor_parses() {
        let position: DecoratorPosition =
            serde_json::from_value(json!({ "anchor": "somewhere" })).unwrap();
        assert_eq!(position.anchor, Some(Anchor::Unknown));
    }

    #[test]
    fn unknown_decorator_type_is_custom() {
        let schema = TemplateSchema::from_json(
            &json!({
                "id": "t",
                "layouts": [{ "id": "l", "kind": "list" }],
                "decorators": { "all": [{ "type": "sparkle", "position": { "anchor": "center" } }] }
            })
            .to_string(),
        )
        .unwrap();
        assert_eq!(schema.decorators.all[0].kind, DecoratorType::Custom);
    }

    #[test]
    fn theme_variant_falls_back_to_base() {
        let dark = ThemeDefinition {
            mode: crate::theme::ThemeMode::Dark,
            ..ThemeDefinition::default()
        };
        let theme = TemplateTheme {
            base: Some(ThemeDefinition::default()),
            variants: BTreeMap::from([("dark".to_string(), dark.clone())]),
        };
        assert_eq!(theme.definition(Some("dark")), Some(&dark));
        assert_eq!(theme.definition(Some("sepia")), theme.base.as_ref());
        assert_eq!(theme.definition(None), theme.base.as_ref());
        assert_eq!(TemplateTheme::default().definition(Some("dark")), None);
    }
}
