use crate::schema::*;
use crate::selector::select_layout;
use crate::slide::Slide;
use crate::theme::{StyleBucket, ThemeDefinition, ThemeMode};
use crate::units::Px;
use crate::LayoutError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// A template: its schema plus the themes it offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub schema: TemplateSchema,
    #[serde(default)]
    pub theme: TemplateTheme,
}

/// The templates available to a project, keyed by id
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> TemplateRegistry {
        TemplateRegistry::default()
    }

    /// A registry holding the built-in `minimal` and `carousel` templates
    pub fn builtin() -> TemplateRegistry {
        let mut registry = TemplateRegistry::new();
        registry.register(minimal());
        registry.register(carousel());
        registry
    }

    /// Add a template, replacing any template with the same id
    pub fn register(&mut self, template: Template) {
        log::debug!("registered template `{}`", template.schema.id);
        self.templates.insert(template.schema.id.clone(), template);
    }

    /// Parse a template from JSON and register it, returning its id
    pub fn register_json(&mut self, json: &str) -> Result<String, LayoutError> {
        let template: Template = serde_json::from_str(json)?;
        let id = template.schema.id.clone();
        self.register(template);
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Like [`TemplateRegistry::get`], but a missing template is an error
    pub fn require(&self, id: &str) -> Result<&Template, LayoutError> {
        self.get(id)
            .ok_or_else(|| LayoutError::UnknownTemplate(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Suggest the layout of the given template that best fits the slide.
    /// `None` if the template is unknown or has no layouts.
    pub fn match_slide_to_layout(&self, slide: &Slide, template_id: &str) -> Option<&LayoutDefinition> {
        let template = self.get(template_id)?;
        select_layout(slide, &template.schema)
    }
}

fn standard_layouts() -> Vec<LayoutDefinition> {
    use SlotContent::*;
    use StyleBucket::*;

    vec![
        LayoutDefinition::new("title", LayoutKind::Title)
            .with_slot("title", Text, Some(Display))
            .with_slot("subtitle", Text, Some(H2)),
        LayoutDefinition::new("list", LayoutKind::List)
            .with_slot("title", Text, Some(H1))
            .with_slot("bullets", Bullets, Some(Body)),
        LayoutDefinition::new("two-col", LayoutKind::TwoCol)
            .with_slot("title", Text, Some(H1))
            .with_slot("body", Text, Some(Body))
            .with_slot("image", Image, None),
        LayoutDefinition::new("stat", LayoutKind::Stat)
            .with_slot("title", Text, Some(H2))
            .with_slot("body", Number, Some(Stat))
            .with_slot("subtitle", Text, Some(Caption)),
        LayoutDefinition::new("quote", LayoutKind::Quote)
            .with_slot("body", Text, Some(Quote))
            .with_slot("subtitle", Text, Some(Caption)),
        LayoutDefinition::new("cover", LayoutKind::Cover)
            .with_slot("title", Text, Some(Display))
            .with_slot("subtitle", Text, Some(H2)),
        LayoutDefinition::new("image-focus", LayoutKind::ImageFocus)
            .with_slot("image", Image, None)
            .with_slot("title", Text, Some(H2))
            .with_slot("body", Text, Some(Body)),
        LayoutDefinition::new("comparison", LayoutKind::Comparison)
            .with_slot("title", Text, Some(H1))
            .with_slot("bullets", Bullets, Some(Body)),
        LayoutDefinition::new("timeline", LayoutKind::Timeline)
            .with_slot("title", Text, Some(H1))
            .with_slot("bullets", Bullets, Some(Body)),
        LayoutDefinition::new("section-break", LayoutKind::SectionBreak)
            .with_slot("title", Text, Some(Display))
            .with_slot("subtitle", Text, Some(H2)),
    ]
}

fn minimal() -> Template {
    Template {
        schema: TemplateSchema {
            id: "minimal".into(),
            layouts: standard_layouts(),
            decorators: DecoratorPolicy::default(),
            progress_bar: None,
        },
        theme: TemplateTheme {
            base: None,
            variants: BTreeMap::from([(
                "dark".to_string(),
                ThemeDefinition {
                    mode: ThemeMode::Dark,
                    ..ThemeDefinition::default()
                },
            )]),
        },
    }
}

/// A swipeable carousel: an arrow inviting the swipe on every slide but the
/// last, page numbers throughout, and a progress bar along the bottom
fn carousel() -> Template {
    let arrow = DecoratorDefinition {
        kind: DecoratorType::Arrow,
        position: DecoratorPosition::anchored(Anchor::BottomRight, Px(-96.0), Px(-96.0)),
        props: json!({ "direction": "right", "width": 48, "height": 48 })
            .as_object()
            .cloned()
            .unwrap_or_default(),
    };
    let page_number = DecoratorDefinition {
        kind: DecoratorType::PageNumber,
        position: DecoratorPosition::anchored(Anchor::BottomLeft, Px(64.0), Px(-72.0)),
        props: json!({ "format": "{current} / {total}" })
            .as_object()
            .cloned()
            .unwrap_or_default(),
    };

    Template {
        schema: TemplateSchema {
            id: "carousel".into(),
            layouts: standard_layouts(),
            decorators: DecoratorPolicy {
                all: vec![page_number],
                first: vec![arrow.clone()],
                middle: vec![arrow],
                last: vec![],
            },
            progress_bar: Some(ProgressBarConfig {
                enabled: true,
                position: ProgressBarPosition::Bottom,
                thickness: Px(8.0),
                color: None,
                track_color: None,
            }),
        },
        theme: TemplateTheme::default(),
    }
}
