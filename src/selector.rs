//! Suggests a layout for a slide from what the slide contains. The suggestion
//! is advisory; a slide's own `layout_id` always wins when rendering.

use crate::schema::{LayoutDefinition, LayoutKind, TemplateSchema};
use crate::slide::{Slide, SlideBlock};

/// What a slide is made of, as far as layout selection cares
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Composition {
    pub has_title: bool,
    pub has_subtitle: bool,
    pub has_bullets: bool,
    pub has_image: bool,
    /// Number of title, subtitle and body blocks
    pub text_block_count: usize,
}

impl Composition {
    pub fn of(slide: &Slide) -> Composition {
        slide
            .blocks
            .iter()
            .fold(Composition::default(), |mut c, block| {
                match block {
                    SlideBlock::Title(_) => {
                        c.has_title = true;
                        c.text_block_count += 1;
                    }
                    SlideBlock::Subtitle(_) => {
                        c.has_subtitle = true;
                        c.text_block_count += 1;
                    }
                    SlideBlock::Body(_) => c.text_block_count += 1,
                    SlideBlock::Bullets(_) => c.has_bullets = true,
                    SlideBlock::Image(_) => c.has_image = true,
                    SlideBlock::Background(_) | SlideBlock::Decorative(_) => {}
                }
                c
            })
    }

    /// A title, optionally with a subtitle, and nothing else of substance
    pub fn is_only_title_and_subtitle(&self) -> bool {
        self.has_title
            && (self.has_subtitle || self.text_block_count == 1)
            && !self.has_bullets
            && !self.has_image
    }

    /// The layout kinds that suit this composition, best first
    pub fn preferred_kinds(&self) -> &'static [LayoutKind] {
        if self.is_only_title_and_subtitle() {
            &[LayoutKind::Title, LayoutKind::Cover]
        } else if self.text_block_count >= 4 || (self.has_image && self.text_block_count >= 2) {
            &[LayoutKind::TwoCol]
        } else {
            &[LayoutKind::List]
        }
    }
}

/// Pick the layout of `schema` that best fits the slide's content, falling
/// back to the schema's first layout. Returns `None` only for a schema
/// without layouts.
pub fn select_layout<'a>(slide: &Slide, schema: &'a TemplateSchema) -> Option<&'a LayoutDefinition> {
    let composition = Composition::of(slide);
    let preferred = composition.preferred_kinds();

    schema
        .layouts
        .iter()
        .find(|layout| preferred.contains(&layout.kind))
        .or_else(|| {
            log::debug!(
                "no layout of kind {preferred:?} in `{}`; suggesting its first layout",
                schema.id
            );
            schema.layouts.first()
        })
}
