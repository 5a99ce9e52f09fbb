use crate::font::Font;
use crate::layout::TextStyle;
use crate::units::Px;
use id_arena::{Arena, Id};

/// A measurement surface that reports how wide a string renders in a given
/// style. Implementations may hold state between calls (the current font, a
/// cache), so measuring takes `&mut self`: one measurement completes before
/// the next begins on the same instance. Concurrent layouts each need their
/// own measurer.
///
/// Widths must be deterministic for a given style and string, and monotonic:
/// appending characters never makes a string narrower.
pub trait Measurer {
    /// The advance width of `text` set in `style`
    fn width_of(&mut self, text: &str, style: &TextStyle) -> Px;
}

impl<M: Measurer + ?Sized> Measurer for &mut M {
    fn width_of(&mut self, text: &str, style: &TextStyle) -> Px {
        (**self).width_of(text, style)
    }
}

impl<M: Measurer + ?Sized> Measurer for Box<M> {
    fn width_of(&mut self, text: &str, style: &TextStyle) -> Px {
        (**self).width_of(text, style)
    }
}

/// Measures every character as the same fraction of an em. Deterministic and
/// independent of any loaded fonts, which makes it the measurer of choice for
/// headless thumbnails and tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of a single character, as a fraction of the font size
    pub advance_em: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance_em: f32) -> MonospaceMeasurer {
        MonospaceMeasurer { advance_em }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        MonospaceMeasurer { advance_em: 0.5 }
    }
}

impl Measurer for MonospaceMeasurer {
    fn width_of(&mut self, text: &str, style: &TextStyle) -> Px {
        let count = text.chars().count() as f32;
        (style.font_size * self.advance_em + style.letter_spacing) * count
    }
}

/// A registered face together with the keys it is looked up by
struct FaceEntry<I = Id<Font>> {
    /// Lowercased
    family: String,
    weight: u16,
    id: I,
}

/// Index of the face to measure `family` at `weight` with: the nearest weight
/// within the family (an exact match when there is one, the earlier face on a
/// tie), otherwise the first face. `None` only when there are no faces.
fn select_face<I>(faces: &[FaceEntry<I>], family: &str, weight: u16) -> Option<usize> {
    let family = family.to_lowercase();
    faces
        .iter()
        .enumerate()
        .filter(|(_, face)| face.family == family)
        .min_by_key(|(_, face)| face.weight.abs_diff(weight))
        .map(|(index, _)| index)
        .or_else(|| (!faces.is_empty()).then_some(0))
}

/// Measures text with real font metrics. Fonts are stored in an arena and
/// looked up by family name (case-insensitively) and weight:
///
/// 1. a face with the exact family and weight
/// 2. the face in that family with the nearest weight
/// 3. the first face that was registered
///
/// Until at least one face is registered, widths are estimated with a
/// [`MonospaceMeasurer`]; check [`FontMeasurer::is_ready`] before trusting
/// measurements to be pixel-accurate.
#[derive(Default)]
pub struct FontMeasurer {
    pub fonts: Arena<Font>,
    faces: Vec<FaceEntry>,
    /// The face resolved for the most recent (family, weight)
    current: Option<(String, u16, Id<Font>)>,
    estimate: MonospaceMeasurer,
}

impl FontMeasurer {
    pub fn new() -> FontMeasurer {
        FontMeasurer::default()
    }

    /// Register a font, keyed by the family name and weight the face
    /// declares. Faces without a family name are registered under `""` and
    /// can only be reached as the fallback.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family().unwrap_or_default();
        let weight = font.weight();
        self.add_font_as(font, &family, weight)
    }

    /// Register a font under an explicit family name and weight, for faces
    /// whose embedded names don't match what slides ask for
    pub fn add_font_as(&mut self, font: Font, family: &str, weight: u16) -> Id<Font> {
        let id = self.fonts.alloc(font);
        log::debug!("registered font face `{family}` ({weight})");
        self.faces.push(FaceEntry {
            family: family.to_lowercase(),
            weight,
            id,
        });
        self.current = None;
        id
    }

    /// Whether any fonts have been loaded. Measurements taken before this is
    /// true are estimates.
    pub fn is_ready(&self) -> bool {
        !self.faces.is_empty()
    }

    fn resolve(&mut self, family: &str, weight: u16) -> Option<Id<Font>> {
        let family = family.to_lowercase();
        if let Some((current_family, current_weight, id)) = &self.current {
            if *current_family == family && *current_weight == weight {
                return Some(*id);
            }
        }

        let id = self.faces[select_face(&self.faces, &family, weight)?].id;

        self.current = Some((family, weight, id));
        Some(id)
    }
}

impl Measurer for FontMeasurer {
    fn width_of(&mut self, text: &str, style: &TextStyle) -> Px {
        match self.resolve(&style.font_family, style.font_weight) {
            Some(id) => self.fonts[id].width_of_text(text, style.font_size, style.letter_spacing),
            None => {
                log::debug!(
                    "no fonts loaded; estimating width of {} chars in `{}`",
                    text.chars().count(),
                    style.font_family
                );
                self.estimate.width_of(text, style)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(size: f32) -> TextStyle {
        TextStyle {
            font_size: Px(size),
            line_height: Px(size * 1.25),
            ..TextStyle::default()
        }
    }

    #[test]
    fn monospace_counts_characters() {
        let mut m = MonospaceMeasurer::new(0.5);
        assert_eq!(m.width_of("hello", &style(20.0)), Px(50.0));
        assert_eq!(m.width_of("", &style(20.0)), Px(0.0));
        // chars, not bytes
        assert_eq!(m.width_of("héllo", &style(20.0)), Px(50.0));
    }

    #[test]
    fn monospace_adds_letter_spacing_per_character() {
        let mut m = MonospaceMeasurer::new(0.5);
        let spaced = TextStyle {
            letter_spacing: Px(2.0),
            ..style(20.0)
        };
        assert_eq!(m.width_of("abc", &spaced), Px(36.0));
    }

    fn faces(keys: &[(&str, u16)]) -> Vec<FaceEntry<()>> {
        keys.iter()
            .map(|(family, weight)| FaceEntry {
                family: family.to_lowercase(),
                weight: *weight,
                id: (),
            })
            .collect()
    }

    #[test]
    fn selects_exact_family_and_weight() {
        let faces = faces(&[("Inter", 400), ("Inter", 700), ("Lora", 400)]);
        assert_eq!(select_face(&faces, "Inter", 700), Some(1));
        assert_eq!(select_face(&faces, "Lora", 400), Some(2));
    }

    #[test]
    fn selects_nearest_weight_in_family() {
        let faces = faces(&[("Lora", 500), ("Inter", 400), ("Inter", 700)]);
        assert_eq!(select_face(&faces, "Inter", 500), Some(1));
        assert_eq!(select_face(&faces, "Inter", 800), Some(2));
        // equally near: the face registered first
        assert_eq!(select_face(&faces, "Inter", 550), Some(1));
    }

    #[test]
    fn unknown_family_falls_back_to_first_face() {
        let faces = faces(&[("Lora", 500), ("Inter", 400)]);
        assert_eq!(select_face(&faces, "Comic Sans", 400), Some(0));
        assert_eq!(select_face::<()>(&[], "Inter", 400), None);
    }

    #[test]
    fn family_match_ignores_case() {
        let faces = faces(&[("Lora", 400), ("Playfair Display", 700)]);
        assert_eq!(select_face(&faces, "PLAYFAIR display", 700), Some(1));
    }

    #[test]
    fn font_measurer_without_fonts_estimates() {
        let mut m = FontMeasurer::new();
        assert!(!m.is_ready());
        assert_eq!(m.width_of("abcd", &style(10.0)), Px(20.0));
    }

    #[test]
    fn measurers_work_through_references() {
        fn measure(m: &mut dyn Measurer) -> Px {
            m.width_of("ab", &style(10.0))
        }
        let mut boxed: Box<dyn Measurer> = Box::new(MonospaceMeasurer::default());
        assert_eq!(measure(&mut boxed), Px(10.0));
    }
}
