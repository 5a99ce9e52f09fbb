use crate::{LayoutError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font face. Fonts can be TTF or OTF fonts; they are only used here
/// for their horizontal metrics, never for drawing.
///
/// Typically, fonts are registered with a [`FontMeasurer`](crate::layout::FontMeasurer)
/// and looked up by their family name and weight when text is measured.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if it declares one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if it declares one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 200: Extra Light (Ultra Light)
    /// * 300: Light
    /// * 400: Normal
    /// * 500: Medium
    /// * 600: Semi Bold (Demi Bold)
    /// * 700: Bold
    /// * 800: Extra Bold (Ultra Bold)
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the advance width of a string at the given font size, with
    /// `letter_spacing` added after every character. Characters the face has no
    /// glyph for are measured with the replacement glyph, or skipped if the
    /// face has none.
    pub fn width_of_text(&self, text: &str, size: Px, letter_spacing: Px) -> Px {
        let face = self.face.as_face_ref();
        let scaling = size / face.units_per_em() as f32;
        text.chars()
            .map(|ch| {
                let advance = self
                    .glyph_id(ch)
                    .or_else(|| self.replacement_glyph_id())
                    .and_then(|gid| face.glyph_hor_advance(GlyphId(gid)))
                    .unwrap_or_default();
                scaling * advance as f32 + letter_spacing
            })
            .sum()
    }
}
