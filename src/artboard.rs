//! Artboard geometry: the fixed logical canvas a slide is composed on, the
//! safe-area content rectangle inside it, and the overflow test used to flag
//! blocks whose content doesn't fit the space they were given.
//!
//! # Example
//!
//! ```
//! use slide_layout::{content_rect, Frame, SQUARE};
//!
//! let rect = content_rect(&SQUARE);
//! assert_eq!(rect, Frame::new(64, 64, 952, 952));
//! ```

use crate::frame::Frame;
use crate::units::*;
use crate::LayoutError;
use serde::{Deserialize, Serialize};

/// The size of an artboard together with its safe inset and baseline grid unit
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtboardSpec {
    pub width: Px,
    pub height: Px,
    /// Margin from every edge within which primary content must sit
    pub safe_inset: Px,
    /// The vertical grid unit used for alignment guides
    pub baseline: Px,
}

/// The standard 1080×1080 slide
pub const SQUARE: ArtboardSpec = ArtboardSpec {
    width: Px(1080.0),
    height: Px(1080.0),
    safe_inset: Px(64.0),
    baseline: Px(8.0),
};

impl Default for ArtboardSpec {
    fn default() -> Self {
        SQUARE
    }
}

impl ArtboardSpec {
    /// Create an artboard, checking that the safe inset leaves a content area
    /// on both axes (`2·safe_inset < width` and `2·safe_inset < height`)
    pub fn new<D: Into<Px>>(
        width: D,
        height: D,
        safe_inset: D,
        baseline: D,
    ) -> Result<ArtboardSpec, LayoutError> {
        let spec = ArtboardSpec {
            width: width.into(),
            height: height.into(),
            safe_inset: safe_inset.into(),
            baseline: baseline.into(),
        };
        let inset = spec.safe_inset * 2.0;
        if inset >= spec.width || inset >= spec.height || spec.safe_inset < Px::ZERO {
            return Err(LayoutError::InvalidArtboard {
                width: *spec.width,
                height: *spec.height,
                safe_inset: *spec.safe_inset,
            });
        }
        Ok(spec)
    }

    /// The same artboard with a different safe inset and baseline, as the
    /// resolved theme spacing dictates
    pub fn with_spacing(&self, safe_inset: Px, baseline: Px) -> ArtboardSpec {
        ArtboardSpec {
            safe_inset,
            baseline,
            ..*self
        }
    }

    /// The whole artboard as a frame
    pub fn bounds(&self) -> Frame {
        Frame {
            x: Px::ZERO,
            y: Px::ZERO,
            w: self.width,
            h: self.height,
        }
    }
}

/// The rectangle remaining after removing the safe inset on all sides
pub fn content_rect(spec: &ArtboardSpec) -> Frame {
    Frame {
        x: spec.safe_inset,
        y: spec.safe_inset,
        w: spec.width - spec.safe_inset * 2.0,
        h: spec.height - spec.safe_inset * 2.0,
    }
}

/// Whether content of the given natural height overflows a frame of the
/// given height. This is purely advisory; frames are never resized by it.
pub fn is_overflow(content_height: Px, frame_height: Px) -> bool {
    content_height > frame_height
}
