use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A length in logical artboard pixels. The artboard is a fixed logical canvas,
/// so one `Px` is one unit of the 1080×1080 slide regardless of the pixel
/// density of whatever eventually paints it.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::From,
    derive_more::Into,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The smaller of two lengths
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// The larger of two lengths
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Round to the nearest whole pixel
    pub fn round(self) -> Px {
        Px(self.0.round())
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value as f32)
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Px(value as f32)
    }
}
