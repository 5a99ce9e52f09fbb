use crate::units::*;
use serde::{Deserialize, Serialize};

/// A rectangle on the artboard, specified by its top-left corner and its size.
/// The origin is the top-left of the artboard and `y` grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The x-coordinate of the left edge
    pub x: Px,
    /// The y-coordinate of the top edge
    pub y: Px,
    /// The width of the frame
    pub w: Px,
    /// The height of the frame
    pub h: Px,
}

impl Frame {
    pub fn new<X, Y, W, H>(x: X, y: Y, w: W, h: H) -> Frame
    where
        X: Into<Px>,
        Y: Into<Px>,
        W: Into<Px>,
        H: Into<Px>,
    {
        Frame {
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Px {
        self.x + self.w
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> Px {
        self.y + self.h
    }

    /// Split the frame into two side-by-side columns separated by `gap`
    pub fn split_columns(&self, gap: Px) -> (Frame, Frame) {
        let column = ((self.w - gap) / 2.0).max(Px::ZERO);
        let left = Frame {
            w: column,
            ..*self
        };
        let right = Frame {
            x: self.x + column + gap,
            w: column,
            ..*self
        };
        (left, right)
    }

    /// The part of this frame below `y`, or an empty frame if `y` is past the bottom
    pub fn below(&self, y: Px) -> Frame {
        let top = y.max(self.y);
        Frame {
            y: top,
            h: (self.bottom() - top).max(Px::ZERO),
            ..*self
        }
    }
}

/// An absolute position on the artboard
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl<X: Into<Px>, Y: Into<Px>> From<(X, Y)> for Point {
    fn from(p: (X, Y)) -> Self {
        Point {
            x: p.0.into(),
            y: p.1.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_around_gap() {
        let frame = Frame::new(64, 64, 952, 952);
        let (left, right) = frame.split_columns(Px(48.0));
        assert_eq!(left, Frame::new(64, 64, 452, 952));
        assert_eq!(right, Frame::new(564, 64, 452, 952));
    }

    #[test]
    fn below_never_goes_negative() {
        let frame = Frame::new(0, 100, 200, 100);
        assert_eq!(frame.below(Px(150.0)), Frame::new(0, 150, 200, 50));
        assert_eq!(frame.below(Px(400.0)).h, Px::ZERO);
        assert_eq!(frame.below(Px(0.0)), frame);
    }
}
