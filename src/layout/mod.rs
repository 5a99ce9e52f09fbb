//! Text measurement and wrapping for positioning content on slides.
//!
//! This module provides the measurement surface ([`Measurer`]) and the two
//! line-building algorithms built on it. Neither ever changes the geometry it
//! is given: text that doesn't fit is reported through its measured size and
//! left for the caller to flag.
//!
//! # Layout Functions
//!
//! - [`measure_text`](crate::layout::measure_text) - greedy word-aware wrapping, keeps words intact
//! - [`layout_bullets`](crate::layout::layout_bullets) - bulleted lists with a hanging indent
//!
//! # Example
//!
//! ```
//! use slide_layout::layout::{measure_text, MonospaceMeasurer, TextStyle};
//! use slide_layout::Px;
//!
//! let mut measurer = MonospaceMeasurer::default();
//! let style = TextStyle {
//!     font_size: Px(20.0),
//!     line_height: Px(24.0),
//!     ..TextStyle::default()
//! };
//!
//! let layout = measure_text(&mut measurer, "Hello, world!", &style, Px(70.0));
//! assert_eq!(layout.lines.len(), 2);
//! assert_eq!(layout.total_height, Px(48.0));
//! ```

mod bullets;
mod measure;
mod text;

pub use bullets::*;
pub use measure::*;
pub use text::*;
