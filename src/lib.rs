mod artboard;
pub use artboard::*;

mod colour;
pub use colour::*;

mod decorators;
pub use decorators::*;

mod font;
pub use font::*;

mod frame;
pub use frame::*;

/// Measuring, wrapping and bullet layout of text against a pixel width
pub mod layout;

/// Arranging a slide's blocks on the artboard according to its layout
pub mod render;

mod schema;
pub use schema::*;

mod selector;
pub use selector::*;

mod slide;
pub use slide::*;

/// The built-in templates and the registry projects look templates up in
pub mod templates;

mod theme;
pub use theme::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
