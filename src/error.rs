use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Template schema has no layouts defined")]
    /// The schema being rendered has an empty `layouts` list, so there is
    /// nothing to arrange the slide with
    NoLayouts,

    #[error("safe inset {safe_inset} leaves no content area on a {width}×{height} artboard")]
    /// The safe inset consumes the whole artboard on at least one axis
    InvalidArtboard {
        width: f32,
        height: f32,
        safe_inset: f32,
    },

    #[error("`{0}` is not a valid hex colour")]
    /// A colour string could not be parsed
    InvalidColour(String),

    #[error("no template registered with id `{0}`")]
    /// A slide or project referred to a template the registry doesn't know
    UnknownTemplate(String),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [serde_json] failed to parse a schema or project
    Json(#[from] serde_json::Error),
}
