use thiserror::Error;

/// Failures surfaced by the effects core.
///
/// None of these are fatal to the page: the browser layer logs them and
/// degrades to a sparser (or empty) scene.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    #[error("2d drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("draw call failed: {0}")]
    Draw(String),
    #[error("invalid value {value:?} for parameter `{key}`")]
    InvalidParam { key: String, value: String },
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
}

pub type FxResult<T> = Result<T, FxError>;
