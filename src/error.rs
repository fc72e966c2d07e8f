//! Crate error type.
//!
//! Most animator operations absorb failures locally and report them through a
//! `bool`/`Option` plus a log line. [`AnimError`] names those failure cases for
//! the APIs that do return a `Result` (registration, clip loading, config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimError {
    /// Clip name is empty or only whitespace.
    #[error("animation name cannot be empty or all blanks")]
    BlankName,
    /// A clip with this name is already registered.
    #[error("animation '{0}' is already registered")]
    Duplicate(String),
    /// Frame rate is zero, negative or not finite.
    #[error("animation '{name}' has an invalid frame rate ({fps})")]
    InvalidFrameRate { name: String, fps: f32 },
    /// Name or id does not map to a registered clip.
    #[error("animation '{0}' is not registered")]
    Unresolved(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid clip file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
}
