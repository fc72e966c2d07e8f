//! ECS components for animated entities.
//!
//! Submodules overview:
//! - [`animator`] – sprite-sheet playback state machine with its own clip registry
//! - [`sprite`] – 2D sprite component; the render target animators push frames into

pub mod animator;
pub mod sprite;
