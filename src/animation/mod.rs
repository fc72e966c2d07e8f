//! Engine-agnostic animation data.
//!
//! - [`clip`] – immutable clip definitions, frames and mirror flags
//! - [`id`] – [`AnimationId`] handles and the sequential [`IdProvider`]
//! - [`registry`] – name/id lookup owned by each animator
//! - [`target`] – the [`RenderTarget`] sink an animator pushes frames into
//!
//! The playback state machine itself lives in
//! [`crate::components::animator::Animator`].

pub mod clip;
pub mod id;
pub mod registry;
pub mod target;

pub use clip::{AnimationClip, EndBehavior, MirrorFlags, SpriteFrame};
pub use id::{AnimationId, IdProvider};
pub use registry::AnimationRegistry;
pub use target::RenderTarget;

/// Notification emitted when a [`EndBehavior::FireEndEvent`] clip completes a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEnded {
    /// Name of the clip that ended.
    pub name: String,
}
