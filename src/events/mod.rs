//! Event types and observers used by the animator.
//!
//! Events provide a decoupled way for systems and game logic to react to
//! animation playback without holding references to the animators.
//!
//! Submodules:
//! - [`animation`] – "clip ended" notifications and switch requests
pub mod animation;
