//! Animator systems.
//!
//! Submodules overview
//! - [`animation`] – advance every animator and push frames into sprites
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod time;
