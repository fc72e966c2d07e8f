//! Sprite-sheet animation player.
//!
//! Plays named frame sequences on 2D game objects and decides what happens
//! when a clip ends: loop, return to the previous clip, fire an event, or
//! apply a switch that was deferred while a blocking clip played.
//!
//! - [`animation`] – clips, ids, registry and the render-target trait
//! - [`components`] – the [`Animator`](components::animator::Animator) state machine and [`Sprite`](components::sprite::Sprite)
//! - [`events`] – ended notifications and switch requests
//! - [`resources`] – clip store, world time, config
//! - [`systems`] – per-frame update systems

pub mod animation;
pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
