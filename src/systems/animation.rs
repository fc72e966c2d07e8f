//! Animation systems.
//!
//! - [`animator_system`] advances every [`Animator`] by the world delta and
//!   pushes the displayed frame into the entity's [`Sprite`], if it has one.
//!
//! # Animation Flow
//!
//! 1. Clip data is defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities carry an [`Animator`] built from the store and, usually, a [`Sprite`]
//! 3. Game logic requests switches directly or via
//!    [`SwitchAnimationEvent`](crate::events::animation::SwitchAnimationEvent)
//! 4. `animator_system` ticks each animator and triggers [`AnimationEndedEvent`]
//!    for clips that fire one

use bevy_ecs::prelude::*;

use crate::animation::RenderTarget;
use crate::components::animator::Animator;
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationEndedEvent;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates [`Animator`] state and, when present, the [`Sprite`] frame and flips.
/// - Triggers [`AnimationEndedEvent`] once per completed `FireEndEvent` cycle.
pub fn animator_system(
    mut query: Query<(Entity, &mut Animator, Option<&mut Sprite>)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut animator, mut maybe_sprite) in query.iter_mut() {
        let target = maybe_sprite
            .as_deref_mut()
            .map(|sprite| sprite as &mut dyn RenderTarget);
        if let Some(ended) = animator.tick(time.delta, target) {
            commands.trigger(AnimationEndedEvent {
                entity,
                name: ended.name,
            });
        }
    }
}
