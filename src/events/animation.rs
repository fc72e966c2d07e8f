//! Animation events and observers.
//!
//! - [`AnimationEndedEvent`] is triggered by
//!   [`animator_system`](crate::systems::animation::animator_system) when a clip
//!   with [`EndBehavior::FireEndEvent`](crate::animation::EndBehavior::FireEndEvent)
//!   completes a cycle.
//! - [`SwitchAnimationEvent`] asks an entity's
//!   [`Animator`](crate::components::animator::Animator) to switch clips; the
//!   [`switch_animation_observer`] applies it.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(switch_animation_observer);
//! world.add_observer(|trigger: On<AnimationEndedEvent>| {
//!     if trigger.event().name == "hit" {
//!         // back to gameplay logic
//!     }
//! });
//! world.trigger(SwitchAnimationEvent::new(player, "hit"));
//! ```
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animator::Animator;

/// Event emitted when an animator's clip reaches its end with
/// `FireEndEvent` behavior.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationEndedEvent {
    /// The entity whose animator fired.
    pub entity: Entity,
    /// Name of the clip that ended.
    pub name: String,
}

/// Request to switch the animation of `entity` by clip name.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SwitchAnimationEvent {
    pub entity: Entity,
    pub animation: String,
}

impl SwitchAnimationEvent {
    pub fn new(entity: Entity, animation: impl Into<String>) -> Self {
        Self {
            entity,
            animation: animation.into(),
        }
    }
}

/// Observer that forwards [`SwitchAnimationEvent`] to the entity's animator.
///
/// Unknown entities, entities without an `Animator` and unregistered names
/// are logged and otherwise ignored.
pub fn switch_animation_observer(
    trigger: On<SwitchAnimationEvent>,
    mut animators: Query<&mut Animator>,
) {
    let event = trigger.event();
    let Ok(mut animator) = animators.get_mut(event.entity) else {
        warn!(
            "SwitchAnimationEvent for {:?} which has no Animator",
            event.entity
        );
        return;
    };
    match animator.try_request_switch_by_name(&event.animation) {
        Ok(true) => {}
        Ok(false) => debug!(
            "Switch of {:?} to '{}' had no effect",
            event.entity, event.animation
        ),
        Err(e) => warn!("SwitchAnimationEvent for {:?}: {}", event.entity, e),
    }
}
