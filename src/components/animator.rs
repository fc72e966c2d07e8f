//! Sprite-sheet animator component.
//!
//! [`Animator`] is the playback state machine for one game object. It owns a
//! private [`AnimationRegistry`], the current/previous/pending clips and a
//! fractional frame cursor.
//!
//! # States
//!
//! - **Idle** – no current clip; [`Animator::tick`] does nothing.
//! - **Playing** – a current clip is set and advanced every tick.
//! - **Pending** – orthogonal to Playing: a switch was requested while the
//!   current clip has `block_other_animations` set. The request is applied
//!   when the blocking clip reaches its end.
//!
//! # Tick
//!
//! 1. `frame += dt * fps`
//! 2. If the cursor reached the frame count, run end-of-clip handling, which
//!    may change the current clip.
//! 3. Push `frames[floor(frame) % len]` of whichever clip is now current to
//!    the [`RenderTarget`] and toggle any mirror axes that changed.
//!
//! # End of clip
//!
//! Evaluated once per reached boundary, in order:
//!
//! 1. [`EndBehavior::FireEndEvent`] emits [`AnimationEnded`].
//! 2. A blocking clip with a pending request switches to it.
//! 3. [`EndBehavior::BackToPrevious`] returns to the previous clip, leaving
//!    `previous` untouched.
//! 4. Otherwise the cursor wraps and the clip keeps playing.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::animation::{
    AnimationClip, AnimationEnded, AnimationId, AnimationRegistry, EndBehavior, MirrorFlags,
    RenderTarget,
};
use crate::error::AnimError;

#[derive(Component, Debug, Default)]
pub struct Animator {
    registry: AnimationRegistry,
    next: Option<Arc<AnimationClip>>,
    current: Option<Arc<AnimationClip>>,
    previous: Option<Arc<AnimationClip>>,
    frame: f32,
    /// Mirror state last pushed to a render target.
    applied_mirror: MirrorFlags,
    listeners: Vec<Sender<AnimationEnded>>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an animator whose registry is bulk-loaded from `clips`.
    ///
    /// See [`AnimationRegistry::from_clips`] for how invalid or missing
    /// entries are handled.
    pub fn with_clips<I>(clips: I) -> Self
    where
        I: IntoIterator<Item = Option<Arc<AnimationClip>>>,
    {
        Self {
            registry: AnimationRegistry::from_clips(clips),
            ..Self::default()
        }
    }

    /// Register another clip. Returns `false` if it was rejected.
    pub fn add_animation(&mut self, clip: Arc<AnimationClip>) -> bool {
        self.registry.register(clip)
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    pub fn all_animation_ids(&self) -> Vec<AnimationId> {
        self.registry.all_ids()
    }

    /// Receive a copy of every [`AnimationEnded`] this animator emits.
    ///
    /// Dropping the receiver unsubscribes it on the next emitted notification.
    pub fn subscribe(&mut self) -> Receiver<AnimationEnded> {
        let (tx, rx) = unbounded();
        self.listeners.push(tx);
        rx
    }

    /// Request a switch to `clip`.
    ///
    /// Returns `false` without touching any state when `clip` is the very
    /// instance already playing. A different instance with the same name is a
    /// new clip. When the current clip blocks others, the request is stored as
    /// pending (replacing any earlier one) and `true` is returned.
    pub fn request_switch(&mut self, clip: Arc<AnimationClip>) -> bool {
        if let Some(current) = &self.current {
            if Arc::ptr_eq(current, &clip) {
                return false;
            }
            if current.block_other_animations {
                debug!(
                    "Animation '{}' deferred until '{}' ends",
                    clip.name, current.name
                );
                self.next = Some(clip);
                return true;
            }
        }
        self.switch_immediately(clip);
        true
    }

    /// Resolve `name` in this animator's registry and request a switch.
    ///
    /// Fails with [`AnimError::Unresolved`] when no clip has that name;
    /// otherwise returns the result of [`Animator::request_switch`].
    pub fn try_request_switch_by_name(&mut self, name: &str) -> Result<bool, AnimError> {
        let clip = self
            .registry
            .clip_by_name(name)
            .map(Arc::clone)
            .ok_or_else(|| AnimError::Unresolved(name.to_string()))?;
        Ok(self.request_switch(clip))
    }

    pub fn try_request_switch_by_id(&mut self, id: &AnimationId) -> Result<bool, AnimError> {
        let clip = self
            .registry
            .clip(id)
            .map(Arc::clone)
            .ok_or_else(|| AnimError::Unresolved(format!("{} (id {})", id.name, id.id)))?;
        Ok(self.request_switch(clip))
    }

    /// Like [`Animator::try_request_switch_by_name`], logging unknown names.
    pub fn request_switch_by_name(&mut self, name: &str) -> bool {
        self.try_request_switch_by_name(name).unwrap_or_else(|e| {
            debug!("{}", e);
            false
        })
    }

    pub fn request_switch_by_id(&mut self, id: &AnimationId) -> bool {
        self.try_request_switch_by_id(id).unwrap_or_else(|e| {
            debug!("{}", e);
            false
        })
    }

    /// Advance playback by `dt` seconds and push the displayed frame.
    ///
    /// Returns the ended notification if one fired during this tick. Negative
    /// or non-finite `dt` is treated as zero.
    pub fn tick(
        &mut self,
        dt: f32,
        target: Option<&mut dyn RenderTarget>,
    ) -> Option<AnimationEnded> {
        let clip = match &self.current {
            Some(clip) if clip.is_playable() => Arc::clone(clip),
            _ => return None,
        };

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.frame += dt * clip.fps;

        let mut ended = None;
        if self.frame >= clip.frame_count() as f32 {
            ended = self.handle_end_of_clip(&clip);
        }

        if let (Some(target), Some(current)) = (target, self.current.clone()) {
            self.push_frame(&current, target);
        }

        ended
    }

    /// Index of the displayed frame. Zero while idle.
    pub fn current_frame_index(&self) -> usize {
        self.frame.floor() as usize
    }

    /// Fractional frame cursor.
    pub fn frame_cursor(&self) -> f32 {
        self.frame
    }

    pub fn current_animation_name(&self) -> Option<&str> {
        self.current.as_deref().map(|clip| clip.name.as_str())
    }

    pub fn previous_animation_name(&self) -> Option<&str> {
        self.previous.as_deref().map(|clip| clip.name.as_str())
    }

    pub fn pending_animation_name(&self) -> Option<&str> {
        self.next.as_deref().map(|clip| clip.name.as_str())
    }

    pub fn current_animation(&self) -> Option<&Arc<AnimationClip>> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    fn switch_immediately(&mut self, clip: Arc<AnimationClip>) {
        self.frame = 0.0;
        self.previous = self.current.replace(clip);
    }

    fn handle_end_of_clip(&mut self, clip: &Arc<AnimationClip>) -> Option<AnimationEnded> {
        let ended = if clip.end_behavior == EndBehavior::FireEndEvent {
            let ended = AnimationEnded {
                name: clip.name.clone(),
            };
            self.notify(&ended);
            Some(ended)
        } else {
            None
        };

        if clip.block_other_animations {
            if let Some(next) = self.next.take() {
                self.switch_immediately(next);
                return ended;
            }
        }

        if clip.end_behavior == EndBehavior::BackToPrevious {
            if let Some(previous) = self.previous.clone() {
                self.frame = 0.0;
                self.current = Some(previous);
                return ended;
            }
        }

        self.frame %= clip.frame_count() as f32;
        if !self.frame.is_finite() {
            self.frame = 0.0;
        }
        ended
    }

    fn push_frame(&mut self, clip: &AnimationClip, target: &mut dyn RenderTarget) {
        if clip.frames.is_empty() {
            return;
        }
        let index = self.current_frame_index() % clip.frames.len();
        target.set_frame(&clip.frames[index]);

        let delta = clip.mirror.delta(self.applied_mirror);
        if delta.flip_h {
            target.toggle_flip_h();
        }
        if delta.flip_v {
            target.toggle_flip_v();
        }
        self.applied_mirror = clip.mirror;
    }

    fn notify(&mut self, ended: &AnimationEnded) {
        self.listeners.retain(|tx| tx.send(ended.clone()).is_ok());
    }
}
