//! Per-animator clip registry.
//!
//! Maps clip names to [`AnimationId`]s and ids back to clips. Each animator
//! owns its own registry, so ids are only meaningful for the animator that
//! issued them.

use std::sync::Arc;

use log::{debug, error, warn};
use rustc_hash::FxHashMap;

use super::clip::AnimationClip;
use super::id::{AnimationId, IdProvider};
use crate::error::AnimError;

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    clips: FxHashMap<u32, Arc<AnimationClip>>,
    ids: FxHashMap<String, AnimationId>,
    provider: IdProvider,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load a list of clips.
    ///
    /// Invalid entries (blank name, bad frame rate, duplicate name) are
    /// skipped. A missing entry (`None`) stops the load; clips after it are
    /// not registered.
    pub fn from_clips<I>(clips: I) -> Self
    where
        I: IntoIterator<Item = Option<Arc<AnimationClip>>>,
    {
        let mut registry = Self::new();
        for (index, clip) in clips.into_iter().enumerate() {
            let Some(clip) = clip else {
                error!(
                    "Clip list has a missing animation at position {}, remaining clips skipped",
                    index
                );
                break;
            };
            registry.register(clip);
        }
        registry
    }

    /// Register a clip, returning its new id.
    ///
    /// Nothing is stored when this fails.
    pub fn try_register(&mut self, clip: Arc<AnimationClip>) -> Result<AnimationId, AnimError> {
        if self.ids.contains_key(&clip.name) {
            return Err(AnimError::Duplicate(clip.name.clone()));
        }
        if clip.name.trim().is_empty() {
            return Err(AnimError::BlankName);
        }
        if !clip.has_valid_fps() {
            return Err(AnimError::InvalidFrameRate {
                name: clip.name.clone(),
                fps: clip.fps,
            });
        }

        let id = self.provider.allocate(Some(&clip.name));
        self.ids.insert(clip.name.clone(), id.clone());
        self.clips.insert(id.id, clip);
        Ok(id)
    }

    /// Register a clip, logging the reason when it is rejected.
    pub fn register(&mut self, clip: Arc<AnimationClip>) -> bool {
        match self.try_register(clip) {
            Ok(id) => {
                debug!("Registered animation '{}' as id {}", id.name, id.id);
                true
            }
            Err(e @ AnimError::Duplicate(_)) => {
                warn!("Skipping animation: {}", e);
                false
            }
            Err(e) => {
                error!("Rejected animation: {}", e);
                false
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<AnimationId> {
        self.ids.get(name).cloned()
    }

    pub fn clip(&self, id: &AnimationId) -> Option<&Arc<AnimationClip>> {
        self.clips.get(&id.id)
    }

    pub fn clip_by_name(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.ids.get(name).and_then(|id| self.clips.get(&id.id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Snapshot of every registered id. Order is unspecified.
    pub fn all_ids(&self) -> Vec<AnimationId> {
        self.ids.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
