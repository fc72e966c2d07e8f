//! Animation clip library.
//!
//! This module provides a store for clip definitions that can be shared by
//! multiple entities. Each entity's [`Animator`] registers the clips it needs
//! from here; the clips themselves are reference counted and never copied.
//!
//! # Clip file format
//!
//! A JSON array of [`AnimationClip`] objects:
//!
//! ```json
//! [
//!   { "name": "walk", "fps": 12.0, "frames": [
//!       { "tex_key": "hero", "x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0 }
//!   ] },
//!   { "name": "hit", "end_behavior": "FireEndEvent", "block_other_animations": true }
//! ]
//! ```

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::animation::AnimationClip;
use crate::components::animator::Animator;
use crate::error::AnimError;

/// Central library of reusable clips keyed by name.
#[derive(Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, Arc<AnimationClip>>,
    /// Names in insertion order.
    order: Vec<String>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a clip list. Later clips reusing an earlier name are dropped.
    pub fn from_json_str(json: &str) -> Result<Self, AnimError> {
        let clips: Vec<AnimationClip> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for clip in clips {
            store.insert(clip);
        }
        Ok(store)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AnimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        info!("Loaded {} animations from {:?}", store.len(), path);
        Ok(store)
    }

    /// Add a clip. Returns `false` if the name is already taken.
    pub fn insert(&mut self, clip: AnimationClip) -> bool {
        if self.animations.contains_key(&clip.name) {
            warn!("Duplicate animation '{}' in store, keeping the first", clip.name);
            return false;
        }
        self.order.push(clip.name.clone());
        self.animations.insert(clip.name.clone(), Arc::new(clip));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Arc<AnimationClip>> {
        self.animations.get(name)
    }

    /// Clip names in the order they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Look up `names` in order. Unknown names yield `None` entries.
    pub fn clip_list(&self, names: &[&str]) -> Vec<Option<Arc<AnimationClip>>> {
        names.iter().map(|name| self.get(name).cloned()).collect()
    }

    /// Build an animator holding the named clips.
    ///
    /// An unknown name stops registration at that point, like a missing entry
    /// in [`Animator::with_clips`].
    pub fn animator_for(&self, names: &[&str]) -> Animator {
        Animator::with_clips(self.clip_list(names))
    }

    /// Build an animator holding every clip in the store.
    pub fn animator_with_all(&self) -> Animator {
        Animator::with_clips(
            self.order
                .iter()
                .map(|name| self.animations.get(name).cloned()),
        )
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIPS: &str = r#"[
        { "name": "walk", "fps": 8.0, "frames": [
            { "tex_key": "hero", "x": 0.0, "y": 0.0, "width": 16.0, "height": 16.0 },
            { "tex_key": "hero", "x": 16.0, "y": 0.0, "width": 16.0, "height": 16.0 }
        ] },
        { "name": "hit", "end_behavior": "FireEndEvent", "block_other_animations": true },
        { "name": "walk", "fps": 99.0 }
    ]"#;

    #[test]
    fn test_from_json_keeps_first_duplicate() {
        let store = AnimationStore::from_json_str(CLIPS).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("walk").unwrap().fps, 8.0);
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["walk", "hit"]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            AnimationStore::from_json_str("{ not json"),
            Err(AnimError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AnimationStore::load_from_file("./does/not/exist.json"),
            Err(AnimError::Io(_))
        ));
    }

    #[test]
    fn test_clip_list_shares_instances() {
        let store = AnimationStore::from_json_str(CLIPS).unwrap();
        let list = store.clip_list(&["hit", "missing"]);
        assert!(Arc::ptr_eq(list[0].as_ref().unwrap(), store.get("hit").unwrap()));
        assert!(list[1].is_none());
    }

    #[test]
    fn test_animator_for_stops_at_unknown_name() {
        let store = AnimationStore::from_json_str(CLIPS).unwrap();
        let animator = store.animator_for(&["walk", "missing", "hit"]);
        assert!(animator.registry().contains("walk"));
        assert!(!animator.registry().contains("hit"));
    }

    #[test]
    fn test_animator_with_all() {
        let store = AnimationStore::from_json_str(CLIPS).unwrap();
        let animator = store.animator_with_all();
        assert_eq!(animator.registry().len(), 2);
        assert_eq!(animator.registry().resolve("walk").unwrap().id, 1);
    }
}
