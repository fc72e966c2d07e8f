//! Immutable sprite-sheet clip definitions.
//!
//! A clip is authored once (in code or in a JSON clip file) and then shared as
//! an `Arc<AnimationClip>` by every animator that plays it. The animator only
//! reads these fields; it never mutates a clip.

use serde::{Deserialize, Serialize};

const DEFAULT_FPS: f32 = 16.0;

fn default_fps() -> f32 {
    DEFAULT_FPS
}

/// What happens when a clip plays past its last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndBehavior {
    /// Wrap around and keep playing.
    #[default]
    Loop,
    /// Return to the clip that was playing before this one.
    BackToPrevious,
    /// Emit an [`AnimationEnded`](super::AnimationEnded) notification, then loop.
    FireEndEvent,
}

/// Mirroring applied to the render target while a clip plays.
///
/// The two axes are independent. Targets keep their own flip state across
/// ticks, so the animator only ever toggles the axes that differ from what it
/// applied last (see [`MirrorFlags::delta`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorFlags {
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
}

impl MirrorFlags {
    pub const NONE: MirrorFlags = MirrorFlags {
        flip_h: false,
        flip_v: false,
    };

    pub fn new(flip_h: bool, flip_v: bool) -> Self {
        Self { flip_h, flip_v }
    }

    /// Axes that must be toggled to go from `applied` to `self`.
    pub fn delta(self, applied: MirrorFlags) -> MirrorFlags {
        MirrorFlags {
            flip_h: self.flip_h ^ applied.flip_h,
            flip_v: self.flip_v ^ applied.flip_v,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.flip_h && !self.flip_v
    }
}

/// One frame of a clip: a rectangle inside a sprite-sheet texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Texture key of the sprite sheet.
    pub tex_key: String,
    /// Left edge of the frame inside the texture, in pixels.
    pub x: f32,
    /// Top edge of the frame inside the texture, in pixels.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteFrame {
    pub fn new(tex_key: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            x,
            y,
            width,
            height,
        }
    }
}

/// Immutable description of one animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Lookup key. Must be non-blank to be registered.
    pub name: String,
    /// Frames in playback order.
    #[serde(default)]
    pub frames: Vec<SpriteFrame>,
    /// Playback speed. Must be finite and greater than zero.
    #[serde(default = "default_fps")]
    pub fps: f32,
    #[serde(default)]
    pub end_behavior: EndBehavior,
    /// While playing, switch requests are deferred until the clip ends.
    #[serde(default)]
    pub block_other_animations: bool,
    #[serde(default)]
    pub mirror: MirrorFlags,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
            fps: DEFAULT_FPS,
            end_behavior: EndBehavior::Loop,
            block_other_animations: false,
            mirror: MirrorFlags::NONE,
        }
    }

    pub fn with_frames(mut self, frames: Vec<SpriteFrame>) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_end_behavior(mut self, end_behavior: EndBehavior) -> Self {
        self.end_behavior = end_behavior;
        self
    }

    pub fn with_block_other_animations(mut self, block: bool) -> Self {
        self.block_other_animations = block;
        self
    }

    pub fn with_mirror(mut self, mirror: MirrorFlags) -> Self {
        self.mirror = mirror;
        self
    }

    /// Build a clip whose frames are laid out left to right on one texture row.
    pub fn from_strip(
        name: impl Into<String>,
        tex_key: &str,
        frame_count: usize,
        frame_width: f32,
        frame_height: f32,
    ) -> Self {
        let frames = (0..frame_count)
            .map(|i| SpriteFrame::new(tex_key, i as f32 * frame_width, 0.0, frame_width, frame_height))
            .collect();
        Self::new(name).with_frames(frames)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn has_valid_fps(&self) -> bool {
        self.fps.is_finite() && self.fps > 0.0
    }

    /// Whether the animator can advance this clip at all.
    pub fn is_playable(&self) -> bool {
        self.has_valid_fps() && !self.frames.is_empty()
    }

    /// Time each frame stays on screen, `None` for a malformed frame rate.
    pub fn seconds_per_frame(&self) -> Option<f32> {
        self.has_valid_fps().then(|| 1.0 / self.fps)
    }

    /// Length of one full cycle in seconds.
    pub fn duration(&self) -> Option<f32> {
        self.seconds_per_frame()
            .map(|spf| spf * self.frames.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_delta_only_differing_axes() {
        let current = MirrorFlags::new(true, false);
        let applied = MirrorFlags::new(true, true);
        assert_eq!(current.delta(applied), MirrorFlags::new(false, true));
        assert!(current.delta(current).is_empty());
    }

    #[test]
    fn test_from_strip_lays_frames_horizontally() {
        let clip = AnimationClip::from_strip("walk", "hero", 3, 16.0, 24.0);
        assert_eq!(clip.frame_count(), 3);
        assert_eq!(clip.frames[2].x, 32.0);
        assert_eq!(clip.frames[2].y, 0.0);
        assert_eq!(clip.frames[1].height, 24.0);
    }

    #[test]
    fn test_playable_requires_frames_and_positive_fps() {
        let clip = AnimationClip::from_strip("a", "t", 2, 8.0, 8.0);
        assert!(clip.is_playable());
        assert!(!clip.clone().with_fps(0.0).is_playable());
        assert!(!clip.clone().with_fps(-4.0).is_playable());
        assert!(!clip.clone().with_fps(f32::NAN).is_playable());
        assert!(!AnimationClip::new("empty").is_playable());
    }

    #[test]
    fn test_duration() {
        let clip = AnimationClip::from_strip("a", "t", 4, 8.0, 8.0).with_fps(8.0);
        assert_eq!(clip.seconds_per_frame(), Some(0.125));
        assert_eq!(clip.duration(), Some(0.5));
        assert_eq!(clip.with_fps(0.0).duration(), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let clip: AnimationClip = serde_json::from_str(r#"{ "name": "idle" }"#).unwrap();
        assert_eq!(clip.fps, 16.0);
        assert_eq!(clip.end_behavior, EndBehavior::Loop);
        assert!(!clip.block_other_animations);
        assert!(clip.mirror.is_empty());
        assert!(clip.frames.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "name": "hit",
            "fps": 30.0,
            "end_behavior": "FireEndEvent",
            "block_other_animations": true,
            "mirror": { "flip_h": true },
            "frames": [{ "tex_key": "hero", "x": 0.0, "y": 16.0, "width": 16.0, "height": 16.0 }]
        }"#;
        let clip: AnimationClip = serde_json::from_str(json).unwrap();
        assert_eq!(clip.end_behavior, EndBehavior::FireEndEvent);
        assert!(clip.block_other_animations);
        assert_eq!(clip.mirror, MirrorFlags::new(true, false));
        assert_eq!(clip.frames[0].y, 16.0);
    }
}
