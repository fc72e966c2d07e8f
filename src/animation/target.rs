//! Render-target sink fed by the animator.

use super::clip::SpriteFrame;

/// Receives the frame to display and mirror toggles from an animator.
///
/// The target owns its flip state. The animator never sets flips directly; it
/// toggles an axis only when the playing clip's mirroring differs from what it
/// applied on the previous push.
pub trait RenderTarget {
    fn set_frame(&mut self, frame: &SpriteFrame);
    fn toggle_flip_h(&mut self);
    fn toggle_flip_v(&mut self);
}
