use bevy_ecs::prelude::Component;

use crate::animation::{RenderTarget, SpriteFrame};

/// Sprite is identified by a texture key, its size in world units and an offset if the texture is a spritesheet.
/// The offset selects the frame inside the spritesheet. Flip flags persist across frames and are
/// toggled by an [`Animator`](crate::components::animator::Animator) when the playing clip's mirroring changes.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            ..Self::default()
        }
    }
}

impl RenderTarget for Sprite {
    fn set_frame(&mut self, frame: &SpriteFrame) {
        if self.tex_key != frame.tex_key {
            self.tex_key.clone_from(&frame.tex_key);
        }
        self.offset_x = frame.x;
        self.offset_y = frame.y;
        self.width = frame.width;
        self.height = frame.height;
    }

    fn toggle_flip_h(&mut self) {
        self.flip_h = !self.flip_h;
    }

    fn toggle_flip_v(&mut self) {
        self.flip_v = !self.flip_v;
    }
}
