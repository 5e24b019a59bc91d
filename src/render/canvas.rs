use glam::Vec2;

use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId, TextAlign};

/// One recorded draw call, in world coordinates. Sprite corners are stored
/// already rotated so the backend only has to project them.
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        src: Rect,
        corners: [Vec2; 4],
    },
    Fill {
        dst: Rect,
        color: [f32; 4],
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: [f32; 4],
        align: TextAlign,
    },
}

/// In-order recording of a frame's draw calls. The wgpu backend replays it
/// to the screen; tests inspect it directly. Recording preserves the
/// submission order, which is the game's depth contract.
pub struct Canvas {
    pub commands: Vec<DrawCommand>,
}

fn rect_corners(dst: Rect) -> [Vec2; 4] {
    [
        Vec2::new(dst.x, dst.y),
        Vec2::new(dst.x + dst.w, dst.y),
        Vec2::new(dst.x + dst.w, dst.y + dst.h),
        Vec2::new(dst.x, dst.y + dst.h),
    ]
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for Canvas {
    fn blit(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            src,
            corners: rect_corners(dst),
        });
    }

    fn blit_rotated(&mut self, sprite: SpriteId, src: Rect, dst: Rect, angle: f32) {
        let center = Vec2::new(dst.x + dst.w * 0.5, dst.y + dst.h * 0.5);
        let rotation = Vec2::from_angle(angle);
        let corners = rect_corners(dst).map(|c| center + rotation.rotate(c - center));
        self.commands.push(DrawCommand::Sprite {
            sprite,
            src,
            corners,
        });
    }

    fn fill_rect(&mut self, dst: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::Fill { dst, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: [f32; 4], align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
            align,
        });
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
