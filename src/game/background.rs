use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

/// One seamlessly wrapping parallax strip. Drawn twice, at `x` and
/// `x + width`, so a full-width scroll never shows a gap.
pub struct Layer {
    pub sprite: SpriteId,
    pub speed_modifier: f32,
    pub x: f32,
}

impl Layer {
    pub fn new(sprite: SpriteId, speed_modifier: f32) -> Self {
        Self {
            sprite,
            speed_modifier,
            x: 0.0,
        }
    }

    pub fn update(&mut self, world_speed: f32) {
        if self.x <= -LAYER_WIDTH {
            self.x = 0.0;
        }
        self.x -= world_speed * self.speed_modifier;
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let src = Rect::new(0.0, 0.0, LAYER_WIDTH, LAYER_HEIGHT);
        target.blit(self.sprite, src, Rect::new(self.x, 0.0, LAYER_WIDTH, LAYER_HEIGHT));
        target.blit(
            self.sprite,
            src,
            Rect::new(self.x + LAYER_WIDTH, 0.0, LAYER_WIDTH, LAYER_HEIGHT),
        );
    }
}

/// Three layers scroll and draw in the standard under-pass; the fourth
/// (fastest) is the foreground, updated and drawn separately after every
/// entity to finish the depth illusion.
pub struct Background {
    pub layers: [Layer; 3],
    pub foreground: Layer,
}

impl Background {
    pub fn new() -> Self {
        Self {
            layers: [
                Layer::new(SpriteId::Layer1, 0.2),
                Layer::new(SpriteId::Layer2, 0.4),
                Layer::new(SpriteId::Layer3, 1.0),
            ],
            foreground: Layer::new(SpriteId::Layer4, 1.5),
        }
    }

    pub fn update(&mut self, world_speed: f32) {
        for layer in &mut self.layers {
            layer.update(world_speed);
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for layer in &self.layers {
            layer.draw(target);
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}
