use rand::Rng;

use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

/// A player shot. Flies right at a slightly randomized speed and despawns
/// once past 90% of the play area.
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub frame_x: u32,
    pub speed: f32,
    pub timer: f32,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            frame_x: 0,
            speed: rng.gen::<f32>() * 0.2 + 2.8,
            timer: 0.0,
            marked_for_deletion: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn update(&mut self, dt: f32) {
        self.x += self.speed;

        let interval = 1000.0 / PROJECTILE_FPS;
        if self.timer > interval {
            if self.frame_x < PROJECTILE_MAX_FRAME {
                self.frame_x += 1;
            } else {
                self.frame_x = 0;
            }
            self.timer = 0.0;
        } else {
            self.timer += dt;
        }

        if self.x > WORLD_WIDTH * PROJECTILE_RANGE {
            self.marked_for_deletion = true;
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.blit(
            SpriteId::Fireball,
            Rect::new(self.frame_x as f32 * self.width, 0.0, self.width, self.height),
            self.rect(),
        );
    }
}
