use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

/// One-shot destruction effect, spawned centered on a dying enemy. Plays
/// its sheet through once at a fixed fps and drifts with the world scroll.
pub struct Explosion {
    pub kind: ExplosionKind,
    pub x: f32,
    pub y: f32,
    pub frame_x: u32,
    pub timer: f32,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// `center_x`/`center_y` is where the enemy died.
    pub fn new(kind: ExplosionKind, center_x: f32, center_y: f32) -> Self {
        Self {
            kind,
            x: center_x - EXPLOSION_SPRITE_SIZE * 0.5,
            y: center_y - EXPLOSION_SPRITE_SIZE * 0.5,
            frame_x: 0,
            timer: 0.0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, dt: f32, world_speed: f32) {
        self.x -= world_speed;

        let interval = 1000.0 / EXPLOSION_FPS;
        if self.timer > interval {
            self.frame_x += 1;
            self.timer = 0.0;
        } else {
            self.timer += dt;
        }

        if self.frame_x > EXPLOSION_MAX_FRAME {
            self.marked_for_deletion = true;
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let sprite = match self.kind {
            ExplosionKind::Smoke => SpriteId::Smoke,
            ExplosionKind::Fire => SpriteId::Fire,
        };
        target.blit(
            sprite,
            Rect::new(
                self.frame_x as f32 * EXPLOSION_SPRITE_SIZE,
                0.0,
                EXPLOSION_SPRITE_SIZE,
                EXPLOSION_SPRITE_SIZE,
            ),
            Rect::new(self.x, self.y, EXPLOSION_SPRITE_SIZE, EXPLOSION_SPRITE_SIZE),
        );
    }
}
