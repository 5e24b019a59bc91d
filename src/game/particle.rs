use glam::Vec2;
use rand::Rng;

use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

/// Debris thrown off a damaged enemy: a random cell of the gears sheet at a
/// random size, tossed up, pulled down by gravity, spinning, allowed at
/// most two damped bounces off a randomized boundary near the floor.
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub size: f32,
    pub velocity: Vec2,
    pub angle: f32,
    pub spin: f32,
    pub bounced: u32,
    pub bottom_bounce_boundary: f32,
    pub marked_for_deletion: bool,
}

impl Particle {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        // One decimal of size modifier, matching the authored sheet scales.
        let size_modifier = ((rng.gen::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            x,
            y,
            frame_x: rng.gen_range(0..3),
            frame_y: rng.gen_range(0..3),
            size: PARTICLE_SPRITE_SIZE * size_modifier,
            velocity: Vec2::new(rng.gen::<f32>() * 6.0 - 3.0, rng.gen::<f32>() * -15.0),
            angle: 0.0,
            spin: rng.gen::<f32>() * 0.2 - 0.1,
            bounced: 0,
            bottom_bounce_boundary: rng.gen::<f32>() * 80.0 + 60.0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, world_speed: f32) {
        self.angle += self.spin;
        self.velocity.y += PARTICLE_GRAVITY;
        self.x -= self.velocity.x + world_speed;
        self.y += self.velocity.y;

        if self.y > WORLD_HEIGHT + self.size || self.x < -self.size {
            self.marked_for_deletion = true;
        }
        if self.y > WORLD_HEIGHT - self.bottom_bounce_boundary
            && self.bounced < PARTICLE_MAX_BOUNCES
        {
            self.bounced += 1;
            self.velocity.y *= PARTICLE_BOUNCE_DAMPING;
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.blit_rotated(
            SpriteId::Gears,
            Rect::new(
                self.frame_x as f32 * PARTICLE_SPRITE_SIZE,
                self.frame_y as f32 * PARTICLE_SPRITE_SIZE,
                PARTICLE_SPRITE_SIZE,
                PARTICLE_SPRITE_SIZE,
            ),
            Rect::new(
                self.x - self.size * 0.5,
                self.y - self.size * 0.5,
                self.size,
                self.size,
            ),
            self.angle,
        );
    }
}
