use rand::Rng;

use crate::audio::events::{AudioEvent, AudioEventQueue};
use crate::game::constants::*;
use crate::game::projectile::Projectile;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

/// The player ship. Owns its projectiles in firing order; that order only
/// matters for rendering layering. Unusually for this codebase the sprite
/// frame advances once per update call instead of on a timer, which is how
/// the swim cycle was tuned.
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub speed_y: f32,
    pub projectiles: Vec<Projectile>,
    pub power_up: bool,
    pub power_up_timer: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            frame_x: 0,
            frame_y: 0,
            speed_y: 0.0,
            projectiles: Vec::new(),
            power_up: false,
            power_up_timer: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn update(
        &mut self,
        dt: f32,
        up_held: bool,
        down_held: bool,
        ammo: &mut f32,
        audio: &mut AudioEventQueue,
    ) {
        self.speed_y = if up_held {
            -1.0
        } else if down_held {
            1.0
        } else {
            0.0
        };
        self.y += self.speed_y;

        // The ship may hang half out of the play area but never more.
        if self.y > WORLD_HEIGHT - self.height * 0.5 {
            self.y = WORLD_HEIGHT - self.height * 0.5;
        } else if self.y < -self.height * 0.5 {
            self.y = -self.height * 0.5;
        }

        for projectile in &mut self.projectiles {
            projectile.update(dt);
        }
        self.projectiles.retain(|p| !p.marked_for_deletion);

        if self.frame_x < PLAYER_MAX_FRAME {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }

        if self.power_up {
            if self.power_up_timer > POWER_UP_LIMIT_MS {
                self.power_up_timer = 0.0;
                self.power_up = false;
                self.frame_y = 0;
                audio.push(AudioEvent::PowerDown);
            } else {
                self.power_up_timer += dt;
                self.frame_y = 1;
                // Regen never pushes past the cap.
                *ammo = (*ammo + POWER_UP_AMMO_REGEN).min(MAX_AMMO);
            }
        }
    }

    /// Fire from the head muzzle. The shot cue plays even with an empty
    /// magazine; while powered up a tail shot rides along for free.
    pub fn shoot_from_head(
        &mut self,
        ammo: &mut f32,
        audio: &mut AudioEventQueue,
        rng: &mut impl Rng,
    ) {
        if *ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.x + HEAD_OFFSET.0, self.y + HEAD_OFFSET.1, rng));
            // Fractional ammo from power-up regen must not go negative.
            *ammo = (*ammo - 1.0).max(0.0);
        }
        audio.push(AudioEvent::Shot);
        if self.power_up {
            self.shoot_from_tail(ammo, rng);
        }
    }

    fn shoot_from_tail(&mut self, ammo: &mut f32, rng: &mut impl Rng) {
        if *ammo > 0.0 {
            self.projectiles
                .push(Projectile::new(self.x + TAIL_OFFSET.0, self.y + TAIL_OFFSET.1, rng));
        }
    }

    pub fn enter_powerup(&mut self, ammo: &mut f32, audio: &mut AudioEventQueue) {
        self.power_up_timer = 0.0;
        self.power_up = true;
        if *ammo < MAX_AMMO {
            *ammo = MAX_AMMO;
        }
        audio.push(AudioEvent::PowerUp);
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for projectile in &self.projectiles {
            projectile.draw(target);
        }
        target.blit(
            SpriteId::Player,
            Rect::new(
                self.frame_x as f32 * self.width,
                self.frame_y as f32 * self.height,
                self.width,
                self.height,
            ),
            self.rect(),
        );
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
