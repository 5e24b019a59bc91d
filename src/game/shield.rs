use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

use crate::audio::events::{AudioEvent, AudioEventQueue};

/// Cosmetic overlay the size of the player, replayed from frame 0 every
/// time the player takes a hit. Once the sheet has played through it just
/// stays on its last frame until the next reset.
pub struct Shield {
    pub frame_x: u32,
    pub timer: f32,
}

impl Shield {
    pub fn new() -> Self {
        Self {
            // Start past the end so the effect is invisible until first hit.
            frame_x: SHIELD_MAX_FRAME + 1,
            timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.frame_x <= SHIELD_MAX_FRAME {
            let interval = 1000.0 / SHIELD_FPS;
            if self.timer > interval {
                self.frame_x += 1;
                self.timer = 0.0;
            } else {
                self.timer += dt;
            }
        }
    }

    pub fn reset(&mut self, audio: &mut AudioEventQueue) {
        self.frame_x = 0;
        audio.push(AudioEvent::Shield);
    }

    /// Drawn over the player, so it takes the player's rect.
    pub fn draw(&self, target: &mut dyn DrawTarget, player_rect: Rect) {
        if self.frame_x > SHIELD_MAX_FRAME {
            return;
        }
        target.blit(
            SpriteId::Shield,
            Rect::new(
                self.frame_x as f32 * player_rect.w,
                0.0,
                player_rect.w,
                player_rect.h,
            ),
            player_rect,
        );
    }
}

impl Default for Shield {
    fn default() -> Self {
        Self::new()
    }
}
