use crate::game::rect::Rect;
use crate::game::world::World;
use crate::render::target::{DrawTarget, TextAlign};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Pale yellow ammo bars while the power-up is live.
const POWERUP_TINT: [f32; 4] = [1.0, 1.0, 0.741, 1.0];

/// Score, timer, ammo and end-screen overlay. Pure reads of world state;
/// drawn last so it sits over every layer.
pub struct Hud {
    pub font_size: f32,
}

impl Hud {
    pub fn new() -> Self {
        Self { font_size: 25.0 }
    }

    pub fn draw(&self, world: &World, target: &mut dyn DrawTarget) {
        // Internal score may dip below zero from contact penalties; the
        // display never does.
        let shown_score = world.score.max(0);
        target.text(
            &format!("Score: {}", shown_score),
            20.0,
            40.0,
            self.font_size,
            WHITE,
            TextAlign::Left,
        );

        let seconds = (world.game_time * 0.001).round() as i64;
        target.text(
            &format!("Timer: {}", seconds),
            20.0,
            100.0,
            self.font_size,
            WHITE,
            TextAlign::Left,
        );

        let bar_color = if world.player.power_up {
            POWERUP_TINT
        } else {
            WHITE
        };
        // A partial round still shows a bar, so counting runs to the ceiling.
        for i in 0..world.ammo.ceil() as i32 {
            target.fill_rect(Rect::new(20.0 + 5.0 * i as f32, 50.0, 3.0, 20.0), bar_color);
        }

        if world.game_over {
            let (headline, detail) = if world.is_winner() {
                ("Winner!", "Wonderful! You are a champion!")
            } else {
                ("Oops!", "Get my repair kit and try again!")
            };
            target.text(
                headline,
                world.width * 0.5,
                world.height * 0.5 - 40.0,
                170.0,
                WHITE,
                TextAlign::Center,
            );
            target.text(
                detail,
                world.width * 0.5,
                world.height * 0.5 + 40.0,
                50.0,
                WHITE,
                TextAlign::Center,
            );
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
