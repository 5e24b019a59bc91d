use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::audio::events::{AudioEvent, AudioEventQueue};
use crate::game::background::Background;
use crate::game::constants::*;
use crate::game::enemy::{Enemy, EnemyKind};
use crate::game::explosion::{Explosion, ExplosionKind};
use crate::game::particle::Particle;
use crate::game::player::Player;
use crate::game::rect::overlaps;
use crate::game::shield::Shield;
use crate::hud::Hud;
use crate::input::InputState;
use crate::render::target::DrawTarget;

/// The whole game state and the per-frame logic that advances it. One
/// instance is owned by the loop driver; everything else borrows it for
/// the duration of a single update or draw call.
pub struct World {
    pub width: f32,
    pub height: f32,
    pub player: Player,
    pub background: Background,
    pub shield: Shield,
    pub hud: Hud,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    pub ammo: f32,
    pub ammo_timer: f32,
    pub ammo_interval: f32,
    pub max_ammo: f32,
    pub enemy_timer: f32,
    pub enemy_interval: f32,
    pub game_over: bool,
    pub score: i32,
    pub winning_score: i32,
    pub game_time: f32,
    pub time_limit: f32,
    pub speed: f32,
    pub audio: AudioEventQueue,
    pub rng: StdRng,
}

impl World {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic world for tests: every random draw comes from the
    /// seeded generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            player: Player::new(),
            background: Background::new(),
            shield: Shield::new(),
            hud: Hud::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            ammo: STARTING_AMMO,
            ammo_timer: 0.0,
            ammo_interval: AMMO_INTERVAL_MS,
            max_ammo: MAX_AMMO,
            enemy_timer: 0.0,
            enemy_interval: ENEMY_INTERVAL_MS,
            game_over: false,
            score: 0,
            winning_score: WINNING_SCORE,
            game_time: 0.0,
            time_limit: TIME_LIMIT_MS,
            speed: WORLD_SCROLL_SPEED,
            audio: AudioEventQueue::new(),
            rng,
        }
    }

    /// Fire input, one call per press edge.
    pub fn fire(&mut self) {
        self.player
            .shoot_from_head(&mut self.ammo, &mut self.audio, &mut self.rng);
    }

    /// Past the time limit the score only decides the end-screen message.
    pub fn is_winner(&self) -> bool {
        self.score > self.winning_score
    }

    /// Advance everything by one frame. The step order is a contract:
    /// timers fire on the first update where their accumulated value
    /// already exceeds the interval, collisions are resolved against the
    /// positions computed this frame, and every collection is swept before
    /// the next frame can observe it.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if !self.game_over {
            self.game_time += dt;
        }
        if self.game_time > self.time_limit {
            self.game_over = true;
        }

        self.background.update(self.speed);
        self.background.foreground.update(self.speed);

        self.player.update(
            dt,
            input.move_up,
            input.move_down,
            &mut self.ammo,
            &mut self.audio,
        );

        if self.ammo_timer > self.ammo_interval {
            if self.ammo < self.max_ammo {
                self.ammo += 1.0;
            }
            self.ammo_timer = 0.0;
        } else {
            self.ammo_timer += dt;
        }

        self.shield.update(dt);

        let speed = self.speed;
        for particle in &mut self.particles {
            particle.update(speed);
        }
        self.particles.retain(|p| !p.marked_for_deletion);

        for explosion in &mut self.explosions {
            explosion.update(dt, speed);
        }
        self.explosions.retain(|e| !e.marked_for_deletion);

        // Drones hatched by a whale kill join the wave after this pass and
        // first act next frame.
        let mut hatched: Vec<Enemy> = Vec::new();

        for i in 0..self.enemies.len() {
            self.enemies[i].update(speed);

            let enemy_rect = self.enemies[i].rect();
            let kind = self.enemies[i].kind;
            let score_value = self.enemies[i].score;
            let (cx, cy) = self.enemies[i].center();

            if overlaps(self.player.rect(), enemy_rect) {
                self.enemies[i].marked_for_deletion = true;
                self.add_explosion(cx, cy);
                self.audio.push(AudioEvent::Hit);
                self.shield.reset(&mut self.audio);
                for _ in 0..score_value {
                    self.particles.push(Particle::new(cx, cy, &mut self.rng));
                }
                if kind.grants_powerup_on_contact() {
                    self.player.enter_powerup(&mut self.ammo, &mut self.audio);
                } else if !self.game_over {
                    self.score -= 1;
                }
            }

            // Marked enemies still soak projectile hits this frame; the
            // sweep below is what finally removes them.
            for j in 0..self.player.projectiles.len() {
                if overlaps(self.player.projectiles[j].rect(), enemy_rect) {
                    self.enemies[i].lives -= 1;
                    self.player.projectiles[j].marked_for_deletion = true;
                    self.particles.push(Particle::new(cx, cy, &mut self.rng));

                    if self.enemies[i].lives <= 0 {
                        self.enemies[i].marked_for_deletion = true;
                        self.add_explosion(cx, cy);
                        self.audio.push(AudioEvent::Explosion);
                        for _ in 0..score_value {
                            self.particles.push(Particle::new(cx, cy, &mut self.rng));
                        }
                        if kind.grants_powerup_on_kill() {
                            self.player.enter_powerup(&mut self.ammo, &mut self.audio);
                        }
                        if kind.spawns_drones() {
                            let (ex, ey, ew) = (
                                self.enemies[i].x,
                                self.enemies[i].y,
                                self.enemies[i].width,
                            );
                            for _ in 0..DRONES_PER_BROOD {
                                let dx = ex + self.rng.gen::<f32>() * ew;
                                let dy = ey + self.rng.gen::<f32>() * 0.5;
                                hatched.push(Enemy::drone(dx, dy, &mut self.rng));
                            }
                        }
                        if !self.game_over {
                            self.score += score_value;
                        }
                    }
                }
            }
        }

        self.enemies.append(&mut hatched);
        self.enemies.retain(|e| !e.marked_for_deletion);

        if self.enemy_timer > self.enemy_interval && !self.game_over {
            self.add_enemy();
            self.enemy_timer = 0.0;
        } else {
            self.enemy_timer += dt;
        }
    }

    /// Render the current state without mutating it. The order is a fixed
    /// depth contract: background layers, player (projectiles first),
    /// shield, enemies, particles, explosions, foreground layer, HUD.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        self.background.draw(target);
        self.player.draw(target);
        self.shield.draw(target, self.player.rect());
        for enemy in &self.enemies {
            enemy.draw(target);
        }
        for particle in &self.particles {
            particle.draw(target);
        }
        for explosion in &self.explosions {
            explosion.draw(target);
        }
        self.background.foreground.draw(target);
        self.hud.draw(self, target);
    }

    /// Cumulative spawn table: the thresholds are gameplay tuning, not an
    /// even split.
    fn add_enemy(&mut self) {
        let roll = self.rng.gen::<f32>();
        let kind = if roll < 0.3 {
            EnemyKind::AnglerFish
        } else if roll < 0.6 {
            EnemyKind::NightAngler
        } else if roll < 0.7 {
            EnemyKind::HiveWhale
        } else if roll < 0.8 {
            EnemyKind::BulbWhale
        } else if roll < 0.9 {
            EnemyKind::MoonFish
        } else {
            EnemyKind::LuckyFish
        };
        let enemy = Enemy::spawn(kind, &mut self.rng);
        self.enemies.push(enemy);
    }

    fn add_explosion(&mut self, center_x: f32, center_y: f32) {
        let kind = if self.rng.gen::<f32>() < 0.5 {
            ExplosionKind::Smoke
        } else {
            ExplosionKind::Fire
        };
        self.explosions
            .push(Explosion::new(kind, center_x, center_y));
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
