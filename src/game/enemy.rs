use rand::Rng;

use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::render::target::{DrawTarget, SpriteId};

/// Enemy variants are pure data over one update/draw contract: same motion
/// and animation, different size, sheet, durability, score and speed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    AnglerFish,
    NightAngler,
    LuckyFish,
    HiveWhale,
    BulbWhale,
    MoonFish,
    Drone,
}

impl EnemyKind {
    pub fn sprite(self) -> SpriteId {
        match self {
            EnemyKind::AnglerFish => SpriteId::AnglerFish,
            EnemyKind::NightAngler => SpriteId::NightAngler,
            EnemyKind::LuckyFish => SpriteId::LuckyFish,
            EnemyKind::HiveWhale => SpriteId::HiveWhale,
            EnemyKind::BulbWhale => SpriteId::BulbWhale,
            EnemyKind::MoonFish => SpriteId::MoonFish,
            EnemyKind::Drone => SpriteId::Drone,
        }
    }

    /// Touching a lucky fish powers the player up instead of costing score.
    pub fn grants_powerup_on_contact(self) -> bool {
        matches!(self, EnemyKind::LuckyFish)
    }

    /// Killing a moon fish powers the player up.
    pub fn grants_powerup_on_kill(self) -> bool {
        matches!(self, EnemyKind::MoonFish)
    }

    /// Both whales carry the hive brood and release drones when killed.
    pub fn spawns_drones(self) -> bool {
        matches!(self, EnemyKind::HiveWhale | EnemyKind::BulbWhale)
    }
}

pub struct Enemy {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub frame_x: u32,
    pub frame_y: u32,
    pub max_frame: u32,
    pub lives: i32,
    pub score: i32,
    pub speed_x: f32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// Spawn a variant at the right edge, vertical position uniform within
    /// the play height minus its own height.
    pub fn spawn(kind: EnemyKind, rng: &mut impl Rng) -> Self {
        let (width, height, lives, score, speed_x, frame_y) = match kind {
            EnemyKind::AnglerFish => (
                228.0,
                169.0,
                2,
                2,
                rng.gen::<f32>() * -1.5 - 0.5,
                rng.gen_range(0..3),
            ),
            EnemyKind::NightAngler => (
                213.0,
                165.0,
                6,
                6,
                rng.gen::<f32>() * -1.5 - 0.5,
                rng.gen_range(0..2),
            ),
            EnemyKind::LuckyFish => (
                99.0,
                95.0,
                5,
                15,
                rng.gen::<f32>() * -1.5 - 0.5,
                rng.gen_range(0..2),
            ),
            EnemyKind::HiveWhale => (400.0, 227.0, 20, 25, rng.gen::<f32>() * -1.2 - 0.2, 0),
            EnemyKind::BulbWhale => (
                270.0,
                219.0,
                20,
                20,
                rng.gen::<f32>() * -1.2 - 0.2,
                rng.gen_range(0..2),
            ),
            EnemyKind::MoonFish => (227.0, 240.0, 10, 10, rng.gen::<f32>() * -1.2 - 2.0, 0),
            EnemyKind::Drone => (115.0, 95.0, 3, 3, rng.gen::<f32>() * -4.2 - 0.5, rng.gen_range(0..2)),
        };
        let y = rng.gen::<f32>() * (WORLD_HEIGHT * 0.95 - height);
        Self {
            kind,
            x: WORLD_WIDTH,
            y,
            width,
            height,
            frame_x: 0,
            frame_y,
            max_frame: 37,
            lives,
            score,
            speed_x,
            marked_for_deletion: false,
        }
    }

    /// Drones burst out of a dead whale at the given position instead of
    /// entering from the right edge.
    pub fn drone(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let mut enemy = Self::spawn(EnemyKind::Drone, rng);
        enemy.x = x;
        enemy.y = y;
        enemy
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn update(&mut self, world_speed: f32) {
        self.x += self.speed_x - world_speed;
        if self.x + self.width < 0.0 {
            self.marked_for_deletion = true;
        }
        if self.frame_x < self.max_frame {
            self.frame_x += 1;
        } else {
            self.frame_x = 0;
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        target.blit(
            self.kind.sprite(),
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
