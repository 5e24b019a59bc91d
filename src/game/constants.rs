//! Gameplay tuning table. Distances are world pixels, times milliseconds,
//! speeds pixels per update tick.

pub const WORLD_WIDTH: f32 = 1000.0;
pub const WORLD_HEIGHT: f32 = 500.0;

/// Base horizontal scroll applied to everything that drifts with the world.
pub const WORLD_SCROLL_SPEED: f32 = 1.0;

pub const TIME_LIMIT_MS: f32 = 60_000.0;
pub const WINNING_SCORE: i32 = 100;

pub const STARTING_AMMO: f32 = 20.0;
pub const MAX_AMMO: f32 = 50.0;
pub const AMMO_INTERVAL_MS: f32 = 350.0;

pub const ENEMY_INTERVAL_MS: f32 = 2000.0;

pub const PLAYER_WIDTH: f32 = 120.0;
pub const PLAYER_HEIGHT: f32 = 190.0;
pub const PLAYER_START_X: f32 = 20.0;
pub const PLAYER_START_Y: f32 = 150.0;
pub const PLAYER_MAX_FRAME: u32 = 37;

pub const POWER_UP_LIMIT_MS: f32 = 10_000.0;
/// Extra fractional ammo regenerated every update while powered up.
pub const POWER_UP_AMMO_REGEN: f32 = 0.1;

/// Muzzle offsets relative to the player's top-left corner.
pub const HEAD_OFFSET: (f32, f32) = (80.0, 30.0);
pub const TAIL_OFFSET: (f32, f32) = (80.0, 175.0);

pub const PROJECTILE_WIDTH: f32 = 36.25;
pub const PROJECTILE_HEIGHT: f32 = 20.0;
pub const PROJECTILE_MAX_FRAME: u32 = 3;
pub const PROJECTILE_FPS: f32 = 20.0;
/// Projectiles despawn past this fraction of the world width.
pub const PROJECTILE_RANGE: f32 = 0.9;

pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
pub const PARTICLE_GRAVITY: f32 = 0.5;
pub const PARTICLE_BOUNCE_DAMPING: f32 = -0.7;
pub const PARTICLE_MAX_BOUNCES: u32 = 2;

pub const EXPLOSION_SPRITE_SIZE: f32 = 200.0;
pub const EXPLOSION_MAX_FRAME: u32 = 8;
pub const EXPLOSION_FPS: f32 = 18.0;

pub const SHIELD_MAX_FRAME: u32 = 24;
pub const SHIELD_FPS: f32 = 60.0;

pub const LAYER_WIDTH: f32 = 1768.0;
pub const LAYER_HEIGHT: f32 = 500.0;

pub const DRONES_PER_BROOD: usize = 5;
