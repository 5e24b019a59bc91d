pub mod background;
pub mod constants;
pub mod enemy;
pub mod explosion;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod shield;
pub mod world;

pub use enemy::{Enemy, EnemyKind};
pub use world::World;
