pub mod audio;
pub mod game;
pub mod input;
pub mod render;

pub mod app;
pub mod game_loop;
pub mod hud;
pub mod resource_path;
pub mod shaders;

pub use game::World;
pub use input::InputState;
