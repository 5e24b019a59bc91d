pub mod canvas;
pub mod renderer;
pub mod target;
pub mod text_renderer;

pub use canvas::Canvas;
pub use renderer::{SpriteRenderer, WgpuRenderer};
pub use target::{DrawTarget, SpriteId, TextAlign};
