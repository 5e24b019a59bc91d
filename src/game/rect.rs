/// Axis-aligned rectangle, the unit of both sprite blits and collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// The one collision test in the game, reused for player-vs-enemy and
/// projectile-vs-enemy checks. The vertical condition keeps the historical
/// `a.h + a.y > b.y` operand order; hitboxes were tuned against it, so it
/// stays as written.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.h + a.y > b.y
}
