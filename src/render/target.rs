use crate::game::rect::Rect;

/// Every sprite sheet the game blits from. The renderer maps each id to a
/// loaded texture; game code only ever names the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Fireball,
    Gears,
    Shield,
    Smoke,
    Fire,
    AnglerFish,
    NightAngler,
    LuckyFish,
    HiveWhale,
    BulbWhale,
    MoonFish,
    Drone,
    Layer1,
    Layer2,
    Layer3,
    Layer4,
}

impl SpriteId {
    pub const ALL: [SpriteId; 17] = [
        SpriteId::Player,
        SpriteId::Fireball,
        SpriteId::Gears,
        SpriteId::Shield,
        SpriteId::Smoke,
        SpriteId::Fire,
        SpriteId::AnglerFish,
        SpriteId::NightAngler,
        SpriteId::LuckyFish,
        SpriteId::HiveWhale,
        SpriteId::BulbWhale,
        SpriteId::MoonFish,
        SpriteId::Drone,
        SpriteId::Layer1,
        SpriteId::Layer2,
        SpriteId::Layer3,
        SpriteId::Layer4,
    ];

    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteId::Player => "assets/images/player.png",
            SpriteId::Fireball => "assets/images/fireball.png",
            SpriteId::Gears => "assets/images/gears.png",
            SpriteId::Shield => "assets/images/shield.png",
            SpriteId::Smoke => "assets/images/smoke.png",
            SpriteId::Fire => "assets/images/fire.png",
            SpriteId::AnglerFish => "assets/images/angler-fish.png",
            SpriteId::NightAngler => "assets/images/night-angler.png",
            SpriteId::LuckyFish => "assets/images/lucky-fish.png",
            SpriteId::HiveWhale => "assets/images/hive-whale.png",
            SpriteId::BulbWhale => "assets/images/bulb-whale.png",
            SpriteId::MoonFish => "assets/images/moon-fish.png",
            SpriteId::Drone => "assets/images/drone.png",
            SpriteId::Layer1 => "assets/images/layer1.png",
            SpriteId::Layer2 => "assets/images/layer2.png",
            SpriteId::Layer3 => "assets/images/layer3.png",
            SpriteId::Layer4 => "assets/images/layer4.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Narrow drawing capability the game core renders through. The wgpu
/// backend implements it for real frames; tests record the calls instead.
/// The core only issues draws, it never reads the surface back.
pub trait DrawTarget {
    /// Blit `src` (sheet pixels) to `dst` (world pixels).
    fn blit(&mut self, sprite: SpriteId, src: Rect, dst: Rect);

    /// Same as `blit`, rotated by `angle` radians around the center of `dst`.
    fn blit_rotated(&mut self, sprite: SpriteId, src: Rect, dst: Rect, angle: f32);

    fn fill_rect(&mut self, dst: Rect, color: [f32; 4]);

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: [f32; 4], align: TextAlign);
}
