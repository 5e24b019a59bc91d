use rand::rngs::StdRng;
use rand::SeedableRng;

use seastrike::audio::events::AudioEvent;
use seastrike::game::constants::*;
use seastrike::game::particle::Particle;
use seastrike::game::projectile::Projectile;
use seastrike::game::{Enemy, EnemyKind, World};
use seastrike::input::InputState;
use seastrike::render::canvas::{Canvas, DrawCommand};
use seastrike::render::SpriteId;

fn idle_input() -> InputState {
    InputState::new()
}

/// Places an enemy far from the player so only projectiles can reach it.
fn plant_enemy(world: &mut World, kind: EnemyKind, x: f32, y: f32) -> usize {
    let mut enemy = Enemy::spawn(kind, &mut world.rng);
    enemy.x = x;
    enemy.y = y;
    world.enemies.push(enemy);
    world.enemies.len() - 1
}

/// Spawns a projectile at the current center of the given enemy, so it
/// still overlaps after both have moved this frame.
fn aim_projectile_at(world: &mut World, enemy_index: usize) {
    let (cx, cy) = world.enemies[enemy_index].center();
    let projectile = Projectile::new(cx, cy, &mut world.rng);
    world.player.projectiles.push(projectile);
}

#[test]
fn marked_particles_are_gone_after_the_next_update() {
    let mut world = World::from_seed(7);
    let mut rng = StdRng::seed_from_u64(1);
    let mut particle = Particle::new(500.0, 250.0, &mut rng);
    particle.marked_for_deletion = true;
    world.particles.push(particle);

    world.update(16.0, &idle_input());

    assert!(world.particles.is_empty());
}

#[test]
fn ammo_replenishes_on_the_update_after_the_interval_elapses() {
    let mut world = World::from_seed(7);
    world.ammo = 10.0;

    // First update only accumulates; the timer check runs before the add.
    world.update(AMMO_INTERVAL_MS + 1.0, &idle_input());
    assert_eq!(world.ammo, 10.0);

    world.update(1.0, &idle_input());
    assert_eq!(world.ammo, 11.0);
}

#[test]
fn ammo_never_replenishes_past_the_cap() {
    let mut world = World::from_seed(7);
    world.ammo = world.max_ammo;

    for _ in 0..10 {
        world.update(AMMO_INTERVAL_MS + 1.0, &idle_input());
    }

    assert_eq!(world.ammo, world.max_ammo);
}

#[test]
fn firing_with_an_empty_magazine_spawns_nothing_but_still_plays_the_cue() {
    let mut world = World::from_seed(7);
    world.ammo = 0.0;

    world.fire();

    assert!(world.player.projectiles.is_empty());
    assert_eq!(world.ammo, 0.0);
    assert_eq!(world.audio.drain(), vec![AudioEvent::Shot]);
}

#[test]
fn fractional_ammo_spends_down_to_zero_not_below() {
    let mut world = World::from_seed(7);
    world.ammo = 0.5;

    world.fire();

    assert_eq!(world.player.projectiles.len(), 1);
    assert_eq!(world.ammo, 0.0);
}

#[test]
fn each_fire_spends_one_ammo() {
    let mut world = World::from_seed(7);
    assert_eq!(world.ammo, STARTING_AMMO);

    world.fire();
    world.fire();

    assert_eq!(world.player.projectiles.len(), 2);
    assert_eq!(world.ammo, STARTING_AMMO - 2.0);
}

#[test]
fn an_enemy_takes_exactly_lives_hits_to_kill() {
    let mut world = World::from_seed(7);
    let i = plant_enemy(&mut world, EnemyKind::AnglerFish, 600.0, 200.0);
    world.enemies[i].lives = 2;

    aim_projectile_at(&mut world, i);
    world.update(16.0, &idle_input());
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemies[0].lives, 1);
    assert_eq!(world.score, 0);

    aim_projectile_at(&mut world, 0);
    world.update(16.0, &idle_input());
    assert!(world.enemies.is_empty());
}

#[test]
fn a_kill_awards_exactly_the_score_value_and_an_explosion() {
    let mut world = World::from_seed(7);
    let i = plant_enemy(&mut world, EnemyKind::AnglerFish, 600.0, 200.0);
    world.enemies[i].lives = 1;
    let score_value = world.enemies[i].score;

    aim_projectile_at(&mut world, i);
    world.audio.drain();
    world.update(16.0, &idle_input());

    assert_eq!(world.score, score_value);
    assert_eq!(world.explosions.len(), 1);
    assert!(world.audio.drain().contains(&AudioEvent::Explosion));
}

#[test]
fn killing_a_hive_whale_releases_a_full_brood_of_drones() {
    let mut world = World::from_seed(7);
    let i = plant_enemy(&mut world, EnemyKind::HiveWhale, 600.0, 150.0);
    world.enemies[i].lives = 1;

    aim_projectile_at(&mut world, i);
    world.update(16.0, &idle_input());

    assert_eq!(world.enemies.len(), DRONES_PER_BROOD);
    assert!(world.enemies.iter().all(|e| e.kind == EnemyKind::Drone));
}

#[test]
fn killing_a_bulb_whale_also_releases_drones() {
    let mut world = World::from_seed(7);
    let i = plant_enemy(&mut world, EnemyKind::BulbWhale, 600.0, 150.0);
    world.enemies[i].lives = 1;

    aim_projectile_at(&mut world, i);
    world.update(16.0, &idle_input());

    assert_eq!(world.enemies.len(), DRONES_PER_BROOD);
}

#[test]
fn killing_a_moon_fish_powers_the_player_up() {
    let mut world = World::from_seed(7);
    let i = plant_enemy(&mut world, EnemyKind::MoonFish, 600.0, 150.0);
    world.enemies[i].lives = 1;

    aim_projectile_at(&mut world, i);
    world.audio.drain();
    world.update(16.0, &idle_input());

    assert!(world.player.power_up);
    assert_eq!(world.ammo, MAX_AMMO);
    assert!(world.audio.drain().contains(&AudioEvent::PowerUp));
}

#[test]
fn touching_a_lucky_fish_powers_up_instead_of_costing_score() {
    let mut world = World::from_seed(7);
    let (px, py) = (world.player.x, world.player.y);
    plant_enemy(&mut world, EnemyKind::LuckyFish, px, py);

    world.audio.drain();
    world.update(16.0, &idle_input());

    assert!(world.player.power_up);
    assert_eq!(world.score, 0);
    assert!(world.enemies.is_empty());
    let events = world.audio.drain();
    assert!(events.contains(&AudioEvent::Hit));
    assert!(events.contains(&AudioEvent::Shield));
    assert!(events.contains(&AudioEvent::PowerUp));
}

#[test]
fn colliding_with_a_regular_enemy_costs_one_point_and_restarts_the_shield() {
    let mut world = World::from_seed(7);
    let (px, py) = (world.player.x, world.player.y);
    plant_enemy(&mut world, EnemyKind::AnglerFish, px, py);

    world.update(16.0, &idle_input());

    assert_eq!(world.score, -1);
    assert!(world.enemies.is_empty());
    assert_eq!(world.shield.frame_x, 0);
    assert_eq!(world.explosions.len(), 1);
}

#[test]
fn power_up_expires_on_the_update_after_its_limit_elapses() {
    let mut world = World::from_seed(7);
    world
        .player
        .enter_powerup(&mut world.ammo, &mut world.audio);
    world.audio.drain();

    // 6000 + 6000 accumulated; the limit check sees the stale total first.
    world.update(6000.0, &idle_input());
    assert!(world.player.power_up);
    assert_eq!(world.player.frame_y, 1);

    world.update(6000.0, &idle_input());
    assert!(world.player.power_up);

    world.update(6000.0, &idle_input());
    assert!(!world.player.power_up);
    assert_eq!(world.player.frame_y, 0);
    assert!(world.audio.drain().contains(&AudioEvent::PowerDown));
}

#[test]
fn powered_up_fire_adds_a_free_tail_shot() {
    let mut world = World::from_seed(7);
    world
        .player
        .enter_powerup(&mut world.ammo, &mut world.audio);

    world.fire();

    assert_eq!(world.player.projectiles.len(), 2);
    assert_eq!(world.ammo, MAX_AMMO - 1.0);
}

#[test]
fn enemies_spawn_on_the_update_after_the_interval_elapses() {
    let mut world = World::from_seed(7);

    for _ in 0..3 {
        world.update(667.0, &idle_input());
        assert!(world.enemies.is_empty());
    }

    world.update(667.0, &idle_input());
    assert_eq!(world.enemies.len(), 1);
}

#[test]
fn the_clock_decides_the_end_and_the_score_decides_the_message() {
    let mut world = World::from_seed(7);
    world.score = 50;
    world.game_time = TIME_LIMIT_MS + 1.0;

    world.update(0.0, &idle_input());

    assert!(world.game_over);
    assert!(!world.is_winner());

    world.score = WINNING_SCORE;
    assert!(!world.is_winner());
    world.score = WINNING_SCORE + 1;
    assert!(world.is_winner());
}

#[test]
fn the_clock_stops_at_game_over() {
    let mut world = World::from_seed(7);
    world.game_over = true;
    let frozen = world.game_time;

    world.update(16.0, &idle_input());

    assert_eq!(world.game_time, frozen);
}

#[test]
fn no_score_changes_after_game_over() {
    let mut world = World::from_seed(7);
    world.game_over = true;
    world.score = 42;

    let i = plant_enemy(&mut world, EnemyKind::AnglerFish, 600.0, 200.0);
    world.enemies[i].lives = 1;
    aim_projectile_at(&mut world, i);
    world.update(16.0, &idle_input());
    assert_eq!(world.score, 42);

    let (px, py) = (world.player.x, world.player.y);
    plant_enemy(&mut world, EnemyKind::NightAngler, px, py);
    world.update(16.0, &idle_input());
    assert_eq!(world.score, 42);
}

#[test]
fn drawing_starts_with_the_back_layer_and_ends_with_the_hud() {
    let mut world = World::from_seed(7);
    world.update(16.0, &idle_input());
    // With no rounds left the ammo bars drop out and the hud ends on text.
    world.ammo = 0.0;

    let mut canvas = Canvas::new();
    world.draw(&mut canvas);

    assert!(matches!(
        canvas.commands.first(),
        Some(DrawCommand::Sprite {
            sprite: SpriteId::Layer1,
            ..
        })
    ));
    assert!(matches!(canvas.commands.last(), Some(DrawCommand::Text { .. })));
}

#[test]
fn the_hud_never_shows_a_negative_score() {
    let mut world = World::from_seed(7);
    world.score = -3;

    let mut canvas = Canvas::new();
    world.draw(&mut canvas);

    let shows_zero = canvas.commands.iter().any(|c| match c {
        DrawCommand::Text { text, .. } => text == "Score: 0",
        _ => false,
    });
    assert!(shows_zero);
}

#[test]
fn the_end_screen_message_matches_the_outcome() {
    let mut world = World::from_seed(7);
    world.game_over = true;
    world.score = WINNING_SCORE + 1;

    let mut canvas = Canvas::new();
    world.draw(&mut canvas);
    let has = |needle: &str| {
        canvas.commands.iter().any(|c| match c {
            DrawCommand::Text { text, .. } => text == needle,
            _ => false,
        })
    };
    assert!(has("Winner!"));

    world.score = 0;
    let mut canvas = Canvas::new();
    world.draw(&mut canvas);
    let lost = canvas.commands.iter().any(|c| match c {
        DrawCommand::Text { text, .. } => text == "Oops!",
        _ => false,
    });
    assert!(lost);
}

#[test]
fn a_partial_round_of_ammo_still_draws_a_bar() {
    let mut world = World::from_seed(7);
    world.ammo = 12.7;

    let mut canvas = Canvas::new();
    world.draw(&mut canvas);

    let bars = canvas
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Fill { .. }))
        .count();
    assert_eq!(bars, 13);

    world.ammo = 12.0;
    let mut canvas = Canvas::new();
    world.draw(&mut canvas);
    let bars = canvas
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Fill { .. }))
        .count();
    assert_eq!(bars, 12);
}

#[test]
fn no_enemies_spawn_after_game_over() {
    let mut world = World::from_seed(7);
    world.game_over = true;

    for _ in 0..10 {
        world.update(667.0, &idle_input());
    }

    assert!(world.enemies.is_empty());
}
