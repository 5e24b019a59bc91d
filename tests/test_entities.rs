use rand::rngs::StdRng;
use rand::SeedableRng;

use seastrike::audio::events::{AudioEvent, AudioEventQueue};
use seastrike::game::constants::*;
use seastrike::game::particle::Particle;
use seastrike::game::player::Player;
use seastrike::game::projectile::Projectile;
use seastrike::game::rect::{overlaps, Rect};
use seastrike::game::shield::Shield;
use seastrike::game::{Enemy, EnemyKind};

#[test]
fn overlapping_rects_collide_in_either_order() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(overlaps(a, b));
    assert!(overlaps(b, a));
}

#[test]
fn rects_that_only_share_an_edge_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, b));

    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(a, below));
}

#[test]
fn containment_counts_as_collision() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
    assert!(overlaps(outer, inner));
    assert!(overlaps(inner, outer));
}

#[test]
fn the_player_stops_half_a_ship_past_either_edge() {
    let mut ammo = STARTING_AMMO;
    let mut audio = AudioEventQueue::new();
    let mut player = Player::new();

    for _ in 0..2000 {
        player.update(16.0, false, true, &mut ammo, &mut audio);
    }
    assert_eq!(player.y, WORLD_HEIGHT - player.height * 0.5);

    for _ in 0..2000 {
        player.update(16.0, true, false, &mut ammo, &mut audio);
    }
    assert_eq!(player.y, -player.height * 0.5);
}

#[test]
fn the_player_drifts_nowhere_with_no_keys_held() {
    let mut ammo = STARTING_AMMO;
    let mut audio = AudioEventQueue::new();
    let mut player = Player::new();
    let start_y = player.y;

    for _ in 0..100 {
        player.update(16.0, false, false, &mut ammo, &mut audio);
    }

    assert_eq!(player.y, start_y);
}

#[test]
fn projectiles_despawn_past_ninety_percent_of_the_width() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut projectile = Projectile::new(WORLD_WIDTH * PROJECTILE_RANGE - 1.0, 100.0, &mut rng);

    projectile.update(16.0);

    assert!(projectile.marked_for_deletion);
}

#[test]
fn projectiles_fly_right_at_a_speed_near_three() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let projectile = Projectile::new(100.0, 100.0, &mut rng);
        assert!(projectile.speed >= 2.8 && projectile.speed <= 3.0);
    }
}

#[test]
fn enemies_spawn_at_the_right_edge_inside_the_play_height() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let enemy = Enemy::spawn(EnemyKind::AnglerFish, &mut rng);
        assert_eq!(enemy.x, WORLD_WIDTH);
        assert!(enemy.y >= 0.0);
        assert!(enemy.y <= WORLD_HEIGHT * 0.95 - enemy.height);
    }
}

#[test]
fn every_enemy_swims_left() {
    let mut rng = StdRng::seed_from_u64(3);
    let kinds = [
        EnemyKind::AnglerFish,
        EnemyKind::NightAngler,
        EnemyKind::LuckyFish,
        EnemyKind::HiveWhale,
        EnemyKind::BulbWhale,
        EnemyKind::MoonFish,
        EnemyKind::Drone,
    ];
    for kind in kinds {
        for _ in 0..50 {
            let enemy = Enemy::spawn(kind, &mut rng);
            assert!(enemy.speed_x < 0.0, "{:?} must move left", kind);
        }
    }
}

#[test]
fn enemy_stats_follow_the_spawn_table() {
    let mut rng = StdRng::seed_from_u64(3);

    let angler = Enemy::spawn(EnemyKind::AnglerFish, &mut rng);
    assert_eq!((angler.lives, angler.score), (2, 2));

    let hive = Enemy::spawn(EnemyKind::HiveWhale, &mut rng);
    assert_eq!((hive.lives, hive.score), (20, 25));
    assert_eq!((hive.width, hive.height), (400.0, 227.0));

    let moon = Enemy::spawn(EnemyKind::MoonFish, &mut rng);
    assert_eq!((moon.lives, moon.score), (10, 10));

    let drone = Enemy::spawn(EnemyKind::Drone, &mut rng);
    assert_eq!((drone.lives, drone.score), (3, 3));
}

#[test]
fn drones_hatch_where_the_whale_died() {
    let mut rng = StdRng::seed_from_u64(3);
    let drone = Enemy::drone(444.0, 222.0, &mut rng);
    assert_eq!(drone.kind, EnemyKind::Drone);
    assert_eq!((drone.x, drone.y), (444.0, 222.0));
}

#[test]
fn only_the_whales_release_drones() {
    assert!(EnemyKind::HiveWhale.spawns_drones());
    assert!(EnemyKind::BulbWhale.spawns_drones());
    assert!(!EnemyKind::AnglerFish.spawns_drones());
    assert!(!EnemyKind::Drone.spawns_drones());
}

#[test]
fn enemies_despawn_once_fully_off_the_left_edge() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut enemy = Enemy::spawn(EnemyKind::LuckyFish, &mut rng);
    enemy.x = -enemy.width + 0.1;

    enemy.update(WORLD_SCROLL_SPEED);

    assert!(enemy.marked_for_deletion);
}

#[test]
fn the_shield_is_invisible_until_the_first_hit() {
    let mut audio = AudioEventQueue::new();
    let mut shield = Shield::new();
    assert!(shield.frame_x > SHIELD_MAX_FRAME);

    shield.reset(&mut audio);

    assert_eq!(shield.frame_x, 0);
    assert_eq!(audio.drain(), vec![AudioEvent::Shield]);
}

#[test]
fn the_shield_plays_through_once_and_stops() {
    let mut audio = AudioEventQueue::new();
    let mut shield = Shield::new();
    shield.reset(&mut audio);

    for _ in 0..10_000 {
        shield.update(16.0);
    }

    assert_eq!(shield.frame_x, SHIELD_MAX_FRAME + 1);
}

#[test]
fn particles_are_tossed_up_and_eventually_leave_the_screen() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut particle = Particle::new(500.0, 250.0, &mut rng);
    assert!(particle.velocity.y <= 0.0);

    let mut frames = 0;
    while !particle.marked_for_deletion && frames < 5_000 {
        particle.update(WORLD_SCROLL_SPEED);
        frames += 1;
    }

    assert!(particle.marked_for_deletion);
    assert!(particle.bounced <= PARTICLE_MAX_BOUNCES);
}
