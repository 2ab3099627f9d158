use world_one_one::compute::start_game;
use world_one_one::config::{ENEMY_SPEED, PLAYER_HEIGHT, PLAYER_WIDTH};
use world_one_one::entities::*;
use world_one_one::rect::Rect;

#[test]
fn entity_enums_compare() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::GameOver, GameStatus::Win);
    assert_ne!(BlockKind::Hidden, BlockKind::Brick);
    assert_ne!(Facing::Left, Facing::Right);
}

#[test]
fn new_player_is_at_rest() {
    let p = Player::new(5, 7);
    assert_eq!(p.body.rect, Rect::new(5, 7, PLAYER_WIDTH, PLAYER_HEIGHT));
    assert_eq!((p.body.vx, p.body.vy), (0.0, 0.0));
    assert!(!p.body.on_ground && !p.dead && !p.win);
    assert_eq!(p.score, 0);
    assert_eq!(p.facing, Facing::Right);
}

#[test]
fn new_enemy_walks_left() {
    let e = Enemy::new(64, 512);
    assert_eq!(e.body.rect, Rect::new(64, 512, 32, 32));
    assert_eq!(e.body.vx, -ENEMY_SPEED);
    assert_eq!(e.body.vy, 0.0);
    assert!(e.alive);
}

#[test]
fn game_state_clone_is_independent() {
    let original = start_game();
    let mut cloned = original.clone();

    cloned.player.body.rect.x = 99;
    cloned.player.score = 999;
    cloned.level.enemies[0].alive = false;

    assert_eq!(original.player.body.rect.x, 32);
    assert_eq!(original.player.score, 0);
    assert!(original.level.enemies[0].alive);
}
