use world_one_one::config::{ENEMY_SPEED, TILE};
use world_one_one::entities::BlockKind;
use world_one_one::level::*;
use world_one_one::rect::Rect;

fn count(kind: BlockKind) -> usize {
    build_level().blocks.iter().filter(|b| b.kind == kind).count()
}

#[test]
fn builder_is_idempotent() {
    assert_eq!(build_level(), build_level());
}

#[test]
fn golden_totals() {
    let level = build_level();
    assert_eq!(level.blocks.len(), 525);
    assert_eq!(level.enemies.len(), 17);
    assert_eq!(level.width, 220 * TILE);
    assert_eq!(level.flag, Rect::new(6336, 224, 8, 320));
}

#[test]
fn golden_counts_per_kind() {
    assert_eq!(count(BlockKind::Ground), 408);
    assert_eq!(count(BlockKind::Pipe), 32);
    assert_eq!(count(BlockKind::Question), 4);
    assert_eq!(count(BlockKind::Hidden), 1);
    assert_eq!(count(BlockKind::Brick), 33);
    assert_eq!(count(BlockKind::Staircase), 25);
    assert_eq!(count(BlockKind::Castle), 22);
}

#[test]
fn golden_coordinates() {
    let level = build_level();
    assert_eq!(level.blocks[0].rect, Rect::new(0, 544, 32, 32));
    assert_eq!(level.blocks[1].rect, Rect::new(0, 576, 32, 32));
    assert_eq!(level.blocks[0].kind, BlockKind::Ground);

    let hidden: Vec<_> = level
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Hidden)
        .collect();
    assert_eq!(hidden[0].rect, Rect::new(91 * TILE, 13 * TILE, TILE, TILE));

    // Tallest pipe column
    assert!(level
        .blocks
        .iter()
        .any(|b| b.kind == BlockKind::Pipe && b.rect == Rect::new(73 * TILE, 13 * TILE, TILE, TILE)));

    // Top of the final staircase
    assert!(level
        .blocks
        .iter()
        .any(|b| b.kind == BlockKind::Staircase && b.rect == Rect::new(198 * TILE, 10 * TILE, TILE, TILE)));

    // Castle tower
    assert_eq!(
        level.blocks.last().map(|b| (b.rect, b.kind)),
        Some((Rect::new(203 * TILE, 11 * TILE, TILE, TILE), BlockKind::Castle))
    );
}

#[test]
fn pits_have_no_ground() {
    let level = build_level();
    for block in level.blocks.iter().filter(|b| b.kind == BlockKind::Ground) {
        assert!(!is_pit(block.rect.x / TILE), "ground at column {}", block.rect.x / TILE);
    }
    assert!(is_pit(87) && is_pit(90) && is_pit(173));
    assert!(!is_pit(86) && !is_pit(91) && !is_pit(0));
}

#[test]
fn every_block_is_a_positive_tile() {
    for block in build_level().blocks.iter() {
        assert!(block.rect.w > 0 && block.rect.h > 0);
        assert_eq!(block.rect.x % TILE, 0);
        assert_eq!(block.rect.y % TILE, 0);
    }
}

#[test]
fn flag_is_not_solid() {
    let level = build_level();
    assert!(level.blocks.iter().all(|b| b.rect != level.flag));
}

#[test]
fn enemies_spawn_walking_left_on_row_16() {
    let level = build_level();
    assert_eq!(level.enemies[0].body.rect, Rect::new(21 * TILE, 16 * TILE, 32, 32));
    for enemy in &level.enemies {
        assert!(enemy.alive);
        assert_eq!(enemy.body.vx, -ENEMY_SPEED);
        assert_eq!(enemy.body.vy, 0.0);
        assert_eq!(enemy.body.rect.bottom(), 17 * TILE);
    }
}
