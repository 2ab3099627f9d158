//! World 1-1 layout and the builder that turns it into pixel geometry.
//!
//! All authoring data is in tile-grid `(column, row)` form; the builder is
//! the only place that multiplies by `TILE`.

use log::debug;

use crate::config::TILE;
use crate::entities::{Block, BlockKind, Enemy, Level};
use crate::rect::Rect;

// ── Authoring tables ─────────────────────────────────────────────────────────

pub const WIDTH_TILES: i32 = 220;

/// The two ground rows.
const GROUND_ROWS: [i32; 2] = [17, 18];

/// Inclusive column ranges without ground.
pub const PIT_RANGES: [(i32, i32); 4] = [(87, 90), (118, 121), (158, 161), (170, 173)];

/// `(left column, top row, height in tiles)`; every pipe is two columns wide.
const PIPES: [(i32, i32, i32); 6] = [
    (38, 15, 2),
    (57, 14, 3),
    (73, 13, 4),
    (85, 13, 4),
    (179, 15, 2),
    (187, 16, 1),
];

const QUESTION_COLUMNS: [i32; 4] = [16, 94, 121, 123];
const QUESTION_ROW: i32 = 13;

const HIDDEN_BLOCK: (i32, i32) = (91, 13);

const LOW_BRICK_ROW: i32 = 13;
const LOW_BRICK_COLUMNS: [i32; 13] = [20, 21, 22, 23, 100, 109, 112, 130, 131, 182, 183, 184, 185];

const HIGH_BRICK_ROW: i32 = 9;
const HIGH_BRICK_COLUMNS: [i32; 4] = [21, 22, 122, 131];
/// Half-open column range of the long upper brick run.
const HIGH_BRICK_RUN: (i32, i32) = (99, 115);

const SMALL_PYRAMID: [(i32, i32); 7] = [
    (140, 17),
    (141, 16),
    (142, 15),
    (143, 14),
    (144, 15),
    (145, 16),
    (146, 17),
];

const LARGE_PYRAMID: [(i32, i32); 10] = [
    (150, 17),
    (151, 16),
    (152, 15),
    (153, 14),
    (154, 13),
    (155, 13),
    (156, 14),
    (157, 15),
    (158, 16),
    (159, 17),
];

/// Bottom step of the final staircase; each further step is one column
/// right and one row up.
const STAIRCASE_BASE: (i32, i32) = (191, 17);
const STAIRCASE_STEPS: i32 = 8;

const CASTLE_LEFT: i32 = 201;
const CASTLE_RIGHT: i32 = 205;
const CASTLE_BASE_ROWS: [i32; 2] = [16, 17];
const CASTLE_WALL_ROWS: (i32, i32) = (13, 16);
const CASTLE_ROOF_ROW: i32 = 12;
const CASTLE_TOWER: (i32, i32) = (203, 11);

const FLAG_COLUMN: i32 = 198;
const FLAG_TOP_ROW: i32 = 7;
const FLAG_WIDTH: i32 = 8;
const FLAG_HEIGHT_TILES: i32 = 10;

const ENEMY_ROW: i32 = 16;
const ENEMY_COLUMNS: [i32; 17] = [
    21, 50, 52, 65, 67, 80, 82, 100, 102, 104, 128, 135, 137, 148, 150, 182, 184,
];

// ── Builder ──────────────────────────────────────────────────────────────────

pub fn is_pit(column: i32) -> bool {
    PIT_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&column))
}

fn tile(column: i32, row: i32, kind: BlockKind) -> Block {
    Block {
        rect: Rect::new(column * TILE, row * TILE, TILE, TILE),
        kind,
    }
}

fn push_ground(blocks: &mut Vec<Block>) {
    for column in (0..WIDTH_TILES).filter(|&c| !is_pit(c)) {
        for row in GROUND_ROWS {
            blocks.push(tile(column, row, BlockKind::Ground));
        }
    }
}

fn push_pipe(blocks: &mut Vec<Block>, left: i32, top: i32, height: i32) {
    for row in top..top + height {
        blocks.push(tile(left, row, BlockKind::Pipe));
        blocks.push(tile(left + 1, row, BlockKind::Pipe));
    }
}

fn push_castle(blocks: &mut Vec<Block>) {
    for column in CASTLE_LEFT..=CASTLE_RIGHT {
        for row in CASTLE_BASE_ROWS.iter().rev() {
            blocks.push(tile(column, *row, BlockKind::Castle));
        }
    }
    for column in [CASTLE_LEFT, CASTLE_RIGHT] {
        for row in CASTLE_WALL_ROWS.0..CASTLE_WALL_ROWS.1 {
            blocks.push(tile(column, row, BlockKind::Castle));
        }
    }
    for column in CASTLE_LEFT..=CASTLE_RIGHT {
        blocks.push(tile(column, CASTLE_ROOF_ROW, BlockKind::Castle));
    }
    blocks.push(tile(CASTLE_TOWER.0, CASTLE_TOWER.1, BlockKind::Castle));
}

/// Build World 1-1.  Output depends only on the tables above, so two calls
/// always produce equal levels.
pub fn build_level() -> Level {
    let mut blocks = Vec::new();

    push_ground(&mut blocks);

    for (left, top, height) in PIPES {
        push_pipe(&mut blocks, left, top, height);
    }

    for column in QUESTION_COLUMNS {
        blocks.push(tile(column, QUESTION_ROW, BlockKind::Question));
    }

    blocks.push(tile(HIDDEN_BLOCK.0, HIDDEN_BLOCK.1, BlockKind::Hidden));

    for column in LOW_BRICK_COLUMNS {
        blocks.push(tile(column, LOW_BRICK_ROW, BlockKind::Brick));
    }
    for column in HIGH_BRICK_COLUMNS.into_iter().chain(HIGH_BRICK_RUN.0..HIGH_BRICK_RUN.1) {
        blocks.push(tile(column, HIGH_BRICK_ROW, BlockKind::Brick));
    }

    for (column, row) in SMALL_PYRAMID.into_iter().chain(LARGE_PYRAMID) {
        blocks.push(tile(column, row, BlockKind::Staircase));
    }
    for step in 0..STAIRCASE_STEPS {
        let (column, row) = STAIRCASE_BASE;
        blocks.push(tile(column + step, row - step, BlockKind::Staircase));
    }

    push_castle(&mut blocks);

    let flag = Rect::new(
        FLAG_COLUMN * TILE,
        FLAG_TOP_ROW * TILE,
        FLAG_WIDTH,
        FLAG_HEIGHT_TILES * TILE,
    );

    let enemies: Vec<Enemy> = ENEMY_COLUMNS
        .iter()
        .map(|&column| Enemy::new(column * TILE, ENEMY_ROW * TILE))
        .collect();

    debug!(
        "built level: {} blocks, {} enemies, {} px wide",
        blocks.len(),
        enemies.len(),
        WIDTH_TILES * TILE
    );

    Level {
        blocks: blocks.into(),
        enemies,
        flag,
        width: WIDTH_TILES * TILE,
    }
}
