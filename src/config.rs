//! Compiled-in tuning tables.  Units are pixels and pixels-per-frame at
//! the fixed 60 Hz step.

// ── Viewport ──────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const FPS: u32 = 60;

/// Edge length of one authoring-grid tile.
pub const TILE: i32 = 32;

// ── Physics ───────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.8;
pub const MAX_FALL: f32 = 14.0;
pub const JUMP_POWER: f32 = -17.0;

pub const WALK_SPEED: f32 = 6.0;
pub const WALK_ACCEL: f32 = 0.5;
pub const FRICTION: f32 = 0.85;
/// Below this magnitude horizontal speed snaps to zero.
pub const STOP_THRESHOLD: f32 = 0.1;

// ── Combat ────────────────────────────────────────────────────────────────────

/// A stomp needs the player's bottom edge above `enemy.center_y + STOMP_MARGIN`.
pub const STOMP_MARGIN: i32 = 10;
pub const STOMP_BOUNCE: f32 = -8.0;
pub const STOMP_SCORE: u32 = 100;

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Player top edge past this row of pixels means a pit death.
pub const FALL_DEATH_Y: i32 = 1000;
/// Enemies leaving the visible play area downward are removed.
pub const ENEMY_DEATH_Y: i32 = SCREEN_HEIGHT;

// ── Actors ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 28;
pub const PLAYER_HEIGHT: i32 = 56;
pub const PLAYER_START_X: i32 = 32;
pub const PLAYER_START_Y: i32 = 17 * TILE - PLAYER_HEIGHT;

pub const ENEMY_SIZE: i32 = 32;
pub const ENEMY_SPEED: f32 = 2.0;
/// Extra pixels either side of the viewport in which enemies keep simulating.
pub const ACTIVITY_MARGIN: i32 = 100;
