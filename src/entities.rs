//! All game entity types — pure data, no logic.

use std::rc::Rc;

use crate::camera::Camera;
use crate::config::{ENEMY_SIZE, ENEMY_SPEED, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::rect::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
    Win,
}

/// Rendering classification of a block.  Physics ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Ground,
    Brick,
    Pipe,
    Question,
    /// Solid but never drawn.
    Hidden,
    Staircase,
    Castle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

// ── Terrain ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
}

// ── Kinematic body ────────────────────────────────────────────────────────────

/// Position and velocity shared by everything that moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Set when the last vertical pass landed on a block.
    pub on_ground: bool,
}

impl Body {
    pub fn at(rect: Rect) -> Body {
        Body {
            rect,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
        }
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    pub dead: bool,
    pub win: bool,
    pub score: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Player {
        Player {
            body: Body::at(Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)),
            facing: Facing::Right,
            dead: false,
            win: false,
            score: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub alive: bool,
}

impl Enemy {
    /// A fresh enemy walking left.
    pub fn new(x: i32, y: i32) -> Enemy {
        let mut body = Body::at(Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE));
        body.vx = -ENEMY_SPEED;
        Enemy { body, alive: true }
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

/// Everything the level builder produces.  Only enemy state changes
/// during play.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    /// Immutable terrain, shared by every cloned state.
    pub blocks: Rc<[Block]>,
    pub enemies: Vec<Enemy>,
    /// Goal sensor; not part of `blocks`.
    pub flag: Rect,
    /// Total width in pixels.
    pub width: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One game session.  Cloneable so the state-machine functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    /// Frames simulated while playing.
    pub frame: u64,
}
