//! Game state machine.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new one.  The controllers underneath
//! mutate the copy in place.
//!
//! Menu ──confirm──▶ Playing ──dead──▶ GameOver ──confirm──▶ Menu
//!                          └──win───▶ Win      ──confirm──▶ Menu

use log::info;

use crate::camera::Camera;
use crate::config::{ACTIVITY_MARGIN, PLAYER_START_X, PLAYER_START_Y, SCREEN_WIDTH};
use crate::enemy::update_enemies;
use crate::entities::{GameState, GameStatus, Player};
use crate::level::build_level;
use crate::player::{update_player, HeldKeys};

// ── Constructors ─────────────────────────────────────────────────────────────

fn fresh_session(status: GameStatus) -> GameState {
    let level = build_level();
    let camera = Camera::new(level.width, SCREEN_WIDTH);
    GameState {
        status,
        level,
        player: Player::new(PLAYER_START_X, PLAYER_START_Y),
        camera,
        frame: 0,
    }
}

/// The state the program starts in: the menu, with a level already built
/// behind it.
pub fn init_state() -> GameState {
    fresh_session(GameStatus::Menu)
}

/// Rebuild level, player and camera and begin playing.
pub fn start_game() -> GameState {
    info!("starting new game");
    fresh_session(GameStatus::Playing)
}

// ── Discrete input ───────────────────────────────────────────────────────────

/// Handle one press of the confirm key.
pub fn press_confirm(state: &GameState) -> GameState {
    match state.status {
        GameStatus::Menu => start_game(),
        GameStatus::GameOver | GameStatus::Win => {
            info!("back to menu");
            GameState {
                status: GameStatus::Menu,
                ..state.clone()
            }
        }
        GameStatus::Playing => state.clone(),
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Status implied by the player's flags.  Death takes priority over a win
/// reached on the same frame.
pub fn next_status(player: &Player) -> GameStatus {
    if player.dead {
        GameStatus::GameOver
    } else if player.win {
        GameStatus::Win
    } else {
        GameStatus::Playing
    }
}

/// Advance the simulation by one frame.  Only `Playing` states change.
pub fn tick(state: &GameState, keys: &HeldKeys) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    let level = &mut next.level;
    update_player(
        &mut next.player,
        keys,
        &level.blocks,
        &mut level.enemies,
        &level.flag,
    );

    next.camera.update(&next.player.body.rect);

    update_enemies(
        &mut level.enemies,
        &level.blocks,
        next.camera.activity_window(ACTIVITY_MARGIN),
    );

    next.status = next_status(&next.player);
    if next.status != GameStatus::Playing {
        info!(
            "{:?} after {} frames, score {}",
            next.status, next.frame, next.player.score
        );
    }

    next
}
