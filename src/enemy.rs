//! Enemy patrol: walk, bounce off walls, fall under gravity.
//!
//! Reversal happens on wall contact only.  An enemy walking off a ledge
//! simply falls.

use log::debug;

use crate::config::ENEMY_DEATH_Y;
use crate::entities::{Block, Enemy};
use crate::physics::{self, pixel_step};

/// Tentative move by `vx`; on any overlap flip direction and move by the
/// reversed step from the starting position instead.
pub fn patrol_step(enemy: &mut Enemy, blocks: &[Block]) {
    let body = &mut enemy.body;
    let start_x = body.rect.x;

    body.rect.x = start_x + pixel_step(body.vx);
    if physics::overlaps_any(body, blocks) {
        body.vx = -body.vx;
        body.rect.x = start_x + pixel_step(body.vx);
    }
}

pub fn update_enemy(enemy: &mut Enemy, blocks: &[Block]) {
    if !enemy.alive {
        return;
    }

    physics::apply_gravity(&mut enemy.body);
    patrol_step(enemy, blocks);
    physics::move_vertical(&mut enemy.body, blocks);

    if enemy.body.rect.top() > ENEMY_DEATH_Y {
        enemy.alive = false;
        debug!("enemy fell out at x={}", enemy.body.rect.x);
    }
}

/// Update the alive enemies whose x lies strictly inside `window`.  Enemies
/// outside it keep their state until they come back into range.
pub fn update_enemies(enemies: &mut [Enemy], blocks: &[Block], window: (i32, i32)) {
    let (start, end) = window;
    for enemy in enemies.iter_mut() {
        let x = enemy.body.rect.x;
        if start < x && x < end {
            update_enemy(enemy, blocks);
        }
    }
}
