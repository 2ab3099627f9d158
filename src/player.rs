//! Player controller: input, jumping, enemy contact, goal and pit checks.

use log::{debug, info};

use crate::config::{
    FALL_DEATH_Y, FRICTION, JUMP_POWER, STOMP_BOUNCE, STOMP_MARGIN, STOMP_SCORE, STOP_THRESHOLD,
    WALK_ACCEL, WALK_SPEED,
};
use crate::entities::{Block, Enemy, Facing, Player};
use crate::physics;
use crate::rect::Rect;

/// Keys held during this frame.  Every combination is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Outcome of touching an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Stomp,
    Damage,
}

/// Horizontal acceleration, friction, speed cap and jump.  Left wins when
/// both directions are held.
pub fn apply_input(player: &mut Player, keys: &HeldKeys) {
    let body = &mut player.body;

    if keys.left {
        body.vx -= WALK_ACCEL;
        player.facing = Facing::Left;
    } else if keys.right {
        body.vx += WALK_ACCEL;
        player.facing = Facing::Right;
    } else {
        body.vx *= FRICTION;
    }

    body.vx = body.vx.clamp(-WALK_SPEED, WALK_SPEED);
    if body.vx.abs() < STOP_THRESHOLD {
        body.vx = 0.0;
    }

    if keys.jump && body.on_ground {
        body.vy = JUMP_POWER;
        body.on_ground = false;
    }
}

/// Stomp iff the player is falling and its feet are above a line just
/// below the enemy's vertical centre.
pub fn classify_contact(player: &Rect, vy: f32, enemy: &Rect) -> Contact {
    if vy > 0.0 && player.bottom() < enemy.center_y() + STOMP_MARGIN {
        Contact::Stomp
    } else {
        Contact::Damage
    }
}

pub fn resolve_enemies(player: &mut Player, enemies: &mut [Enemy]) {
    for (i, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.alive || !player.body.rect.intersects(&enemy.body.rect) {
            continue;
        }
        match classify_contact(&player.body.rect, player.body.vy, &enemy.body.rect) {
            Contact::Stomp => {
                enemy.alive = false;
                player.body.vy = STOMP_BOUNCE;
                player.score += STOMP_SCORE;
                debug!("stomped enemy {} at x={}", i, enemy.body.rect.x);
            }
            Contact::Damage => {
                player.dead = true;
                info!("player hit by enemy {} at x={}", i, enemy.body.rect.x);
            }
        }
    }
}

pub fn check_goal(player: &mut Player, flag: &Rect) {
    if player.body.rect.intersects(flag) {
        player.win = true;
        player.body.vx = 0.0;
        info!("flag reached with score {}", player.score);
    }
}

pub fn check_fall(player: &mut Player) {
    if player.body.rect.top() > FALL_DEATH_Y {
        player.dead = true;
        info!("player fell at x={}", player.body.rect.x);
    }
}

/// One frame of player logic.  Does nothing once the player is dead or has
/// won.
pub fn update_player(
    player: &mut Player,
    keys: &HeldKeys,
    blocks: &[Block],
    enemies: &mut [Enemy],
    flag: &Rect,
) {
    if player.dead || player.win {
        return;
    }

    apply_input(player, keys);
    physics::step_body(&mut player.body, blocks);
    resolve_enemies(player, enemies);
    check_goal(player, flag);
    check_fall(player);
}
