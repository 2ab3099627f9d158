//! Motion and collision for any [`Body`].
//!
//! Resolution is axis-separated: x first, then y, each against the whole
//! block list in insertion order.  A block is tested against the body's
//! rectangle as it stands after earlier blocks have clamped it.  Fast
//! bodies can tunnel through thin blocks and corners can catch; both are
//! part of how this game plays.

use crate::config::{GRAVITY, MAX_FALL};
use crate::entities::{Block, Body};

/// Pixel displacement for one frame: velocity truncated toward zero.
pub fn pixel_step(v: f32) -> i32 {
    v.trunc() as i32
}

pub fn apply_gravity(body: &mut Body) {
    body.vy = (body.vy + GRAVITY).min(MAX_FALL);
}

pub fn move_horizontal(body: &mut Body, blocks: &[Block]) {
    body.rect.x += pixel_step(body.vx);
    for block in blocks {
        if !body.rect.intersects(&block.rect) {
            continue;
        }
        if body.vx > 0.0 {
            body.rect.set_right(block.rect.left());
        } else if body.vx < 0.0 {
            body.rect.set_left(block.rect.right());
        }
        body.vx = 0.0;
    }
}

pub fn move_vertical(body: &mut Body, blocks: &[Block]) {
    body.rect.y += pixel_step(body.vy);
    body.on_ground = false;
    for block in blocks {
        if !body.rect.intersects(&block.rect) {
            continue;
        }
        if body.vy > 0.0 {
            body.rect.set_bottom(block.rect.top());
            body.vy = 0.0;
            body.on_ground = true;
        } else if body.vy < 0.0 {
            body.rect.set_top(block.rect.bottom());
            body.vy = 0.0;
        }
    }
}

/// One full frame of integration: gravity, then x, then y.
pub fn step_body(body: &mut Body, blocks: &[Block]) {
    apply_gravity(body);
    move_horizontal(body, blocks);
    move_vertical(body, blocks);
}

pub fn overlaps_any(body: &Body, blocks: &[Block]) -> bool {
    blocks.iter().any(|b| body.rect.intersects(&b.rect))
}
