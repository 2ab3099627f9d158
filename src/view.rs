//! Read-only per-frame snapshot handed to a renderer.
//!
//! Rectangles are already in screen space.  Renderers must skip blocks
//! tagged [`BlockKind::Hidden`]; they are listed because they are solid.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{BlockKind, Facing, GameState, GameStatus};
use crate::rect::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawable {
    Block { rect: Rect, kind: BlockKind },
    Flag { rect: Rect },
    Enemy { rect: Rect },
    Player { rect: Rect, facing: Facing },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    pub status: GameStatus,
    /// Back-to-front draw order: blocks, flag, enemies, player.
    pub drawables: Vec<Drawable>,
    pub score: u32,
    pub dead: bool,
    pub win: bool,
}

const VIEWPORT: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

fn on_screen(rect: &Rect) -> bool {
    rect.intersects(&VIEWPORT)
}

/// Snapshot everything visible through the camera.  Dead enemies and a
/// dead player are left out.
pub fn frame_view(state: &GameState) -> FrameView {
    let camera = &state.camera;
    let level = &state.level;
    let mut drawables = Vec::new();

    drawables.extend(
        level
            .blocks
            .iter()
            .map(|b| (camera.apply(&b.rect), b.kind))
            .filter(|(rect, _)| on_screen(rect))
            .map(|(rect, kind)| Drawable::Block { rect, kind }),
    );

    let flag = camera.apply(&level.flag);
    if on_screen(&flag) {
        drawables.push(Drawable::Flag { rect: flag });
    }

    drawables.extend(
        level
            .enemies
            .iter()
            .filter(|e| e.alive)
            .map(|e| camera.apply(&e.body.rect))
            .filter(on_screen)
            .map(|rect| Drawable::Enemy { rect }),
    );

    let player = &state.player;
    if !player.dead {
        drawables.push(Drawable::Player {
            rect: camera.apply(&player.body.rect),
            facing: player.facing,
        });
    }

    FrameView {
        status: state.status,
        drawables,
        score: player.score,
        dead: player.dead,
        win: player.win,
    }
}
