//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable
//! [`FrameView`].  No game logic is performed; this module only translates
//! the snapshot into terminal commands.  One terminal cell covers
//! `CELL_W × CELL_H` screen pixels, so a tile is two cells wide.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use world_one_one::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE};
use world_one_one::entities::{BlockKind, Facing, GameStatus};
use world_one_one::rect::Rect;
use world_one_one::view::{Drawable, FrameView};

const CELL_W: i32 = TILE / 2;
const CELL_H: i32 = TILE;

const COLS: i32 = SCREEN_WIDTH / CELL_W;
const ROWS: i32 = (SCREEN_HEIGHT + CELL_H - 1) / CELL_H;

/// Terminal row of the top of the play area (row 0 is the HUD).
const TOP: i32 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::DarkYellow;
const C_BRICK: Color = Color::DarkRed;
const C_PIPE: Color = Color::Green;
const C_QUESTION: Color = Color::Yellow;
const C_STAIR: Color = Color::DarkYellow;
const C_CASTLE: Color = Color::Grey;
const C_FLAG: Color = Color::White;
const C_FLAG_BALL: Color = Color::Yellow;
const C_ENEMY: Color = Color::DarkMagenta;
const C_PLAYER: Color = Color::Red;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match view.status {
        GameStatus::Menu => draw_menu(out)?,
        GameStatus::Playing => {
            draw_world(out, view)?;
            draw_hud(out, view)?;
        }
        GameStatus::GameOver => draw_game_over(out, view)?,
        GameStatus::Win => {
            draw_world(out, view)?;
            draw_course_clear(out, view)?;
        }
    }
    draw_controls_hint(out)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (TOP + ROWS + 1) as u16))?;
    out.flush()?;
    Ok(())
}

// ── Rasterising ───────────────────────────────────────────────────────────────

/// Terminal cells covered by a screen-space rectangle, clipped to the play
/// area.  Yields `(column, row)` in play-area coordinates.
fn cells(rect: &Rect) -> impl Iterator<Item = (i32, i32)> {
    let c0 = rect.left().div_euclid(CELL_W).max(0);
    let c1 = (rect.right() - 1).div_euclid(CELL_W).min(COLS - 1);
    let r0 = rect.top().div_euclid(CELL_H).max(0);
    let r1 = (rect.bottom() - 1).div_euclid(CELL_H).min(ROWS - 1);
    (r0..=r1).flat_map(move |r| (c0..=c1).map(move |c| (c, r)))
}

fn put<W: Write>(out: &mut W, col: i32, row: i32, glyph: char, color: Color) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col as u16, (row + TOP) as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn fill<W: Write>(out: &mut W, rect: &Rect, glyph: char, color: Color) -> std::io::Result<()> {
    for (c, r) in cells(rect) {
        put(out, c, r, glyph, color)?;
    }
    Ok(())
}

// ── World ─────────────────────────────────────────────────────────────────────

fn block_style(kind: BlockKind) -> Option<(char, Color)> {
    match kind {
        BlockKind::Ground => Some(('▓', C_GROUND)),
        BlockKind::Brick => Some(('▒', C_BRICK)),
        BlockKind::Pipe => Some(('█', C_PIPE)),
        BlockKind::Question => Some(('?', C_QUESTION)),
        BlockKind::Hidden => None,
        BlockKind::Staircase => Some(('▓', C_STAIR)),
        BlockKind::Castle => Some(('█', C_CASTLE)),
    }
}

fn draw_world<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    for drawable in &view.drawables {
        match drawable {
            Drawable::Block { rect, kind } => {
                if let Some((glyph, color)) = block_style(*kind) {
                    fill(out, rect, glyph, color)?;
                }
            }
            Drawable::Flag { rect } => draw_flag(out, rect)?,
            Drawable::Enemy { rect } => fill(out, rect, '●', C_ENEMY)?,
            Drawable::Player { rect, facing } => draw_player(out, rect, *facing)?,
        }
    }
    Ok(())
}

fn draw_flag<W: Write>(out: &mut W, rect: &Rect) -> std::io::Result<()> {
    fill(out, rect, '│', C_FLAG)?;
    // Ball on top of the pole
    if let Some((c, r)) = cells(rect).next() {
        put(out, c, r, '●', C_FLAG_BALL)?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, rect: &Rect, facing: Facing) -> std::io::Result<()> {
    fill(out, rect, '█', C_PLAYER)?;
    // Head row shows which way the player faces
    let head = match facing {
        Facing::Left => '◀',
        Facing::Right => '▶',
    };
    if let Some((c, r)) = cells(rect).next() {
        put(out, c, r, head, C_PLAYER)?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("SCORE: {:>6}", view.score)))?;

    let title = "WORLD 1-1";
    let x = (COLS as u16 / 2).saturating_sub(title.len() as u16 / 2);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(Print(title))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, (TOP + ROWS) as u16))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE / ↑ : Jump   ENTER : Confirm   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

/// Print lines centred on the play area, starting at `start_row`.
fn centred_lines<W: Write>(
    out: &mut W,
    start_row: i32,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = COLS as u16 / 2;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = (TOP + start_row) as u16 + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    // Strip of ground along the bottom
    for c in 0..COLS {
        put(out, c, ROWS - 2, '▓', C_GROUND)?;
        put(out, c, ROWS - 1, '▓', C_GROUND)?;
    }
    centred_lines(
        out,
        ROWS / 3,
        &[
            ("╔═══════════════════╗", C_TITLE),
            ("║     WORLD 1-1     ║", C_TITLE),
            ("╚═══════════════════╝", C_TITLE),
            ("", C_HUD),
            ("PRESS ENTER TO START", C_HUD),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    let score = format!("Score: {:>6}", view.score);
    centred_lines(
        out,
        ROWS / 3,
        &[
            ("╔════════════════════╗", Color::Red),
            ("║     GAME  OVER     ║", Color::Red),
            ("╚════════════════════╝", Color::Red),
            (score.as_str(), Color::Yellow),
            ("Press ENTER for Menu", C_HUD),
        ],
    )
}

fn draw_course_clear<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    let score = format!("Final Score: {:>6}", view.score);
    centred_lines(
        out,
        ROWS / 4,
        &[
            ("★  COURSE CLEAR!  ★", Color::Yellow),
            (score.as_str(), C_HUD),
            ("Press ENTER to Return", C_HUD),
        ],
    )
}
