mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};

use world_one_one::compute::{init_state, press_confirm, tick};
use world_one_one::config::FPS;
use world_one_one::input::KeyTracker;
use world_one_one::player::HeldKeys;
use world_one_one::view::frame_view;

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS as u64);

fn held_keys(keys: &KeyTracker<KeyCode>, frame: u64) -> HeldKeys {
    HeldKeys {
        left: keys.any_held(
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: keys.any_held(
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
        jump: keys.any_held(
            &[KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
            frame,
        ),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits.
///
/// Input model: a `KeyTracker` records the frame number of the last
/// press/repeat event for every key, and each frame the still-fresh keys
/// become the `HeldKeys` snapshot.  Enter is handled separately as a
/// discrete press event; only fresh presses confirm, so a held Enter fires
/// one state transition.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release
///   and repeats never count as a fresh confirm.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  A press of a key that is still held is a repeat,
///   and keys expire after `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut state = init_state();
    let mut keys: KeyTracker<KeyCode> = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    let fresh = keys.press(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Enter if fresh => {
                            let before = state.status;
                            state = press_confirm(&state);
                            info!("confirm: {:?} -> {:?}", before, state.status);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    keys.repeat(code, frame);
                }
                KeyEventKind::Release => {
                    keys.release(&code);
                }
            }
        }

        state = tick(&state, &held_keys(&keys, frame));

        display::render(out, &frame_view(&state))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases; using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
