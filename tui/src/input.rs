//! Input handling for the folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;

use folio_engine::App;
use folio_types::Section;
use folio_types::ui::{FormField, InputMode};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and feeds them to the frame
/// loop through a bounded channel.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first to ensure the input thread unblocks if it
        // is currently backpressured on a send (e.g. during a large paste).
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events, so multi-line pastes arrive intact without
                    // unbounded memory growth.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drains up to one frame's worth of pending events into the app.
///
/// Returns `Ok(true)` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit)
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit;
            }

            // Ctrl+C quits from either mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.quit();
                return true;
            }

            match app.input_mode {
                InputMode::Browse => handle_browse_mode(app, key),
                InputMode::Form => handle_form_mode(app, key),
            }
        }
        Event::Paste(text) => {
            // Bracketed paste goes straight into the focused draft; with the
            // Send stop focused there is nothing to paste into.
            if app.input_mode == InputMode::Form
                && let Some(draft) = app.form.focused_draft_mut()
            {
                let normalized = normalize_line_endings(&text);
                draft.insert_str(&normalized);
            }
        }
        _ => {}
    }
    app.should_quit
}

fn handle_browse_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        // Scroll by a 20% chunk (Ctrl+U / Ctrl+D)
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_up_chunk();
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_down_chunk();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_to_top();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_to_bottom();
        }
        // Jump straight to a section with 1..6
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10).unwrap_or(0);
            if digit > 0 {
                let index = (digit - 1) as usize;
                if let Some(section) = Section::from_index(index) {
                    app.jump_to_section(section);
                }
            }
        }
        KeyCode::Tab => {
            app.jump_to_next_section();
        }
        KeyCode::BackTab => {
            app.jump_to_previous_section();
        }
        KeyCode::Char('i') => {
            app.open_form();
        }
        KeyCode::Char('a') => {
            app.toggle_ascii_only();
        }
        KeyCode::Char('m') => {
            app.toggle_reduced_motion();
        }
        _ => {}
    }
}

fn handle_form_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Back to browsing; drafts persist
        KeyCode::Esc => {
            app.close_form();
        }
        KeyCode::Tab => {
            app.form.focus_next();
        }
        KeyCode::BackTab => {
            app.form.focus_previous();
        }
        // Enter activates Send, inserts a newline in the message, and
        // otherwise moves to the next field
        KeyCode::Enter => {
            if app.form.focus == FormField::Send {
                app.press_send();
            } else if app.form.focus.is_multiline() {
                if let Some(draft) = app.form.focused_draft_mut() {
                    draft.insert_newline();
                }
            } else {
                app.form.focus_next();
            }
        }
        _ => {
            let Some(draft) = app.form.focused_draft_mut() else {
                return;
            };

            match key.code {
                KeyCode::Backspace => {
                    draft.backspace();
                }
                KeyCode::Delete => {
                    draft.delete_forward();
                }
                KeyCode::Left => {
                    draft.cursor_left();
                }
                KeyCode::Right => {
                    draft.cursor_right();
                }
                KeyCode::Home => {
                    draft.cursor_home();
                }
                KeyCode::End => {
                    draft.cursor_end();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.clear();
                }
                KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.delete_word_back();
                }
                // Insert character (ignore \r - it arrives via Enter or is
                // normalized out of pastes)
                KeyCode::Char(c) if c != '\r' => {
                    draft.insert_char(c);
                }
                _ => {}
            }
        }
    }
}
