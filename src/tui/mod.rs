//! TUI (Text User Interface): landing screen, conversation view, and component preview.

mod app;
mod chat_result;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::config::Config;

use handlers::{HandleResult, PendingChat, set_cursor_shape};

use draw::draw;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        set_cursor_shape(false); // restore default cursor
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Drain provider channels into the app. Clears `pending_chat` once the result arrives.
fn poll_pending_chat(app: &mut App, pending_chat: &mut Option<PendingChat>) {
    let Some(chat) = pending_chat.as_mut() else {
        return;
    };
    while let Ok(stage) = chat.stage_rx.try_recv() {
        chat_result::handle_stage(app, stage);
    }
    while let Ok(chunk) = chat.stream_rx.try_recv() {
        app.append_assistant_chunk(&chunk);
    }
    if let Ok(result) = chat.result_rx.try_recv() {
        // Chunks sent just before the result.
        while let Ok(chunk) = chat.stream_rx.try_recv() {
            app.append_assistant_chunk(&chunk);
        }
        chat_result::handle_chat_result(app, result);
        *pending_chat = None;
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for provider calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.model_id.clone(), config.show_timestamps);
    let mut pending_chat: Option<PendingChat> = None;
    log::info!("TUI started with model {}", config.model_id);

    // Mouse: wheel scroll and click-to-select
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Kitty keyboard protocol: Alt+key as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    loop {
        poll_pending_chat(&mut app, &mut pending_chat);
        app.gate.tick(Instant::now());

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    // When Esc would start Option+key (meta), drain: terminals (Ghostty, etc.) send
                    // Esc+key; the second byte may arrive with delay, so loop with short polls.
                    let key_to_handle =
                        if handlers::would_esc_start_meta_sequence(&key, &pending_chat) {
                            let step_ms = 25u64;
                            let mut elapsed = 0u64;
                            let mut next_key = None;
                            while elapsed < constants::ESC_SEQUENCE_DRAIN_MS {
                                if event::poll(Duration::from_millis(step_ms))? {
                                    match event::read()? {
                                        Event::Key(next) => {
                                            next_key = Some(next);
                                            break;
                                        }
                                        Event::Mouse(m) => {
                                            let _ = handlers::handle_mouse(m, &mut app);
                                            break;
                                        }
                                        _ => {}
                                    }
                                }
                                elapsed += step_ms;
                            }
                            match next_key {
                                Some(next) => {
                                    app.escape_pending = true;
                                    next
                                }
                                None => key,
                            }
                        } else {
                            key
                        };
                    let result = handlers::handle_key(
                        key_to_handle,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            config: &config,
                            pending_chat: &mut pending_chat,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        if let Some(pc) = pending_chat.take() {
                            pc.cancel_token.cancel();
                        }
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
