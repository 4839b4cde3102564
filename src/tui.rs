//! Full-screen terminal front end
//!
//! Draws the session after every input or settlement. The exchange itself
//! runs in a spawned task, so the screen keeps updating while it is pending.

mod input;
mod view;

pub use input::{apply_action, map_key, InputAction};
pub use view::draw;

use crate::client::WeatherClient;
use crate::runtime::ChatRuntime;
use crossterm::event::{Event as TermEvent, EventStream};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the chat UI until the user quits
pub async fn run<C>(runtime: &mut ChatRuntime<C>) -> io::Result<()>
where
    C: WeatherClient + 'static,
{
    let _guard = TerminalGuard;
    let mut terminal = setup_terminal()?;
    event_loop(&mut terminal, runtime).await
}

async fn event_loop<C>(terminal: &mut Term, runtime: &mut ChatRuntime<C>) -> io::Result<()>
where
    C: WeatherClient + 'static,
{
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| draw(frame, runtime.session()))?;

        tokio::select! {
            term_event = events.next() => match term_event {
                Some(Ok(TermEvent::Key(key))) => {
                    if apply_action(runtime, map_key(key)).is_break() {
                        return Ok(());
                    }
                }
                // Resize and friends only need a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
            Some(settled) = runtime.next_settlement(), if runtime.session().is_busy() => {
                runtime.apply(settled);
            }
        }
    }
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Restores the terminal on every exit from [`run`], including unwinding
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}
