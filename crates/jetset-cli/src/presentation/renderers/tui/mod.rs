//! TUI Renderer for the flight browser
//!
//! Owns the terminal and drives a single-threaded event loop that
//! `tokio::select!`s between the pending feed load, keyboard input and a
//! spinner tick. All state lives in `BrowseApp`.
//!
//! ## Design:
//! - The load future is polled in place; quitting before it resolves drops it
//! - A resolved load is applied before any input queued in the same pass
//! - Rendering is rebuilt from view models on every pass through the loop

mod app;
mod disclosure;
mod window;

pub use app::{BrowseApp, SelectorKind, SelectorState};
pub use disclosure::DisclosureState;
pub use window::ListWindow;

use std::future::Future;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use jetset_runtime::FetchOutcome;

const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

pub struct TuiRenderer {
    app: BrowseApp,
}

impl TuiRenderer {
    pub fn new(app: BrowseApp) -> Self {
        Self { app }
    }

    /// Run until the user quits.
    ///
    /// 1. Puts the terminal in raw mode on the alternate screen
    /// 2. Polls `load` alongside input until it resolves
    /// 3. Restores the terminal even if the loop fails
    pub async fn run<F>(mut self, load: F) -> Result<()>
    where
        F: Future<Output = FetchOutcome>,
    {
        enable_raw_mode()?;
        let mut terminal = setup_or_restore(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            || {
                execute!(io::stdout(), LeaveAlternateScreen)?;
                disable_raw_mode()
            },
        )?;

        let result = self
            .event_loop(&mut terminal, EventStream::new(), load)
            .await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B, S, F>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: S,
        load: F,
    ) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = io::Result<Event>>,
        F: Future<Output = FetchOutcome>,
    {
        let mut spinner = tokio::time::interval(SPINNER_INTERVAL);
        tokio::pin!(events);
        tokio::pin!(load);
        let mut load_pending = true;

        loop {
            terminal.draw(|f| self.app.render(f))?;

            tokio::select! {
                biased;

                outcome = &mut load, if load_pending => {
                    load_pending = false;
                    self.app.apply_fetch(outcome);
                }
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.app.handle_key(key),
                    // Resize and friends only need a redraw
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                _ = spinner.tick(), if self.app.load_state().is_loading() => self.app.tick(),
            }

            if self.app.should_quit() {
                if load_pending {
                    tracing::info!("quit before the feed resolved; discarding load");
                }
                break;
            }
        }

        Ok(())
    }
}

/// Run `setup`; if it fails, run `restore` before handing back the error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(err) = restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    })
}
