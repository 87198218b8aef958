//! Interactive terminal explorer for lizard reports.
//!
//! The explorer owns the terminal and the [`App`]. Each loop iteration
//! drains finished analysis jobs, draws a frame and waits up to
//! [`TICK_RATE`] for a key, so the spinner keeps moving and results show up
//! without user input.
//!
//! ```rust,no_run
//! use lizard_tui::analyzer::LizardAnalyzer;
//! use lizard_tui::session::Session;
//! use lizard_tui::tui::{app::App, LizardExplorer};
//! use std::sync::Arc;
//!
//! let session = Session::new(Arc::new(LizardAnalyzer::default()));
//! let app = App::new(session, "src", vec!["test".to_string()]);
//! let mut explorer = LizardExplorer::new(app)?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod animation;
pub mod app;
pub mod cursor;
pub mod input;
pub mod key_actions;
pub mod layout;
pub mod navigation;
pub mod renderer;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use app::App;

/// Longest wait for input before the next frame.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal manager for the explorer
pub struct LizardExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl LizardExplorer {
    /// Enter raw mode and the alternate screen.
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        self.app.analyze_initial_path();

        loop {
            self.app.tick();

            // Full redraw after the picker handed the terminal back.
            if self.app.take_needs_redraw() {
                self.terminal.clear()?;
            }

            let size = self.terminal.size()?;
            self.app
                .set_viewport_height(layout::table_viewport_height(size.height));
            self.terminal.draw(|f| layout::render(f, &self.app))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && navigation::handle_key(&mut self.app, key)? {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for LizardExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
