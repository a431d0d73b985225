use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;
use tracing::{debug, warn};

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Owns the terminal while the palette view is on screen.
/// Dropping it leaves raw mode and stops mouse/keyboard capture.
pub struct Tui {
    pub terminal: Terminal,
}

impl Tui {
    /// Initialise the terminal: raw mode, alternate screen and mouse capture.
    pub fn init() -> Result<Self> {
        enable_raw_mode()?;
        match setup() {
            Ok(terminal) => {
                debug!("terminal initialised");
                Ok(Self { terminal })
            }
            Err(err) => {
                restore()?;
                Err(err)
            }
        }
    }
}

fn setup() -> Result<Terminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(ratatui::Terminal::new(backend)?)
}

impl Drop for Tui {
    fn drop(&mut self) {
        match restore() {
            Ok(()) => debug!("terminal restored"),
            Err(err) => warn!(error = %err, "failed to restore terminal"),
        }
    }
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    Ok(())
}
