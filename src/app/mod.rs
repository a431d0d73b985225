mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    Quit,
}
