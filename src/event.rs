use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::info;

use crate::app::{App, AppEvent};

/// Feedback badges are swept on every tick, so this bounds how late they disappear.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(Some(AppEvent::Tick));
    }
    let mapped = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                Some(AppEvent::Quit)
            } else {
                Some(AppEvent::KeyPress(key.code))
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(AppEvent::Click { column, row }),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    };
    Ok(mapped)
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    info!(palette = %app.palette.joined(), "palette view opened");
    while app.running {
        let frame = terminal.draw(|frame| crate::ui::draw(frame, app, Instant::now()))?;
        app.viewport = frame.area;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event, Instant::now());
        }
    }
    info!(palette = %app.palette.joined(), "palette view closed");
    Ok(())
}
