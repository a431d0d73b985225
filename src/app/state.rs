use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use tracing::{debug, warn};

use crate::clipboard::Clipboard;
use crate::feedback::{CopyAllFeedback, CopyFeedback};
use crate::palette::{generate_palette, random_palette};
use crate::types::{LockMask, PALETTE_SIZE, Palette, SlotIndex};
use crate::ui::layout::{Hit, PaletteLayout};

use super::AppEvent;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub palette: Palette,
    pub locks: LockMask,
    pub copied: CopyFeedback,
    pub copied_all: CopyAllFeedback,
    pub selected: SlotIndex,
    pub show_help: bool,
    /// Area of the last rendered frame, used to resolve mouse clicks.
    pub viewport: Rect,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self::with_palette(random_palette(), clipboard)
    }

    pub fn with_palette(palette: Palette, clipboard: Box<dyn Clipboard>) -> Self {
        debug!(palette = %palette.joined(), "palette view started");
        Self {
            running: true,
            palette,
            locks: LockMask::default(),
            copied: CopyFeedback::default(),
            copied_all: CopyAllFeedback::default(),
            selected: 0,
            show_help: false,
            viewport: Rect::default(),
            clipboard,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent, now: Instant) {
        self.copied.expire(now);
        self.copied_all.expire(now);

        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key, now),
            AppEvent::Click { column, row } => self.handle_click(Position::new(column, row), now),
            AppEvent::Resize { width, height } => {
                self.viewport = Rect::new(0, 0, width, height);
            }
            AppEvent::Quit => self.running = false,
        }
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.running = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(' ') => self.regenerate(),
            KeyCode::Left | KeyCode::Char('h') => self.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.select_next(),
            KeyCode::Char(digit @ '1'..='5') => {
                let index = digit as usize - '1' as usize;
                self.selected = index;
                self.copy_one(index, now);
            }
            KeyCode::Enter | KeyCode::Char('c') => self.copy_one(self.selected, now),
            KeyCode::Char('x') => self.toggle_lock(self.selected),
            KeyCode::Char('u') => self.unlock_all(),
            KeyCode::Char('a') => self.copy_all(now),
            _ => {}
        }
    }

    fn handle_click(&mut self, position: Position, now: Instant) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        let Some(hit) = PaletteLayout::compute(self.viewport).hit(position) else {
            return;
        };
        debug!(?hit, "click");
        match hit {
            Hit::Lock(index) => {
                self.selected = index;
                self.toggle_lock(index);
            }
            Hit::Tile(index) => {
                self.selected = index;
                self.copy_one(index, now);
            }
            Hit::Regenerate => self.regenerate(),
            Hit::UnlockAll => self.unlock_all(),
            Hit::CopyAll => self.copy_all(now),
        }
    }

    fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = PALETTE_SIZE - 1;
        } else {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % PALETTE_SIZE;
    }

    /// Re-roll every unlocked color.
    pub fn regenerate(&mut self) {
        self.palette = generate_palette(&self.palette, &self.locks);
        debug!(
            palette = %self.palette.joined(),
            locked = self.locks.locked_count(),
            "regenerated palette"
        );
    }

    pub fn toggle_lock(&mut self, index: SlotIndex) {
        match self.locks.toggle(index) {
            Some(locked) => debug!(index, locked, "toggled lock"),
            None => debug!(index, "ignored lock toggle for unknown slot"),
        }
    }

    pub fn unlock_all(&mut self) {
        self.locks.unlock_all();
        debug!("unlocked all slots");
    }

    /// Copy one color, unless that slot is still showing its "Copied" badge.
    pub fn copy_one(&mut self, index: SlotIndex, now: Instant) {
        let Some(color) = self.palette.get(index) else {
            return;
        };
        if self.copied.is_active(index, now) {
            return;
        }
        self.write_clipboard(color.to_hex());
        self.copied.mark(index, now);
        debug!(index, %color, active = self.copied.len(), "copied color");
    }

    /// Copy every color; repeated calls restart the feedback window.
    pub fn copy_all(&mut self, now: Instant) {
        self.write_clipboard(self.palette.joined());
        self.copied_all.restart(now);
        debug!("copied palette");
    }

    pub fn is_copied(&self, index: SlotIndex, now: Instant) -> bool {
        self.copied.is_active(index, now)
    }

    pub fn is_all_copied(&self, now: Instant) -> bool {
        self.copied_all.is_active(now)
    }

    // Failures are reported to the log only; the feedback is shown regardless.
    fn write_clipboard(&mut self, text: String) {
        if let Err(err) = self.clipboard.set_text(text) {
            warn!(error = %err, "clipboard write failed");
        }
    }
}
