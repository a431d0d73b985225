//! Screen geometry shared by rendering and mouse hit testing.
use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::types::{PALETTE_SIZE, SlotIndex};

pub const LOCK_BADGE_WIDTH: u16 = 8;
pub const COPIED_BADGE_WIDTH: u16 = 8;

/// Something clickable on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Lock(SlotIndex),
    Tile(SlotIndex),
    Regenerate,
    UnlockAll,
    CopyAll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteLayout {
    pub header: Rect,
    pub tiles: [Rect; PALETTE_SIZE],
    pub lock_badges: [Rect; PALETTE_SIZE],
    pub copied_badges: [Rect; PALETTE_SIZE],
    pub regenerate: Rect,
    pub unlock_all: Rect,
    pub copy_all: Rect,
    pub footer: Rect,
}

impl PaletteLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let tiles = to_array(
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
                .split(rows[1]),
        );
        let lock_badges = tiles.map(|tile| {
            let inner = tile.inner(Margin::new(1, 1));
            let x = inner.right().saturating_sub(LOCK_BADGE_WIDTH + 1);
            Rect::new(x, inner.y, LOCK_BADGE_WIDTH, 1).intersection(inner)
        });
        let copied_badges = tiles.map(|tile| {
            let inner = tile.inner(Margin::new(1, 1));
            Rect::new(inner.x + 1, inner.y, COPIED_BADGE_WIDTH, 1).intersection(inner)
        });

        let actions = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[2]);

        Self {
            header: rows[0],
            tiles,
            lock_badges,
            copied_badges,
            regenerate: actions[0],
            unlock_all: actions[1],
            copy_all: actions[2],
            footer: rows[3],
        }
    }

    /// What sits under the pointer. Lock badges win over the tile behind them.
    pub fn hit(&self, position: Position) -> Option<Hit> {
        if let Some(index) = self.lock_badges.iter().position(|r| r.contains(position)) {
            return Some(Hit::Lock(index));
        }
        if let Some(index) = self.tiles.iter().position(|r| r.contains(position)) {
            return Some(Hit::Tile(index));
        }
        if self.regenerate.contains(position) {
            Some(Hit::Regenerate)
        } else if self.unlock_all.contains(position) {
            Some(Hit::UnlockAll)
        } else if self.copy_all.contains(position) {
            Some(Hit::CopyAll)
        } else {
            None
        }
    }
}

fn to_array(chunks: Rc<[Rect]>) -> [Rect; PALETTE_SIZE] {
    std::array::from_fn(|index| chunks.get(index).copied().unwrap_or_default())
}
