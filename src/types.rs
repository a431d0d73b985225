use crate::color::Color;

/// Number of slots shown side by side.
pub const PALETTE_SIZE: usize = 5;

pub type SlotIndex = usize;

/// The ordered set of colors currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    pub fn get(&self, index: SlotIndex) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// All colors joined the way "copy all" puts them on the clipboard.
    pub fn joined(&self) -> String {
        self.colors
            .iter()
            .map(Color::to_hex)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Per-slot flag deciding whether a color survives regeneration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockMask {
    locked: [bool; PALETTE_SIZE],
}

impl LockMask {
    pub fn new(locked: [bool; PALETTE_SIZE]) -> Self {
        Self { locked }
    }

    pub fn is_locked(&self, index: SlotIndex) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    /// Flips one slot. Returns the new state, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: SlotIndex) -> Option<bool> {
        let slot = self.locked.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn unlock_all(&mut self) {
        self.locked = [false; PALETTE_SIZE];
    }

    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|locked| **locked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grays() -> Palette {
        Palette::new([
            Color::new(0xAA, 0xAA, 0xAA),
            Color::new(0xBB, 0xBB, 0xBB),
            Color::new(0xCC, 0xCC, 0xCC),
            Color::new(0xDD, 0xDD, 0xDD),
            Color::new(0xEE, 0xEE, 0xEE),
        ])
    }

    #[test]
    fn joins_colors_with_comma_space() {
        assert_eq!(
            grays().joined(),
            "#AAAAAA, #BBBBBB, #CCCCCC, #DDDDDD, #EEEEEE"
        );
    }

    #[test]
    fn toggle_twice_restores_mask() {
        let mut mask = LockMask::default();
        assert_eq!(mask.toggle(2), Some(true));
        assert!(mask.is_locked(2));
        assert_eq!(mask.locked_count(), 1);
        assert_eq!(mask.toggle(2), Some(false));
        assert_eq!(mask, LockMask::default());
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut mask = LockMask::default();
        assert_eq!(mask.toggle(PALETTE_SIZE), None);
        assert_eq!(mask, LockMask::default());
        assert!(!mask.is_locked(PALETTE_SIZE));
    }

    #[test]
    fn unlock_all_clears_every_slot() {
        let mut mask = LockMask::new([true, false, true, true, false]);
        mask.unlock_all();
        assert_eq!(mask.locked_count(), 0);
        mask.unlock_all();
        assert_eq!(mask, LockMask::default());
    }
}
