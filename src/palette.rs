/// Palette regeneration honoring the lock mask.
use rand::RngExt;

use crate::color::{random_color, random_color_with};
use crate::types::{LockMask, PALETTE_SIZE, Palette};

/// Build a palette of five fresh random colors.
pub fn random_palette() -> Palette {
    Palette::new(std::array::from_fn(|_| random_color()))
}

/// Re-roll every unlocked slot, keeping locked slots verbatim.
pub fn generate_palette(current: &Palette, mask: &LockMask) -> Palette {
    let mut rng = rand::rng();
    generate_palette_with(&mut rng, current, mask)
}

pub fn generate_palette_with<R: RngExt + ?Sized>(
    rng: &mut R,
    current: &Palette,
    mask: &LockMask,
) -> Palette {
    let mut colors = *current.colors();
    for (index, color) in colors.iter_mut().enumerate() {
        if !mask.is_locked(index) {
            *color = random_color_with(rng);
        }
    }
    Palette::new(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Palette {
        Palette::new([
            Color::new(0x12, 0x34, 0x56),
            Color::new(0xFF, 0xFF, 0xFF),
            Color::new(0x00, 0x00, 0x00),
            Color::new(0xA1, 0xB2, 0xC3),
            Color::new(0x80, 0x80, 0x80),
        ])
    }

    #[test]
    fn fully_locked_mask_returns_input() {
        let palette = sample();
        let mask = LockMask::new([true; PALETTE_SIZE]);
        assert_eq!(generate_palette(&palette, &mask), palette);
    }

    #[test]
    fn locked_slots_survive_every_mask() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = sample();
        for bits in 0u8..32 {
            let locked: [bool; PALETTE_SIZE] = std::array::from_fn(|i| bits & (1 << i) != 0);
            let mask = LockMask::new(locked);
            let next = generate_palette_with(&mut rng, &palette, &mask);
            assert_eq!(next.colors().len(), PALETTE_SIZE);
            for (index, is_locked) in locked.iter().enumerate() {
                if *is_locked {
                    assert_eq!(next.get(index), palette.get(index), "mask {bits:05b}");
                }
            }
        }
    }

    #[test]
    fn unlocked_mask_rerolls_slots() {
        let mut rng = StdRng::seed_from_u64(11);
        let palette = sample();
        let rerolled = (0..10).any(|_| {
            generate_palette_with(&mut rng, &palette, &LockMask::default()) != palette
        });
        assert!(rerolled);
    }

    #[test]
    fn random_palette_has_five_colors() {
        let palettes: Vec<Palette> = (0..5).map(|_| random_palette()).collect();
        for palette in &palettes {
            assert_eq!(palette.iter().count(), PALETTE_SIZE);
        }
        assert!(palettes.iter().any(|palette| *palette != palettes[0]));
    }
}
