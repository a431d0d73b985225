use ratatui::style::Color;

use super::theme::Theme;
use crate::color::Color as Swatch;

pub fn swatch_to_color(swatch: Swatch) -> Color {
    Color::Rgb(swatch.red(), swatch.green(), swatch.blue())
}

/// Main text color on top of a swatch, and the opposite shade for badges.
pub fn ink_and_paper(swatch: Swatch) -> (Color, Color) {
    if swatch.is_light() {
        (Theme::ink_dark(), Color::White)
    } else {
        (Color::White, Theme::ink_dark())
    }
}

pub fn muted_ink(swatch: Swatch) -> Color {
    if swatch.is_light() {
        Theme::ink_dark_muted()
    } else {
        Theme::ink_light_muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_follows_brightness() {
        let white = Swatch::new(255, 255, 255);
        let black = Swatch::new(0, 0, 0);
        assert_eq!(ink_and_paper(white), (Theme::ink_dark(), Color::White));
        assert_eq!(ink_and_paper(black), (Color::White, Theme::ink_dark()));
        assert_eq!(muted_ink(black), Theme::ink_light_muted());
        assert_eq!(swatch_to_color(Swatch::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
