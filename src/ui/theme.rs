use ratatui::style::Color;

/// Unified color theme for the application chrome
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for headings
    pub fn accent() -> Color {
        Color::LightBlue
    }

    /// Key names in the help screen
    pub fn key() -> Color {
        Color::Green
    }

    /// Badge of a locked slot
    pub fn locked() -> Color {
        Color::Rgb(234, 179, 8)
    }

    /// Ink used on top of light swatches
    pub fn ink_dark() -> Color {
        Color::Rgb(31, 41, 55)
    }

    /// Secondary ink on light swatches
    pub fn ink_dark_muted() -> Color {
        Color::Rgb(55, 65, 81)
    }

    /// Secondary ink on dark swatches
    pub fn ink_light_muted() -> Color {
        Color::Rgb(209, 213, 219)
    }

    pub fn regenerate_button() -> Color {
        Color::Rgb(202, 138, 4)
    }

    pub fn unlock_button() -> Color {
        Color::Rgb(37, 99, 235)
    }

    pub fn copy_button() -> Color {
        Color::Rgb(75, 85, 99)
    }
}
