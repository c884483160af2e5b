//! Palette and color banding
//!
//! On color panels a burst cools down from red through orange and yellow
//! to white as frames elapse. Monochrome panels always draw white.

/// Colors used by the firework renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Orange,
    Rajah,
    ChromeYellow,
    Yellow,
}

impl Color {
    /// Whether a 1-bit panel should switch the pixel on
    pub const fn is_lit(self) -> bool {
        !matches!(self, Color::Black)
    }
}

/// Panel color capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// Black and white only
    #[default]
    Monochrome,
    /// Limited color palette
    Color,
}

/// Stroke color for trails at a given elapsed frame count
pub fn band_color(frame_count: u16, mode: ColorMode) -> Color {
    if mode == ColorMode::Monochrome {
        return Color::White;
    }

    match frame_count {
        0..=9 => Color::Red,
        10..=29 => Color::Orange,
        30..=59 => Color::Rajah,
        60..=69 => Color::ChromeYellow,
        70..=89 => Color::Yellow,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_bands() {
        let mode = ColorMode::Color;
        assert_eq!(band_color(0, mode), Color::Red);
        assert_eq!(band_color(9, mode), Color::Red);
        assert_eq!(band_color(10, mode), Color::Orange);
        assert_eq!(band_color(29, mode), Color::Orange);
        assert_eq!(band_color(30, mode), Color::Rajah);
        assert_eq!(band_color(60, mode), Color::ChromeYellow);
        assert_eq!(band_color(70, mode), Color::Yellow);
        assert_eq!(band_color(89, mode), Color::Yellow);
        assert_eq!(band_color(90, mode), Color::White);
        assert_eq!(band_color(150, mode), Color::White);
    }

    #[test]
    fn test_monochrome_always_white() {
        for frame in [0, 15, 45, 65, 80, 149] {
            assert_eq!(band_color(frame, ColorMode::Monochrome), Color::White);
        }
    }

    #[test]
    fn test_only_black_is_unlit() {
        assert!(!Color::Black.is_lit());
        assert!(Color::Red.is_lit());
        assert!(Color::White.is_lit());
    }
}
