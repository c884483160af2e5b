//! Clock text for the time layer

use core::fmt::Write;

use heapless::String;

/// Longest rendered time ("23:59")
pub const CLOCK_TEXT_LEN: usize = 5;

/// Formatted time text
pub type ClockText = String<CLOCK_TEXT_LEN>;

/// Wall clock display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// `HH:MM`, zero padded
    #[default]
    TwentyFourHour,
    /// `h:MM`, no leading zero, midnight and noon shown as 12
    TwelveHour,
}

/// Format a wall clock time
pub fn format_time(hour: u8, minute: u8, style: ClockStyle) -> ClockText {
    let hour = hour % 24;
    let minute = minute % 60;
    let mut text = ClockText::new();

    let _ = match style {
        ClockStyle::TwentyFourHour => write!(text, "{:02}:{:02}", hour, minute),
        ClockStyle::TwelveHour => {
            let h = match hour % 12 {
                0 => 12,
                h => h,
            };
            write!(text, "{}:{:02}", h, minute)
        }
    };

    text
}
