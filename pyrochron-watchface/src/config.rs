//! Watchface configuration

use pyrochron_core::AnimationConfig;
use pyrochron_display::ClockStyle;

/// Static watchface configuration, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchfaceConfig {
    /// Burst timing
    pub animation: AnimationConfig,
    /// Time text style, taken from the system clock setting
    pub clock_style: ClockStyle,
}
