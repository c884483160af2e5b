//! Application events
//!
//! Everything the platform's event sources feed into the watchface.

use crate::settings::SettingsBatch;

/// Wall clock time at a minute boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl ClockTime {
    /// Create a clock time
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

/// Events delivered to the watchface task
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppEvent {
    /// Minute tick from the clock service
    MinuteTick(ClockTime),
    /// Tap from the accelerometer service
    AccelTap,
    /// Phone connection state changed
    Connection { connected: bool },
    /// Settings message from the companion app
    Settings(SettingsBatch),
}
