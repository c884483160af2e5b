//! Animation timing configuration

/// Delay between frames in milliseconds (~30 fps)
pub const FRAME_INTERVAL_MS: u32 = 33;

/// Frame budget of a full burst
pub const FULL_FRAME_BUDGET: u16 = 150;

/// Burst timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    /// One-shot delay requested after each frame
    pub frame_interval_ms: u32,
    /// Frame budget applied when a burst asks for a full run
    pub full_budget: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            full_budget: FULL_FRAME_BUDGET,
        }
    }
}
