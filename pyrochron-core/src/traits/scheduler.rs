//! One-shot frame scheduling

/// Identifies the burst a scheduled frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameToken {
    /// Burst sequence number (increments on every accepted burst request)
    pub burst: u32,
}

/// One-shot delayed callback primitive
///
/// The engine re-arms the timer after every frame; there is no periodic
/// timer. When the delay elapses the host must call
/// [`AnimationEngine::on_scheduled_frame`](crate::AnimationEngine::on_scheduled_frame)
/// with the same token.
pub trait FrameScheduler {
    /// Request a single frame callback after `delay_ms` milliseconds
    fn schedule_after(&mut self, delay_ms: u32, token: FrameToken);
}
