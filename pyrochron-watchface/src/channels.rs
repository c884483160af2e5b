//! Inter-task communication
//!
//! Platform event sources (clock, accelerometer, connection and settings
//! services) post into [`APP_EVENTS`]; the animation task is the only
//! receiver.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicBool, Ordering};

use crate::events::AppEvent;

/// Channel capacity for application events
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Events for the animation task
pub static APP_EVENTS: Channel<CriticalSectionRawMutex, AppEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Set while a burst is on screen (e.g. to suppress other redraws)
pub static BURST_RUNNING: AtomicBool = AtomicBool::new(false);

/// Queue an event without waiting
///
/// Returns false if the channel is full and the event was dropped.
pub fn post_event(event: AppEvent) -> bool {
    match APP_EVENTS.try_send(event) {
        Ok(()) => true,
        Err(_) => {
            warn!("Event channel full, dropping event");
            false
        }
    }
}

/// Check if a burst is currently running
pub fn burst_running() -> bool {
    BURST_RUNNING.load(Ordering::Relaxed)
}
