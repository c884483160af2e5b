//! Animation task
//!
//! Waits on either the next application event or the one-shot frame
//! deadline, feeds the watchface, persists changed preferences and pushes
//! dirty frames to the display.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{Duration, Instant, Timer};
use portable_atomic::{AtomicBool, Ordering};

use pyrochron_core::traits::{DisplayBounds, FrameToken};
use pyrochron_core::{BurstOutcome, FrameOutcome};
use pyrochron_display::Canvas;

use crate::channels::BURST_RUNNING;
use crate::events::{AppEvent, ClockTime};
use crate::storage::{load_preferences, save_preferences, PreferenceStore};
use crate::watchface::{Handled, Watchface};

/// The single armed frame deadline
///
/// An event arriving before the deadline leaves it armed; only a new frame
/// request from the engine replaces it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    armed: Option<(Instant, FrameToken)>,
}

impl FrameClock {
    /// Create a clock with nothing armed
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// When the next frame is due, if one is armed
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|(at, _)| at)
    }

    /// Deadline reached: disarm and deliver the frame
    ///
    /// Returns `None` if nothing was armed.
    pub fn expire<C: Canvas + DisplayBounds>(
        &mut self,
        watchface: &mut Watchface<C>,
    ) -> Option<FrameOutcome> {
        let (_, token) = self.armed.take()?;
        Some(watchface.on_frame(token))
    }

    /// Bookkeeping after every wakeup
    ///
    /// Arms the frame the engine asked for (relative to `now`) and publishes
    /// whether a burst is running.
    pub fn settle<C: Canvas + DisplayBounds>(
        &mut self,
        watchface: &mut Watchface<C>,
        now: Instant,
        running: &AtomicBool,
    ) {
        if let Some(frame) = watchface.take_pending_frame() {
            let at = now + Duration::from_millis(frame.delay_ms as u64);
            self.armed = Some((at, frame.token));
        }
        running.store(watchface.is_running(), Ordering::Relaxed);
    }
}

/// Handle one event, saving preferences if it changed them
pub async fn run_event<C, S>(watchface: &mut Watchface<C>, store: &mut S, event: AppEvent)
where
    C: Canvas + DisplayBounds,
    S: PreferenceStore,
{
    match watchface.handle_event(event) {
        Ok(Handled::Settings(true)) => {
            if let Err(e) = save_preferences(store, watchface.preferences()).await {
                warn!("Failed to save preferences: {:?}", e);
            }
        }
        Ok(_) => {}
        Err(e) => warn!("Settings rejected: {:?}", e),
    }
}

/// Startup: restore preferences, show the current time and fire the
/// opening burst
pub async fn boot<C, S>(watchface: &mut Watchface<C>, store: &mut S, now: ClockTime) -> BurstOutcome
where
    C: Canvas + DisplayBounds,
    S: PreferenceStore,
{
    let prefs = load_preferences(store).await;
    watchface.set_preferences(prefs);
    watchface.on_minute(now)
}

/// Animation task - main loop of the watchface
///
/// `now` is the wall clock time at startup. Generic over the channel's
/// mutex so the platform picks the static it posts to.
pub async fn animation_task<C, S, M, const N: usize>(
    mut watchface: Watchface<C>,
    mut store: S,
    now: ClockTime,
    events: Receiver<'_, M, AppEvent, N>,
) -> !
where
    C: Canvas + DisplayBounds,
    S: PreferenceStore,
    M: RawMutex,
{
    info!("Animation task started");

    boot(&mut watchface, &mut store, now).await;

    let mut clock = FrameClock::new();
    clock.settle(&mut watchface, Instant::now(), &BURST_RUNNING);

    loop {
        if let Err(e) = watchface.render_if_dirty() {
            warn!("Display update failed: {:?}", e);
        }

        let deadline = clock.deadline();
        let frame_timer = async move {
            match deadline {
                Some(at) => Timer::at(at).await,
                None => core::future::pending::<()>().await,
            }
        };

        let woke = select(events.receive(), frame_timer).await;
        match woke {
            Either::First(event) => {
                run_event(&mut watchface, &mut store, event).await;
            }
            Either::Second(()) => {
                clock.expire(&mut watchface);
            }
        }

        clock.settle(&mut watchface, Instant::now(), &BURST_RUNNING);
    }
}
