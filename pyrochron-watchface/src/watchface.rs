//! Watchface state
//!
//! Owns the animation engine together with everything it needs from the
//! platform: the canvas, the random source, the preferences and the time
//! text. Also acts as the engine's host by lending out a [`FrameHost`]
//! built from its own fields.

use pyrochron_core::traits::{
    DisplayBounds, FrameScheduler, FrameToken, RandomSource, RedrawRequest, SeededRandom,
};
use pyrochron_core::{AnimationEngine, BurstOutcome, FrameOutcome, Preferences, Size, Trigger};
use pyrochron_display::{format_time, render_frame, Canvas, ClockText, DisplayError};

use crate::config::WatchfaceConfig;
use crate::events::{AppEvent, ClockTime};
use crate::settings::{self, SettingValue, SettingsError};

/// One-shot frame request waiting to be armed by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingFrame {
    /// Delay from now
    pub delay_ms: u32,
    /// Token to hand back when the delay elapses
    pub token: FrameToken,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handled {
    /// A trigger went through the burst gate
    Burst(BurstOutcome),
    /// Settings applied; true if a preference changed and should be saved
    Settings(bool),
}

/// Engine host assembled from borrowed watchface fields
struct FrameHost<'a> {
    rng: &'a mut SeededRandom,
    bounds: Size,
    dirty: &'a mut bool,
    pending: &'a mut Option<PendingFrame>,
}

impl RandomSource for FrameHost<'_> {
    fn next_in_range(&mut self, min: i16, max: i16) -> i16 {
        self.rng.next_in_range(min, max)
    }
}

impl DisplayBounds for FrameHost<'_> {
    fn bounds(&self) -> Size {
        self.bounds
    }
}

impl RedrawRequest for FrameHost<'_> {
    fn mark_dirty(&mut self) {
        *self.dirty = true;
    }
}

impl FrameScheduler for FrameHost<'_> {
    fn schedule_after(&mut self, delay_ms: u32, token: FrameToken) {
        *self.pending = Some(PendingFrame { delay_ms, token });
    }
}

/// Firework watchface
pub struct Watchface<C> {
    config: WatchfaceConfig,
    engine: AnimationEngine,
    canvas: C,
    rng: SeededRandom,
    prefs: Preferences,
    time_text: ClockText,
    dirty: bool,
    pending: Option<PendingFrame>,
}

impl<C: Canvas + DisplayBounds> Watchface<C> {
    /// Create a watchface; `seed` seeds the particle RNG once
    pub fn new(canvas: C, config: WatchfaceConfig, prefs: Preferences, seed: u64) -> Self {
        Self {
            config,
            engine: AnimationEngine::new(config.animation),
            canvas,
            rng: SeededRandom::from_seed(seed),
            prefs,
            time_text: format_time(0, 0, config.clock_style),
            dirty: true,
            pending: None,
        }
    }

    /// Dispatch an event from the platform
    pub fn handle_event(&mut self, event: AppEvent) -> Result<Handled, SettingsError> {
        match event {
            AppEvent::MinuteTick(time) => Ok(Handled::Burst(self.on_minute(time))),
            AppEvent::AccelTap => Ok(Handled::Burst(self.fire(Trigger::AccelTap))),
            AppEvent::Connection { connected } => Ok(Handled::Burst(
                self.fire(Trigger::ConnectionChanged { connected }),
            )),
            AppEvent::Settings(batch) => self.apply_settings(&batch).map(Handled::Settings),
        }
    }

    /// Minute tick: refresh the time text, then maybe start a burst
    pub fn on_minute(&mut self, time: ClockTime) -> BurstOutcome {
        self.time_text = format_time(time.hour, time.minute, self.config.clock_style);
        self.dirty = true;
        self.fire(Trigger::MinuteTick)
    }

    /// Route a trigger through the engine's burst gate
    pub fn fire(&mut self, trigger: Trigger) -> BurstOutcome {
        let Self {
            engine,
            canvas,
            rng,
            prefs,
            dirty,
            pending,
            ..
        } = self;
        let mut host = FrameHost {
            rng,
            bounds: canvas.bounds(),
            dirty,
            pending,
        };

        let outcome = engine.trigger(trigger, prefs, &mut host);
        match outcome {
            BurstOutcome::Started(token) => debug!("Burst {} started by {:?}", token.burst, trigger),
            BurstOutcome::Ignored => trace!("Burst already running, {:?} ignored", trigger),
            BurstOutcome::Declined => trace!("{:?} does not fire", trigger),
        }
        outcome
    }

    /// One-shot frame timer elapsed
    pub fn on_frame(&mut self, token: FrameToken) -> FrameOutcome {
        let Self {
            engine,
            canvas,
            rng,
            dirty,
            pending,
            ..
        } = self;
        let mut host = FrameHost {
            rng,
            bounds: canvas.bounds(),
            dirty,
            pending,
        };

        let outcome = engine.on_scheduled_frame(token, &mut host);
        if outcome == FrameOutcome::Finished {
            debug!("Burst {} finished, budget {}", token.burst, engine.frame_budget());
        }
        outcome
    }

    /// Validate and apply a settings message
    pub fn apply_settings(&mut self, pairs: &[(u32, SettingValue)]) -> Result<bool, SettingsError> {
        let changed = settings::apply(&mut self.prefs, pairs)?;
        if changed {
            info!("Preferences updated: {:?}", self.prefs);
        }
        Ok(changed)
    }

    /// Render and flush if anything changed since the last frame
    ///
    /// Returns true if a frame was drawn.
    pub fn render_if_dirty(&mut self) -> Result<bool, DisplayError> {
        if !self.dirty {
            return Ok(false);
        }
        render_frame(&mut self.canvas, &self.engine, &self.time_text)?;
        self.canvas.flush()?;
        self.dirty = false;
        Ok(true)
    }

    /// Take the frame the engine asked for, if any
    pub fn take_pending_frame(&mut self) -> Option<PendingFrame> {
        self.pending.take()
    }

    /// Replace preferences (e.g. after loading them from storage)
    pub fn set_preferences(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    /// Current preferences
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Animation engine state
    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    /// Whether a burst is currently running
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Time text for the clock layer
    pub fn time_text(&self) -> &str {
        self.time_text.as_str()
    }

    /// Whether a redraw is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Underlying canvas
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Mutable canvas access (e.g. to update the obstructed area)
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}
