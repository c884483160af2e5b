//! Burst controller
//!
//! Owns the particle pool and the frame counter. A burst starts only from
//! Idle, evaluates its first frame synchronously, then re-arms a one-shot
//! frame timer after every frame until the budget is used up.

use super::state::{AnimationState, BurstEvent};
use crate::config::{AnimationConfig, Preferences};
use crate::particle::ParticlePool;
use crate::traits::{AnimationHost, FrameToken};
use crate::trigger::Trigger;

/// Parameters of a single burst request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstRequest {
    /// Reset the frame budget to the full budget before starting
    pub full_budget: bool,
    /// Keep the budget after the burst; when false it is cleared to 0
    pub auto_repeat: bool,
}

impl BurstRequest {
    /// Request whose budget and repeat behaviour follow the same flag
    pub const fn repeating(repeat_enabled: bool) -> Self {
        Self {
            full_budget: repeat_enabled,
            auto_repeat: repeat_enabled,
        }
    }
}

/// Result of asking for a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BurstOutcome {
    /// A new burst started
    Started(FrameToken),
    /// A burst was already running; nothing changed
    Ignored,
    /// The trigger policy does not fire for this event
    Declined,
}

/// Result of a frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// Particles advanced and another frame was scheduled
    Continued,
    /// Budget exhausted; the engine is Idle again
    Finished,
    /// No burst running, or the token belongs to an older burst
    Ignored,
}

/// Single owned animation engine
#[derive(Debug, Clone)]
pub struct AnimationEngine {
    config: AnimationConfig,
    state: AnimationState,
    pool: ParticlePool,
    frame_count: u16,
    frame_budget: u16,
    auto_repeat: bool,
    burst: u32,
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationEngine {
    /// Create an idle engine
    ///
    /// The budget starts full so the first burst after startup always plays.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            state: AnimationState::Idle,
            pool: ParticlePool::new(),
            frame_count: 0,
            frame_budget: config.full_budget,
            auto_repeat: true,
            burst: 0,
        }
    }

    /// Start a burst whose budget and repeat behaviour follow `repeat_enabled`
    pub fn request_burst<H: AnimationHost + ?Sized>(
        &mut self,
        repeat_enabled: bool,
        host: &mut H,
    ) -> BurstOutcome {
        self.start_burst(BurstRequest::repeating(repeat_enabled), host)
    }

    /// Route an external event through the trigger policy
    pub fn trigger<H: AnimationHost + ?Sized>(
        &mut self,
        trigger: Trigger,
        prefs: &Preferences,
        host: &mut H,
    ) -> BurstOutcome {
        match trigger.burst_request(prefs) {
            Some(request) => self.start_burst(request, host),
            None => BurstOutcome::Declined,
        }
    }

    /// Start a burst if the engine is Idle
    ///
    /// While a burst is running this is a no-op that leaves every counter
    /// and particle untouched.
    pub fn start_burst<H: AnimationHost + ?Sized>(
        &mut self,
        request: BurstRequest,
        host: &mut H,
    ) -> BurstOutcome {
        if self.state.is_running() {
            return BurstOutcome::Ignored;
        }

        self.frame_count = 0;
        let bounds = host.bounds();
        let center = ParticlePool::random_center(host, bounds);
        self.pool.spawn_all(host, center);

        if request.full_budget {
            self.frame_budget = self.config.full_budget;
        }
        self.auto_repeat = request.auto_repeat;
        self.burst = self.burst.wrapping_add(1);
        self.state = self.state.transition(BurstEvent::BurstRequested);

        // First frame is evaluated now, not deferred
        self.advance_frame(host);
        BurstOutcome::Started(self.token())
    }

    /// Frame callback from the host scheduler
    pub fn on_frame_tick<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::Ignored;
        }
        self.advance_frame(host)
    }

    /// Frame callback carrying the token handed to `schedule_after`
    ///
    /// Tokens from an earlier burst are dropped.
    pub fn on_scheduled_frame<H: AnimationHost + ?Sized>(
        &mut self,
        token: FrameToken,
        host: &mut H,
    ) -> FrameOutcome {
        if token != self.token() {
            return FrameOutcome::Ignored;
        }
        self.on_frame_tick(host)
    }

    fn advance_frame<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> FrameOutcome {
        self.frame_count = self.frame_count.saturating_add(1);

        // Exhaustion is checked before re-arming so no tick follows Idle
        if self.frame_count >= self.frame_budget {
            self.state = self.state.transition(BurstEvent::BudgetExhausted);
            if !self.auto_repeat {
                self.frame_budget = 0;
            }
            host.mark_dirty();
            return FrameOutcome::Finished;
        }

        self.pool.integrate();
        host.mark_dirty();
        host.schedule_after(self.config.frame_interval_ms, self.token());
        FrameOutcome::Continued
    }

    /// Token of the current (or most recent) burst
    pub fn token(&self) -> FrameToken {
        FrameToken { burst: self.burst }
    }

    /// Current run state
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Check if a burst is in progress
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Frames elapsed in the current burst
    pub fn frame_count(&self) -> u16 {
        self.frame_count
    }

    /// Maximum frames for the current or next burst (0 disables minute bursts)
    pub fn frame_budget(&self) -> u16 {
        self.frame_budget
    }

    /// Particle state for rendering
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Timing configuration
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::traits::{
        DisplayBounds, FrameScheduler, RandomSource, RedrawRequest, SeededRandom,
    };

    struct TestHost {
        rng: SeededRandom,
        bounds: Size,
        dirty_marks: u32,
        scheduled: u32,
        last_delay_ms: Option<u32>,
        last_token: Option<FrameToken>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                rng: SeededRandom::from_seed(0xF1E2),
                bounds: Size::new(144, 168),
                dirty_marks: 0,
                scheduled: 0,
                last_delay_ms: None,
                last_token: None,
            }
        }
    }

    impl RandomSource for TestHost {
        fn next_in_range(&mut self, min: i16, max: i16) -> i16 {
            self.rng.next_in_range(min, max)
        }
    }

    impl DisplayBounds for TestHost {
        fn bounds(&self) -> Size {
            self.bounds
        }
    }

    impl RedrawRequest for TestHost {
        fn mark_dirty(&mut self) {
            self.dirty_marks += 1;
        }
    }

    impl FrameScheduler for TestHost {
        fn schedule_after(&mut self, delay_ms: u32, token: FrameToken) {
            self.scheduled += 1;
            self.last_delay_ms = Some(delay_ms);
            self.last_token = Some(token);
        }
    }

    /// Drive scheduled frames until the host stops being asked for more
    fn run_to_idle(engine: &mut AnimationEngine, host: &mut TestHost) -> u32 {
        let mut ticks = 0;
        while engine.is_running() {
            engine.on_frame_tick(host);
            ticks += 1;
            assert!(ticks < 1000, "burst never finished");
        }
        ticks
    }

    #[test]
    fn test_engine_creation() {
        let engine = AnimationEngine::default();
        assert_eq!(engine.state(), AnimationState::Idle);
        assert_eq!(engine.frame_count(), 0);
        assert_eq!(engine.frame_budget(), 150);
        assert!(engine.pool().is_settled());
    }

    #[test]
    fn test_request_runs_first_frame_synchronously() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        let outcome = engine.request_burst(true, &mut host);

        assert_eq!(outcome, BurstOutcome::Started(FrameToken { burst: 1 }));
        assert!(engine.is_running());
        assert_eq!(engine.frame_count(), 1);
        assert_eq!(host.dirty_marks, 1);
        assert_eq!(host.scheduled, 1);
        assert_eq!(host.last_delay_ms, Some(33));
        assert_eq!(host.last_token, Some(FrameToken { burst: 1 }));
    }

    #[test]
    fn test_full_burst_with_repeat_keeps_budget() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(true, &mut host);
        for _ in 0..150 {
            engine.on_frame_tick(&mut host);
        }

        assert_eq!(engine.state(), AnimationState::Idle);
        assert_eq!(engine.frame_budget(), 150);
        assert_eq!(engine.frame_count(), 150);
    }

    #[test]
    fn test_full_burst_without_repeat_clears_budget() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(false, &mut host);
        for _ in 0..150 {
            engine.on_frame_tick(&mut host);
        }

        assert_eq!(engine.state(), AnimationState::Idle);
        assert_eq!(engine.frame_budget(), 0);
    }

    #[test]
    fn test_frame_and_schedule_counts() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(true, &mut host);
        let ticks = run_to_idle(&mut engine, &mut host);

        // Synchronous first frame plus 149 scheduled ticks reach frame 150
        assert_eq!(ticks, 149);
        // Frames 1..=149 re-arm the timer, frame 150 does not
        assert_eq!(host.scheduled, 149);
        // Every frame marks dirty, including the final flush
        assert_eq!(host.dirty_marks, 150);
    }

    #[test]
    fn test_no_schedule_after_idle() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(true, &mut host);
        run_to_idle(&mut engine, &mut host);
        let scheduled = host.scheduled;
        let marks = host.dirty_marks;

        assert_eq!(engine.on_frame_tick(&mut host), FrameOutcome::Ignored);
        assert_eq!(host.scheduled, scheduled);
        assert_eq!(host.dirty_marks, marks);
    }

    #[test]
    fn test_request_while_running_is_ignored() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(false, &mut host);
        for _ in 0..10 {
            engine.on_frame_tick(&mut host);
        }

        let snapshot = engine.clone();
        let outcome = engine.request_burst(true, &mut host);

        assert_eq!(outcome, BurstOutcome::Ignored);
        assert_eq!(engine.frame_count(), snapshot.frame_count());
        assert_eq!(engine.frame_budget(), snapshot.frame_budget());
        assert_eq!(engine.pool(), snapshot.pool());
        assert_eq!(engine.token(), snapshot.token());
    }

    #[test]
    fn test_zero_budget_finishes_immediately() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(false, &mut host);
        run_to_idle(&mut engine, &mut host);
        assert_eq!(engine.frame_budget(), 0);

        let scheduled = host.scheduled;
        let outcome = engine.request_burst(false, &mut host);

        assert!(matches!(outcome, BurstOutcome::Started(_)));
        assert!(!engine.is_running());
        assert_eq!(engine.frame_count(), 1);
        assert_eq!(host.scheduled, scheduled);
    }

    #[test]
    fn test_repeat_request_restores_budget() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(false, &mut host);
        run_to_idle(&mut engine, &mut host);
        assert_eq!(engine.frame_budget(), 0);

        engine.request_burst(true, &mut host);
        assert_eq!(engine.frame_budget(), 150);
        assert!(engine.is_running());
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();

        engine.request_burst(true, &mut host);
        run_to_idle(&mut engine, &mut host);
        let old = engine.token();

        engine.request_burst(true, &mut host);
        let count = engine.frame_count();

        assert_eq!(engine.on_scheduled_frame(old, &mut host), FrameOutcome::Ignored);
        assert_eq!(engine.frame_count(), count);

        let current = engine.token();
        assert_eq!(
            engine.on_scheduled_frame(current, &mut host),
            FrameOutcome::Continued
        );
        assert_eq!(engine.frame_count(), count + 1);
    }

    #[test]
    fn test_spawn_center_follows_current_bounds() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();
        host.bounds = Size::new(144, 40);

        for _ in 0..20 {
            engine.request_burst(true, &mut host);
            assert!(engine.pool().spawn_center().y < 40);
            run_to_idle(&mut engine, &mut host);
        }
    }

    #[test]
    fn test_tap_overrides_preference_for_one_burst() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();
        let prefs = Preferences {
            fire_on_minute: false,
            bluetooth_alert: true,
        };

        // Minute tick with repeat disabled runs the startup burst then clears
        engine.trigger(Trigger::MinuteTick, &prefs, &mut host);
        run_to_idle(&mut engine, &mut host);
        assert_eq!(engine.frame_budget(), 0);

        // Tap plays a full burst
        engine.trigger(Trigger::AccelTap, &prefs, &mut host);
        assert!(engine.is_running());
        run_to_idle(&mut engine, &mut host);
        assert_eq!(engine.frame_count(), 150);

        // ...and the preference still clears the budget afterwards
        assert_eq!(engine.frame_budget(), 0);
    }

    #[test]
    fn test_connection_regained_declined() {
        let mut engine = AnimationEngine::default();
        let mut host = TestHost::new();
        let prefs = Preferences::default();

        let outcome = engine.trigger(
            Trigger::ConnectionChanged { connected: true },
            &prefs,
            &mut host,
        );
        assert_eq!(outcome, BurstOutcome::Declined);
        assert!(!engine.is_running());
        assert_eq!(host.dirty_marks, 0);
    }
}
