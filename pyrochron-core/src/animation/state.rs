//! Burst state machine
//!
//! A burst is either running or not. Transitions are explicit and any
//! event that does not apply to the current state leaves it unchanged.

/// Animation run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    /// No burst in progress; the next trigger may start one
    #[default]
    Idle,
    /// Burst in progress; frames are being scheduled
    Running,
}

/// Events that drive the burst state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BurstEvent {
    /// A trigger asked for a new burst
    BurstRequested,
    /// The frame budget of the current burst ran out
    BudgetExhausted,
}

impl AnimationState {
    /// Check if a burst is in progress
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: BurstEvent) -> Self {
        use AnimationState::*;
        use BurstEvent::*;

        match (self, event) {
            (Idle, BurstRequested) => Running,
            (Running, BudgetExhausted) => Idle,

            // Overlapping requests and stray exhaustion are ignored
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_to_running() {
        let next = AnimationState::Idle.transition(BurstEvent::BurstRequested);
        assert_eq!(next, AnimationState::Running);
    }

    #[test]
    fn test_running_ignores_request() {
        let next = AnimationState::Running.transition(BurstEvent::BurstRequested);
        assert_eq!(next, AnimationState::Running);
    }

    #[test]
    fn test_exhaustion_returns_to_idle() {
        let next = AnimationState::Running.transition(BurstEvent::BudgetExhausted);
        assert_eq!(next, AnimationState::Idle);
        assert_eq!(next.transition(BurstEvent::BudgetExhausted), AnimationState::Idle);
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(AnimationState::default(), AnimationState::Idle);
        assert!(!AnimationState::Idle.is_running());
        assert!(AnimationState::Running.is_running());
    }
}
