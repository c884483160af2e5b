//! Trigger policy
//!
//! Maps host events onto burst requests. Every trigger funnels through the
//! same Idle-only gate in [`AnimationEngine`](crate::AnimationEngine).

use crate::animation::BurstRequest;
use crate::config::Preferences;

/// External events that may set off a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Wall clock crossed a minute boundary
    MinuteTick,
    /// Accelerometer tap (wrist flick)
    AccelTap,
    /// Phone connectivity changed
    ConnectionChanged { connected: bool },
}

impl Trigger {
    /// Decide which burst, if any, this event asks for
    ///
    /// - Minute ticks follow the fire-on-minute preference.
    /// - Taps always ask for a full burst; the preference still decides
    ///   whether the budget is cleared once it ends.
    /// - Losing the connection asks for a full burst as a visual alert when
    ///   bluetooth alerts are enabled. Reconnecting never fires.
    pub fn burst_request(self, prefs: &Preferences) -> Option<BurstRequest> {
        match self {
            Trigger::MinuteTick => Some(BurstRequest::repeating(prefs.fire_on_minute)),
            Trigger::AccelTap => Some(BurstRequest {
                full_budget: true,
                auto_repeat: prefs.fire_on_minute,
            }),
            Trigger::ConnectionChanged { connected: false } if prefs.bluetooth_alert => {
                Some(BurstRequest {
                    full_budget: true,
                    auto_repeat: prefs.fire_on_minute,
                })
            }
            Trigger::ConnectionChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Preferences = Preferences {
        fire_on_minute: false,
        bluetooth_alert: false,
    };

    #[test]
    fn test_minute_follows_preference() {
        let on = Trigger::MinuteTick.burst_request(&Preferences::default());
        assert_eq!(on, Some(BurstRequest::repeating(true)));

        let off = Trigger::MinuteTick.burst_request(&QUIET);
        assert_eq!(off, Some(BurstRequest::repeating(false)));
    }

    #[test]
    fn test_tap_always_full() {
        let req = Trigger::AccelTap.burst_request(&QUIET).unwrap();
        assert!(req.full_budget);
        assert!(!req.auto_repeat);
    }

    #[test]
    fn test_connection_lost_alert() {
        let lost = Trigger::ConnectionChanged { connected: false };
        let req = lost.burst_request(&Preferences::default()).unwrap();
        assert!(req.full_budget);

        assert_eq!(lost.burst_request(&QUIET), None);
    }

    #[test]
    fn test_connection_regained_never_fires() {
        let back = Trigger::ConnectionChanged { connected: true };
        assert_eq!(back.burst_request(&Preferences::default()), None);
    }
}
