//! Countdown state machine behind the two-phase clear-all operation.
//!
//! Clearing every record is irreversible, so confirmation is only permitted
//! after a fixed countdown has elapsed. The driver (a timer task, or tests
//! calling [`ClearCountdown::tick`] directly) supplies the clock; this type
//! only tracks armed/disarmed state and the remaining ticks.

/// Ticks between arming and the earliest permitted confirmation
pub const CLEAR_COUNTDOWN_SECS: u8 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClearCountdown {
    #[default]
    Disarmed,
    Armed {
        remaining: u8,
    },
}

impl ClearCountdown {
    /// Arms the countdown at the full duration; re-arming restarts it
    pub fn arm(&mut self) {
        *self = Self::Armed {
            remaining: CLEAR_COUNTDOWN_SECS,
        };
    }

    /// Disarms, discarding any remaining countdown; idempotent
    pub fn disarm(&mut self) {
        *self = Self::Disarmed;
    }

    /// Advances the countdown by one tick.
    ///
    /// Returns `true` while the countdown is still running, so a driving
    /// timer knows to keep ticking. Disarmed or already-elapsed countdowns
    /// are left untouched.
    pub fn tick(&mut self) -> bool {
        match self {
            Self::Armed { remaining } if *remaining > 0 => {
                *remaining -= 1;
                *remaining > 0
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Whether confirmation is currently permitted
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Armed { remaining: 0 })
    }

    /// Remaining ticks, or `None` when disarmed
    pub fn remaining(&self) -> Option<u8> {
        match self {
            Self::Armed { remaining } => Some(*remaining),
            Self::Disarmed => None,
        }
    }
}
