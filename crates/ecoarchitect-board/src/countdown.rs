//! Scenario countdown.
//!
//! The countdown is advanced by an external one-second trigger. It only
//! decrements while active, and reports exhaustion exactly once: the tick
//! that reaches zero also deactivates it, and a countdown at zero cannot be
//! resumed.

/// Result of one [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was paused or already exhausted; nothing changed.
    Idle,
    /// One second elapsed; this many remain.
    Running(u32),
    /// This tick used the last second.
    Expired,
}

/// Seconds left in the current scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// A paused countdown holding `seconds`.
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            active: false,
        }
    }

    /// A paused countdown for a scenario lasting `minutes`.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::new(minutes.saturating_mul(60))
    }

    /// Seconds remaining.
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether ticks currently decrement.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Start or resume. Has no effect once exhausted.
    pub const fn resume(&mut self) {
        self.active = self.remaining > 0;
    }

    /// Stop decrementing without losing the remaining time.
    pub const fn pause(&mut self) {
        self.active = false;
    }

    /// Advance by one second.
    pub const fn tick(&mut self) -> TickOutcome {
        if !self.active || self.remaining == 0 {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_countdown_does_not_move() {
        let mut countdown = Countdown::from_minutes(1);
        assert_eq!(countdown.remaining(), 60);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 60);
    }

    #[test]
    fn expires_exactly_once() {
        let mut countdown = Countdown::new(2);
        countdown.resume();
        assert_eq!(countdown.tick(), TickOutcome::Running(1));
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert!(!countdown.is_active());
        assert_eq!(countdown.tick(), TickOutcome::Idle);

        countdown.resume();
        assert!(!countdown.is_active());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let mut countdown = Countdown::new(5);
        countdown.resume();
        let _ = countdown.tick();
        countdown.pause();
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 4);
        countdown.resume();
        assert_eq!(countdown.tick(), TickOutcome::Running(3));
    }

    #[test]
    fn zero_minute_scenario_never_activates() {
        let mut countdown = Countdown::from_minutes(0);
        countdown.resume();
        assert!(!countdown.is_active());
    }
}
