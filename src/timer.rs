//! Single-slot cancellable deadline.
//!
//! A [`Timer`] holds at most one pending deadline. Scheduling replaces any
//! previous deadline, so a stale callback for an earlier request can never
//! fire. The owner polls [`Timer::take_due`] from its update tick.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Default, Debug)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `after` from `now`, discarding any earlier deadline.
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.cancel();
        self.deadline = Some(now + after);
    }

    /// Disarm the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// If the deadline has passed, disarm and return it.
    ///
    /// Returns the scheduled instant rather than `now`, so callers can chain the
    /// next step from the exact expiry time.
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(at) if at <= now => self.deadline.take(),
            _ => None,
        }
    }

    #[inline]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(start, Duration::from_millis(100));

        let deadline = start + Duration::from_millis(100);

        assert_eq!(
            timer.take_due(start + Duration::from_millis(99)),
            None,
            "Must not fire early"
        );
        assert_eq!(
            timer.take_due(start + Duration::from_millis(130)),
            Some(deadline)
        );
        assert_eq!(
            timer.take_due(start + Duration::from_millis(500)),
            None,
            "Must fire only once"
        );
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_reschedule_discards_previous_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(start, Duration::from_millis(100));
        timer.schedule(start, Duration::from_millis(400));

        assert_eq!(
            timer.take_due(start + Duration::from_millis(200)),
            None,
            "Stale deadline must not fire"
        );
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = Timer::new();
        assert!(
            !timer.cancel(),
            "Cancelling an idle timer reports nothing pending"
        );

        timer.schedule(start, Duration::from_millis(10));
        assert!(timer.cancel());
        assert_eq!(timer.take_due(start + Duration::from_secs(1)), None);
    }
}
