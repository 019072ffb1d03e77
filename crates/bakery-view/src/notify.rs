//! Transient notices with a cancelable auto-dismiss timer.

use std::time::Duration;

use bakery_cart::Notice;
use tracing::trace;

use crate::clock::Clock;

/// Identifies one scheduled dismissal.
///
/// Handles are never reused, so a handle that outlived its notice can be
/// fired harmlessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Scheduled {
    handle: TimerHandle,
    due: Duration,
}

/// At most one visible notice, each dismissed `ttl` after it was shown.
///
/// Showing a notice replaces the current one and cancels its pending
/// dismissal before scheduling a new one.
#[derive(Debug)]
pub struct Notifications<C> {
    clock: C,
    ttl: Duration,
    current: Option<(Notice, TimerHandle)>,
    scheduled: Option<Scheduled>,
    next_handle: u64,
}

impl<C: Clock> Notifications<C> {
    pub fn new(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            current: None,
            scheduled: None,
            next_handle: 0,
        }
    }

    /// Show `notice`, replacing whatever is visible.
    pub fn show(&mut self, notice: Notice) -> TimerHandle {
        if let Some(old) = self.scheduled.take() {
            trace!(handle = old.handle.0, "cancelled dismiss timer");
        }

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        self.current = Some((notice, handle));
        self.scheduled = Some(Scheduled {
            handle,
            due: self.clock.now() + self.ttl,
        });
        handle
    }

    /// Run the dismissal for `handle`.
    ///
    /// Returns `false` without doing anything if the notice it belonged to
    /// was already replaced or dismissed.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.scheduled.as_ref().is_some_and(|s| s.handle == handle) {
            self.scheduled = None;
        }
        match &self.current {
            Some((_, current)) if *current == handle => {
                self.current = None;
                true
            }
            _ => {
                trace!(handle = handle.0, "stale dismiss timer ignored");
                false
            }
        }
    }

    /// Fire the pending dismissal if it is due. Returns whether a notice
    /// was removed.
    pub fn poll(&mut self) -> bool {
        let due = match &self.scheduled {
            Some(s) if s.due <= self.clock.now() => s.handle,
            _ => return false,
        };
        self.fire(due)
    }

    /// Remove the visible notice immediately.
    pub fn dismiss(&mut self) -> bool {
        self.scheduled = None;
        self.current.take().is_some()
    }

    /// The visible notice, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    /// When the pending dismissal will fire, on the clock's timeline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduled.as_ref().map(|s| s.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(3);

    #[test]
    fn test_notice_dismissed_after_ttl() {
        let clock = ManualClock::new();
        let mut notes = Notifications::new(clock.clone(), TTL);
        notes.show(Notice::success("Baguette added to cart!"));

        clock.advance(Duration::from_millis(2999));
        assert!(!notes.poll());
        assert!(notes.current().is_some());

        clock.advance(Duration::from_millis(1));
        assert!(notes.poll());
        assert!(notes.current().is_none());
        assert!(notes.next_deadline().is_none());
    }

    #[test]
    fn test_replacement_cancels_previous_timer() {
        let clock = ManualClock::new();
        let mut notes = Notifications::new(clock.clone(), TTL);
        let first = notes.show(Notice::success("first"));

        clock.advance(Duration::from_secs(2));
        notes.show(Notice::error("second"));

        // The first notice's deadline passes; nothing happens.
        clock.advance(Duration::from_secs(2));
        assert!(!notes.poll());
        assert_eq!(notes.current().unwrap().message, "second");

        // A platform timer that still fires for the old handle is a no-op.
        assert!(!notes.fire(first));
        assert_eq!(notes.current().unwrap().message, "second");

        clock.advance(Duration::from_secs(1));
        assert!(notes.poll());
        assert!(notes.current().is_none());
    }

    #[test]
    fn test_fire_after_dismiss_is_noop() {
        let clock = ManualClock::new();
        let mut notes = Notifications::new(clock, TTL);
        let handle = notes.show(Notice::success("hi"));

        assert!(notes.dismiss());
        assert!(!notes.fire(handle));
        assert!(!notes.dismiss());
    }

    #[test]
    fn test_handles_are_unique() {
        let mut notes = Notifications::new(ManualClock::new(), TTL);
        let a = notes.show(Notice::success("a"));
        let b = notes.show(Notice::success("b"));
        assert_ne!(a, b);
    }
}
