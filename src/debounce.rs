//! A cancellable debounce timer driven by the caller's clock.
//!
//! The timer never sleeps or spawns. Every event carries `now`, and the
//! embedder calls [`Debouncer::poll`] on its timer ticks. This keeps the
//! behaviour deterministic and lets tests step time explicitly.
//!
//! - [`push`](Debouncer::push) stores the latest value and restarts the quiet
//!   window; the previous value is dropped without firing.
//! - [`poll`](Debouncer::poll) fires at most once per window, with the last
//!   pushed value.
//! - [`cancel`](Debouncer::cancel) drops the pending value immediately.
//!
//! ```
//! use category_navigator::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(Duration::from_millis(350));
//!
//! debouncer.push("a", start);
//! debouncer.push("ab", start + Duration::from_millis(80));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
//! assert_eq!(debouncer.poll(start + Duration::from_millis(430)), Some("ab"));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value until its quiet window has elapsed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// The quiet period.
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Replace the pending value and restart the window from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet,
        });
    }

    /// Take the pending value if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Fire now, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    /// A value is waiting for its window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will fire.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The value that would fire next.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }
}
