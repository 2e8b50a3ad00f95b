//! Paced, cancellable replay of a decoded move history. The driver hands
//! out one column at a time, no sooner than the configured delay apart, and
//! checks its cancellation token before every dispatch so a torn-down
//! session never executes another move.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::game::Action;
use crate::session::Session;

pub struct ReplayDriver {
    queue: VecDeque<usize>,
    delay: Duration,
    next_at: Instant,
    cancel: Arc<AtomicBool>,
}

impl ReplayDriver {
    pub fn new(moves: Vec<usize>, delay: Duration) -> Self {
        ReplayDriver {
            queue: moves.into(),
            delay,
            // Pacing applies before the first move too.
            next_at: Instant::now() + delay,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Token for cancelling from outside (e.g. the UI on quit). Cooperative:
    /// it is polled before each dispatch, never mid-delay.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// True once no further move will ever be yielded.
    pub fn is_done(&self) -> bool {
        self.queue.is_empty() || self.is_cancelled()
    }

    /// Yield the next column if its pacing deadline has passed. Returns
    /// `None` while waiting, when cancelled, or when the queue is drained.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        if self.is_cancelled() {
            self.queue.clear();
            return None;
        }
        if now < self.next_at {
            return None;
        }
        let column = self.queue.pop_front()?;
        self.next_at = now + self.delay;
        Some(column)
    }

    /// Time until the next move is due, for event-loop poll timeouts.
    pub fn time_to_next(&self, now: Instant) -> Duration {
        self.next_at.saturating_duration_since(now)
    }

    /// Drive the whole replay against a session, blocking between moves.
    /// Used headless; the TUI steps `poll` from its event loop instead.
    pub fn run(mut self, session: &mut Session) {
        while let Some(column) = self.queue.pop_front() {
            thread::sleep(self.delay);
            if self.is_cancelled() {
                return;
            }
            session.dispatch(Action::Move {
                column,
                replay: true,
            });
        }
    }
}
