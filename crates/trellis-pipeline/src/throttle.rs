//! Interruptible pacing between generation batches.

use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Cancellation flag shared between a batch run and its controller.
///
/// Once interrupted a token stays interrupted; the pipeline treats that
/// as "abort the rest of this batch" and a new run gets a fresh token.
#[derive(Debug, Default)]
pub struct StopToken {
    interrupted: Mutex<bool>,
    signal: Condvar,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation and wakes every thread parked in
    /// [`StopToken::sleep`].
    pub fn interrupt(&self) {
        let mut interrupted = match self.interrupted.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *interrupted = true;
        self.signal.notify_all();
    }

    pub fn is_interrupted(&self) -> bool {
        match self.interrupted.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Blocks for `duration`, returning early when interrupted.
    ///
    /// Returns `true` when the full duration passed and `false` when the
    /// token was interrupted, including before the call.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut interrupted = match self.interrupted.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Condvar waits can wake spuriously; loop until the flag flips
        // or the deadline passes.
        while !*interrupted {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return true;
            }
            let (guard, _timeout) = match self.signal.wait_timeout(interrupted, remaining) {
                Ok(pair) => pair,
                Err(poisoned) => poisoned.into_inner(),
            };
            interrupted = guard;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn sleep_runs_to_completion_without_interrupt() {
        let token = StopToken::new();
        let started = Instant::now();
        assert!(token.sleep(Duration::from_millis(20)));
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(!token.is_interrupted());
    }

    #[test]
    fn interrupted_token_returns_immediately() {
        let token = StopToken::new();
        token.interrupt();
        let started = Instant::now();
        assert!(!token.sleep(Duration::from_secs(5)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn interrupt_from_another_thread_wakes_sleeper() {
        let token = Arc::new(StopToken::new());
        let sleeper = token.clone();
        let handle = thread::spawn(move || sleeper.sleep(Duration::from_secs(30)));

        thread::sleep(Duration::from_millis(20));
        token.interrupt();

        let slept_fully = handle.join().unwrap();
        assert!(!slept_fully);
        assert!(token.is_interrupted());
    }
}
