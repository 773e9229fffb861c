use std::sync::atomic::{AtomicBool, Ordering};

/// Shared session signals for the capture and recognition loops.
///
/// The stop flag is written by the exit monitor (and the Ctrl+C handler) and
/// polled by the capture loop once per iteration. The done guard makes the
/// queue sentinel single-shot even though both the capture loop and the exit
/// monitor may try to deliver it.
pub struct SessionSignals {
    stop: AtomicBool,
    done_sent: AtomicBool,
}

impl SessionSignals {
    pub fn new() -> Self {
        Self {
            stop: AtomicBool::new(false),
            done_sent: AtomicBool::new(false),
        }
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Claim the right to deliver the sentinel; true for exactly one caller.
    pub fn mark_done(&self) -> bool {
        !self.done_sent.swap(true, Ordering::SeqCst)
    }
}

impl Default for SessionSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flag_round_trip() {
        let signals = SessionSignals::new();
        assert!(!signals.stop_requested());
        signals.request_stop();
        assert!(signals.stop_requested());
    }

    #[test]
    fn done_guard_fires_once() {
        let signals = SessionSignals::new();
        assert!(signals.mark_done());
        assert!(!signals.mark_done());
        assert!(!signals.mark_done());
    }
}
