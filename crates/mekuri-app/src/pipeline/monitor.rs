use std::io::BufRead;

use kanal::Sender;
use mekuri_types::WorkItem;

use crate::signals::SessionSignals;

/// Cancellation listener state: two consecutive empty lines cancel the
/// session, any non-empty line disarms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmState {
    Idle,
    ArmedOnce,
}

impl ArmState {
    /// Feed one input line; returns the next state and whether the session
    /// is now cancelled.
    pub fn observe(self, line: &str) -> (ArmState, bool) {
        if !line.trim().is_empty() {
            return (ArmState::Idle, false);
        }

        match self {
            ArmState::Idle => (ArmState::ArmedOnce, false),
            ArmState::ArmedOnce => (ArmState::ArmedOnce, true),
        }
    }
}

/// Watch for the user's cancellation gesture.
///
/// On cancellation, sets the shared stop flag and pushes the sentinel
/// directly into the queue so a waiting recognition loop wakes up even if
/// the capture loop is blocked elsewhere. Runs until cancellation or end of
/// input; the caller never joins it.
pub fn exit_monitor(input: impl BufRead, signals: &SessionSignals, tx: &Sender<WorkItem>) {
    let mut state = ArmState::Idle;

    for line in input.lines() {
        let Ok(line) = line else { break };

        let (next, cancelled) = state.observe(&line);
        state = next;

        if cancelled {
            tracing::info!("Cancellation requested, stopping the session");
            signals.request_stop();
            if signals.mark_done() {
                let _ = tx.send(WorkItem::Done);
            }
            break;
        }
    }
}
