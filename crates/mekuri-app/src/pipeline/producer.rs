use std::thread;
use std::time::Duration;

use kanal::Sender;
use mekuri_automation::PageTurner;
use mekuri_capture::{Fingerprint, FrameSource};
use mekuri_types::{PageTurnDirection, WorkItem};

use crate::signals::SessionSignals;

/// Timing and actuation parameters for the capture loop.
pub struct CaptureSettings {
    pub direction: PageTurnDirection,
    /// Pause after a page turn before the next capture
    pub turn_delay: Duration,
    /// Pause before retrying a failed capture
    pub retry_delay: Duration,
}

/// Capture pages until the displayed page stops changing or a stop is
/// requested. Returns the number of pages enqueued.
///
/// Sole producer of numbered work items; page numbers are assigned here,
/// synchronously, so they are 1-based, gap-free and strictly increasing.
/// Every failure inside the loop is handled locally, nothing propagates.
pub fn capture_loop(
    mut source: impl FrameSource,
    pager: impl PageTurner,
    settings: CaptureSettings,
    signals: &SessionSignals,
    tx: &Sender<WorkItem>,
) -> u32 {
    let mut last_print: Option<Fingerprint> = None;
    let mut page: u32 = 0;

    loop {
        // Cancellation wins over the unchanged-page check.
        if signals.stop_requested() {
            tracing::info!("Stop requested, ending capture after {page} pages");
            send_done(signals, tx);
            break;
        }

        let frame = match source.capture() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Capture failed, retrying: {e}");
                thread::sleep(settings.retry_delay);
                continue;
            }
        };

        let print = match Fingerprint::of(&frame) {
            Ok(print) => Some(print),
            Err(e) => {
                tracing::warn!("Fingerprint failed, treating frame as a new page: {e}");
                None
            }
        };

        if let (Some(prev), Some(current)) = (last_print, print)
            && prev == current
        {
            tracing::info!("Page unchanged, ending capture after {page} pages");
            send_done(signals, tx);
            break;
        }

        page += 1;
        tracing::info!("Captured page {page}");

        if tx
            .send(WorkItem::Page {
                frame,
                number: page,
            })
            .is_err()
        {
            tracing::warn!("Work queue closed, ending capture");
            break;
        }

        last_print = print;

        if let Err(e) = pager.turn_page(settings.direction) {
            tracing::warn!("Page turn failed: {e}");
        }

        thread::sleep(settings.turn_delay);
    }

    page
}

fn send_done(signals: &SessionSignals, tx: &Sender<WorkItem>) {
    if signals.mark_done() {
        let _ = tx.send(WorkItem::Done);
    }
}
