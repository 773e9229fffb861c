use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use mekuri_automation::SystemPager;
use mekuri_capture::ScreenCapture;
use mekuri_config::Config;
use mekuri_ocr::TesseractRecognizer;
use mekuri_types::WorkItem;

use crate::output::PageWriter;
use crate::signals::SessionSignals;

pub mod consumer;
pub mod monitor;
pub mod producer;

use consumer::recognition_loop;
use monitor::exit_monitor;
use producer::{CaptureSettings, capture_loop};

/// Outcome of a completed session.
pub struct PipelineSummary {
    pub pages_captured: u32,
    pub records_written: u32,
}

/// Run the capture/recognition pipeline until natural completion or
/// cancellation.
///
/// Three threads of control: the capture loop (producer), the recognition
/// loop (consumer) and the exit monitor, connected by one bounded FIFO
/// queue. The monitor is fire-and-forget; producer and consumer are joined
/// before the summary is returned.
pub async fn run(config: Config) -> Result<PipelineSummary> {
    let (tx, rx) = kanal::bounded::<WorkItem>(config.queue_capacity);
    let signals = Arc::new(SessionSignals::new());

    let source = ScreenCapture::new(config.capture.region);
    let pager = SystemPager::new();
    let writer = PageWriter::open(Path::new(&config.output.path))?;

    let settings = CaptureSettings {
        direction: config.pager.direction,
        turn_delay: Duration::from_millis(config.pager.turn_delay_ms),
        retry_delay: Duration::from_millis(config.capture.retry_delay_ms),
    };

    // Exit monitor: plain thread, abandoned at process exit. A blocking
    // stdin read cannot be interrupted, so it must not keep the runtime
    // alive on shutdown.
    {
        let signals = signals.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            exit_monitor(io::stdin().lock(), &signals, &tx);
        });
    }

    // Ctrl+C behaves like a cancellation request.
    {
        let signals = signals.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, stopping after the current page");
                signals.request_stop();
            }
        });
    }

    let producer = {
        let signals = signals.clone();
        tokio::task::spawn_blocking(move || capture_loop(source, pager, settings, &signals, &tx))
    };

    // The Tesseract engine is not Send, so it is created on the recognition
    // thread. If it cannot start, the session is cancelled and the queue
    // drained so the capture loop is never left blocked on a full queue.
    let consumer = {
        let signals = signals.clone();
        let ocr = config.ocr.clone();
        tokio::task::spawn_blocking(move || {
            let tessdata = ocr.tessdata();
            let mut recognizer = match TesseractRecognizer::new(
                tessdata.as_deref(),
                &ocr.language,
                ocr.orientation,
            ) {
                Ok(recognizer) => recognizer,
                Err(e) => {
                    tracing::error!("{e}");
                    signals.request_stop();
                    while !matches!(rx.recv(), Ok(WorkItem::Done) | Err(_)) {}
                    return 0;
                }
            };

            let mut writer = writer;
            recognition_loop(&rx, &mut recognizer, &mut writer)
        })
    };

    let pages_captured = producer.await.context("capture task panicked")?;
    let records_written = consumer.await.context("recognition task panicked")?;

    Ok(PipelineSummary {
        pages_captured,
        records_written,
    })
}
