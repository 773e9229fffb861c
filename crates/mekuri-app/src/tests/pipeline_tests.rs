//! End-to-end tests for the capture/recognition pipeline using scripted
//! collaborators instead of the screen, the OS and Tesseract.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::anyhow;
use mekuri_automation::PageTurner;
use mekuri_capture::FrameSource;
use mekuri_ocr::{OcrError, TextRecognizer};
use mekuri_types::{CaptureRegion, Frame, PageTurnDirection, WorkItem};
use tempfile::tempdir;

use crate::output::PageWriter;
use crate::pipeline::consumer::recognition_loop;
use crate::pipeline::monitor::exit_monitor;
use crate::pipeline::producer::{CaptureSettings, capture_loop};
use crate::signals::SessionSignals;

const REGION: CaptureRegion = CaptureRegion {
    x: 0,
    y: 0,
    width: 2,
    height: 2,
};

/// Frame filled with `seed`, so distinct seeds get distinct fingerprints.
fn frame(seed: u8) -> Frame {
    Frame {
        data: vec![seed; (REGION.width * REGION.height * 4) as usize],
        width: REGION.width,
        height: REGION.height,
        region: REGION,
    }
}

/// Replays a fixed capture sequence, then keeps repeating the last frame.
struct ScriptedSource {
    frames: Vec<Frame>,
    next: usize,
}

impl ScriptedSource {
    fn new(seeds: &[u8]) -> Self {
        Self {
            frames: seeds.iter().map(|&s| frame(s)).collect(),
            next: 0,
        }
    }
}

impl FrameSource for ScriptedSource {
    fn capture(&mut self) -> anyhow::Result<Frame> {
        let index = self.next.min(self.frames.len() - 1);
        self.next += 1;
        Ok(self.frames[index].clone())
    }
}

/// Counts page turns without touching the OS.
#[derive(Clone, Default)]
struct CountingPager {
    turns: Arc<AtomicUsize>,
}

impl PageTurner for CountingPager {
    fn turn_page(&self, _direction: PageTurnDirection) -> anyhow::Result<()> {
        self.turns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Reports each frame's fill byte as its text.
struct SeedRecognizer;

impl TextRecognizer for SeedRecognizer {
    fn recognize(&mut self, frame: &Frame) -> Result<String, OcrError> {
        Ok(format!("text {}", frame.data[0]))
    }
}

fn settings() -> CaptureSettings {
    CaptureSettings {
        direction: PageTurnDirection::Left,
        turn_delay: Duration::from_millis(0),
        retry_delay: Duration::from_millis(0),
    }
}

#[test]
fn distinct_frames_produce_one_record_each_in_order() {
    let (tx, rx) = kanal::bounded::<WorkItem>(16);
    let signals = SessionSignals::new();
    let pager = CountingPager::default();

    let captured = capture_loop(
        ScriptedSource::new(&[1, 2, 3]),
        pager.clone(),
        settings(),
        &signals,
        &tx,
    );
    assert_eq!(captured, 3);
    assert_eq!(pager.turns.load(Ordering::SeqCst), 3);

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut writer = PageWriter::open(&path).unwrap();

    let written = recognition_loop(&rx, &mut SeedRecognizer, &mut writer);
    assert_eq!(written, 3);
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "--- Page 1 ---\ntext 1\n--- Page 2 ---\ntext 2\n--- Page 3 ---\ntext 3\n"
    );
}

#[test]
fn repeated_page_enqueues_sentinel_only() {
    let (tx, rx) = kanal::bounded::<WorkItem>(16);
    let signals = SessionSignals::new();

    // A single scripted frame: the second capture repeats it.
    let captured = capture_loop(
        ScriptedSource::new(&[7]),
        CountingPager::default(),
        settings(),
        &signals,
        &tx,
    );
    assert_eq!(captured, 1);

    assert!(matches!(
        rx.try_recv(),
        Ok(Some(WorkItem::Page { number: 1, .. }))
    ));
    assert!(matches!(rx.try_recv(), Ok(Some(WorkItem::Done))));
    assert!(matches!(rx.try_recv(), Ok(None)));
}

#[test]
fn stop_flag_ends_capture_before_any_work() {
    let (tx, rx) = kanal::bounded::<WorkItem>(4);
    let signals = SessionSignals::new();
    signals.request_stop();

    let captured = capture_loop(
        ScriptedSource::new(&[1, 2]),
        CountingPager::default(),
        settings(),
        &signals,
        &tx,
    );

    assert_eq!(captured, 0);
    assert!(matches!(rx.try_recv(), Ok(Some(WorkItem::Done))));
    assert!(matches!(rx.try_recv(), Ok(None)));
}

#[test]
fn sentinel_is_delivered_exactly_once() {
    let (tx, rx) = kanal::bounded::<WorkItem>(16);
    let signals = SessionSignals::new();

    // The monitor cancels first, then the producer observes the flag; both
    // paths try to signal termination.
    exit_monitor(std::io::Cursor::new("\n\n"), &signals, &tx);
    let captured = capture_loop(
        ScriptedSource::new(&[1]),
        CountingPager::default(),
        settings(),
        &signals,
        &tx,
    );

    assert_eq!(captured, 0);
    assert!(matches!(rx.try_recv(), Ok(Some(WorkItem::Done))));
    assert!(matches!(rx.try_recv(), Ok(None)));
}

#[test]
fn cancellation_still_processes_queued_items() {
    let (tx, rx) = kanal::bounded::<WorkItem>(16);
    let signals = SessionSignals::new();

    // Two pages were enqueued before the user cancelled.
    tx.send(WorkItem::Page {
        frame: frame(1),
        number: 1,
    })
    .unwrap();
    tx.send(WorkItem::Page {
        frame: frame(2),
        number: 2,
    })
    .unwrap();

    exit_monitor(std::io::Cursor::new("\n\n"), &signals, &tx);
    assert!(signals.stop_requested());

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut writer = PageWriter::open(&path).unwrap();

    let written = recognition_loop(&rx, &mut SeedRecognizer, &mut writer);
    assert_eq!(written, 2);
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("--- Page 1 ---"));
    assert!(content.contains("--- Page 2 ---"));
}

#[test]
fn whitespace_only_text_suppresses_record() {
    struct BlankRecognizer;

    impl TextRecognizer for BlankRecognizer {
        fn recognize(&mut self, _frame: &Frame) -> Result<String, OcrError> {
            Ok("   \n\t  ".to_string())
        }
    }

    let (tx, rx) = kanal::bounded::<WorkItem>(4);
    tx.send(WorkItem::Page {
        frame: frame(1),
        number: 1,
    })
    .unwrap();
    tx.send(WorkItem::Done).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut writer = PageWriter::open(&path).unwrap();

    let written = recognition_loop(&rx, &mut BlankRecognizer, &mut writer);
    assert_eq!(written, 0);
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.is_empty());
}

#[test]
fn failed_page_does_not_block_later_pages() {
    /// Fails on the frame filled with 2, succeeds elsewhere.
    struct FlakyRecognizer;

    impl TextRecognizer for FlakyRecognizer {
        fn recognize(&mut self, frame: &Frame) -> Result<String, OcrError> {
            if frame.data[0] == 2 {
                Err(OcrError::Recognition("engine crashed".to_string()))
            } else {
                Ok(format!("text {}", frame.data[0]))
            }
        }
    }

    let (tx, rx) = kanal::bounded::<WorkItem>(8);
    for number in 1u32..=3 {
        tx.send(WorkItem::Page {
            frame: frame(number as u8),
            number,
        })
        .unwrap();
    }
    tx.send(WorkItem::Done).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut writer = PageWriter::open(&path).unwrap();

    let written = recognition_loop(&rx, &mut FlakyRecognizer, &mut writer);
    assert_eq!(written, 2);
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("--- Page 1 ---"));
    assert!(!content.contains("--- Page 2 ---"));
    assert!(content.contains("--- Page 3 ---"));
}

#[test]
fn capture_retries_after_transient_failure() {
    /// Errors on the first capture, then serves one frame repeatedly.
    struct FlakySource {
        attempts: usize,
    }

    impl FrameSource for FlakySource {
        fn capture(&mut self) -> anyhow::Result<Frame> {
            self.attempts += 1;
            if self.attempts == 1 {
                Err(anyhow!("screenshot returned no data"))
            } else {
                Ok(frame(9))
            }
        }
    }

    let (tx, rx) = kanal::bounded::<WorkItem>(4);
    let signals = SessionSignals::new();

    let captured = capture_loop(
        FlakySource { attempts: 0 },
        CountingPager::default(),
        settings(),
        &signals,
        &tx,
    );

    // The failed capture is retried, the repeat of frame 9 ends the run.
    assert_eq!(captured, 1);
    assert!(matches!(
        rx.try_recv(),
        Ok(Some(WorkItem::Page { number: 1, .. }))
    ));
    assert!(matches!(rx.try_recv(), Ok(Some(WorkItem::Done))));
}

#[test]
fn fingerprint_failure_treats_repeat_as_new_page() {
    /// Serves the same malformed frame forever; requests a stop after the
    /// second capture so the loop can end.
    struct MalformedSource {
        signals: Arc<SessionSignals>,
        captures: usize,
    }

    impl FrameSource for MalformedSource {
        fn capture(&mut self) -> anyhow::Result<Frame> {
            self.captures += 1;
            if self.captures == 2 {
                self.signals.request_stop();
            }
            let mut bad = frame(5);
            bad.data.truncate(3);
            Ok(bad)
        }
    }

    let (tx, rx) = kanal::bounded::<WorkItem>(8);
    let signals = Arc::new(SessionSignals::new());

    let captured = capture_loop(
        MalformedSource {
            signals: signals.clone(),
            captures: 0,
        },
        CountingPager::default(),
        settings(),
        &signals,
        &tx,
    );

    // Identical frames, but without fingerprints both count as new pages;
    // only the stop request ends the loop.
    assert_eq!(captured, 2);
    assert!(matches!(
        rx.try_recv(),
        Ok(Some(WorkItem::Page { number: 1, .. }))
    ));
    assert!(matches!(
        rx.try_recv(),
        Ok(Some(WorkItem::Page { number: 2, .. }))
    ));
    assert!(matches!(rx.try_recv(), Ok(Some(WorkItem::Done))));
}

#[test]
fn pipeline_preserves_fifo_under_concurrency() {
    // Small queue so the producer has to block on the consumer.
    let (tx, rx) = kanal::bounded::<WorkItem>(2);
    let signals = Arc::new(SessionSignals::new());

    let producer = {
        let signals = signals.clone();
        std::thread::spawn(move || {
            capture_loop(
                ScriptedSource::new(&[1, 2, 3, 4, 5, 6]),
                CountingPager::default(),
                settings(),
                &signals,
                &tx,
            )
        })
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut writer = PageWriter::open(&path).unwrap();

    let written = recognition_loop(&rx, &mut SeedRecognizer, &mut writer);
    let captured = producer.join().expect("capture thread panicked");

    assert_eq!(captured, 6);
    assert_eq!(written, 6);
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    let expected: String = (1..=6)
        .map(|n| format!("--- Page {n} ---\ntext {n}\n"))
        .collect();
    assert_eq!(content, expected);
}
