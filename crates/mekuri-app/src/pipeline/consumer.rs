use kanal::Receiver;
use mekuri_ocr::{TextRecognizer, clean_page_text};
use mekuri_types::WorkItem;

use crate::output::PageWriter;

/// Recognize queued pages and append non-blank results to the output log.
///
/// Stops at the first `Done` sentinel (or a closed queue) and never on its
/// own. Returns the number of records written. Recognition and write
/// failures degrade to a skipped page, the loop keeps going.
pub fn recognition_loop(
    rx: &Receiver<WorkItem>,
    recognizer: &mut impl TextRecognizer,
    writer: &mut PageWriter,
) -> u32 {
    let mut written: u32 = 0;

    loop {
        match rx.recv() {
            Ok(WorkItem::Page { frame, number }) => {
                tracing::debug!("Recognizing page {number}");

                let raw = match recognizer.recognize(&frame) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!("Recognition failed for page {number}: {e}");
                        String::new()
                    }
                };

                let text = clean_page_text(&raw);
                if text.is_empty() {
                    tracing::debug!("Page {number} produced no text, skipping record");
                    continue;
                }

                match writer.append(number, &text) {
                    Ok(()) => written += 1,
                    Err(e) => tracing::error!("Failed to write page {number}: {e}"),
                }
            }
            Ok(WorkItem::Done) => {
                tracing::info!("No more work, ending recognition");
                break;
            }
            Err(_) => break,
        }
    }

    written
}
