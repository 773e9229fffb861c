//! Simple OCR test - run with: cargo run -p mekuri-ocr --bin test_ocr -- <image> [lang]

use anyhow::{Context, Result};
use mekuri_ocr::{TesseractRecognizer, TextRecognizer, clean_page_text};
use mekuri_types::{CaptureRegion, Frame, TextOrientation};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: test_ocr <image> [lang]")?;
    let language = args.next().unwrap_or_else(|| "jpn_vert".to_string());

    let image = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgba8();

    let width = image.width();
    let height = image.height();
    let frame = Frame {
        data: image.into_raw(),
        width,
        height,
        region: CaptureRegion {
            x: 0,
            y: 0,
            width,
            height,
        },
    };

    let mut recognizer = TesseractRecognizer::new(None, &language, TextOrientation::Vertical)?;

    let start = std::time::Instant::now();
    match recognizer.recognize(&frame) {
        Ok(text) => {
            let text = clean_page_text(&text);
            println!("{:?} - {} chars", start.elapsed(), text.len());
            for line in text.lines().take(10) {
                println!("> {line}");
            }
        }
        Err(e) => println!("Failed: {e}"),
    }

    Ok(())
}
