use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, GrayImage, ImageEncoder, RgbaImage};
use imageproc::contrast::{ThresholdType, equalize_histogram, otsu_level, threshold};
use imageproc::filter::median_filter;
use mekuri_types::Frame;

use crate::error::OcrError;

/// Prepare a captured frame for recognition.
///
/// Grayscale, histogram equalization, median denoise, Otsu binarization,
/// encoded as an in-memory PNG for the engine. The transform is
/// deterministic: the same frame always yields the same bytes.
pub fn prepare_frame(frame: &Frame) -> Result<Vec<u8>, OcrError> {
    let rgba =
        RgbaImage::from_raw(frame.width, frame.height, frame.data.clone()).ok_or_else(|| {
            OcrError::Image(format!(
                "buffer does not match {}x{} RGBA frame",
                frame.width, frame.height
            ))
        })?;

    let gray = DynamicImage::ImageRgba8(rgba).to_luma8();
    let equalized = equalize_histogram(&gray);
    let smoothed = median_filter(&equalized, 1, 1);
    let level = otsu_level(&smoothed);
    let binary = threshold(&smoothed, level, ThresholdType::Binary);

    encode_png(&binary)
}

fn encode_png(image: &GrayImage) -> Result<Vec<u8>, OcrError> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| OcrError::Image(format!("Failed to encode PNG: {e}")))?;
    Ok(buffer)
}
