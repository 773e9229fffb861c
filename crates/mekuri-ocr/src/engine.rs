use leptess::{LepTess, Variable};
use mekuri_types::{Frame, TextOrientation};

use crate::error::OcrError;
use crate::preprocess::prepare_frame;

/// Recognizes text on captured frames.
///
/// The recognition loop only sees this trait; tests substitute scripted
/// recognizers for the Tesseract-backed one.
pub trait TextRecognizer {
    fn recognize(&mut self, frame: &Frame) -> Result<String, OcrError>;
}

/// Tesseract-backed recognizer via leptess.
///
/// Holds one engine for the duration of a session. Not `Send`; keep it on
/// the thread that created it.
pub struct TesseractRecognizer {
    engine: LepTess,
}

impl TesseractRecognizer {
    /// Create an engine for the given language, e.g. "jpn_vert" or "eng".
    ///
    /// `tessdata_dir` overrides the default trained-data location. The page
    /// segmentation mode follows the configured text orientation.
    pub fn new(
        tessdata_dir: Option<&str>,
        language: &str,
        orientation: TextOrientation,
    ) -> Result<Self, OcrError> {
        let mut engine = LepTess::new(tessdata_dir, language)
            .map_err(|e| OcrError::Init(format!("{e:?}")))?;

        engine
            .set_variable(Variable::TesseditPagesegMode, page_seg_mode(orientation))
            .map_err(|e| OcrError::Init(format!("{e:?}")))?;

        tracing::debug!("OCR engine ready for language {language}");
        Ok(Self { engine })
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&mut self, frame: &Frame) -> Result<String, OcrError> {
        let png = prepare_frame(frame)?;

        self.engine
            .set_image_from_mem(&png)
            .map_err(|e| OcrError::Image(format!("{e:?}")))?;

        self.engine
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(format!("{e:?}")))
    }
}

/// Page segmentation mode for the configured layout: a single uniform block
/// of vertically aligned text, or standard automatic segmentation.
fn page_seg_mode(orientation: TextOrientation) -> &'static str {
    match orientation {
        TextOrientation::Vertical => "5",
        TextOrientation::Horizontal => "3",
    }
}
