mod engine;
mod error;
mod preprocess;
mod text;

pub use engine::{TesseractRecognizer, TextRecognizer};
pub use error::OcrError;
pub use preprocess::prepare_frame;
pub use text::clean_page_text;
