use unicode_normalization::UnicodeNormalization;

/// Clean recognized page text before it is written out.
///
/// NFKC normalization plus per-line trailing-whitespace trim. Interior line
/// breaks are preserved; layout matters for vertical text dumps.
pub fn clean_page_text(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    // Unicode normalization (NFKC)
    let text: String = text.nfkc().collect();

    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
