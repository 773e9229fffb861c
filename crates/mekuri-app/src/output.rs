use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Append-only writer for recognized page records.
///
/// One handle is held open for the duration of the recognition loop; records
/// are flushed as they are written and never revised. Content from earlier
/// runs is preserved.
pub struct PageWriter {
    out: BufWriter<File>,
}

impl PageWriter {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open output file {}", path.display()))?;

        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    pub fn append(&mut self, number: u32, text: &str) -> Result<()> {
        write!(self.out, "--- Page {number} ---\n{text}\n")
            .with_context(|| format!("Failed to write page {number}"))?;
        self.out.flush().context("Failed to flush output file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn writes_page_records_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut writer = PageWriter::open(&path).unwrap();
        writer.append(1, "first").unwrap();
        writer.append(2, "second").unwrap();
        drop(writer);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "--- Page 1 ---\nfirst\n--- Page 2 ---\nsecond\n");
    }

    #[test]
    fn appends_across_runs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        PageWriter::open(&path).unwrap().append(1, "one").unwrap();
        PageWriter::open(&path).unwrap().append(2, "two").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("--- Page 1 ---\none\n"));
        assert!(content.contains("--- Page 2 ---\ntwo\n"));
    }
}
