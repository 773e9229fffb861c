use std::fmt;

use anyhow::{Result, bail};
use mekuri_types::Frame;
use sha2::{Digest, Sha256};

/// Digest of a frame's raw pixel bytes, used purely for equality testing
/// between consecutive captures. Only the previous value is ever retained.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digest the frame's pixel data.
    ///
    /// Fails when the buffer does not match the frame dimensions (malformed
    /// capture); callers treat that as "no fingerprint", never as equal to
    /// the previous one.
    pub fn of(frame: &Frame) -> Result<Self> {
        if frame.data.is_empty() {
            bail!("frame has no pixel data");
        }
        if frame.data.len() != frame.expected_len() {
            bail!(
                "frame buffer is {} bytes, expected {} for {}x{}",
                frame.data.len(),
                frame.expected_len(),
                frame.width,
                frame.height
            );
        }

        let mut hasher = Sha256::new();
        hasher.update(&frame.data);
        Ok(Self(hasher.finalize().into()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}
