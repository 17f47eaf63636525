//! Raw pilot file bytes, normalized to [`FILE_LEN`].

use crate::decode::DecodeError;
use crate::schema::FILE_LEN;
use std::path::Path;
use tracing::warn;

/// Immutable buffer of exactly [`FILE_LEN`] bytes.
///
/// Shorter input is zero-padded, matching a freshly created pilot whose bytes are all zero;
/// longer input is cut to the first [`FILE_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSource {
    bytes: Vec<u8>,
    provided: usize,
}

impl ByteSource {
    pub fn from_bytes(raw: &[u8]) -> Self {
        if raw.len() < FILE_LEN {
            warn!(len = raw.len(), expected = FILE_LEN, "short pilot file, zero-padding");
        } else if raw.len() > FILE_LEN {
            warn!(len = raw.len(), expected = FILE_LEN, "oversized pilot file, ignoring trailing bytes");
        }
        let provided = raw.len().min(FILE_LEN);
        let mut bytes = vec![0u8; FILE_LEN];
        bytes[..provided].copy_from_slice(&raw[..provided]);
        ByteSource { bytes, provided }
    }

    /// Read a pilot file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let raw = std::fs::read(path.as_ref())?;
        Ok(Self::from_bytes(&raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes that came from the input rather than padding.
    pub fn provided_len(&self) -> usize {
        self.provided
    }

    pub fn is_padded(&self) -> bool {
        self.provided < FILE_LEN
    }
}

impl AsRef<[u8]> for ByteSource {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
