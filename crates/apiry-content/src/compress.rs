//! Gzip primitives for stored content.
//!
//! The decoder backs transparent decompression on the read path; the encoder
//! is for writers that store compressed specs (and for seeding compressed
//! fixtures in tests).

use std::io::{Read, Write};

use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::stored::Compression;
use crate::{Error, Result};

/// Gzip-compresses a logical payload for storage.
///
/// # Errors
///
/// Returns [`Error::Encode`] when the encoder fails.
pub fn gzip(data: &[u8]) -> Result<Bytes> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(data)
        .and_then(|()| encoder.finish())
        .map(Bytes::from)
        .map_err(|e| Error::encode(Compression::Gzip, e))
}

/// Decompresses a gzip stream into the logical payload.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a valid gzip stream.
pub fn gunzip(data: &[u8]) -> Result<Bytes> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::decode(Compression::Gzip, e))?;
    Ok(Bytes::from(decompressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"hello";
        let compressed = gzip(data).unwrap();
        assert_ne!(compressed.as_ref(), data.as_slice());

        let decompressed = gunzip(&compressed).unwrap();
        assert_eq!(decompressed.as_ref(), data.as_slice());
    }

    #[test]
    fn test_empty_payload() {
        let compressed = gzip(b"").unwrap();
        let decompressed = gunzip(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_gunzip_rejects_garbage() {
        let err = gunzip(b"definitely not gzip").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_gunzip_rejects_truncated_stream() {
        let compressed = gzip(b"some contents that compress").unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        assert!(gunzip(truncated).is_err());
    }
}
