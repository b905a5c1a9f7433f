use std::io::{Read, Write};

use flate2::Compression;
use flate2::bufread::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::{Error, Result};

/// Compresses `bytes` using a zlib encoder.
///
/// # Errors
///
/// This function will fail if the `ZlibEncoder` fails.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Returns `bytes` decompressed, using a zlib decoder.
///
/// # Errors
///
/// This function will fail with `Error::CorruptObject` if `bytes` is not a
/// validly terminated zlib stream.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut decoder = ZlibDecoder::new(bytes);
    decoder
        .read_to_end(&mut buf)
        .map_err(|e| Error::CorruptObject(format!("could not decompress data: {}", e)))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::{compress, decompress};
    use crate::Error;

    #[test]
    fn test_round_trip() {
        let data = b"some data that should survive a round trip \0 with binary bytes \xff";
        let compressed = compress(data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_round_trip_empty() {
        let compressed = compress(b"").unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_decompress_garbage() {
        assert!(matches!(
            decompress(b"this is not a zlib stream"),
            Err(Error::CorruptObject(_))
        ));
    }

    #[test]
    fn test_decompress_truncated() {
        let compressed = compress(b"some data to truncate").unwrap();
        assert!(matches!(
            decompress(&compressed[..compressed.len() / 2]),
            Err(Error::CorruptObject(_))
        ));
    }
}
