//! JSON file loading functionality.
//!
//! This module reads JSON documents from files or stdin, transparently
//! decompressing gzip input. Parsing and indexing happen in the caller.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a JSON file into a string.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - A `.gz` file is not valid gzip, or the content is not UTF-8
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    debug!(
        path = %path_ref.display(),
        gzipped = is_gzipped,
        bytes = content.len(),
        "read JSON file"
    );
    Ok(content)
}

/// Reads all of stdin into a string.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed.
pub fn read_json_from_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    decode_bytes(buffer)
}

/// Turns raw input bytes into text, gunzipping when the magic bytes say so.
pub fn decode_bytes(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0x1f, 0x8b]) {
        debug!(bytes = bytes.len(), "input is gzip compressed");
        decompress_gzip_bytes(&bytes)
    } else {
        String::from_utf8(bytes).context("Input is not valid UTF-8")
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
