//! Raw author file reading.
use std::path::Path;

use crate::error::Error;

/// Read a file as text, silently dropping invalid UTF-8 sequences.
pub fn read_lossy(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path)?;
    Ok(decode_lossy(&bytes))
}

/// Decode `bytes`, dropping every invalid or truncated UTF-8 sequence.
///
/// Unlike [String::from_utf8_lossy], nothing is substituted in place of dropped bytes.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, invalid) = rest.split_at(e.valid_up_to());
                if let Ok(valid) = std::str::from_utf8(valid) {
                    out.push_str(valid);
                }
                match e.error_len() {
                    Some(len) => rest = &invalid[len..],
                    // truncated sequence at end of input
                    None => break,
                }
            }
        }
    }

    out
}
