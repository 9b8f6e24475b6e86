use crate::errors::CoreError;

/// Magic bytes identifying an OPRM (open-price regression model) artifact.
pub const MAGIC: &[u8; 4] = b"OPRM";

/// Current artifact format version.
pub const CURRENT_VERSION: u16 = 1;

/// Header size in bytes: magic(4) + version(2) + payload_len(8) = 14
pub const HEADER_SIZE: usize = 14;

/// Write a complete model artifact to bytes.
///
/// Layout:
/// ```text
/// [OPRM: 4B] [version: 2B LE] [payload_len: 8B LE] [payload: variable]
/// ```
/// The payload is the bincode-serialized model.
pub fn write_artifact(version: u16, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&version.to_le_bytes());
    buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Parse an artifact, returning `(version, payload)`.
///
/// Rejects wrong magic, truncated headers, unknown versions, and
/// payload length mismatches.
pub fn read_artifact(data: &[u8]) -> Result<(u16, &[u8]), CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidFileFormat(format!(
            "artifact too short: {} bytes, need at least {HEADER_SIZE}",
            data.len()
        )));
    }
    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidFileFormat(
            "missing OPRM magic bytes".to_string(),
        ));
    }

    let version = u16::from_le_bytes([data[4], data[5]]);
    if version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(version));
    }

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&data[6..14]);
    let payload_len = u64::from_le_bytes(len_bytes) as usize;

    let payload = &data[HEADER_SIZE..];
    if payload.len() != payload_len {
        return Err(CoreError::InvalidFileFormat(format!(
            "payload length mismatch: header says {payload_len}, found {}",
            payload.len()
        )));
    }

    Ok((version, payload))
}
