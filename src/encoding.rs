//! Byte-stream repair for inconsistently encoded exports.
//!
//! The legacy client wrote logs in whatever encoding the host system was
//! configured with: UTF-8 with or without a BOM, UTF-16 on some machines,
//! Windows-era single-byte encodings on others. Downstream stages need
//! clean UTF-8 and are forgiving of minor garbling, so this stage never
//! fails; it degrades to the least-damaged text it can produce.

/// Converts raw file bytes into clean UTF-8 text with no BOM prefix.
///
/// Attempts, in order:
/// 1. UTF-16 LE/BE, when the corresponding BOM is present
/// 2. strict UTF-8 (after stripping a UTF-8 BOM if present)
/// 3. Latin-1 reinterpretation, which maps every byte to a character
///
/// Step 3 cannot fail, so neither can this function. Mis-decoded
/// single-byte text comes through with wrong accents rather than being
/// lost, which the keyword matchers tolerate.
pub fn normalize_bytes(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return decode_utf16(utf16, u16::from_le_bytes);
    }
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16(utf16, u16::from_be_bytes);
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn decode_utf16(bytes: &[u8], from_bytes: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| from_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
