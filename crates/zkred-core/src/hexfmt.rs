//! Lowercase hex encoding shared by commitments and addresses.
//!
//! The interchange grammar is strict: `0x` followed by exactly 64
//! lowercase hex characters. Uppercase digits, wrong lengths, and missing
//! prefixes are all rejected — validation happens before any lookup.

use crate::error::CoreError;

/// Encode 32 bytes as `0x` + 64 lowercase hex characters.
pub(crate) fn encode_prefixed(bytes: &[u8; 32]) -> String {
    let mut out = String::with_capacity(66);
    out.push_str("0x");
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

/// Decode a strict `0x` + 64-lowercase-hex string into 32 bytes.
pub(crate) fn decode_prefixed(s: &str) -> Result<[u8; 32], CoreError> {
    if s.len() != 66 {
        return Err(CoreError::InvalidFormat(format!(
            "expected 66 characters, got {}",
            s.len()
        )));
    }
    let body = s
        .strip_prefix("0x")
        .ok_or_else(|| CoreError::InvalidFormat("missing 0x prefix".to_string()))?;
    if !body
        .bytes()
        .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c))
    {
        return Err(CoreError::InvalidFormat(
            "expected lowercase hex characters".to_string(),
        ));
    }

    let mut out = [0u8; 32];
    for (i, chunk) in body.as_bytes().chunks_exact(2).enumerate() {
        // chunks are validated hex, so from_str_radix cannot fail here
        let hi = (chunk[0] as char).to_digit(16).unwrap_or(0) as u8;
        let lo = (chunk[1] as char).to_digit(16).unwrap_or(0) as u8;
        out[i] = (hi << 4) | lo;
    }
    Ok(out)
}
