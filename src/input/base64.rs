use base64::{Engine as _, engine::general_purpose};

/// Strict base64 check: the text must decode and re-encode to exactly itself.
///
/// Empty input is rejected.
pub fn is_valid_base64(text: &str) -> bool {
    decode_base64_strict(text).is_some()
}

/// Decode `text` only when it passes the strict round-trip check.
pub fn decode_base64_strict(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() {
        return None;
    }
    let bytes = general_purpose::STANDARD.decode(text).ok()?;
    if general_purpose::STANDARD.encode(&bytes) != text {
        return None;
    }
    Some(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/input/base64.rs"]
mod tests;
