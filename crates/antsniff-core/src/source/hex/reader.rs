pub const COMMENT_PREFIX: char = '#';

/// Parse one byte token: one or two hex digits, optionally `0x`-prefixed.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use antsniff_core::source::hex::reader::parse_byte_token;
///
/// assert_eq!(parse_byte_token("0x43"), Some(0x43));
/// assert_eq!(parse_byte_token("a"), Some(0x0a));
/// assert_eq!(parse_byte_token("100"), None);
/// ```
pub fn parse_byte_token(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Split a line into frame bytes.
///
/// Returns `Ok(None)` for blank and comment lines and `Err(token)` with the
/// first token that is not a byte.
pub fn tokenize_line(line: &str) -> Result<Option<Vec<u8>>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }
    trimmed
        .split_whitespace()
        .map(|token| parse_byte_token(token).ok_or_else(|| token.to_string()))
        .collect::<Result<Vec<u8>, String>>()
        .map(Some)
}
