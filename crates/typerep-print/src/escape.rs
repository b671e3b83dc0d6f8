//! Literal escaping for printed strings, bytes and chars.

/// Append `ch`, escaping backslashes, `quote`, and control characters.
pub fn escape_char(ch: char, quote: char, out: &mut String) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            out.push_str(&format!("\\u{:04x}", c as u32));
        }
        c => out.push(c),
    }
}

/// Escape a string for display between double quotes.
pub fn escape_str(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        escape_char(ch, '"', &mut result);
    }
    result
}

/// Escape bytes for display between double quotes.
///
/// Valid UTF-8 runs are escaped like strings; every byte outside them is
/// written as `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            escape_char(ch, '"', &mut result);
        }
        for byte in chunk.invalid() {
            result.push_str(&format!("\\x{byte:02x}"));
        }
    }
    result
}
