//! User delimiter spec resolution.
//!
//! The spec string is interpreted as a quoted character literal: `","` stays
//! a comma, `"\t"` (two characters) becomes an actual tab. Only the first
//! resulting character is used.

use tabq_result::{Error, Result};

/// Resolve a delimiter spec into a single separator byte.
///
/// An empty spec means "use the format default" and returns `Ok(None)`. A
/// spec that cannot be unquoted to at least one single-byte character fails
/// with `InvalidDelimiterSpec`, which carries the conventional comma
/// fallback; the error is still fatal to adapter construction.
pub fn resolve_delimiter(spec: &str) -> Result<Option<u8>> {
    if spec.is_empty() {
        return Ok(None);
    }
    let unquoted = unquote(spec).ok_or_else(|| Error::invalid_delimiter(spec))?;
    match unquoted.chars().next() {
        // The tokenizer only supports single-byte separators.
        Some(sep) if (sep as u32) <= 0xFF => Ok(Some(sep as u8)),
        _ => Err(Error::invalid_delimiter(spec)),
    }
}

/// Process character-literal escape sequences. `None` on a malformed escape.
fn unquote(spec: &str) -> Option<String> {
    let mut out = String::with_capacity(spec.len());
    let mut chars = spec.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'x' => {
                let hi = chars.next()?.to_digit(16)?;
                let lo = chars.next()?.to_digit(16)?;
                out.push(((hi * 16 + lo) as u8) as char);
            }
            'u' => {
                let mut value = 0u32;
                for _ in 0..4 {
                    value = value * 16 + chars.next()?.to_digit(16)?;
                }
                out.push(char::from_u32(value)?);
            }
            _ => return None,
        }
    }
    Some(out)
}
