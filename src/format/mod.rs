//! Format string grammar
//!
//! A format string is a flat list of `[count]type_code` entries:
//!
//! | code | field | width |
//! |------|-------|-------|
//! | `b`  | u8    | 1     |
//! | `s`  | u16   | 2     |
//! | `i`  | u32   | 4     |
//! | `l`  | u64   | 8     |
//!
//! The count is decimal and defaults to 1, so `"4bi"` and `"4b1i"` describe
//! the same layout.
//!
//! - [`Tokens`] decodes entries lazily, one at a time
//! - [`Format`] parses and validates a whole string up front

mod compiled;
mod parser;

pub use compiled::Format;
pub use parser::Tokens;

use crate::error::{MalformedReason, NetconvError, Result};

/// Total byte width described by `format`
///
/// ```
/// assert_eq!(netconv_rs::format::encoded_len("4b4s2l").unwrap(), 28);
/// ```
pub fn encoded_len(format: &str) -> Result<usize> {
    let mut total: usize = 0;
    let mut tokens = Tokens::new(format);
    while let Some(token) = tokens.next() {
        total = token?
            .byte_len()
            .and_then(|len| total.checked_add(len))
            .ok_or_else(|| NetconvError::malformed(tokens.position(), MalformedReason::CountOverflow))?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len_agrees_with_format() {
        for fmt in ["", "b", "4bi", "2s3l10b", "i"] {
            assert_eq!(encoded_len(fmt).unwrap(), Format::parse(fmt).unwrap().encoded_len());
        }
    }

    #[test]
    fn test_encoded_len_rejects_malformed() {
        assert!(encoded_len("2").is_err());
        assert!(encoded_len("q").is_err());
    }
}
