// src/format/parser.rs
use crate::error::{MalformedReason, NetconvError, Result};
use crate::types::{FieldType, Token};
use std::iter::FusedIterator;

/// Lazy tokenizer over a format string
///
/// Yields one [`Token`] per `[count]type_code` entry, left to right. The
/// first malformed entry is yielded as an error, after which the iterator
/// is exhausted. Nothing is allocated.
///
/// # Example
///
/// ```
/// use netconv_rs::format::Tokens;
/// use netconv_rs::{FieldType, Token};
///
/// let tokens: Vec<Token> = Tokens::new("4bi").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens, vec![
///     Token::new(4, FieldType::Byte),
///     Token::new(1, FieldType::Int),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    format: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(format: &'a str) -> Self {
        Tokens { format, pos: 0, failed: false }
    }

    /// Byte position of the next unread character
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_count(&mut self) -> Result<Option<u32>> {
        let bytes = self.format.as_bytes();
        let start = self.pos;
        let mut count: u32 = 0;

        while let Some(digit) = bytes.get(self.pos).filter(|b| b.is_ascii_digit()) {
            count = count
                .checked_mul(10)
                .and_then(|c| c.checked_add(u32::from(digit - b'0')))
                .ok_or_else(|| NetconvError::malformed(start, MalformedReason::CountOverflow))?;
            self.pos += 1;
        }

        if self.pos == start {
            return Ok(None);
        }
        if count == 0 {
            return Err(NetconvError::malformed(start, MalformedReason::ZeroCount));
        }
        Ok(Some(count))
    }

    fn read_field(&mut self) -> Result<FieldType> {
        let code = self.format[self.pos..]
            .chars()
            .next()
            .ok_or_else(|| NetconvError::malformed(self.pos, MalformedReason::MissingTypeCode))?;

        let field = FieldType::from_code(code)
            .ok_or_else(|| NetconvError::malformed(self.pos, MalformedReason::UnknownTypeCode(code)))?;
        self.pos += code.len_utf8();
        Ok(field)
    }

    fn read_token(&mut self) -> Result<Token> {
        let count = self.read_count()?.unwrap_or(1);
        let field = self.read_field()?;
        Ok(Token::new(count, field))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.format.len() {
            return None;
        }

        let token = self.read_token();
        match &token {
            Ok(token) => log::trace!("format token {} x {}", token.count, token.field.name()),
            Err(_) => self.failed = true,
        }
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
