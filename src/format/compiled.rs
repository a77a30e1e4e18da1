// src/format/compiled.rs
use super::Tokens;
use crate::convert::convert_tokens;
use crate::error::{MalformedReason, NetconvError, Result};
use crate::types::{Direction, Token};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A format string parsed and validated once
///
/// Converting through a `Format` never touches the buffer unless the whole
/// layout is well formed and fits, so a failed call leaves the buffer as it
/// was. Typical layouts fit inline without a heap allocation.
///
/// # Example
///
/// ```
/// use netconv_rs::Format;
///
/// let format: Format = "2s1l".parse().unwrap();
/// assert_eq!(format.encoded_len(), 12);
///
/// let mut packet = [0u8; 12];
/// format.hton(&mut packet).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    tokens: SmallVec<[Token; 8]>,
    encoded_len: usize,
}

impl Format {
    pub fn parse(format: &str) -> Result<Self> {
        let mut tokens = SmallVec::new();
        let mut encoded_len: usize = 0;
        let mut parser = Tokens::new(format);

        while let Some(token) = parser.next() {
            let token = token?;
            encoded_len = token
                .byte_len()
                .and_then(|len| encoded_len.checked_add(len))
                .ok_or_else(|| NetconvError::malformed(parser.position(), MalformedReason::CountOverflow))?;
            tokens.push(token);
        }

        Ok(Format { tokens, encoded_len })
    }

    /// Total number of bytes the layout covers
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Convert `buffer` in place after checking it is long enough
    pub fn convert<'b>(&self, buffer: &'b mut [u8], direction: Direction) -> Result<&'b mut [u8]> {
        if buffer.len() < self.encoded_len {
            return Err(NetconvError::BufferTooShort {
                offset: 0,
                needed: self.encoded_len,
                available: buffer.len(),
            });
        }
        convert_tokens(self.tokens.iter().copied().map(Ok), buffer, direction)
    }

    pub fn hton<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
        self.convert(buffer, Direction::HostToNetwork)
    }

    pub fn ntoh<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
        self.convert(buffer, Direction::NetworkToHost)
    }
}

impl FromStr for Format {
    type Err = NetconvError;

    fn from_str(s: &str) -> Result<Self> {
        Format::parse(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}{}", token.count, token.field.code())?;
        }
        Ok(())
    }
}
