//! In-place byte order conversion
//!
//! The converter walks a buffer left to right, driven by the tokens of a
//! format string. Single-byte fields are skipped, wider fields are rewritten
//! in place between host order and network (big-endian) order.
//!
//! A failed call stops at the first bad token or the first field that does
//! not fit. Fields before that point stay converted; nothing is rolled back.
//! Use [`Format`](crate::Format) when a failure must leave the buffer alone.
//!
//! # Example
//!
//! ```
//! use netconv_rs::{hton, ntoh};
//!
//! let mut packet = [0u8; 6];
//! packet[..2].copy_from_slice(&0x1234u16.to_ne_bytes());
//! packet[2..].copy_from_slice(&0x0102_0304u32.to_ne_bytes());
//!
//! hton("1s1i", &mut packet).unwrap();
//! assert_eq!(packet, [0x12, 0x34, 0x01, 0x02, 0x03, 0x04]);
//!
//! ntoh("1s1i", &mut packet).unwrap();
//! assert_eq!(&packet[..2], &0x1234u16.to_ne_bytes());
//! ```

use crate::error::{NetconvError, Result};
use crate::format::Tokens;
use crate::types::{Direction, Token};
use bytes::BytesMut;

/// Convert `buffer` in place according to `format`
///
/// Returns the same slice on success. Bytes past the end of the layout are
/// left untouched.
pub fn convert<'b>(format: &str, buffer: &'b mut [u8], direction: Direction) -> Result<&'b mut [u8]> {
    convert_tokens(Tokens::new(format), buffer, direction).map_err(|err| {
        log::debug!("{:?} conversion of {:?} failed: {}", direction, format, err);
        err
    })
}

/// Host to network byte order
pub fn hton<'b>(format: &str, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
    convert(format, buffer, Direction::HostToNetwork)
}

/// Network to host byte order
pub fn ntoh<'b>(format: &str, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
    convert(format, buffer, Direction::NetworkToHost)
}

pub fn convert_host_to_network<'b>(format: &str, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
    hton(format, buffer)
}

pub fn convert_network_to_host<'b>(format: &str, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
    ntoh(format, buffer)
}

/// Copy `data` and convert the copy to network byte order
pub fn hton_copy(format: &str, data: &[u8]) -> Result<BytesMut> {
    convert_copy(format, data, Direction::HostToNetwork)
}

/// Copy `data` and convert the copy to host byte order
pub fn ntoh_copy(format: &str, data: &[u8]) -> Result<BytesMut> {
    convert_copy(format, data, Direction::NetworkToHost)
}

fn convert_copy(format: &str, data: &[u8], direction: Direction) -> Result<BytesMut> {
    let mut out = BytesMut::from(data);
    convert(format, &mut out[..], direction)?;
    Ok(out)
}

pub(crate) fn convert_tokens<'b, I>(tokens: I, buffer: &'b mut [u8], direction: Direction) -> Result<&'b mut [u8]>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let available = buffer.len();
    let mut offset = 0usize;

    for token in tokens {
        let token = token?;
        let width = token.field.width();

        for _ in 0..token.count {
            let chunk = offset
                .checked_add(width)
                .and_then(|end| buffer.get_mut(offset..end))
                .ok_or(NetconvError::BufferTooShort { offset, needed: width, available })?;
            direction.swap_field(token.field, chunk);
            offset += width;
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    fn host_layout() -> [u8; 6] {
        let mut buffer = [0u8; 6];
        buffer[..2].copy_from_slice(&0x1234u16.to_ne_bytes());
        buffer[2..].copy_from_slice(&0x0102_0304u32.to_ne_bytes());
        buffer
    }

    #[test]
    fn test_multi_field_conversion() {
        let mut buffer = host_layout();
        hton("1s1i", &mut buffer).unwrap();
        assert_eq!(buffer, [0x12, 0x34, 0x01, 0x02, 0x03, 0x04]);

        ntoh("1s1i", &mut buffer).unwrap();
        assert_eq!(buffer, host_layout());
    }

    #[test]
    fn test_returns_same_buffer() {
        let mut buffer = host_layout();
        let ptr = buffer.as_ptr();
        let out = hton("si", &mut buffer).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_single_byte_invariance() {
        let mut buffer = [0x7Fu8];
        assert_eq!(hton("b", &mut buffer).unwrap(), &[0x7F]);
        assert_eq!(ntoh("b", &mut buffer).unwrap(), &[0x7F]);
    }

    #[test]
    fn test_long_field() {
        let mut buffer = 0x0102_0304_0506_0708u64.to_ne_bytes();
        hton("l", &mut buffer).unwrap();
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_trailing_bytes_untouched() {
        let mut buffer = [0xAAu8; 10];
        buffer[..2].copy_from_slice(&0x0102u16.to_ne_bytes());
        hton("s", &mut buffer).unwrap();
        assert_eq!(&buffer[..2], &[0x01, 0x02]);
        assert!(buffer[2..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_partial_conversion_on_bad_token() {
        let mut buffer = [0u8; 4];
        buffer[..2].copy_from_slice(&0xABCDu16.to_ne_bytes());

        let err = hton("1s1x", &mut buffer).unwrap_err();
        assert_eq!(err, NetconvError::MalformedFormat {
            position: 3,
            reason: MalformedReason::UnknownTypeCode('x'),
        });
        assert_eq!(&buffer[..2], &[0xAB, 0xCD]);
    }

    #[test]
    fn test_buffer_too_short() {
        let mut buffer = [0u8; 5];
        buffer[..2].copy_from_slice(&0x0A0Bu16.to_ne_bytes());

        let err = hton("si", &mut buffer).unwrap_err();
        assert_eq!(err, NetconvError::BufferTooShort { offset: 2, needed: 4, available: 5 });
        assert_eq!(&buffer[..2], &[0x0A, 0x0B]);
    }

    #[test]
    fn test_empty_format_is_noop() {
        let mut buffer = [1u8, 2, 3];
        hton("", &mut buffer).unwrap();
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_copy_leaves_input_alone() {
        let input = host_layout();
        let out = hton_copy("si", &input).unwrap();
        assert_eq!(&out[..], &[0x12, 0x34, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(input, host_layout());

        let back = ntoh_copy("si", &out).unwrap();
        assert_eq!(&back[..], &host_layout());
    }

    #[test]
    fn test_named_aliases() {
        let mut a = host_layout();
        let mut b = host_layout();
        convert_host_to_network("1s1i", &mut a).unwrap();
        hton("1s1i", &mut b).unwrap();
        assert_eq!(a, b);

        convert_network_to_host("1s1i", &mut a).unwrap();
        assert_eq!(a, host_layout());
    }
}
