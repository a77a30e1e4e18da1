// src/lib.rs
//! # netconv-rs
//!
//! In-place conversion of packed binary buffers between host byte order and
//! network (big-endian) byte order. The layout of the buffer is described by
//! a compact format string such as `"4b4s2l"`.
//!
//! ## Features
//!
//! - 🔁 **Symmetric**: [`hton`] and [`ntoh`] share one conversion routine
//! - 📦 **In Place**: no copies and no allocation on the string-driven path
//! - 🔒 **Checked**: every field is bounds-checked against the buffer
//! - 🧾 **Compiled Formats**: [`Format`] validates once and never converts partially
//! - 🧱 **POD Support**: convert `#[repr(C, packed)]` structs via `bytemuck` (feature `pod`)
//!
//! ## Format Strings
//!
//! | code | field | width |
//! |------|-------|-------|
//! | `b`  | u8    | 1     |
//! | `s`  | u16   | 2     |
//! | `i`  | u32   | 4     |
//! | `l`  | u64   | 8     |
//!
//! Each code may be prefixed by a decimal repeat count; an omitted count
//! means 1. `"4b4s2l"` is four bytes, four shorts, then two longs.
//!
//! ## Quick Start
//!
//! ```rust
//! use netconv_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut packet = [0u8; 8];
//!     packet[2..4].copy_from_slice(&0x0800u16.to_ne_bytes());
//!     packet[4..8].copy_from_slice(&0xC0A8_0001u32.to_ne_bytes());
//!
//!     hton("2bsi", &mut packet)?;
//!     assert_eq!(&packet[2..], &[0x08, 0x00, 0xC0, 0xA8, 0x00, 0x01]);
//!
//!     ntoh("2bsi", &mut packet)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Semantics
//!
//! The string-driven functions convert as they parse. When they fail, the
//! fields before the failure point have already been converted:
//!
//! ```rust
//! use netconv_rs::*;
//!
//! let mut buffer = [0u8; 4];
//! buffer[..2].copy_from_slice(&0x1234u16.to_ne_bytes());
//!
//! assert!(hton("1s1x", &mut buffer).is_err());
//! assert_eq!(&buffer[..2], &[0x12, 0x34]);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod format;
pub mod convert;

#[cfg(feature = "pod")]
pub mod pod;

pub use error::{MalformedReason, NetconvError, Result};

pub use types::{
    Direction,
    FieldType,
    Token,
};

pub use format::{
    Format,
    Tokens,
    encoded_len,
};

pub use convert::{
    convert,
    convert_host_to_network,
    convert_network_to_host,
    hton,
    hton_copy,
    ntoh,
    ntoh_copy,
};

pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use netconv_rs::prelude::*;
    //! ```

    pub use crate::error::{NetconvError, Result};
    pub use crate::types::{Direction, FieldType};
    pub use crate::format::Format;
    pub use crate::convert::{hton, ntoh};
}

/// Network byte order is big-endian
pub const NETWORK_IS_BIG_ENDIAN: bool = true;

/// True when host and network byte order agree and conversion is a no-op
pub const HOST_IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(NETWORK_IS_BIG_ENDIAN);
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_host_order_constant() {
        let probe = 1u16.to_ne_bytes();
        assert_eq!(HOST_IS_BIG_ENDIAN, probe == [0, 1]);
    }

    #[test]
    fn test_root_exports() {
        let format: Format = "4bi".parse().unwrap();
        assert_eq!(encoded_len("4b1i").unwrap(), format.encoded_len());

        let mut buffer = [0u8; 8];
        hton("4bi", &mut buffer).unwrap();
        ntoh("4bi", &mut buffer).unwrap();
        assert_eq!(buffer, [0u8; 8]);
    }

    #[test]
    fn test_error_display() {
        let err = hton("2", &mut [0u8; 4]).unwrap_err();
        assert_eq!(err.to_string(), "Malformed format at position 1: expected a type code, found end of format");

        let err = hton("l", &mut [0u8; 4]).unwrap_err();
        assert_eq!(err.to_string(), "Buffer too short: field at offset 0 needs 8 bytes, buffer holds 4");
    }
}
