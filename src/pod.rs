// src/pod.rs
//! Conversion of plain-old-data values
//!
//! A `#[repr(C, packed)]` struct whose fields are all integers can be
//! converted in place by viewing it as raw bytes. The format string still
//! describes the layout; these helpers only take care of the byte view.
//!
//! ```
//! use bytemuck::{Pod, Zeroable};
//! use netconv_rs::pod::{hton_pod, ntoh_pod};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C, packed)]
//! struct Header {
//!     kind: u8,
//!     flags: u8,
//!     length: u16,
//!     sequence: u32,
//! }
//!
//! let mut header = Header { kind: 1, flags: 0, length: 0x0102, sequence: 7 };
//! hton_pod("2bsi", &mut header).unwrap();
//! assert_eq!(bytemuck::bytes_of(&header), &[1, 0, 0x01, 0x02, 0, 0, 0, 7]);
//!
//! ntoh_pod("2bsi", &mut header).unwrap();
//! assert_eq!({ header.length }, 0x0102);
//! ```

use crate::convert::convert;
use crate::error::Result;
use crate::types::Direction;
use bytemuck::Pod;

pub fn hton_pod<'t, T: Pod>(format: &str, value: &'t mut T) -> Result<&'t mut T> {
    convert_pod(format, value, Direction::HostToNetwork)
}

pub fn ntoh_pod<'t, T: Pod>(format: &str, value: &'t mut T) -> Result<&'t mut T> {
    convert_pod(format, value, Direction::NetworkToHost)
}

pub fn convert_pod<'t, T: Pod>(format: &str, value: &'t mut T, direction: Direction) -> Result<&'t mut T> {
    convert(format, bytemuck::bytes_of_mut(value), direction)?;
    Ok(value)
}

/// Apply `format` to every element of `values`
///
/// Stops at the first failing element; earlier elements stay converted.
pub fn convert_each<T: Pod>(format: &str, values: &mut [T], direction: Direction) -> Result<()> {
    for value in values.iter_mut() {
        convert_pod(format, value, direction)?;
    }
    Ok(())
}
