// src/types.rs
use byteorder::{BigEndian, ByteOrder, NativeEndian};

/// Field type named by a single type code in a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldType {
    Byte = b'b',
    Short = b's',
    Int = b'i',
    Long = b'l',
}

impl FieldType {
    /// Width of one field of this type in bytes
    pub fn width(&self) -> usize {
        match self {
            FieldType::Byte => 1,
            FieldType::Short => 2,
            FieldType::Int => 4,
            FieldType::Long => 8,
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(FieldType::Byte),
            's' => Some(FieldType::Short),
            'i' => Some(FieldType::Int),
            'l' => Some(FieldType::Long),
            _ => None,
        }
    }

    /// The type code as it appears in a format string
    pub fn code(&self) -> char {
        *self as u8 as char
    }

    /// Single-byte fields are invariant under any byte order transform
    pub fn is_order_invariant(&self) -> bool {
        matches!(self, FieldType::Byte)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Byte => "u8",
            FieldType::Short => "u16",
            FieldType::Int => "u32",
            FieldType::Long => "u64",
        }
    }
}

/// One decoded format entry: `count` consecutive fields of type `field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub count: u32,
    pub field: FieldType,
}

impl Token {
    pub fn new(count: u32, field: FieldType) -> Self {
        Token { count, field }
    }

    /// Total bytes covered by this token, or None on overflow
    pub fn byte_len(&self) -> Option<usize> {
        (self.count as usize).checked_mul(self.field.width())
    }
}

/// Which way a conversion moves bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    HostToNetwork,
    NetworkToHost,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::HostToNetwork => Direction::NetworkToHost,
            Direction::NetworkToHost => Direction::HostToNetwork,
        }
    }

    /// Rewrite one field in place. `chunk` must be exactly `field.width()` bytes.
    pub(crate) fn swap_field(&self, field: FieldType, chunk: &mut [u8]) {
        match self {
            Direction::HostToNetwork => transcode::<NativeEndian, BigEndian>(field, chunk),
            Direction::NetworkToHost => transcode::<BigEndian, NativeEndian>(field, chunk),
        }
    }
}

fn transcode<Src: ByteOrder, Dst: ByteOrder>(field: FieldType, chunk: &mut [u8]) {
    match field {
        FieldType::Byte => {}
        FieldType::Short => {
            let value = Src::read_u16(chunk);
            Dst::write_u16(chunk, value);
        }
        FieldType::Int => {
            let value = Src::read_u32(chunk);
            Dst::write_u32(chunk, value);
        }
        FieldType::Long => {
            let value = Src::read_u64(chunk);
            Dst::write_u64(chunk, value);
        }
    }
}
