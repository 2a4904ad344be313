/// Errors that can occur while encoding or decoding wire bytes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// The input ended before a complete value was read.
    #[error("truncated input (field or value cut short)")]
    Truncated,

    /// A varint ran past the 10-byte limit or overflowed 64 bits.
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// A tag carried a wire type this codec cannot skip or decode.
    #[error("unsupported wire type {0}")]
    UnsupportedWireType(u8),

    /// A tag carried field number 0, which the wire format reserves.
    #[error("invalid field number 0")]
    InvalidFieldNumber,
}

pub type Result<T> = std::result::Result<T, WireError>;
