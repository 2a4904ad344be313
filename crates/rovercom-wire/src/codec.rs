use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, WireError};

/// Wire type 0: variable-length integer.
pub const WIRE_VARINT: u8 = 0;
/// Wire type 1: 8-byte fixed-width value.
pub const WIRE_FIXED64: u8 = 1;
/// Wire type 2: length-delimited bytes.
pub const WIRE_LEN: u8 = 2;
/// Wire type 5: 4-byte fixed-width value.
pub const WIRE_FIXED32: u8 = 5;

/// Maximum encoded length of a 64-bit varint (7 value bits per byte).
pub const MAX_VARINT_LEN: usize = 10;

/// Append a varint: low 7 bits per byte, continuation bit set while more follow.
pub fn put_varint(mut value: u64, dst: &mut BytesMut) {
    while value >= 0x80 {
        dst.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    dst.put_u8(value as u8);
}

/// Encoded byte length of a varint.
pub fn varint_len(value: u64) -> usize {
    // bits 1..=64 map to 1..=10 bytes
    (64 - (value | 1).leading_zeros() as usize).div_ceil(7)
}

/// Read a varint, advancing `src` past its bytes.
pub fn get_varint(src: &mut &[u8]) -> Result<u64> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let Some((&byte, rest)) = src.split_first() else {
            return Err(WireError::Truncated);
        };
        *src = rest;
        // The 10th byte may only contribute the top value bit.
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(WireError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7F) << (7 * i as u32);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(WireError::VarintOverflow)
}

/// Append a field tag: `(field_number << 3) | wire_type`, varint-encoded.
///
/// Field numbers 1-15 with any wire type fit in a single tag byte.
pub fn put_tag(field: u32, wire_type: u8, dst: &mut BytesMut) {
    put_varint((u64::from(field) << 3) | u64::from(wire_type & 0x07), dst);
}

/// Read a field tag, returning `(field_number, wire_type)`.
pub fn get_tag(src: &mut &[u8]) -> Result<(u32, u8)> {
    let key = get_varint(src)?;
    let field = (key >> 3) as u32;
    if field == 0 {
        return Err(WireError::InvalidFieldNumber);
    }
    Ok((field, (key & 0x07) as u8))
}

/// Append a fixed32 float as 4 little-endian IEEE-754 bytes.
pub fn put_float(value: f32, dst: &mut BytesMut) {
    dst.put_f32_le(value);
}

/// Read a fixed32 float, advancing `src` by 4 bytes.
pub fn get_float(src: &mut &[u8]) -> Result<f32> {
    if src.len() < 4 {
        return Err(WireError::Truncated);
    }
    Ok(src.get_f32_le())
}

/// Skip one field value of the given wire type.
///
/// Lets decoders tolerate fields they do not know about, the same way the
/// device-side nanopb decoder does.
pub fn skip_field(wire_type: u8, src: &mut &[u8]) -> Result<()> {
    match wire_type {
        WIRE_VARINT => {
            get_varint(src)?;
        }
        WIRE_FIXED64 => {
            if src.len() < 8 {
                return Err(WireError::Truncated);
            }
            src.advance(8);
        }
        WIRE_LEN => {
            let len = get_varint(src)? as usize;
            if src.len() < len {
                return Err(WireError::Truncated);
            }
            src.advance(len);
        }
        WIRE_FIXED32 => {
            if src.len() < 4 {
                return Err(WireError::Truncated);
            }
            src.advance(4);
        }
        other => return Err(WireError::UnsupportedWireType(other)),
    }
    Ok(())
}
