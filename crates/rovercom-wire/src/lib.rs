//! Protobuf-compatible wire codec for rovercom command messages.
//!
//! Implements the subset of the protobuf wire format the device firmware
//! (nanopb) understands: varint and fixed32 fields, each preceded by a
//! varint tag of `(field_number << 3) | wire_type`. Messages are plain
//! structs with hand-written encoders so the exact byte layout stays
//! auditable against the firmware.

pub mod codec;
pub mod error;
pub mod message;

pub use codec::{
    get_float, get_tag, get_varint, put_float, put_tag, put_varint, skip_field, varint_len,
    MAX_VARINT_LEN, WIRE_FIXED32, WIRE_FIXED64, WIRE_LEN, WIRE_VARINT,
};
pub use error::{Result, WireError};
pub use message::{ControlCommand, Message, SensorReading};
