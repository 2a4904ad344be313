use bytes::{Bytes, BytesMut};

use crate::codec::{
    get_float, get_tag, get_varint, put_float, put_tag, put_varint, skip_field, varint_len,
    WIRE_FIXED32, WIRE_VARINT,
};
use crate::error::Result;

/// A message that can be encoded to and decoded from wire bytes.
pub trait Message: Sized {
    /// Exact byte length of the encoded message.
    fn encoded_len(&self) -> usize;

    /// Append the encoded fields to `dst`.
    fn encode_to(&self, dst: &mut BytesMut);

    /// Decode a message from a complete field sequence.
    ///
    /// Fields may appear in any order; unknown fields are skipped and
    /// missing fields keep their zero defaults, matching the nanopb
    /// decoder on the device side.
    fn decode(src: &[u8]) -> Result<Self>;

    /// Encode into a freshly allocated buffer.
    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode_to(&mut buf);
        buf.freeze()
    }
}

/// A drive command for the device: created, encoded, discarded.
///
/// All four fields are always emitted in field order, so the wire image is
/// byte-for-byte predictable:
///
/// ```text
/// 08 <varint id>  15 <fixed32 speed>  1D <fixed32 steering>  20 <00|01>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlCommand {
    /// Command identifier.
    pub id: u32,
    /// Drive speed, normalized -1.0..=1.0.
    pub speed: f32,
    /// Steering angle, normalized -1.0..=1.0.
    pub steering: f32,
    /// Motor enable flag.
    pub enable: bool,
}

impl ControlCommand {
    const FIELD_ID: u32 = 1;
    const FIELD_SPEED: u32 = 2;
    const FIELD_STEERING: u32 = 3;
    const FIELD_ENABLE: u32 = 4;
}

impl Message for ControlCommand {
    fn encoded_len(&self) -> usize {
        // tag + varint id, two (tag + fixed32), tag + one-byte bool
        1 + varint_len(u64::from(self.id)) + 2 * (1 + 4) + 1 + 1
    }

    fn encode_to(&self, dst: &mut BytesMut) {
        put_tag(Self::FIELD_ID, WIRE_VARINT, dst);
        put_varint(u64::from(self.id), dst);
        put_tag(Self::FIELD_SPEED, WIRE_FIXED32, dst);
        put_float(self.speed, dst);
        put_tag(Self::FIELD_STEERING, WIRE_FIXED32, dst);
        put_float(self.steering, dst);
        put_tag(Self::FIELD_ENABLE, WIRE_VARINT, dst);
        put_varint(u64::from(self.enable), dst);
    }

    fn decode(mut src: &[u8]) -> Result<Self> {
        let mut cmd = Self::default();
        while !src.is_empty() {
            let (field, wire_type) = get_tag(&mut src)?;
            match (field, wire_type) {
                (Self::FIELD_ID, WIRE_VARINT) => cmd.id = get_varint(&mut src)? as u32,
                (Self::FIELD_SPEED, WIRE_FIXED32) => cmd.speed = get_float(&mut src)?,
                (Self::FIELD_STEERING, WIRE_FIXED32) => cmd.steering = get_float(&mut src)?,
                (Self::FIELD_ENABLE, WIRE_VARINT) => cmd.enable = get_varint(&mut src)? != 0,
                (_, other) => skip_field(other, &mut src)?,
            }
        }
        Ok(cmd)
    }
}

/// An environment reading reported by the device.
///
/// Uses the same codec and framing as [`ControlCommand`]; earlier firmware
/// revisions sent these unframed through a separate encoder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorReading {
    /// Degrees Celsius.
    pub temperature: f32,
    /// Relative humidity, percent.
    pub humidity: f32,
}

impl SensorReading {
    const FIELD_TEMPERATURE: u32 = 1;
    const FIELD_HUMIDITY: u32 = 2;
}

impl Message for SensorReading {
    fn encoded_len(&self) -> usize {
        2 * (1 + 4)
    }

    fn encode_to(&self, dst: &mut BytesMut) {
        put_tag(Self::FIELD_TEMPERATURE, WIRE_FIXED32, dst);
        put_float(self.temperature, dst);
        put_tag(Self::FIELD_HUMIDITY, WIRE_FIXED32, dst);
        put_float(self.humidity, dst);
    }

    fn decode(mut src: &[u8]) -> Result<Self> {
        let mut reading = Self::default();
        while !src.is_empty() {
            let (field, wire_type) = get_tag(&mut src)?;
            match (field, wire_type) {
                (Self::FIELD_TEMPERATURE, WIRE_FIXED32) => {
                    reading.temperature = get_float(&mut src)?
                }
                (Self::FIELD_HUMIDITY, WIRE_FIXED32) => reading.humidity = get_float(&mut src)?,
                (_, other) => skip_field(other, &mut src)?,
            }
        }
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WireError;

    // The reference vector the device firmware was validated against.
    const GOLDEN: &[u8] = &[
        0x08, 0x01, // id = 1
        0x15, 0x00, 0x00, 0x00, 0x3F, // speed = 0.5
        0x1D, 0x00, 0x00, 0x00, 0x00, // steering = 0.0
        0x20, 0x01, // enable = true
    ];

    #[test]
    fn golden_command_encoding() {
        let cmd = ControlCommand {
            id: 1,
            speed: 0.5,
            steering: 0.0,
            enable: true,
        };
        let encoded = cmd.encode();
        assert_eq!(encoded.as_ref(), GOLDEN);
        assert_eq!(encoded.len(), cmd.encoded_len());
    }

    #[test]
    fn golden_command_decoding() {
        let cmd = ControlCommand::decode(GOLDEN).unwrap();
        assert_eq!(
            cmd,
            ControlCommand {
                id: 1,
                speed: 0.5,
                steering: 0.0,
                enable: true,
            }
        );
    }

    #[test]
    fn disabled_command_emits_zero_byte() {
        let cmd = ControlCommand {
            id: 3,
            speed: 0.0,
            steering: -0.5,
            enable: false,
        };
        let encoded = cmd.encode();
        assert_eq!(&encoded[encoded.len() - 2..], &[0x20, 0x00]);
    }

    #[test]
    fn command_round_trip() {
        let commands = [
            ControlCommand::default(),
            ControlCommand {
                id: 2,
                speed: 1.0,
                steering: 0.25,
                enable: true,
            },
            ControlCommand {
                id: 4,
                speed: -0.8,
                steering: 0.1,
                enable: true,
            },
            ControlCommand {
                id: u32::MAX,
                speed: f32::MAX,
                steering: f32::MIN,
                enable: false,
            },
        ];
        for cmd in commands {
            let encoded = cmd.encode();
            assert_eq!(encoded.len(), cmd.encoded_len());
            assert_eq!(ControlCommand::decode(&encoded).unwrap(), cmd);
        }
    }

    #[test]
    fn decode_tolerates_field_reordering() {
        let mut buf = BytesMut::new();
        put_tag(4, WIRE_VARINT, &mut buf);
        put_varint(1, &mut buf);
        put_tag(1, WIRE_VARINT, &mut buf);
        put_varint(9, &mut buf);

        let cmd = ControlCommand::decode(&buf).unwrap();
        assert_eq!(cmd.id, 9);
        assert!(cmd.enable);
        // untouched fields keep zero defaults
        assert_eq!(cmd.speed, 0.0);
        assert_eq!(cmd.steering, 0.0);
    }

    #[test]
    fn decode_skips_unknown_fields() {
        let mut buf = BytesMut::new();
        put_tag(1, WIRE_VARINT, &mut buf);
        put_varint(7, &mut buf);
        // future field 9, length-delimited
        put_tag(9, crate::codec::WIRE_LEN, &mut buf);
        put_varint(3, &mut buf);
        buf.extend_from_slice(b"xyz");
        put_tag(4, WIRE_VARINT, &mut buf);
        put_varint(1, &mut buf);

        let cmd = ControlCommand::decode(&buf).unwrap();
        assert_eq!(cmd.id, 7);
        assert!(cmd.enable);
    }

    #[test]
    fn decode_truncated_value_rejected() {
        // tag for speed, then only 2 of 4 bytes
        let err = ControlCommand::decode(&[0x15, 0x00, 0x00]).unwrap_err();
        assert_eq!(err, WireError::Truncated);
    }

    #[test]
    fn reading_round_trip() {
        let reading = SensorReading {
            temperature: 27.5,
            humidity: 65.2,
        };
        let encoded = reading.encode();
        assert_eq!(encoded.len(), reading.encoded_len());
        assert_eq!(encoded[0], 0x0D);
        assert_eq!(encoded[5], 0x15);
        assert_eq!(SensorReading::decode(&encoded).unwrap(), reading);
    }
}
