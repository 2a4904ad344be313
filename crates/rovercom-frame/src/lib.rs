//! Length-prefixed packet framing for rovercom device links.
//!
//! Every packet on the link is framed as:
//! - A 2-byte big-endian payload length
//! - The payload bytes (a wire-encoded message)
//!
//! The receiving firmware reads the two length bytes first and rejects
//! anything larger than its 256-byte message buffer, so that limit is the
//! default maximum here. No partial reads, no buffer management in user
//! code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_packet, encode_packet, FrameConfig, DEFAULT_MAX_PAYLOAD, LENGTH_PREFIX_SIZE};
pub use error::{FrameError, Result};
pub use reader::PacketReader;
pub use writer::PacketWriter;
