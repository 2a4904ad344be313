/// Errors that can occur during packet framing.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing packets.
    #[error("packet I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection was closed before a complete packet was transferred.
    #[error("connection closed (incomplete packet)")]
    ConnectionClosed,

    /// The payload could not be decoded as a wire message.
    #[error("wire decode error: {0}")]
    Wire(#[from] rovercom_wire::WireError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
