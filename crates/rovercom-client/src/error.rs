use std::time::Duration;

/// Errors that can occur while sending to a device.
///
/// None of these are fatal to a batch: the caller decides whether to keep
/// going (the batch loop does) or to map them to an exit code.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The connection did not establish within the configured timeout.
    #[error("connection to {addr} timed out after {timeout:?}")]
    ConnectTimeout { addr: String, timeout: Duration },

    /// The device actively refused the connection.
    #[error("connection to {addr} refused")]
    ConnectionRefused { addr: String },

    /// The target host did not resolve to any usable address.
    #[error("failed to resolve host {host}: {source}")]
    Resolve {
        host: String,
        source: std::io::Error,
    },

    /// Any other I/O failure on the connection.
    #[error("client I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Framing or encoding failed before or during the write.
    #[error(transparent)]
    Frame(#[from] rovercom_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
