//! Synchronous TCP command sender for rovercom devices.
//!
//! Each send is fully self-contained: resolve the target, connect with a
//! bounded timeout, write one framed message, drop the connection. The
//! device firmware accepts exactly one message per connection, so there is
//! no session state to manage and nothing to retry.

pub mod batch;
pub mod config;
pub mod error;
pub mod sender;

pub use batch::{send_batch, BatchReport};
pub use config::{Target, DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{ClientError, Result};
pub use sender::CommandSender;
