use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};

use rovercom_frame::{FrameConfig, PacketWriter};
use rovercom_wire::{ControlCommand, Message, SensorReading};
use tracing::debug;

use crate::config::Target;
use crate::error::{ClientError, Result};

/// Sends framed command messages to a device, one connection per message.
pub struct CommandSender {
    target: Target,
    frame_config: FrameConfig,
}

impl CommandSender {
    /// Create a sender for the given target.
    ///
    /// The target's connect timeout also bounds the write, so a wedged
    /// device cannot stall a send indefinitely.
    pub fn new(target: Target) -> Self {
        let frame_config = FrameConfig {
            write_timeout: Some(target.connect_timeout),
            ..FrameConfig::default()
        };
        Self {
            target,
            frame_config,
        }
    }

    /// The configured target.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Send one control command.
    pub fn send(&self, cmd: &ControlCommand) -> Result<()> {
        debug!(
            id = cmd.id,
            speed = cmd.speed,
            steering = cmd.steering,
            enable = cmd.enable,
            "sending control command"
        );
        self.send_message(cmd)
    }

    /// Send one sensor reading through the same codec and framing.
    pub fn send_reading(&self, reading: &SensorReading) -> Result<()> {
        debug!(
            temperature = reading.temperature,
            humidity = reading.humidity,
            "sending sensor reading"
        );
        self.send_message(reading)
    }

    fn send_message<M: Message>(&self, message: &M) -> Result<()> {
        // The connection lives exactly as long as this call: acquired here,
        // dropped on every return path.
        let stream = self.connect()?;
        let mut writer = PacketWriter::with_config_tcp(stream, self.frame_config.clone())?;
        writer.send_message(message)?;
        Ok(())
    }

    fn connect(&self) -> Result<TcpStream> {
        let addrs = (self.target.host.as_str(), self.target.port)
            .to_socket_addrs()
            .map_err(|source| ClientError::Resolve {
                host: self.target.host.clone(),
                source,
            })?;

        let mut last = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.target.connect_timeout) {
                Ok(stream) => {
                    debug!(%addr, "connected");
                    return Ok(stream);
                }
                Err(err) => last = Some((addr, err)),
            }
        }

        match last {
            Some((addr, err)) => Err(match err.kind() {
                ErrorKind::TimedOut | ErrorKind::WouldBlock => ClientError::ConnectTimeout {
                    addr: addr.to_string(),
                    timeout: self.target.connect_timeout,
                },
                ErrorKind::ConnectionRefused => ClientError::ConnectionRefused {
                    addr: addr.to_string(),
                },
                _ => ClientError::Io(err),
            }),
            None => Err(ClientError::Resolve {
                host: self.target.host.clone(),
                source: std::io::Error::new(
                    ErrorKind::NotFound,
                    "host resolved to no addresses",
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    fn local_target(port: u16) -> Target {
        Target::new("127.0.0.1")
            .with_port(port)
            .with_connect_timeout(std::time::Duration::from_secs(2))
    }

    #[test]
    fn sends_one_framed_command_per_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("should accept");
            let mut received = Vec::new();
            stream
                .read_to_end(&mut received)
                .expect("should read to client close");
            received
        });

        let sender = CommandSender::new(local_target(port));
        sender
            .send(&ControlCommand {
                id: 1,
                speed: 0.5,
                steering: 0.0,
                enable: true,
            })
            .expect("send should succeed");

        let received = server.join().expect("server thread should complete");
        assert_eq!(
            received,
            [
                0x00, 0x0E, // length prefix
                0x08, 0x01, 0x15, 0x00, 0x00, 0x00, 0x3F, 0x1D, 0x00, 0x00, 0x00, 0x00, 0x20,
                0x01,
            ]
        );
    }

    #[test]
    fn sends_sensor_reading_with_same_framing() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("should accept");
            let mut received = Vec::new();
            stream.read_to_end(&mut received).expect("should read");
            received
        });

        let sender = CommandSender::new(local_target(port));
        sender
            .send_reading(&SensorReading {
                temperature: 27.5,
                humidity: 65.2,
            })
            .expect("send should succeed");

        let received = server.join().expect("server thread should complete");
        assert_eq!(&received[..2], &[0x00, 0x0A]);
        let reading = SensorReading::decode(&received[2..]).expect("payload should decode");
        assert_eq!(reading.temperature, 27.5);
        assert_eq!(reading.humidity, 65.2);
    }

    #[test]
    fn refused_connection_reported_as_such() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let sender = CommandSender::new(local_target(port));
        let err = sender.send(&ControlCommand::default()).unwrap_err();
        assert!(matches!(err, ClientError::ConnectionRefused { .. }));
    }

    #[test]
    fn unresolvable_host_reported_as_resolve_error() {
        let sender = CommandSender::new(Target::new("nonexistent.invalid"));
        let err = sender.send(&ControlCommand::default()).unwrap_err();
        assert!(matches!(err, ClientError::Resolve { .. }));
    }
}
