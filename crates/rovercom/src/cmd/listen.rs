use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rovercom_frame::{FrameError, PacketReader};
use rovercom_wire::{ControlCommand, Message};
use tracing::{info, warn};

use crate::cmd::ListenArgs;
use crate::exit::{io_error, CliError, CliResult, SUCCESS};
use crate::output::{print_command, OutputFormat};

pub fn run(args: ListenArgs, format: OutputFormat) -> CliResult<i32> {
    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr).map_err(|err| io_error("bind failed", err))?;
    info!(%addr, "listening for framed commands");

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let mut printed = 0usize;

    while running.load(Ordering::SeqCst) {
        let (stream, peer) = match listener.accept() {
            Ok(conn) => conn,
            Err(err) => return Err(io_error("accept failed", err)),
        };

        // The firmware protocol is one framed message per connection.
        let mut reader = PacketReader::new(stream);
        let payload = match reader.read_packet() {
            Ok(payload) => payload,
            Err(FrameError::ConnectionClosed) => continue,
            Err(err) => {
                warn!(%peer, error = %err, "dropping bad packet");
                continue;
            }
        };

        match ControlCommand::decode(&payload) {
            Ok(cmd) => {
                print_command(&cmd, &peer.to_string(), format);
                printed = printed.saturating_add(1);
            }
            Err(err) => {
                warn!(%peer, error = %err, "failed to decode command");
            }
        }

        if let Some(count) = args.count {
            if printed >= count {
                return Ok(SUCCESS);
            }
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
