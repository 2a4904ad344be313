use rovercom_client::{send_batch, CommandSender, Target};
use rovercom_wire::ControlCommand;
use tracing::info;

use crate::cmd::{parse_duration, BatchArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_batch_report, OutputFormat};

/// The exercise sequence used to shake out a device end to end: forward,
/// forward with steering, coast disabled, reverse.
fn exercise_commands() -> Vec<ControlCommand> {
    vec![
        ControlCommand {
            id: 1,
            speed: 0.5,
            steering: 0.0,
            enable: true,
        },
        ControlCommand {
            id: 2,
            speed: 1.0,
            steering: 0.25,
            enable: true,
        },
        ControlCommand {
            id: 3,
            speed: 0.0,
            steering: -0.5,
            enable: false,
        },
        ControlCommand {
            id: 4,
            speed: -0.8,
            steering: 0.1,
            enable: true,
        },
    ]
}

pub fn run(args: BatchArgs, format: OutputFormat) -> CliResult<i32> {
    let interval = parse_duration(&args.interval)?;
    let timeout = parse_duration(&args.timeout)?;
    let target = Target::new(&args.host)
        .with_port(args.port)
        .with_connect_timeout(timeout);
    let sender = CommandSender::new(target);

    let commands = exercise_commands();
    info!(
        target = %sender.target().addr_string(),
        count = commands.len(),
        "starting exercise batch"
    );

    let report = send_batch(&sender, &commands, interval);
    print_batch_report(&report, &sender.target().addr_string(), format);

    // Per-send failures are already logged; the batch itself completed.
    Ok(SUCCESS)
}
