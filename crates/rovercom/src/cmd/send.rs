use rovercom_client::{CommandSender, Target};
use rovercom_wire::ControlCommand;

use crate::cmd::{parse_duration, SendArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_command, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let timeout = parse_duration(&args.timeout)?;
    let target = Target::new(&args.host)
        .with_port(args.port)
        .with_connect_timeout(timeout);
    let sender = CommandSender::new(target);

    let cmd = ControlCommand {
        id: args.id,
        speed: args.speed,
        steering: args.steering,
        enable: args.enable,
    };

    sender
        .send(&cmd)
        .map_err(|err| client_error("send failed", err))?;

    print_command(&cmd, &sender.target().addr_string(), format);
    Ok(SUCCESS)
}
