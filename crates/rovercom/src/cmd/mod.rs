use std::time::Duration;

use clap::{Args, Subcommand};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod batch;
pub mod listen;
pub mod send;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a single control command.
    Send(SendArgs),
    /// Send the reference exercise sequence.
    Batch(BatchArgs),
    /// Listen for framed commands and print them.
    Listen(ListenArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args, format),
        Command::Batch(args) => batch::run(args, format),
        Command::Listen(args) => listen::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Device host to connect to.
    #[arg(default_value = rovercom_client::DEFAULT_HOST)]
    pub host: String,
    /// Device port.
    #[arg(long, short = 'p', default_value_t = rovercom_client::DEFAULT_PORT)]
    pub port: u16,
    /// Command identifier.
    #[arg(long, default_value_t = 1)]
    pub id: u32,
    /// Drive speed, -1.0..=1.0.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub speed: f32,
    /// Steering angle, -1.0..=1.0.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub steering: f32,
    /// Set the motor enable flag.
    #[arg(long)]
    pub enable: bool,
    /// Connection timeout (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Device host to connect to.
    #[arg(default_value = rovercom_client::DEFAULT_HOST)]
    pub host: String,
    /// Device port.
    #[arg(long, short = 'p', default_value_t = rovercom_client::DEFAULT_PORT)]
    pub port: u16,
    /// Pause between commands (e.g. 1s, 500ms).
    #[arg(long, default_value = "1s")]
    pub interval: String,
    /// Connection timeout per send (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub timeout: String,
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,
    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = rovercom_client::DEFAULT_PORT)]
    pub port: u16,
    /// Exit after printing N commands.
    #[arg(long)]
    pub count: Option<usize>,
}

pub(crate) fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}
