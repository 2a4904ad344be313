use std::io::{IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rovercom_client::BatchReport;
use rovercom_wire::{ControlCommand, Message};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CommandOutput<'a> {
    id: u32,
    speed: f32,
    steering: f32,
    enable: bool,
    peer: &'a str,
    timestamp: String,
}

pub fn print_command(cmd: &ControlCommand, peer: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = CommandOutput {
                id: cmd.id,
                speed: cmd.speed,
                steering: cmd.steering,
                enable: cmd.enable,
                peer,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "SPEED", "STEERING", "ENABLE", "PEER"])
                .add_row(vec![
                    cmd.id.to_string(),
                    format!("{:.2}", cmd.speed),
                    format!("{:.2}", cmd.steering),
                    cmd.enable.to_string(),
                    peer.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "id={} speed={:.2} steering={:.2} enable={} peer={}",
                cmd.id, cmd.speed, cmd.steering, cmd.enable, peer
            );
        }
        OutputFormat::Raw => {
            print_raw(&cmd.encode());
        }
    }
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    sent: usize,
    failed: usize,
    target: &'a str,
    timestamp: String,
}

pub fn print_batch_report(report: &BatchReport, target: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = BatchOutput {
                sent: report.sent,
                failed: report.failed,
                target,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SENT", "FAILED", "TARGET"])
                .add_row(vec![
                    report.sent.to_string(),
                    report.failed.to_string(),
                    target.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!(
                "sent={} failed={} target={}",
                report.sent, report.failed, target
            );
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
