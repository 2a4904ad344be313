use std::thread;
use std::time::Duration;

use rovercom_wire::ControlCommand;
use tracing::{info, warn};

use crate::sender::CommandSender;

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Commands that were delivered.
    pub sent: usize,
    /// Commands whose send failed.
    pub failed: usize,
}

impl BatchReport {
    /// True when every command in the batch was delivered.
    pub fn all_sent(&self) -> bool {
        self.failed == 0
    }
}

/// Send a sequence of commands, one connection each, pausing `interval`
/// between sends.
///
/// A failed send is logged and counted but never aborts the batch; the
/// remaining commands still go out on schedule.
pub fn send_batch(
    sender: &CommandSender,
    commands: &[ControlCommand],
    interval: Duration,
) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, cmd) in commands.iter().enumerate() {
        match sender.send(cmd) {
            Ok(()) => {
                info!(id = cmd.id, n = index + 1, total = commands.len(), "command sent");
                report.sent += 1;
            }
            Err(err) => {
                warn!(id = cmd.id, error = %err, "send failed, continuing batch");
                report.failed += 1;
            }
        }

        if index + 1 < commands.len() {
            thread::sleep(interval);
        }
    }

    report
}
