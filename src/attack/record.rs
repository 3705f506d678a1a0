// SPDX-License-Identifier: PMPL-1.0-or-later

//! The attack record: metadata for one attack session plus control over
//! the process carrying it out.

use crate::attack::error::TerminationError;
use crate::attack::process::ProcessHandle;
use crate::timing;
use crate::types::{AttackKind, AttackStatus};
use chrono::{DateTime, Local};
use log::{info, warn};

/// One attack directed at a target, optionally backed by a live process.
///
/// `Created -> init -> Running -> stop -> Stopped`. Once stopped the record
/// is historical data; later `init` calls hand their process back.
#[derive(Debug)]
pub struct Attack {
    pub kind: AttackKind,
    pub target: String,
    pub running: bool,
    pub started: DateTime<Local>,
    stopped: Option<DateTime<Local>>,
    process: Option<ProcessHandle>,
}

impl Attack {
    pub fn new(kind: AttackKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            running: false,
            started: timing::now(),
            stopped: None,
            process: None,
        }
    }

    /// Attach the process performing the attack and mark it running.
    ///
    /// A record tracks at most one process and never leaves `Stopped`, so a
    /// handle offered to a stopped record, or to one already tracking a
    /// process, is not attached. It is handed back untouched: the caller
    /// still owns it and must terminate or wait on it.
    pub fn init(&mut self, process: ProcessHandle) -> Option<ProcessHandle> {
        if self.is_stopped() {
            warn!(
                "{} on {}: not attaching process {} to a stopped attack",
                self.kind,
                self.target,
                process.pid()
            );
            return Some(process);
        }

        let rejected = match &self.process {
            Some(existing) => {
                warn!(
                    "{} on {}: already tracking process {}, not attaching {}",
                    self.kind,
                    self.target,
                    existing.pid(),
                    process.pid()
                );
                Some(process)
            }
            None => {
                info!(
                    "{} on {}: tracking process {}",
                    self.kind,
                    self.target,
                    process.pid()
                );
                self.process = Some(process);
                None
            }
        };
        self.running = true;
        rejected
    }

    /// Terminate the attached process, if any, and mark the attack stopped.
    ///
    /// The record is marked stopped even when termination fails; the error
    /// is still handed back for reporting.
    pub fn stop(&mut self) -> Result<(), TerminationError> {
        let outcome = match self.process.as_mut() {
            Some(process) => process.terminate(),
            None => Ok(()),
        };

        self.running = false;
        self.stopped = Some(timing::now());

        match &outcome {
            Ok(()) => info!("{} on {}: stopped", self.kind, self.target),
            Err(err) => warn!(
                "{} on {}: marked stopped but termination failed: {}",
                self.kind, self.target, err
            ),
        }
        outcome
    }

    pub fn process(&self) -> Option<&ProcessHandle> {
        self.process.as_ref()
    }

    pub fn pid(&self) -> Option<u32> {
        self.process.as_ref().map(ProcessHandle::pid)
    }

    pub fn stopped(&self) -> Option<DateTime<Local>> {
        self.stopped
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    /// False when nothing is attached or the attached process has exited.
    pub fn is_process_alive(&mut self) -> bool {
        self.process
            .as_mut()
            .map(ProcessHandle::is_alive)
            .unwrap_or(false)
    }

    pub fn started_display(&self) -> String {
        timing::format_timestamp(&self.started)
    }

    /// Empty until the attack has been stopped.
    pub fn stopped_display(&self) -> String {
        self.stopped
            .as_ref()
            .map(timing::format_timestamp)
            .unwrap_or_default()
    }

    pub fn status(&self) -> AttackStatus {
        AttackStatus {
            kind: self.kind,
            target: self.target.clone(),
            running: self.running,
            started: self.started_display(),
            stopped: self.stopped_display(),
            pid: self.pid(),
        }
    }
}
