// SPDX-License-Identifier: PMPL-1.0-or-later

//! Running an attack to completion: wait for it, stop it, report it.

use crate::attack::error::TerminationError;
use crate::attack::record::Attack;
use crate::report;
use crate::types::AttackStatus;
use anyhow::Result;
use colored::*;
use log::info;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct FinishOptions {
    /// Print the final status as JSON instead of the coloured block
    pub json: bool,
    /// Also save the final status to this file
    pub output: Option<PathBuf>,
}

/// Outcome of [`finish`]. A failed kill lands in `termination_error`; the
/// status reads stopped regardless.
#[derive(Debug)]
pub struct Finished {
    pub status: AttackStatus,
    pub termination_error: Option<TerminationError>,
}

/// Block until the attack process exits or `limit` elapses.
pub fn supervise(attack: &mut Attack, limit: Option<Duration>) {
    println!(
        "{} {} on {} (started {})",
        "Attacking:".bold(),
        attack.kind,
        attack.target,
        attack.started_display()
    );

    let start = Instant::now();
    loop {
        if !attack.is_process_alive() {
            info!("{} process exited on its own", attack.kind);
            break;
        }
        if limit.is_some_and(|limit| start.elapsed() >= limit) {
            break;
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Stop the attack and report its final status.
///
/// Only reporting failures are errors. A termination failure is printed
/// as a warning and returned in [`Finished`].
pub fn finish(attack: &mut Attack, options: &FinishOptions) -> Result<Finished> {
    let termination_error = attack.stop().err();
    if let Some(err) = &termination_error {
        println!("{} {}", "warning:".yellow().bold(), err);
    }

    let status = attack.status();
    if options.json {
        println!("{}", report::status_json(&status)?);
    } else {
        report::print_status(&status);
    }

    if let Some(path) = &options.output {
        report::save_status(&status, path)?;
    }

    Ok(Finished {
        status,
        termination_error,
    })
}
