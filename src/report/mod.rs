// SPDX-License-Identifier: PMPL-1.0-or-later

//! Status reporting for attack records

pub mod formatter;

use crate::types::*;
use anyhow::Result;
use std::path::Path;

pub use formatter::StatusFormatter;

/// Print a status block to the console
pub fn print_status(status: &AttackStatus) {
    StatusFormatter::new().print(status);
}

/// Pretty JSON for scripting consumers
pub fn status_json(status: &AttackStatus) -> Result<String> {
    StatusFormatter::new().json(status)
}

/// Save status as JSON
pub fn save_status<P: AsRef<Path>>(status: &AttackStatus, path: P) -> Result<()> {
    StatusFormatter::new().save(status, path)
}

/// List every attack kind with its description
pub fn print_kinds() {
    StatusFormatter::new().print_kinds(&AttackKind::all());
}
