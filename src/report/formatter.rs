// SPDX-License-Identifier: PMPL-1.0-or-later

//! Status formatting and output

use crate::types::*;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct StatusFormatter;

impl StatusFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, status: &AttackStatus) {
        println!("\n{}", "=== ATTACK STATUS ===".bold().cyan());
        println!("  Kind: {}", status.kind.to_string().bold());
        println!("  Target: {}", status.target);

        let state = if status.running {
            "RUNNING".green().bold()
        } else {
            "STOPPED".red().bold()
        };
        println!("  State: {}", state);

        match status.pid {
            Some(pid) => println!("  Process: {}", pid),
            None => println!("  Process: {}", "none".dimmed()),
        }
        println!("  Started: {}", status.started);
        if !status.stopped.is_empty() {
            println!("  Stopped: {}", status.stopped);
        }
    }

    pub fn print_kinds(&self, kinds: &[AttackKind]) {
        println!("{}", "ATTACK KINDS".bold().yellow());
        for kind in kinds {
            println!("  {:<12} {}", kind.to_string().bold(), kind.description());
        }
    }

    pub fn json(&self, status: &AttackStatus) -> Result<String> {
        serde_json::to_string_pretty(status).context("serializing attack status")
    }

    pub fn save<P: AsRef<Path>>(&self, status: &AttackStatus, path: P) -> Result<()> {
        let json = self.json(status)?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("writing status to {}", path.as_ref().display()))?;
        println!("Status saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for StatusFormatter {
    fn default() -> Self {
        Self::new()
    }
}
