// SPDX-License-Identifier: PMPL-1.0-or-later

//! Spawns attack tools and hands them to a fresh [`Attack`] record.

use crate::attack::process::ProcessHandle;
use crate::attack::profile::AttackProfile;
use crate::attack::record::Attack;
use crate::types::AttackKind;
use anyhow::{Context, Result};
use log::info;
use std::process::{Command, Stdio};

pub struct AttackLauncher {
    profile: AttackProfile,
}

impl AttackLauncher {
    pub fn new(profile: AttackProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AttackProfile {
        &self.profile
    }

    /// Launch `kind` against `target` using the profile's command.
    pub fn launch(&self, kind: AttackKind, target: &str) -> Result<Attack> {
        let template = self.profile.command_for(kind)?;
        let args = template.render(target, self.profile.interface.as_deref())?;
        self.launch_command(kind, target, &template.program, &args)
    }

    /// Launch an explicit command line as a `kind` attack on `target`.
    pub fn launch_command(
        &self,
        kind: AttackKind,
        target: &str,
        program: &str,
        args: &[String],
    ) -> Result<Attack> {
        info!("launching {} on {}: {} {}", kind, target, program, args.join(" "));

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to execute attack program {}", program))?;

        let mut attack = Attack::new(kind, target);
        attack.init(ProcessHandle::from_child(child));
        Ok(attack)
    }
}

impl Default for AttackLauncher {
    fn default() -> Self {
        Self::new(AttackProfile::builtin())
    }
}
