// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for attackctl

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attack variants a record can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackKind {
    Deauth,
    Disassoc,
    AuthFlood,
    BeaconFlood,
}

impl AttackKind {
    pub fn all() -> Vec<AttackKind> {
        vec![
            AttackKind::Deauth,
            AttackKind::Disassoc,
            AttackKind::AuthFlood,
            AttackKind::BeaconFlood,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            AttackKind::Deauth => "Send deauthentication frames to a station or access point",
            AttackKind::Disassoc => "Send disassociation frames to clients of an access point",
            AttackKind::AuthFlood => "Flood an access point with authentication requests",
            AttackKind::BeaconFlood => "Broadcast fake beacon frames",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            AttackKind::Deauth => "Deauth",
            AttackKind::Disassoc => "Disassoc",
            AttackKind::AuthFlood => "AuthFlood",
            AttackKind::BeaconFlood => "BeaconFlood",
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AttackKind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "deauth" => Ok(AttackKind::Deauth),
            "disassoc" => Ok(AttackKind::Disassoc),
            "authflood" => Ok(AttackKind::AuthFlood),
            "beaconflood" => Ok(AttackKind::BeaconFlood),
            _ => Err(anyhow!("unknown attack kind '{}'", raw)),
        }
    }
}

/// Point-in-time view of an attack for status displays.
///
/// Timestamps are opaque display strings; `stopped` stays empty until the
/// attack has been stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackStatus {
    pub kind: AttackKind,
    pub target: String,
    pub running: bool,
    pub started: String,
    pub stopped: String,
    pub pid: Option<u32>,
}
