// SPDX-License-Identifier: PMPL-1.0-or-later

//! attackctl: lifecycle tracking for externally spawned attack tools.
//!
//! The centre of the crate is [`attack::Attack`], a record of one attack
//! session: its kind, its target, when it started and stopped, and an owned
//! handle to the process doing the work. Stopping a record always marks it
//! stopped, even when the process refuses to die.
//!
//! Around it:
//! 1. **Launcher**: renders a command from an attack profile and spawns it.
//! 2. **Process handles**: kill spawned children or signal processes by pid.
//! 3. **Report**: status snapshots for the terminal or as JSON.

pub mod attack;
pub mod report;
pub mod timing;
pub mod types;
