// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack lifecycle tracking

pub mod error;
pub mod launcher;
pub mod process;
pub mod profile;
pub mod record;
pub mod supervisor;

pub use error::TerminationError;
pub use launcher::AttackLauncher;
pub use process::ProcessHandle;
pub use profile::{AttackProfile, CommandTemplate};
pub use record::Attack;
pub use supervisor::{finish, supervise, FinishOptions, Finished};
