// SPDX-License-Identifier: PMPL-1.0-or-later

use thiserror::Error;

/// Failure to terminate the process attached to an attack.
#[derive(Debug, Error)]
pub enum TerminationError {
    #[error("refusing to terminate the calling process (pid {pid})")]
    SelfTermination { pid: u32 },

    #[error("not permitted to signal process {pid}")]
    PermissionDenied { pid: u32 },

    #[cfg(unix)]
    #[error("failed to signal process {pid}: {source}")]
    Signal {
        pid: u32,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("failed to kill child process {pid}: {source}")]
    Kill {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    #[cfg(not(unix))]
    #[error("signalling process {pid} by pid is not supported on this platform")]
    Unsupported { pid: u32 },
}

impl TerminationError {
    pub fn pid(&self) -> u32 {
        match self {
            TerminationError::SelfTermination { pid }
            | TerminationError::PermissionDenied { pid }
            | TerminationError::Kill { pid, .. } => *pid,
            #[cfg(unix)]
            TerminationError::Signal { pid, .. } => *pid,
            #[cfg(not(unix))]
            TerminationError::Unsupported { pid } => *pid,
        }
    }
}
