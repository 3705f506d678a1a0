// SPDX-License-Identifier: PMPL-1.0-or-later

//! Owned handles to the OS processes that carry out an attack.

use crate::attack::error::TerminationError;
use log::debug;
use std::io;
use std::process::Child;

#[derive(Debug)]
enum Inner {
    /// Spawned by us; killing also reaps it.
    Spawned(Child),
    /// Located by pid; we can only signal it. `gone` is set once SIGKILL
    /// was delivered or the pid vanished; from then on the pid may belong
    /// to another process and is never signalled or probed again.
    Found { pid: u32, gone: bool },
}

/// Handle to a live process that an attack record can terminate.
#[derive(Debug)]
pub struct ProcessHandle {
    inner: Inner,
}

impl ProcessHandle {
    pub fn from_child(child: Child) -> Self {
        Self {
            inner: Inner::Spawned(child),
        }
    }

    /// Locate an already running process by pid.
    pub fn find(pid: u32) -> io::Result<Self> {
        if !pid_exists(pid)? {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no process with pid {}", pid),
            ));
        }
        Ok(Self {
            inner: Inner::Found { pid, gone: false },
        })
    }

    /// Handle to the calling process. It can never be terminated through
    /// [`ProcessHandle::terminate`].
    pub fn current() -> Self {
        Self {
            inner: Inner::Found {
                pid: std::process::id(),
                gone: false,
            },
        }
    }

    pub fn pid(&self) -> u32 {
        match &self.inner {
            Inner::Spawned(child) => child.id(),
            Inner::Found { pid, .. } => *pid,
        }
    }

    /// Kill the process. A process that has already exited is not an error.
    pub fn terminate(&mut self) -> Result<(), TerminationError> {
        let pid = self.pid();
        if pid == std::process::id() {
            return Err(TerminationError::SelfTermination { pid });
        }

        match &mut self.inner {
            Inner::Spawned(child) => {
                if let Ok(Some(status)) = child.try_wait() {
                    debug!("process {} already exited ({})", pid, status);
                    return Ok(());
                }
                child
                    .kill()
                    .map_err(|source| TerminationError::Kill { pid, source })?;
                let status = child
                    .wait()
                    .map_err(|source| TerminationError::Kill { pid, source })?;
                debug!("process {} terminated ({})", pid, status);
                Ok(())
            }
            Inner::Found { gone: true, .. } => {
                debug!("process {} already terminated, not signalling again", pid);
                Ok(())
            }
            Inner::Found { pid, gone } => {
                send_kill(*pid)?;
                *gone = true;
                Ok(())
            }
        }
    }

    /// Non-blocking liveness probe.
    pub fn is_alive(&mut self) -> bool {
        match &mut self.inner {
            Inner::Spawned(child) => matches!(child.try_wait(), Ok(None)),
            Inner::Found { gone: true, .. } => false,
            Inner::Found { pid, gone } => {
                let alive = pid_exists(*pid).unwrap_or(false);
                if !alive {
                    *gone = true;
                }
                alive
            }
        }
    }
}

impl PartialEq for ProcessHandle {
    fn eq(&self, other: &Self) -> bool {
        self.pid() == other.pid()
    }
}

impl Eq for ProcessHandle {}

#[cfg(unix)]
fn raw_pid(pid: u32) -> Option<nix::unistd::Pid> {
    // 0 and negative values address process groups, never a single process.
    i32::try_from(pid)
        .ok()
        .filter(|raw| *raw > 0)
        .map(nix::unistd::Pid::from_raw)
}

#[cfg(unix)]
fn pid_exists(pid: u32) -> io::Result<bool> {
    use nix::errno::Errno;

    let Some(target) = raw_pid(pid) else {
        return Ok(false);
    };
    // Signal 0 only performs the existence and permission checks.
    match nix::sys::signal::kill(target, None) {
        Ok(()) | Err(Errno::EPERM) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(errno) => Err(io::Error::from(errno)),
    }
}

#[cfg(not(unix))]
fn pid_exists(_pid: u32) -> io::Result<bool> {
    Ok(true)
}

#[cfg(unix)]
fn send_kill(pid: u32) -> Result<(), TerminationError> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};

    let target = raw_pid(pid).ok_or(TerminationError::Signal {
        pid,
        source: Errno::EINVAL,
    })?;
    match kill(target, Signal::SIGKILL) {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => {
            debug!("process {} already gone", pid);
            Ok(())
        }
        Err(Errno::EPERM) => Err(TerminationError::PermissionDenied { pid }),
        Err(source) => Err(TerminationError::Signal { pid, source }),
    }
}

#[cfg(not(unix))]
fn send_kill(pid: u32) -> Result<(), TerminationError> {
    Err(TerminationError::Unsupported { pid })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{Command, Stdio};

    fn spawn_sleeper() -> Child {
        Command::new("sleep")
            .arg("30")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn sleep")
    }

    #[test]
    fn current_handle_refuses_to_terminate() {
        let mut handle = ProcessHandle::current();
        assert_eq!(handle.pid(), std::process::id());
        let err = handle.terminate().unwrap_err();
        assert!(matches!(err, TerminationError::SelfTermination { .. }));
        assert_eq!(err.pid(), std::process::id());
        assert!(handle.is_alive());
    }

    #[test]
    fn spawned_child_is_killed_and_reaped() {
        let mut handle = ProcessHandle::from_child(spawn_sleeper());
        assert!(handle.is_alive());
        handle.terminate().expect("terminate sleeper");
        assert!(!handle.is_alive());
        // A second attempt on an exited child succeeds quietly.
        handle.terminate().expect("terminate exited sleeper");
    }

    #[test]
    fn found_process_receives_sigkill() {
        let mut child = spawn_sleeper();
        let mut handle = ProcessHandle::find(child.id()).expect("find sleeper");
        handle.terminate().expect("signal sleeper");
        let status = child.wait().expect("reap sleeper");
        assert_eq!(status.signal(), Some(Signal::SIGKILL as i32));
        handle.terminate().expect("second terminate is a no-op");
    }

    #[test]
    fn found_process_is_not_signalled_after_termination() {
        let mut child = spawn_sleeper();
        let mut handle = ProcessHandle::find(child.id()).expect("find sleeper");
        handle.terminate().expect("signal sleeper");

        // Still unreaped, so the pid answers signal 0.
        assert!(!handle.is_alive());
        assert!(matches!(handle.inner, Inner::Found { gone: true, .. }));

        handle.terminate().expect("second terminate");
        assert!(matches!(handle.inner, Inner::Found { gone: true, .. }));
        assert!(!handle.is_alive());

        let status = child.wait().expect("reap sleeper");
        assert_eq!(status.signal(), Some(Signal::SIGKILL as i32));
    }

    #[test]
    fn vanished_process_is_marked_gone() {
        let mut child = spawn_sleeper();
        let mut handle = ProcessHandle::find(child.id()).expect("find sleeper");
        child.kill().expect("kill sleeper");
        child.wait().expect("reap sleeper");

        assert!(!handle.is_alive());
        assert!(matches!(handle.inner, Inner::Found { gone: true, .. }));
        handle.terminate().expect("terminate vanished sleeper");
    }

    #[test]
    fn find_rejects_missing_pid() {
        let err = ProcessHandle::find(0x7fff_fff0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn handles_compare_by_pid() {
        let own = ProcessHandle::current();
        let found = ProcessHandle::find(std::process::id()).expect("find self");
        assert_eq!(own, found);
    }
}
