// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words nfds

//! Test doubles for [`SelectSyscall`]. Used by the unit tests in this crate, the
//! integration tests in `tests/`, and by downstream crates that want to drive
//! [`FdSelect`] deterministically.
//!
//! [`FdSelect`]: crate::FdSelect

use crate::{FdSet, SelectSyscall};
use std::{collections::VecDeque,
          os::fd::RawFd,
          sync::{Mutex, MutexGuard, PoisonError},
          time::Duration};

/// What [`ScriptedSelect`] does on one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Overwrite the three sets with exactly these descriptors and return their total
    /// count, whether or not they were watched.
    Ready {
        read: Vec<RawFd>,
        write: Vec<RawFd>,
        except: Vec<RawFd>,
    },
    /// Fail with this raw OS error code. The sets are left untouched.
    Error(i32),
}

impl ScriptedResponse {
    /// Only read readiness.
    pub fn ready_read(read: impl IntoIterator<Item = RawFd>) -> Self {
        Self::Ready {
            read: read.into_iter().collect(),
            write: vec![],
            except: vec![],
        }
    }
}

/// Arguments seen by one [`ScriptedSelect`] call, captured before the sets are
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub nfds: RawFd,
    pub read_fds: FdSet,
    pub write_fds: FdSet,
    pub except_fds: FdSet,
    pub timeout: Option<Duration>,
}

/// A [`SelectSyscall`] that never blocks. It replays [`ScriptedResponse`]s in order and
/// records every call. Once the script runs out, each call fails with
/// [`std::io::ErrorKind::Other`].
///
/// Wrap it in an [`Arc`] to keep a handle for inspecting [`calls()`] after handing it
/// to an [`FdSelect`].
///
/// [`Arc`]: std::sync::Arc
/// [`FdSelect`]: crate::FdSelect
/// [`calls()`]: Self::calls
#[derive(Debug, Default)]
pub struct ScriptedSelect {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedSelect {
    pub fn new(responses: impl IntoIterator<Item = ScriptedResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::default(),
        }
    }

    /// Appends a response to the end of the script.
    pub fn push(&self, response: ScriptedResponse) { lock(&self.responses).push_back(response); }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> { lock(&self.calls).clone() }

    #[must_use]
    pub fn remaining(&self) -> usize { lock(&self.responses).len() }
}

impl SelectSyscall for ScriptedSelect {
    fn select(
        &self,
        nfds: RawFd,
        read_fds: &mut FdSet,
        write_fds: &mut FdSet,
        except_fds: &mut FdSet,
        timeout: Option<Duration>,
    ) -> std::io::Result<usize> {
        lock(&self.calls).push(RecordedCall {
            nfds,
            read_fds: read_fds.clone(),
            write_fds: write_fds.clone(),
            except_fds: except_fds.clone(),
            timeout,
        });

        let Some(response) = lock(&self.responses).pop_front() else {
            return Err(std::io::Error::other("ScriptedSelect: script exhausted"));
        };

        match response {
            ScriptedResponse::Error(code) => Err(std::io::Error::from_raw_os_error(code)),
            ScriptedResponse::Ready {
                read,
                write,
                except,
            } => {
                *read_fds = read.into_iter().collect();
                *write_fds = write.into_iter().collect();
                *except_fds = except.into_iter().collect();
                Ok(read_fds.len() + write_fds.len() + except_fds.len())
            }
        }
    }
}
