// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words nfds EMFILE

//! [`FdSelect`], the interruptible [`select(2)`] wrapper. See the [crate docs] for an
//! overview.
//!
//! [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
//! [crate docs]: crate

use crate::{CancelPipe, CancelPipeCreationError, FdSelectConfig, FdSelectError, FdSet,
            FdTarget, Interest, OsSelect, SelectSyscall};
use smallvec::SmallVec;
use std::{fmt,
          os::fd::RawFd,
          sync::{Mutex, MutexGuard, PoisonError}};
use strum::IntoEnumIterator as _;

/// Highest-bound value meaning "nothing is watched".
pub const NO_FD: RawFd = -1;

/// Result of a [`FdSelect::wait()`] that returned without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaitOutcome {
    /// Number of caller visible ready descriptors across all three sets. The internal
    /// cancellation descriptor is never counted.
    pub ready_count: usize,

    /// `true` if [`FdSelect::cancel()`] was called since the previous wait drained the
    /// cancellation pipe. Any number of cancels collapse into one.
    pub cancelled: bool,
}

/// One [`FdSet`] per [`Interest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct InterestSets {
    read: FdSet,
    write: FdSet,
    except: FdSet,
}

impl InterestSets {
    fn get(&self, kind: Interest) -> &FdSet {
        match kind {
            Interest::Read => &self.read,
            Interest::Write => &self.write,
            Interest::Except => &self.except,
        }
    }

    fn get_mut(&mut self, kind: Interest) -> &mut FdSet {
        match kind {
            Interest::Read => &mut self.read,
            Interest::Write => &mut self.write,
            Interest::Except => &mut self.except,
        }
    }

    fn any_contains(&self, fd: RawFd) -> bool {
        Interest::iter().any(|kind| self.get(kind).contains(fd))
    }
}

/// Everything that is mutated after construction. Guarded by one [`Mutex`] in
/// [`FdSelect`]. Methods here never lock, so they can call each other freely.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectState {
    /// Descriptors the caller asked to watch (plus the cancellation descriptor).
    watched: InterestSets,
    /// Snapshot from the most recent wait. Replaced wholesale by each wait.
    ready: InterestSets,
    /// Greatest descriptor in `watched`, or [`NO_FD`].
    highest_fd: RawFd,
}

impl SelectState {
    fn new(cancel_fd: Option<RawFd>) -> Self {
        let mut it = Self {
            watched: InterestSets::default(),
            ready: InterestSets::default(),
            highest_fd: NO_FD,
        };
        if let Some(cancel_fd) = cancel_fd {
            it.watch(Interest::Read, cancel_fd);
        }
        it
    }

    fn watch(&mut self, kind: Interest, fd: RawFd) {
        self.watched.get_mut(kind).insert(fd);
        if fd > self.highest_fd {
            self.highest_fd = fd;
        }
    }

    fn unwatch(&mut self, kind: Interest, target: FdTarget, cancel_fd: Option<RawFd>) {
        let is_read = kind == Interest::Read;
        match target {
            FdTarget::All => {
                let set = self.watched.get_mut(kind);
                set.clear();
                // The cancellation descriptor is always watched.
                if let Some(cancel_fd) = cancel_fd.filter(|_| is_read) {
                    set.insert(cancel_fd);
                }
            }
            FdTarget::Fd(fd) if is_read && Some(fd) == cancel_fd => {}
            FdTarget::Fd(fd) => {
                self.watched.get_mut(kind).remove(fd);
            }
        }
        self.recompute_highest_fd();
    }

    /// Scans down from the previous bound for the first descriptor still watched.
    fn recompute_highest_fd(&mut self) {
        self.highest_fd = (0..=self.highest_fd)
            .rev()
            .find(|fd| self.watched.any_contains(*fd))
            .unwrap_or(NO_FD);
    }
}

/// Watches file descriptors for readiness with [`select(2)`], and lets another thread
/// interrupt a blocked [`wait()`] via [`cancel()`].
///
/// Share it between the I/O thread and the controller thread with an
/// [`Arc`](std::sync::Arc). See the [crate docs] for usage and the caller contract.
///
/// # Validity
///
/// Construction never fails. If the cancellation pipe cannot be created, the instance
/// is *invalid*: [`is_valid()`] returns `false` and every [`wait()`] returns
/// [`FdSelectError::CancelChannelUnavailable`] without calling [`select(2)`].
///
/// [`cancel()`]: Self::cancel
/// [`is_valid()`]: Self::is_valid
/// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
/// [`wait()`]: Self::wait
/// [crate docs]: crate
pub struct FdSelect<S: SelectSyscall = OsSelect> {
    syscall: S,
    cancel_pipe: Option<CancelPipe>,
    state: Mutex<SelectState>,
    config: FdSelectConfig,
}

impl<S: SelectSyscall> fmt::Debug for FdSelect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FdSelect")
            .field("cancel_pipe", &self.cancel_pipe)
            .field("state", &*self.lock_state())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FdSelect {
    fn default() -> Self { Self::new() }
}

impl FdSelect {
    /// Creates an instance backed by the real [`select(2)`].
    ///
    /// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
    #[must_use]
    pub fn new() -> Self { Self::with_syscall(OsSelect) }
}

impl<S: SelectSyscall> FdSelect<S> {
    #[must_use]
    pub fn with_syscall(syscall: S) -> Self {
        Self::with_config(syscall, FdSelectConfig::default())
    }

    #[must_use]
    pub fn with_config(syscall: S, config: FdSelectConfig) -> Self {
        Self::from_parts(syscall, CancelPipe::new(), config)
    }

    /// Assembles an instance from an already attempted pipe creation. Passing an
    /// [`Err`] produces an invalid instance (see [Validity]).
    ///
    /// [Validity]: Self#validity
    #[must_use]
    pub fn from_parts(
        syscall: S,
        cancel_pipe: Result<CancelPipe, CancelPipeCreationError>,
        config: FdSelectConfig,
    ) -> Self {
        let cancel_pipe = match cancel_pipe {
            Ok(pipe) => Some(pipe),
            Err(err) => {
                tracing::warn!(
                    message = "fd-select: cancellation pipe unavailable, every wait will report cancellation",
                    error = ?miette::Report::new(err)
                );
                None
            }
        };
        let state = SelectState::new(cancel_pipe.as_ref().map(CancelPipe::read_fd));

        config.debug_log.then(|| {
            tracing::debug!(
                message = "fd-select: created",
                highest_fd = state.highest_fd
            );
        });

        Self {
            syscall,
            cancel_pipe,
            state: Mutex::new(state),
            config,
        }
    }

    /// `true` if the cancellation pipe was created.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.cancel_pipe.is_some() }

    #[must_use]
    pub fn config(&self) -> &FdSelectConfig { &self.config }

    /// Starts watching `fd` for `kind` readiness.
    pub fn watch(&self, kind: Interest, fd: RawFd) { self.lock_state().watch(kind, fd); }

    /// Stops watching. `FdTarget::All` clears the whole set for `kind`.
    ///
    /// The internal cancellation descriptor can't be removed from the read set: a
    /// request to remove it is ignored, and clearing the read set keeps it.
    pub fn unwatch(&self, kind: Interest, target: impl Into<FdTarget>) {
        let target = target.into();
        self.lock_state().unwatch(kind, target, self.cancel_fd());
    }

    pub fn unwatch_fd(&self, kind: Interest, fd: RawFd) { self.unwatch(kind, fd); }

    pub fn unwatch_all(&self, kind: Interest) { self.unwatch(kind, FdTarget::All); }

    #[must_use]
    pub fn is_watched(&self, kind: Interest, fd: RawFd) -> bool {
        self.lock_state().watched.get(kind).contains(fd)
    }

    /// `true` if `fd` was ready for `kind` when the most recent [`wait()`] returned.
    ///
    /// [`wait()`]: Self::wait
    #[must_use]
    pub fn is_ready(&self, kind: Interest, fd: RawFd) -> bool {
        self.lock_state().ready.get(kind).contains(fd)
    }

    /// Descriptors that were ready for `kind` after the most recent wait, ascending.
    #[must_use]
    pub fn ready_fds(&self, kind: Interest) -> Vec<RawFd> {
        self.lock_state().ready.get(kind).iter().collect()
    }

    /// Greatest watched descriptor (including the cancellation descriptor), or
    /// [`NO_FD`] if nothing is watched.
    #[must_use]
    pub fn highest_fd(&self) -> RawFd { self.lock_state().highest_fd }

    /// Blocks until a watched descriptor is ready or [`cancel()`] is called.
    ///
    /// Takes a copy of the watched sets, so the lock is not held while blocked. After
    /// it returns, use [`is_ready()`] or [`ready_fds()`] to find out which descriptors
    /// are ready. If the wake was caused by [`cancel()`], the pipe is drained and
    /// [`WaitOutcome::cancelled`] is set; the cancellation descriptor is removed from
    /// the results and from [`WaitOutcome::ready_count`].
    ///
    /// # Errors
    ///
    /// - [`FdSelectError::CancelChannelUnavailable`] if the instance is invalid. This
    ///   counts as a cancellation ([`FdSelectError::is_cancelled()`]).
    /// - [`FdSelectError::Wait`] if [`select(2)`] fails. The results are cleared.
    ///
    /// [`cancel()`]: Self::cancel
    /// [`is_ready()`]: Self::is_ready
    /// [`ready_fds()`]: Self::ready_fds
    /// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
    pub fn wait(&self) -> Result<WaitOutcome, FdSelectError> {
        let Some(cancel_pipe) = &self.cancel_pipe else {
            self.config.debug_log.then(|| {
                tracing::debug!(message = "fd-select: invalid instance, wait cancelled");
            });
            return Err(FdSelectError::CancelChannelUnavailable);
        };
        let cancel_fd = cancel_pipe.read_fd();

        let (mut sets, nfds) = {
            let state = self.lock_state();
            (state.watched.clone(), state.highest_fd + 1)
        };

        // Block without holding the lock, so cancel() and queries stay responsive.
        let result = self.syscall.select(
            nfds,
            &mut sets.read,
            &mut sets.write,
            &mut sets.except,
            None,
        );

        let ready_count = match result {
            Ok(ready_count) => ready_count,
            Err(err) => {
                self.lock_state().ready = InterestSets::default();
                self.config.debug_log.then(|| {
                    tracing::debug!(message = "fd-select: wait failed", error = ?err);
                });
                return Err(FdSelectError::Wait(err));
            }
        };

        let cancelled = ready_count > 0 && sets.read.remove(cancel_fd);
        self.lock_state().ready = sets;

        if !cancelled {
            return Ok(WaitOutcome {
                ready_count,
                cancelled,
            });
        }

        self.drain_cancel_pipe(cancel_pipe);
        Ok(WaitOutcome {
            ready_count: ready_count - 1,
            cancelled,
        })
    }

    /// Wakes the current (or next) [`wait()`]. Safe to call from any thread, and never
    /// blocks. Does nothing on an invalid instance.
    ///
    /// [`wait()`]: Self::wait
    pub fn cancel(&self) {
        let Some(cancel_pipe) = &self.cancel_pipe else {
            return;
        };
        match cancel_pipe.signal() {
            Ok(()) => {
                self.config.debug_log.then(|| {
                    tracing::debug!(message = "fd-select: cancel requested");
                });
            }
            Err(err) => {
                tracing::warn!(
                    message = "fd-select: failed to write to cancellation pipe",
                    error = ?err
                );
            }
        }
    }

    fn cancel_fd(&self) -> Option<RawFd> {
        self.cancel_pipe.as_ref().map(CancelPipe::read_fd)
    }

    fn drain_cancel_pipe(&self, cancel_pipe: &CancelPipe) {
        let mut buffer: SmallVec<[u8; crate::DEFAULT_DRAIN_BUFFER_SIZE]> =
            SmallVec::from_elem(0, self.config.drain_buffer_size.max(1));
        match cancel_pipe.drain(&mut buffer) {
            Ok(drained) => {
                self.config.debug_log.then(|| {
                    tracing::debug!(message = "fd-select: wait cancelled", drained);
                });
            }
            Err(err) => {
                tracing::warn!(
                    message = "fd-select: failed to drain cancellation pipe",
                    error = ?err
                );
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SelectState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ScriptedResponse, ScriptedSelect};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use test_case::test_case;

    const STDIN_FD: RawFd = 0;
    const EINTR: i32 = 4;

    /// Returns the fixture, the multiplexer, and its cancellation descriptor.
    fn scripted(
        responses: Vec<ScriptedResponse>,
    ) -> (Arc<ScriptedSelect>, FdSelect<Arc<ScriptedSelect>>, RawFd) {
        let syscall = Arc::new(ScriptedSelect::new(responses));
        let fd_select = FdSelect::with_syscall(Arc::clone(&syscall));
        // Before anything is watched, the bound is the cancellation descriptor.
        let cancel_fd = fd_select.highest_fd();
        (syscall, fd_select, cancel_fd)
    }

    fn invalid() -> (Arc<ScriptedSelect>, FdSelect<Arc<ScriptedSelect>>) {
        let syscall = Arc::new(ScriptedSelect::default());
        let err = CancelPipeCreationError(std::io::Error::from_raw_os_error(24)); // EMFILE
        let fd_select =
            FdSelect::from_parts(Arc::clone(&syscall), Err(err), FdSelectConfig::default());
        (syscall, fd_select)
    }

    #[test]
    fn test_new_instance_watches_only_cancel_fd() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        assert!(fd_select.is_valid());
        assert!(cancel_fd > STDIN_FD);
        assert!(fd_select.is_watched(Interest::Read, cancel_fd));
        assert!(!fd_select.is_watched(Interest::Write, cancel_fd));
        assert!(!fd_select.is_watched(Interest::Except, cancel_fd));
    }

    #[test_case(Interest::Read)]
    #[test_case(Interest::Write)]
    #[test_case(Interest::Except)]
    fn test_watch_then_unwatch(kind: Interest) {
        let (_, fd_select, _) = scripted(vec![]);
        fd_select.watch(kind, STDIN_FD);
        assert!(fd_select.is_watched(kind, STDIN_FD));
        fd_select.unwatch_fd(kind, STDIN_FD);
        assert!(!fd_select.is_watched(kind, STDIN_FD));
    }

    #[test]
    fn test_cancel_fd_cannot_be_unwatched() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        fd_select.unwatch_fd(Interest::Read, cancel_fd);
        assert!(fd_select.is_watched(Interest::Read, cancel_fd));

        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.unwatch_all(Interest::Read);
        assert!(fd_select.is_watched(Interest::Read, cancel_fd));
        assert!(!fd_select.is_watched(Interest::Read, STDIN_FD));
        assert_eq!(fd_select.highest_fd(), cancel_fd);
    }

    #[test]
    fn test_cancel_fd_number_is_removable_from_other_sets() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        fd_select.watch(Interest::Write, cancel_fd);
        fd_select.unwatch_fd(Interest::Write, cancel_fd);
        assert!(!fd_select.is_watched(Interest::Write, cancel_fd));
        assert!(fd_select.is_watched(Interest::Read, cancel_fd));
    }

    #[test_case(Interest::Write)]
    #[test_case(Interest::Except)]
    fn test_unwatch_all_clears_only_its_own_set(kind: Interest) {
        let (_, fd_select, _) = scripted(vec![]);
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.watch(kind, 1);
        fd_select.watch(kind, 2);

        fd_select.unwatch_all(kind);

        assert!(!fd_select.is_watched(kind, 1));
        assert!(!fd_select.is_watched(kind, 2));
        assert!(fd_select.is_watched(Interest::Read, STDIN_FD));
    }

    #[test]
    fn test_watch_only_raises_highest_fd() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        let high = cancel_fd + 10;
        fd_select.watch(Interest::Write, high);
        assert_eq!(fd_select.highest_fd(), high);
        fd_select.watch(Interest::Read, STDIN_FD);
        assert_eq!(fd_select.highest_fd(), high);
    }

    #[test]
    fn test_highest_fd_recomputed_after_unwatch() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        let (a, b, c) = (cancel_fd + 1, cancel_fd + 5, cancel_fd + 9);
        fd_select.watch(Interest::Read, a);
        fd_select.watch(Interest::Write, b);
        fd_select.watch(Interest::Except, c);
        assert_eq!(fd_select.highest_fd(), c);

        fd_select.unwatch_fd(Interest::Except, c);
        assert_eq!(fd_select.highest_fd(), b);

        fd_select.unwatch_all(Interest::Write);
        assert_eq!(fd_select.highest_fd(), a);

        fd_select.unwatch_all(Interest::Read);
        assert_eq!(fd_select.highest_fd(), cancel_fd);
    }

    #[test]
    fn test_highest_fd_is_no_fd_when_nothing_watched() {
        let (_, fd_select) = invalid();
        fd_select.watch(Interest::Write, 7);
        fd_select.watch(Interest::Read, 3);
        assert_eq!(fd_select.highest_fd(), 7);

        fd_select.unwatch_fd(Interest::Write, 7);
        assert_eq!(fd_select.highest_fd(), 3);
        fd_select.unwatch_all(Interest::Read);
        assert_eq!(fd_select.highest_fd(), NO_FD);
    }

    #[test]
    fn test_unwatching_lower_fd_keeps_highest_fd() {
        let (_, fd_select, cancel_fd) = scripted(vec![]);
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.unwatch_fd(Interest::Read, STDIN_FD);
        assert_eq!(fd_select.highest_fd(), cancel_fd);
    }

    /// Watch stdin, it becomes readable.
    #[test]
    fn test_wait_reports_ready_fd() {
        let (syscall, fd_select, cancel_fd) =
            scripted(vec![ScriptedResponse::ready_read([STDIN_FD])]);
        fd_select.watch(Interest::Read, STDIN_FD);

        let outcome = fd_select.wait().unwrap();

        assert_eq!(
            outcome,
            WaitOutcome {
                ready_count: 1,
                cancelled: false
            }
        );
        assert!(fd_select.is_ready(Interest::Read, STDIN_FD));
        assert_eq!(fd_select.ready_fds(Interest::Read), vec![STDIN_FD]);

        let calls = syscall.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].nfds, cancel_fd + 1);
        assert!(calls[0].read_fds.contains(STDIN_FD));
        assert!(calls[0].read_fds.contains(cancel_fd));
        assert_eq!(calls[0].timeout, None);
    }

    /// Watch stdin, select fails.
    #[test]
    fn test_wait_propagates_error() {
        let (_, fd_select, _) = scripted(vec![
            ScriptedResponse::ready_read([STDIN_FD]),
            ScriptedResponse::Error(EINTR),
        ]);
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.wait().unwrap();

        let err = fd_select.wait().unwrap_err();

        assert!(!err.is_cancelled());
        assert_eq!(err.raw_os_error(), Some(EINTR));
        assert!(!fd_select.is_ready(Interest::Read, STDIN_FD));
    }

    /// Watch stdin, only the cancellation descriptor becomes readable.
    #[test]
    fn test_wait_reports_cancellation() {
        let (syscall, fd_select, cancel_fd) = scripted(vec![]);
        syscall.push(ScriptedResponse::ready_read([cancel_fd]));
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.cancel();

        let outcome = fd_select.wait().unwrap();

        assert_eq!(
            outcome,
            WaitOutcome {
                ready_count: 0,
                cancelled: true
            }
        );
        assert!(!fd_select.is_ready(Interest::Read, STDIN_FD));
        assert!(!fd_select.is_ready(Interest::Read, cancel_fd));
        assert!(fd_select.ready_fds(Interest::Read).is_empty());
    }

    #[test]
    fn test_wait_reports_cancellation_and_ready_fd_together() {
        let (syscall, fd_select, cancel_fd) = scripted(vec![]);
        syscall.push(ScriptedResponse::ready_read([STDIN_FD, cancel_fd]));
        fd_select.watch(Interest::Read, STDIN_FD);

        let outcome = fd_select.wait().unwrap();

        assert_eq!(
            outcome,
            WaitOutcome {
                ready_count: 1,
                cancelled: true
            }
        );
        assert_eq!(fd_select.ready_fds(Interest::Read), vec![STDIN_FD]);
    }

    #[test]
    fn test_results_are_replaced_by_next_wait() {
        let (_, fd_select, _) = scripted(vec![
            ScriptedResponse::ready_read([STDIN_FD]),
            ScriptedResponse::Ready {
                read: vec![],
                write: vec![1],
                except: vec![],
            },
        ]);
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.watch(Interest::Write, 1);

        fd_select.wait().unwrap();
        assert!(fd_select.is_ready(Interest::Read, STDIN_FD));

        let outcome = fd_select.wait().unwrap();
        assert_eq!(outcome.ready_count, 1);
        assert!(!fd_select.is_ready(Interest::Read, STDIN_FD));
        assert!(fd_select.is_ready(Interest::Write, 1));
    }

    #[test]
    fn test_wait_does_not_change_watched_sets() {
        let (_, fd_select, cancel_fd) = scripted(vec![ScriptedResponse::ready_read([STDIN_FD])]);
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.watch(Interest::Write, 1);

        fd_select.wait().unwrap();

        assert!(fd_select.is_watched(Interest::Read, STDIN_FD));
        assert!(fd_select.is_watched(Interest::Read, cancel_fd));
        assert!(fd_select.is_watched(Interest::Write, 1));
    }

    /// The cancellation pipe could not be created.
    #[test]
    fn test_invalid_instance_cancels_without_calling_select() {
        let (syscall, fd_select) = invalid();
        assert!(!fd_select.is_valid());
        assert_eq!(fd_select.highest_fd(), NO_FD);

        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.cancel();
        let err = fd_select.wait().unwrap_err();

        assert!(err.is_cancelled());
        assert!(matches!(err, FdSelectError::CancelChannelUnavailable));
        assert!(syscall.calls().is_empty());
    }

    #[test]
    fn test_invalid_instance_unwatch_all_read_is_empty() {
        let (_, fd_select) = invalid();
        fd_select.watch(Interest::Read, STDIN_FD);
        fd_select.unwatch_all(Interest::Read);
        assert!(!fd_select.is_watched(Interest::Read, STDIN_FD));
        assert_eq!(fd_select.highest_fd(), NO_FD);
    }

    #[test]
    fn test_drain_buffer_size_zero_is_clamped() {
        let syscall = Arc::new(ScriptedSelect::default());
        let config = FdSelectConfig {
            drain_buffer_size: 0,
            debug_log: true,
        };
        let fd_select = FdSelect::with_config(Arc::clone(&syscall), config);
        let cancel_fd = fd_select.highest_fd();
        syscall.push(ScriptedResponse::ready_read([cancel_fd]));

        fd_select.cancel();
        fd_select.cancel();
        assert!(fd_select.wait().unwrap().cancelled);
        assert_eq!(fd_select.config().drain_buffer_size, 0);
    }

    #[test]
    fn test_debug_output_names_fields() {
        let (_, fd_select, _) = scripted(vec![]);
        let debug = format!("{fd_select:?}");
        assert!(debug.contains("FdSelect"));
        assert!(debug.contains("cancel_pipe"));
        assert!(debug.contains("highest_fd"));
    }
}
