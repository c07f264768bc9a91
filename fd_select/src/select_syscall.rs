// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words nfds readfds writefds exceptfds EBADF

//! The blocking wait that [`FdSelect`] is built on, injected as a dependency.
//!
//! [`FdSelect`]: crate::FdSelect

use crate::FdSet;
use rustix::event::{FdSetElement, FdSetIter, Timespec, fd_set_insert, fd_set_num_elements};
use std::{os::fd::RawFd, sync::Arc, time::Duration};

/// One blocking readiness wait over three descriptor sets.
///
/// This is the seam between [`FdSelect`] and the OS. [`OsSelect`] calls [`select(2)`];
/// tests use [`ScriptedSelect`] to return canned results without blocking.
///
/// # Trait Bounds - [`Send`] + [`Sync`]
///
/// [`FdSelect::wait()`] calls this via `&self` on the I/O thread while the controller
/// thread holds another reference to the same [`FdSelect`] to call
/// [`FdSelect::cancel()`].
///
/// [`FdSelect::cancel()`]: crate::FdSelect::cancel
/// [`FdSelect::wait()`]: crate::FdSelect::wait
/// [`FdSelect`]: crate::FdSelect
/// [`ScriptedSelect`]: crate::test_fixtures::ScriptedSelect
/// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
pub trait SelectSyscall: Send + Sync {
    /// Blocks until a descriptor below `nfds` in one of the sets is ready, or `timeout`
    /// elapses ([`None`] waits forever).
    ///
    /// On return each set is overwritten with its ready subset. The returned count is
    /// the total number of ready descriptors across the three sets.
    ///
    /// # Errors
    ///
    /// Returns the OS error unchanged (eg: `EINTR`, `EBADF`).
    fn select(
        &self,
        nfds: RawFd,
        read_fds: &mut FdSet,
        write_fds: &mut FdSet,
        except_fds: &mut FdSet,
        timeout: Option<Duration>,
    ) -> std::io::Result<usize>;
}

impl<S: SelectSyscall + ?Sized> SelectSyscall for Arc<S> {
    fn select(
        &self,
        nfds: RawFd,
        read_fds: &mut FdSet,
        write_fds: &mut FdSet,
        except_fds: &mut FdSet,
        timeout: Option<Duration>,
    ) -> std::io::Result<usize> {
        (**self).select(nfds, read_fds, write_fds, except_fds, timeout)
    }
}

/// [`SelectSyscall`] backed by [`rustix::event::select()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSelect;

impl OsSelect {
    fn to_elements(set: &FdSet, num_elements: usize) -> Vec<FdSetElement> {
        let mut elements = vec![FdSetElement::default(); num_elements];
        for fd in set {
            fd_set_insert(&mut elements, fd);
        }
        elements
    }

    fn from_elements(elements: &[FdSetElement]) -> FdSet { FdSetIter::new(elements).collect() }

    fn to_timespec(timeout: Duration) -> Timespec {
        Timespec {
            tv_sec: i64::try_from(timeout.as_secs()).unwrap_or(i64::MAX),
            tv_nsec: timeout.subsec_nanos().into(),
        }
    }
}

impl SelectSyscall for OsSelect {
    fn select(
        &self,
        nfds: RawFd,
        read_fds: &mut FdSet,
        write_fds: &mut FdSet,
        except_fds: &mut FdSet,
        timeout: Option<Duration>,
    ) -> std::io::Result<usize> {
        let set_count = read_fds.len().max(write_fds.len()).max(except_fds.len());
        let num_elements = fd_set_num_elements(set_count, nfds.max(0));

        let mut read_elements = Self::to_elements(read_fds, num_elements);
        let mut write_elements = Self::to_elements(write_fds, num_elements);
        let mut except_elements = Self::to_elements(except_fds, num_elements);
        let timespec = timeout.map(Self::to_timespec);

        // SAFETY: Every descriptor in the sets was registered by the caller, and the
        // caller contract of `FdSelect` requires them to stay open while watched.
        let ready_count = unsafe {
            rustix::event::select(
                nfds.max(0),
                Some(&mut read_elements),
                Some(&mut write_elements),
                Some(&mut except_elements),
                timespec.as_ref(),
            )
        }?;

        *read_fds = Self::from_elements(&read_elements);
        *write_fds = Self::from_elements(&write_elements);
        *except_fds = Self::from_elements(&except_elements);

        Ok(usize::try_from(ready_count).unwrap_or(0))
    }
}
