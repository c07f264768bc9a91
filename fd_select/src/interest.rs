// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::os::fd::RawFd;
use strum_macros::{Display, EnumCount, EnumIter};

/// The kind of readiness to watch a file descriptor for. Each kind maps to one of the
/// three sets passed to [`select(2)`].
///
/// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Interest {
    /// `readfds`: data can be read without blocking.
    Read,
    /// `writefds`: data can be written without blocking.
    Write,
    /// `exceptfds`: exceptional condition, eg: out-of-band data on a socket.
    Except,
}

/// Which descriptors [`FdSelect::unwatch()`] should remove.
///
/// [`FdSelect::unwatch()`]: crate::FdSelect::unwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdTarget {
    /// Every descriptor in the set. The internal cancellation descriptor survives this
    /// for [`Interest::Read`].
    All,
    /// A single descriptor.
    Fd(RawFd),
}

impl From<RawFd> for FdTarget {
    fn from(fd: RawFd) -> Self { FdTarget::Fd(fd) }
}
