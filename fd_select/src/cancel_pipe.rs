// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EINTR EAGAIN

//! The self-pipe used to wake a blocked [`FdSelect::wait()`].
//!
//! [`FdSelect::wait()`]: crate::FdSelect::wait

use crate::CancelPipeCreationError;
use mio::unix::pipe::{Receiver, Sender};
use std::{fmt,
          io::{ErrorKind, Read as _, Write as _},
          os::fd::{AsRawFd as _, RawFd}};

/// Payload written for each cancel. Only its presence matters.
const CANCEL_BYTE: u8 = b'1';

/// A unidirectional pipe. Writing to [`sender`] makes [`receiver`] readable, which wakes
/// any [`select(2)`] that has the receiver in its read set.
///
/// Both ends are non-blocking and close-on-exec. They are closed when this is dropped.
///
/// [`receiver`]: Self::read_fd
/// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
/// [`sender`]: Self::signal
pub struct CancelPipe {
    sender: Sender,
    receiver: Receiver,
}

impl fmt::Debug for CancelPipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelPipe")
            .field("write_fd", &self.sender.as_raw_fd())
            .field("read_fd", &self.receiver.as_raw_fd())
            .finish()
    }
}

impl CancelPipe {
    /// # Errors
    ///
    /// Returns [`CancelPipeCreationError`] if [`pipe(2)`] fails.
    ///
    /// [`pipe(2)`]: https://man7.org/linux/man-pages/man2/pipe.2.html
    pub fn new() -> Result<Self, CancelPipeCreationError> {
        let (sender, receiver) = mio::unix::pipe::new().map_err(CancelPipeCreationError)?;
        Ok(Self { sender, receiver })
    }

    /// The readable end. This is the descriptor that goes into the read set.
    #[must_use]
    pub fn read_fd(&self) -> RawFd { self.receiver.as_raw_fd() }

    /// Writes one byte into the pipe.
    ///
    /// A full pipe is not an error: there are already unread bytes, so the receiver is
    /// readable and the next wait wakes up anyway.
    ///
    /// # Errors
    ///
    /// Returns the [`write(2)`] error for anything other than `EAGAIN`.
    ///
    /// [`write(2)`]: https://man7.org/linux/man-pages/man2/write.2.html
    pub fn signal(&self) -> std::io::Result<()> {
        loop {
            match (&self.sender).write(&[CANCEL_BYTE]) {
                Ok(_) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    /// Reads until the pipe is empty, using `buffer` as scratch space. Returns the
    /// number of bytes discarded.
    ///
    /// # Errors
    ///
    /// Returns the [`read(2)`] error for anything other than `EAGAIN` / `EINTR`.
    ///
    /// [`read(2)`]: https://man7.org/linux/man-pages/man2/read.2.html
    pub fn drain(&self, buffer: &mut [u8]) -> std::io::Result<usize> {
        let mut total = 0;
        loop {
            match (&self.receiver).read(buffer) {
                // EOF (write end closed) or zero sized scratch buffer.
                Ok(0) => return Ok(total),
                Ok(count) => total += count,
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(total),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
