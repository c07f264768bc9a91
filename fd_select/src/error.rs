// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EMFILE

use miette::Diagnostic;

/// Errors returned by [`FdSelect::wait()`].
///
/// [`FdSelect::wait()`]: crate::FdSelect::wait
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FdSelectError {
    /// The cancellation pipe could not be created when the [`FdSelect`] was constructed.
    /// The instance is permanently invalid, and every wait reports cancellation without
    /// calling [`select(2)`].
    ///
    /// [`FdSelect`]: crate::FdSelect
    /// [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
    #[error("Cancellation pipe is unavailable, wait was cancelled")]
    #[diagnostic(
        code(r3bl_fd_select::cancel_channel_unavailable),
        help("The pipe could not be created at construction time - check for fd exhaustion (EMFILE)")
    )]
    CancelChannelUnavailable,

    /// The underlying wait failed. The OS error is passed through unchanged.
    #[error("select(2) failed")]
    #[diagnostic(code(r3bl_fd_select::wait_failed))]
    Wait(#[source] std::io::Error),
}

impl FdSelectError {
    /// `true` when the wait ended because of cancellation rather than a failure.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FdSelectError::CancelChannelUnavailable)
    }

    /// The raw OS error code from the failed wait, if any.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            FdSelectError::CancelChannelUnavailable => None,
            FdSelectError::Wait(err) => err.raw_os_error(),
        }
    }
}

/// Failed to create the cancellation pipe.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("Failed to create cancellation pipe")]
#[diagnostic(
    code(r3bl_fd_select::cancel_pipe_creation),
    help("This usually means the process ran out of file descriptors")
)]
pub struct CancelPipeCreationError(#[source] pub std::io::Error);
