// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enables [`tracing`] output for the wait / cancel lifecycle of every [`FdSelect`]
/// created with the default [`FdSelectConfig`].
///
/// [`FdSelect`]: crate::FdSelect
pub const DEBUG_FD_SELECT: bool = false;

/// Size of the scratch buffer used to drain the cancellation pipe after a wake.
pub const DEFAULT_DRAIN_BUFFER_SIZE: usize = 256;

/// Tunables for [`FdSelect`]. Use struct update syntax to override a single field:
///
/// ```
/// use r3bl_fd_select::FdSelectConfig;
///
/// let config = FdSelectConfig {
///     debug_log: true,
///     ..Default::default()
/// };
/// assert_eq!(config.drain_buffer_size, 256);
/// ```
///
/// [`FdSelect`]: crate::FdSelect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdSelectConfig {
    /// Bytes read per [`read(2)`] call when draining pending cancellations. Values
    /// below 1 are treated as 1.
    ///
    /// [`read(2)`]: https://man7.org/linux/man-pages/man2/read.2.html
    pub drain_buffer_size: usize,

    /// Emit [`tracing::debug!`] events for waits, wakes, and cancels. Warnings (eg:
    /// the cancellation pipe could not be created) are always emitted.
    pub debug_log: bool,
}

impl Default for FdSelectConfig {
    fn default() -> Self {
        Self {
            drain_buffer_size: DEFAULT_DRAIN_BUFFER_SIZE,
            debug_log: DEBUG_FD_SELECT,
        }
    }
}
