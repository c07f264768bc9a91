// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words pselect epoll kqueue nfds

//! # Interruptible `select(2)`
//!
//! [`FdSelect`] is a thin, stateful wrapper around [`select(2)`]. You register interest
//! in read, write, or exceptional readiness on a set of file descriptors, call
//! [`wait()`] to block until at least one of them is ready, and then ask which ones
//! were ready via [`is_ready()`].
//!
//! Unlike raw [`select(2)`], the watched sets are **not** consumed by a wait. Calling
//! [`wait()`] again watches the same descriptors again. Use [`unwatch()`] to stop
//! watching.
//!
//! ## Cancellation
//!
//! A blocked [`wait()`] can be woken from another thread by calling [`cancel()`]. This
//! uses the [self-pipe trick]: the read end of an internal pipe is always part of the
//! read set, and [`cancel()`] writes a byte into the write end.
//!
//! ```text
//! controller thread                I/O thread
//! ─────────────────                ──────────
//!                                  fd_select.wait()  ── blocks in select(2)
//! fd_select.cancel()
//!   └─► write(pipe_tx, b"1")  ───► pipe_rx readable
//!                                  select(2) returns
//!                                  drain pipe_rx, cancelled = true
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use r3bl_fd_select::{FdSelect, Interest};
//! use std::{os::fd::AsRawFd as _, sync::Arc};
//!
//! let fd_select = Arc::new(FdSelect::new());
//! let stdin_fd = std::io::stdin().as_raw_fd();
//! fd_select.watch(Interest::Read, stdin_fd);
//!
//! let controller = Arc::clone(&fd_select);
//! std::thread::spawn(move || controller.cancel());
//!
//! match fd_select.wait() {
//!     Ok(outcome) if outcome.cancelled => println!("cancelled"),
//!     Ok(_) if fd_select.is_ready(Interest::Read, stdin_fd) => println!("stdin ready"),
//!     Ok(_) => {}
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! ## Caller contract
//!
//! The following are not checked, and the resulting behavior is unspecified:
//! - Changing the watched sets from another thread while [`wait()`] is blocked.
//! - Calling [`wait()`] concurrently from more than one thread.
//! - Closing a watched file descriptor without unwatching it first.
//!
//! ## Testing
//!
//! The blocking call is injected via the [`SelectSyscall`] trait. [`OsSelect`] is the
//! real implementation, and [`test_fixtures::ScriptedSelect`] replays canned responses.
//!
//! [`cancel()`]: FdSelect::cancel
//! [`is_ready()`]: FdSelect::is_ready
//! [`select(2)`]: https://man7.org/linux/man-pages/man2/select.2.html
//! [`unwatch()`]: FdSelect::unwatch
//! [`wait()`]: FdSelect::wait
//! [self-pipe trick]: https://cr.yp.to/docs/selfpipe.html

// Self-pipes and select(2) only exist on unix.
#![cfg(unix)]
// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
mod cancel_pipe;
mod config;
mod error;
mod fd_select;
mod fd_set;
mod interest;
mod select_syscall;

pub mod test_fixtures;

// Re-export.
pub use cancel_pipe::*;
pub use config::*;
pub use error::*;
pub use fd_select::*;
pub use fd_set::*;
pub use interest::*;
pub use select_syscall::*;
