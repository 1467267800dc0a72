//! # fdbuf
//!
//! Buffered I/O over raw file descriptors: a fixed-buffer output stream
//! with explicit flush control and template printing, and a pass-through
//! input stream. Syscall failures surface as the closed [`IoError`]
//! taxonomy from `fdbuf-core`.
//!
//! All operations are synchronous and blocking, and no type here is safe
//! for unsynchronized sharing across threads; callers serialize access
//! themselves (one stream per thread, or an external mutex).
//!
//! The only `unsafe` in the workspace is the libc veneer in [`sys`].

pub mod input;
pub mod out;
pub mod sys;

pub use fdbuf_core::{Arg, CBuf, Format, IoError};
pub use input::InStream;
pub use out::{BUF_CAP, OutStream};
