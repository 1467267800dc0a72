//! # fdbuf-core
//!
//! OS-free core of the fdbuf I/O layer. Everything here is pure safe Rust
//! with no descriptor access: the closed I/O error taxonomy and its
//! errno mapping tables, exact decimal integer conversion, the format
//! template mini-language, and the growable null-terminated byte buffer.
//!
//! The descriptor-facing stream types live in the `fdbuf` crate, which is
//! the only place in the workspace that touches the kernel.

#![deny(unsafe_code)]

pub mod cbuf;
pub mod decimal;
pub mod error;
pub mod fmt;

pub use cbuf::CBuf;
pub use error::IoError;
pub use fmt::{Arg, Format};
