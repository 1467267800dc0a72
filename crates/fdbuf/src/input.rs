//! Pass-through input stream over a raw descriptor.
//!
//! No internal buffer: every [`InStream::read`] is exactly one blocking
//! read syscall into the caller's slice. An interrupted call surfaces as
//! [`IoError::Interrupted`]; whether to retry is the caller's decision.

use std::ffi::CStr;

use fdbuf_core::IoError;

use crate::sys::{self, RawFd};

/// Input stream bound to an open descriptor.
#[derive(Debug)]
pub struct InStream {
    fd: RawFd,
}

impl InStream {
    /// Open `path` read-only.
    pub fn open(path: &CStr) -> Result<InStream, IoError> {
        match sys::open_read_only(path) {
            Ok(fd) => Ok(InStream { fd }),
            Err(code) => Err(IoError::from_open_code(code)),
        }
    }

    /// Wrap an arbitrary open descriptor.
    pub fn new(fd: RawFd) -> InStream {
        InStream { fd }
    }

    /// Stream over the process's standard input descriptor.
    pub fn stdin() -> InStream {
        InStream::new(sys::STDIN_FILENO)
    }

    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Read up to `dest.len()` bytes. `Ok(0)` means end-of-input, which
    /// is a success, not an error.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize, IoError> {
        sys::read(self.fd, dest).map_err(IoError::from_read_code)
    }

    /// Close the descriptor. The stream is consumed either way.
    pub fn close(self) -> Result<(), IoError> {
        sys::close(self.fd).map_err(IoError::from_close_code)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
