//! Buffered output stream over a raw descriptor.
//!
//! Bytes accumulate in a fixed 4096-byte buffer and reach the kernel only
//! when the buffer fills or the caller flushes. Flush failure leaves the
//! buffer untouched so the same bytes can be retried; any other outcome
//! of a failed write call means buffered data may be gone and the stream
//! state should be treated as terminal.
//!
//! `close` does NOT flush. That mirrors the descriptor semantics beneath
//! it: callers that must not lose buffered output flush first.

use std::ffi::CStr;

use fdbuf_core::IoError;
use fdbuf_core::decimal::{
    MAX_F64_LEN, MAX_I64_DIGITS, MAX_U64_DIGITS, buf_print_f64, buf_print_i64, buf_print_u64,
};
use fdbuf_core::fmt::{Arg, Format, render};

use crate::sys::{self, RawFd};

/// Fixed capacity of the output buffer.
pub const BUF_CAP: usize = 4096;

/// Buffered output stream.
///
/// Invariant: `index <= BUF_CAP`; `buf[..index]` holds application bytes
/// that have not reached the descriptor yet.
pub struct OutStream {
    fd: RawFd,
    buf: [u8; BUF_CAP],
    index: usize,
}

impl OutStream {
    /// Wrap an arbitrary open descriptor.
    pub fn new(fd: RawFd) -> OutStream {
        OutStream {
            fd,
            buf: [0; BUF_CAP],
            index: 0,
        }
    }

    /// Stream over the process's standard output descriptor.
    ///
    /// Constructed explicitly and owned by the caller; nothing flushes it
    /// at process exit.
    pub fn stdout() -> OutStream {
        OutStream::new(sys::STDOUT_FILENO)
    }

    /// Stream over the process's standard error descriptor.
    pub fn stderr() -> OutStream {
        OutStream::new(sys::STDERR_FILENO)
    }

    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Bytes currently buffered and unflushed.
    pub fn buffered(&self) -> usize {
        self.index
    }

    /// Buffer all of `bytes`, flushing each time the buffer fills.
    ///
    /// Returns `bytes.len()` on success. A flush failure aborts the call
    /// with that outcome; bytes buffered before the failing chunk are
    /// still pending in the buffer.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, IoError> {
        let mut src = bytes;
        while !src.is_empty() {
            let take = src.len().min(BUF_CAP - self.index);
            self.buf[self.index..self.index + take].copy_from_slice(&src[..take]);
            self.index += take;
            src = &src[take..];
            if self.index == BUF_CAP {
                self.flush()?;
            }
        }
        Ok(bytes.len())
    }

    /// Single-byte write with the same full-buffer flush trigger.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), IoError> {
        // Only reachable with a full buffer after a failed flush was
        // ignored; retry it before touching the cursor.
        if self.index == BUF_CAP {
            self.flush()?;
        }
        self.buf[self.index] = byte;
        self.index += 1;
        if self.index == BUF_CAP {
            self.flush()?;
        }
        Ok(())
    }

    /// Write a C string's content (without its NUL).
    pub fn write_cstr(&mut self, s: &CStr) -> Result<usize, IoError> {
        self.write(s.to_bytes())
    }

    /// Render `format` over `args` into the buffer.
    ///
    /// Returns the bytes this call produced. No flush happens unless the
    /// buffer fills along the way. Malformed templates and argument
    /// mismatches are caller bugs and panic (see `fdbuf_core::fmt`).
    pub fn print(&mut self, format: &Format<'_>, args: &[Arg<'_>]) -> Result<usize, IoError> {
        render(format, args, &mut |bytes: &[u8]| {
            self.write(bytes).map(|_| ())
        })
    }

    /// [`print`](OutStream::print) followed by an unconditional flush.
    ///
    /// The returned count covers only this call's bytes, not anything
    /// already buffered before it.
    pub fn printf(&mut self, format: &Format<'_>, args: &[Arg<'_>]) -> Result<usize, IoError> {
        let printed = self.print(format, args)?;
        self.flush()?;
        Ok(printed)
    }

    /// Buffer the decimal rendering of an unsigned value.
    pub fn print_u64(&mut self, value: u64) -> Result<usize, IoError> {
        let mut scratch = [0u8; MAX_U64_DIGITS];
        let n = buf_print_u64(value, &mut scratch);
        self.write(&scratch[..n])
    }

    /// Buffer the decimal rendering of a signed value.
    pub fn print_i64(&mut self, value: i64) -> Result<usize, IoError> {
        let mut scratch = [0u8; MAX_I64_DIGITS];
        let n = buf_print_i64(value, &mut scratch);
        self.write(&scratch[..n])
    }

    /// Buffer the fixed-precision rendering of a float.
    pub fn print_f64(&mut self, value: f64) -> Result<usize, IoError> {
        let mut scratch = [0u8; MAX_F64_LEN];
        let n = buf_print_f64(value, &mut scratch);
        self.write(&scratch[..n])
    }

    /// Issue exactly one write syscall for the buffered bytes.
    ///
    /// Success resets the cursor. Failure returns the mapped outcome with
    /// the cursor untouched, so a retry re-attempts the same bytes. A
    /// short write reports [`IoError::Io`], also without resetting: the
    /// kernel persisted a prefix and a retry will resend it.
    pub fn flush(&mut self) -> Result<(), IoError> {
        if self.index == 0 {
            return Ok(());
        }
        match sys::write(self.fd, &self.buf[..self.index]) {
            Ok(n) if n == self.index => {
                self.index = 0;
                Ok(())
            }
            Ok(_) => Err(IoError::Io),
            Err(code) => Err(IoError::from_write_code(code)),
        }
    }

    /// Close the descriptor WITHOUT flushing.
    ///
    /// Buffered bytes are lost; flush first if they matter. The stream is
    /// consumed either way.
    pub fn close(self) -> Result<(), IoError> {
        sys::close(self.fd).map_err(IoError::from_close_code)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
