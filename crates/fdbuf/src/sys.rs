//! Narrow libc syscall veneer.
//!
//! One function per syscall this crate issues. Failures are reported as
//! the raw positive errno so the caller picks the mapping table for its
//! operation family. Nothing above this module touches `libc`.

use std::ffi::CStr;

/// Process-wide integer descriptor handle.
pub type RawFd = i32;

pub const STDIN_FILENO: RawFd = 0;
pub const STDOUT_FILENO: RawFd = 1;
pub const STDERR_FILENO: RawFd = 2;

fn errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// `open(path, O_RDONLY)`.
pub fn open_read_only(path: &CStr) -> Result<RawFd, i32> {
    // SAFETY: path is a valid NUL-terminated string for the whole call.
    let rc = unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) };
    if rc < 0 { Err(errno()) } else { Ok(rc) }
}

/// One blocking `read` into `buf`. Ok(0) means end-of-input.
pub fn read(fd: RawFd, buf: &mut [u8]) -> Result<usize, i32> {
    // SAFETY: buf is a live writable slice and count is its exact length.
    let rc = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
    if rc < 0 { Err(errno()) } else { Ok(rc as usize) }
}

/// One blocking `write` of `buf`. The kernel may persist fewer bytes
/// than requested; the returned count is authoritative.
pub fn write(fd: RawFd, buf: &[u8]) -> Result<usize, i32> {
    // SAFETY: buf is a live readable slice and count is its exact length.
    let rc = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
    if rc < 0 { Err(errno()) } else { Ok(rc as usize) }
}

/// `close(fd)`.
pub fn close(fd: RawFd) -> Result<(), i32> {
    // SAFETY: close accepts any integer; invalid descriptors report EBADF.
    let rc = unsafe { libc::close(fd) };
    if rc < 0 { Err(errno()) } else { Ok(()) }
}
