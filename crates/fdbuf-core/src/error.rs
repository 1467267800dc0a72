//! Closed I/O error taxonomy and errno mapping tables.
//!
//! Each syscall family (open, read, write, close) has a total mapping from
//! raw errno codes to exactly one [`IoError`]. Codes a family does not
//! enumerate degrade to [`IoError::Unexpected`]: that outcome marks a gap
//! in the table, never a mis-classification.
//!
//! `EFAULT` is excluded from every table. The streams in this workspace
//! always pass live Rust slices, so a bad-pointer report from the kernel
//! means the veneer itself is broken and the process aborts via
//! `unreachable!` rather than handing the caller a recoverable value.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errno constants
// ---------------------------------------------------------------------------

// Linux errno values consumed by the tables below. Defined locally so the
// mapping stays pure and testable without an OS binding.
pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const ENXIO: i32 = 6;
pub const EBADF: i32 = 9;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const ENODEV: i32 = 19;
pub const ENOTDIR: i32 = 20;
pub const EISDIR: i32 = 21;
pub const EINVAL: i32 = 22;
pub const ENFILE: i32 = 23;
pub const EMFILE: i32 = 24;
pub const EFBIG: i32 = 27;
pub const ENOSPC: i32 = 28;
pub const EPIPE: i32 = 32;
pub const ENAMETOOLONG: i32 = 36;
pub const ELOOP: i32 = 40;
pub const EDQUOT: i32 = 122;

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// Closed set of I/O failure outcomes.
///
/// Every fallible descriptor operation in this workspace returns either a
/// success value or exactly one of these kinds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IoError {
    #[error("disk quota exceeded")]
    DiskQuota,
    #[error("file too large")]
    FileTooBig,
    #[error("interrupted by signal")]
    Interrupted,
    #[error("low-level I/O failure")]
    Io,
    #[error("no space left on device")]
    NoSpaceLeft,
    #[error("permission denied")]
    PermissionDenied,
    #[error("broken pipe")]
    BrokenPipe,
    #[error("bad file descriptor")]
    BadDescriptor,
    #[error("is a directory")]
    IsDir,
    #[error("not a directory")]
    NotDir,
    #[error("too many levels of symbolic links")]
    SymlinkLoop,
    #[error("per-process descriptor limit exceeded")]
    ProcessFdQuotaExceeded,
    #[error("system-wide descriptor limit exceeded")]
    SystemFdQuotaExceeded,
    #[error("name too long")]
    NameTooLong,
    #[error("no such device")]
    NoDevice,
    #[error("no such file or directory")]
    PathNotFound,
    #[error("out of memory")]
    OutOfMemory,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("unexpected OS error")]
    Unexpected,
}

impl IoError {
    /// Map an errno code from the open family.
    pub fn from_open_code(code: i32) -> IoError {
        match code {
            EACCES | EPERM => IoError::PermissionDenied,
            EINTR => IoError::Interrupted,
            EISDIR => IoError::IsDir,
            ELOOP => IoError::SymlinkLoop,
            EMFILE => IoError::ProcessFdQuotaExceeded,
            ENFILE => IoError::SystemFdQuotaExceeded,
            ENAMETOOLONG => IoError::NameTooLong,
            ENODEV | ENXIO => IoError::NoDevice,
            ENOENT => IoError::PathNotFound,
            ENOMEM => IoError::OutOfMemory,
            ENOSPC => IoError::NoSpaceLeft,
            ENOTDIR => IoError::NotDir,
            EINVAL => IoError::InvalidArgument,
            EFAULT => unreachable!("open was handed a dead path pointer"),
            _ => IoError::Unexpected,
        }
    }

    /// Map an errno code from the read family.
    pub fn from_read_code(code: i32) -> IoError {
        match code {
            EBADF => IoError::BadDescriptor,
            EINTR => IoError::Interrupted,
            EIO => IoError::Io,
            EISDIR => IoError::IsDir,
            ENOMEM => IoError::OutOfMemory,
            EINVAL => IoError::InvalidArgument,
            EFAULT => unreachable!("read was handed a dead destination buffer"),
            _ => IoError::Unexpected,
        }
    }

    /// Map an errno code from the write family.
    pub fn from_write_code(code: i32) -> IoError {
        match code {
            EDQUOT => IoError::DiskQuota,
            EFBIG => IoError::FileTooBig,
            EINTR => IoError::Interrupted,
            EIO => IoError::Io,
            ENOSPC => IoError::NoSpaceLeft,
            EACCES | EPERM => IoError::PermissionDenied,
            EPIPE => IoError::BrokenPipe,
            EBADF => IoError::BadDescriptor,
            ENODEV | ENXIO => IoError::NoDevice,
            EINVAL => IoError::InvalidArgument,
            EFAULT => unreachable!("write was handed a dead source buffer"),
            _ => IoError::Unexpected,
        }
    }

    /// Map an errno code from the close family.
    pub fn from_close_code(code: i32) -> IoError {
        match code {
            EBADF => IoError::BadDescriptor,
            EINTR => IoError::Interrupted,
            EIO => IoError::Io,
            ENOSPC => IoError::NoSpaceLeft,
            EDQUOT => IoError::DiskQuota,
            _ => IoError::Unexpected,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
