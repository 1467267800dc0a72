//! Growable byte buffer with a maintained C-string terminator.
//!
//! The backing store always holds the logical content plus one trailing
//! zero byte, so a view suitable for C-style consumers exists at all
//! times without a copy. The terminator is never counted by [`CBuf::len`]
//! and never escapes through [`CBuf::as_bytes`].
//!
//! Every mutation funnels through [`CBuf::resize`], the single point that
//! re-establishes the terminator, so the invariant cannot drift.

use std::ffi::CStr;

/// Growable null-terminated byte buffer.
///
/// Interior zero bytes are permitted; the C view produced by
/// [`CBuf::as_cstr`] simply ends at the first one.
#[derive(Debug, Clone)]
pub struct CBuf {
    // Invariant: data.len() == logical length + 1 and *data.last() == 0.
    data: Vec<u8>,
}

impl CBuf {
    /// Empty buffer (storage holds only the terminator).
    pub fn new() -> CBuf {
        CBuf { data: vec![0] }
    }

    /// Buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> CBuf {
        let mut data = Vec::with_capacity(bytes.len() + 1);
        data.extend_from_slice(bytes);
        data.push(0);
        CBuf { data }
    }

    /// Buffer holding a copy of a C string's content (without its NUL).
    pub fn from_cstr(s: &CStr) -> CBuf {
        CBuf::from_bytes(s.to_bytes())
    }

    /// Buffer holding a copy of `other[begin..end]`.
    pub fn from_slice(other: &CBuf, begin: usize, end: usize) -> CBuf {
        CBuf::from_bytes(&other.as_bytes()[begin..end])
    }

    /// Logical length, excluding the terminator.
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.data.len() - 1]
    }

    /// The content as a C string, ending at the first zero byte.
    pub fn as_cstr(&self) -> &CStr {
        // The invariant guarantees a zero byte exists.
        CStr::from_bytes_until_nul(&self.data).unwrap_or(c"")
    }

    /// Grow or shrink the logical length, preserving the common prefix.
    ///
    /// New tail bytes are zero until overwritten. This is the only method
    /// that touches the storage length; it rewrites the terminator last.
    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len + 1, 0);
        self.data[new_len] = 0;
    }

    /// Append a copy of `bytes`.
    pub fn append(&mut self, bytes: &[u8]) {
        let old_len = self.len();
        self.resize(old_len + bytes.len());
        self.data[old_len..old_len + bytes.len()].copy_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn append_byte(&mut self, byte: u8) {
        self.append(&[byte]);
    }

    /// Append a C string's content (without its NUL).
    pub fn append_cstr(&mut self, s: &CStr) {
        self.append(s.to_bytes());
    }

    /// Content equality against a byte slice. Unequal lengths return
    /// false before any byte is compared.
    pub fn eq_bytes(&self, other: &[u8]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.as_bytes() == other
    }

    pub fn eq_cstr(&self, other: &CStr) -> bool {
        self.eq_bytes(other.to_bytes())
    }

    pub fn eq_cbuf(&self, other: &CBuf) -> bool {
        self.eq_bytes(other.as_bytes())
    }

    /// Whether the content begins with `prefix`. A prefix longer than the
    /// buffer is never a match.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(prefix)
    }

    pub fn starts_with_cstr(&self, prefix: &CStr) -> bool {
        self.starts_with(prefix.to_bytes())
    }

    pub fn starts_with_cbuf(&self, prefix: &CBuf) -> bool {
        self.starts_with(prefix.as_bytes())
    }
}

impl Default for CBuf {
    fn default() -> CBuf {
        CBuf::new()
    }
}

impl PartialEq for CBuf {
    fn eq(&self, other: &CBuf) -> bool {
        self.eq_cbuf(other)
    }
}

impl Eq for CBuf {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
