//! Capacity conditions reported by the ring buffers.
//!
//! Both conditions are expected and recoverable. The boolean and count
//! returning operations report them implicitly; the `try_*` variants surface
//! them as a [`BufferError`] so callers can propagate with `?`.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferError {
    /// No free slot was left for a write.
    Full,
    /// No occupied slot was left for a read.
    Empty,
}

impl BufferError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "buffer is full",
            Self::Empty => "buffer is empty",
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for BufferError {}

/// Convenience result type for ring buffer operations.
pub type BufferResult<T = ()> = Result<T, BufferError>;
