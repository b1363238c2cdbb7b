//! Per-operation observer hook.
//!
//! A [`RingBuffer`](crate::RingBuffer) reports every element it stores or
//! hands out to its observer, together with the slot that held it. The
//! default [`NoopObserver`] ignores everything and compiles away. Observers
//! only watch; they cannot alter what the buffer does.

use core::fmt;

use crate::error::BufferError;
use crate::{diag_debug, diag_warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Set,
    Get,
}

impl Op {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Op::Set => "set",
            Op::Get => "get",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful element transfer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpRecord<T> {
    pub op: Op,
    pub value: T,
    /// Slot index the value was written to or read from.
    pub slot: usize,
}

pub trait Observer<T> {
    /// Called once per element stored or retrieved.
    #[inline(always)]
    fn on_op(&mut self, _record: OpRecord<T>) {}

    /// Called when a write or read could not move every requested element.
    #[inline(always)]
    fn on_reject(&mut self, _error: BufferError) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {}

impl<T, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    #[inline(always)]
    fn on_op(&mut self, record: OpRecord<T>) {
        (**self).on_op(record);
    }

    #[inline(always)]
    fn on_reject(&mut self, error: BufferError) {
        (**self).on_reject(error);
    }
}

/// Forwards records to the diagnostics log: transfers at `Debug`,
/// rejections at `Warn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagObserver;

impl<T: fmt::Debug> Observer<T> for DiagObserver {
    fn on_op(&mut self, record: OpRecord<T>) {
        diag_debug!("ring {} {:?} at slot {}", record.op, record.value, record.slot);
    }

    fn on_reject(&mut self, error: BufferError) {
        diag_warn!("ring rejected: {}", error);
    }
}
