//! Lock-protected ring buffer for producer and consumer on different threads.
//!
//! [`RingBuffer`] itself is plain data: its positions and count are updated
//! non-atomically, so two contexts touching it concurrently need external
//! synchronization. `SharedRingBuffer` provides that with a `spin::Mutex`
//! taken for the duration of each operation. Nothing here blocks on the
//! buffer state; only the lock itself may spin.

use spin::{Mutex, MutexGuard};

use crate::observer::{NoopObserver, Observer};
use crate::ring_buffer::RingBuffer;
use crate::state::RingState;

pub struct SharedRingBuffer<T, const N: usize, O = NoopObserver> {
    inner: Mutex<RingBuffer<T, N, O>>,
}

impl<T: Copy, const N: usize> SharedRingBuffer<T, N> {
    pub const fn new_with(value: T) -> Self {
        Self::from_ring(RingBuffer::new_with(value))
    }
}

impl<T: Copy + Default, const N: usize> SharedRingBuffer<T, N> {
    pub fn new() -> Self {
        Self::from_ring(RingBuffer::new())
    }
}

impl<T: Copy + Default, const N: usize> Default for SharedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize, O> SharedRingBuffer<T, N, O> {
    pub const fn from_ring(ring: RingBuffer<T, N, O>) -> Self {
        Self {
            inner: Mutex::new(ring),
        }
    }

    /// Lock the buffer for a sequence of operations that must not interleave
    /// with the other side.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, RingBuffer<T, N, O>> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> RingBuffer<T, N, O> {
        self.inner.into_inner()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn free(&self) -> usize {
        self.lock().free()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    pub fn state(&self) -> RingState {
        self.lock().state()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<T: Copy, const N: usize, O: Observer<T>> SharedRingBuffer<T, N, O> {
    #[inline]
    pub fn set(&self, value: T) -> bool {
        self.lock().set(value)
    }

    #[inline]
    pub fn get(&self) -> Option<T> {
        self.lock().get()
    }

    pub fn set_bulk(&self, values: &[T]) -> usize {
        self.lock().set_bulk(values)
    }

    pub fn get_bulk(&self, out: &mut [T]) -> usize {
        self.lock().get_bulk(out)
    }
}
