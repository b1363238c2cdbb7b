use crate::error::{BufferError, BufferResult};
use crate::observer::{NoopObserver, Observer, Op, OpRecord};
use crate::state::RingState;

/// Fixed-capacity FIFO ring buffer over an inline array.
///
/// Uses a backing array with head/tail positions and an explicit occupied
/// count. The count alone decides fullness and emptiness, so all `N` slots
/// are usable and `len() + free() == N` holds after every operation.
///
/// Writes never overwrite (except through [`RingBuffer::set_overwrite`]) and
/// reads never block: capacity exhaustion is reported through the return
/// value. Values are copied in and out, nothing borrowed from a slot outlives
/// the call that produced it.
///
/// ```
/// use ringfifo_lib::RingBuffer;
///
/// let mut rb: RingBuffer<u8, 1> = RingBuffer::new();
/// assert!(rb.set(7));
/// assert!(!rb.set(8));
/// assert_eq!(rb.get(), Some(7));
/// ```
///
/// A capacity of zero is rejected when the constructor is instantiated:
///
/// ```compile_fail
/// use ringfifo_lib::RingBuffer;
///
/// let rb: RingBuffer<u8, 0> = RingBuffer::new();
/// assert!(rb.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize, O = NoopObserver> {
    data: [T; N],
    head: usize,
    tail: usize,
    count: usize,
    observer: O,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Create a new ring buffer with all slots set to the given value.
    /// This is const-compatible and can be used for static initialization.
    #[inline(always)]
    pub const fn new_with(value: T) -> Self {
        Self::new_with_observer(value, NoopObserver)
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    #[inline(always)]
    pub fn new() -> Self {
        Self::new_with(T::default())
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize, O> RingBuffer<T, N, O> {
    const CAPACITY_OK: () = assert!(N > 0, "RingBuffer capacity must be at least one slot");

    pub const fn new_with_observer(value: T, observer: O) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_OK;
        Self {
            data: [value; N],
            head: 0,
            tail: 0,
            count: 0,
            observer,
        }
    }

    pub fn with_observer(observer: O) -> Self
    where
        T: Default,
    {
        Self::new_with_observer(T::default(), observer)
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of occupied slots.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Number of slots still available for writing.
    #[inline(always)]
    pub const fn free(&self) -> usize {
        N - self.count
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    #[inline]
    pub const fn state(&self) -> RingState {
        RingState::from_counts(self.count, N)
    }

    /// Drop every stored element. Slot contents are left in place; they are
    /// unreachable until overwritten.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Peek at the oldest element without removing it.
    #[inline(always)]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.data[self.head])
    }

    /// Iterate over the stored elements, oldest first, without consuming them.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            data: &self.data,
            pos: self.head,
            remaining: self.count,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    #[inline(always)]
    const fn advance(index: usize, by: usize) -> usize {
        (index + by) % N
    }
}

impl<T: Copy, const N: usize, O: Observer<T>> RingBuffer<T, N, O> {
    /// Store `value` at the producer position; returns false (and changes
    /// nothing) when the buffer is full.
    #[inline]
    pub fn set(&mut self, value: T) -> bool {
        if self.is_full() {
            self.observer.on_reject(BufferError::Full);
            return false;
        }
        let slot = self.tail;
        self.data[slot] = value;
        self.tail = Self::advance(slot, 1);
        self.count += 1;
        self.observer.on_op(OpRecord {
            op: Op::Set,
            value,
            slot,
        });
        true
    }

    /// Pop the oldest element; returns `None` when empty.
    #[inline]
    pub fn get(&mut self) -> Option<T> {
        if self.is_empty() {
            self.observer.on_reject(BufferError::Empty);
            return None;
        }
        let slot = self.head;
        let value = self.data[slot];
        self.head = Self::advance(slot, 1);
        self.count -= 1;
        self.observer.on_op(OpRecord {
            op: Op::Get,
            value,
            slot,
        });
        Some(value)
    }

    pub fn try_set(&mut self, value: T) -> BufferResult {
        if self.set(value) {
            Ok(())
        } else {
            Err(BufferError::Full)
        }
    }

    pub fn try_get(&mut self) -> BufferResult<T> {
        self.get().ok_or(BufferError::Empty)
    }

    /// Store `value`, evicting and returning the oldest element when full.
    pub fn set_overwrite(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            let oldest = self.data[self.head];
            self.head = Self::advance(self.head, 1);
            self.count -= 1;
            Some(oldest)
        } else {
            None
        };
        self.set(value);
        evicted
    }

    /// Store as many of `values` as fit, in order. Returns how many were
    /// stored; the rest are left to the caller.
    pub fn set_bulk(&mut self, values: &[T]) -> usize {
        let n = values.len().min(self.free());
        let start = self.tail;

        let first = n.min(N - start);
        self.data[start..start + first].copy_from_slice(&values[..first]);
        self.data[..n - first].copy_from_slice(&values[first..n]);

        self.tail = Self::advance(start, n);
        self.count += n;

        for (i, &value) in values[..n].iter().enumerate() {
            self.observer.on_op(OpRecord {
                op: Op::Set,
                value,
                slot: Self::advance(start, i),
            });
        }
        if n < values.len() {
            self.observer.on_reject(BufferError::Full);
        }
        n
    }

    /// Move up to `out.len()` elements, oldest first, into `out`. Returns how
    /// many were moved; slots of `out` past that count are untouched.
    pub fn get_bulk(&mut self, out: &mut [T]) -> usize {
        let n = out.len().min(self.count);
        let start = self.head;

        let first = n.min(N - start);
        out[..first].copy_from_slice(&self.data[start..start + first]);
        out[first..n].copy_from_slice(&self.data[..n - first]);

        self.head = Self::advance(start, n);
        self.count -= n;

        for (i, &value) in out[..n].iter().enumerate() {
            self.observer.on_op(OpRecord {
                op: Op::Get,
                value,
                slot: Self::advance(start, i),
            });
        }
        if n < out.len() {
            self.observer.on_reject(BufferError::Empty);
        }
        n
    }

    /// Remove up to `max` elements lazily, oldest first. Elements the
    /// iterator never yields stay in the buffer.
    pub fn drain(&mut self, max: usize) -> Drain<'_, T, N, O> {
        Drain {
            ring: self,
            remaining: max,
        }
    }
}

pub struct Iter<'a, T, const N: usize> {
    data: &'a [T; N],
    pos: usize,
    remaining: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.pos];
        self.pos = (self.pos + 1) % N;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T: Copy, const N: usize, O> IntoIterator for &'a RingBuffer<T, N, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Drain<'a, T: Copy, const N: usize, O: Observer<T>> {
    ring: &'a mut RingBuffer<T, N, O>,
    remaining: usize,
}

impl<T: Copy, const N: usize, O: Observer<T>> Iterator for Drain<'_, T, N, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 || self.ring.is_empty() {
            return None;
        }
        self.remaining -= 1;
        self.ring.get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.min(self.ring.len());
        (n, Some(n))
    }
}
