//! Lock-free single-producer/single-consumer ring.
//!
//! Same counted discipline as [`RingBuffer`](crate::RingBuffer): every one of
//! the `N` slots is usable and occupancy is derived from two cursors rather
//! than from position equality. The producer owns `tail`, the consumer owns
//! `head`, and each publishes its cursor with `Release` after touching a
//! slot. The other side loads it with `Acquire` before deciding whether a
//! slot is readable (or writable), so a consumer never sees a slot before the
//! producer's write to it is visible.
//!
//! Cursors run over `0..2N` so that `head == tail` means empty and a
//! distance of `N` means full, for any `N`.
//!
//! ```ignore
//! let mut ring: SpscRing<u32, 64> = SpscRing::new();
//! let (mut tx, mut rx) = ring.split();
//! std::thread::scope(|s| {
//!     s.spawn(move || while !tx.set(7) {});
//!     s.spawn(move || while rx.get().is_none() {});
//! });
//! ```

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

#[repr(C, align(64))]
struct CacheAligned<T>(T);

/// ```compile_fail
/// use ringfifo_lib::SpscRing;
///
/// let ring: SpscRing<u32, 0> = SpscRing::new();
/// assert!(ring.is_empty());
/// ```
pub struct SpscRing<T, const N: usize> {
    slots: UnsafeCell<[T; N]>,
    /// Consumer cursor.
    head: CacheAligned<AtomicUsize>,
    /// Producer cursor.
    tail: CacheAligned<AtomicUsize>,
}

// SAFETY: the producer only writes the slot at `tail` and the consumer only
// reads the slot at `head`. A slot is handed from one side to the other
// through a Release store / Acquire load of the owning cursor, so no slot is
// accessed by both sides at the same time. `split` hands out at most one
// producer and one consumer at a time.
unsafe impl<T: Send, const N: usize> Sync for SpscRing<T, N> {}

impl<T: Copy, const N: usize> SpscRing<T, N> {
    const CAPACITY_OK: () = assert!(
        N > 0 && N <= usize::MAX / 4,
        "SpscRing capacity must be non-zero and at most usize::MAX / 4"
    );
    const WRAP: usize = 2 * N;

    pub const fn new_with(value: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_OK;
        Self {
            slots: UnsafeCell::new([value; N]),
            head: CacheAligned(AtomicUsize::new(0)),
            tail: CacheAligned(AtomicUsize::new(0)),
        }
    }

    pub fn new() -> Self
    where
        T: Default,
    {
        Self::new_with(T::default())
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        let head = self.head.0.load(Ordering::Acquire);
        let tail = self.tail.0.load(Ordering::Acquire);
        Self::distance(head, tail).min(N)
    }

    pub fn free(&self) -> usize {
        N - self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    pub fn clear(&mut self) {
        *self.head.0.get_mut() = 0;
        *self.tail.0.get_mut() = 0;
    }

    /// Split into the producer and consumer halves. The exclusive borrow
    /// guarantees only one pair exists at a time.
    pub fn split(&mut self) -> (Producer<'_, T, N>, Consumer<'_, T, N>) {
        let ring = &*self;
        (Producer { ring }, Consumer { ring })
    }

    #[inline(always)]
    const fn distance(head: usize, tail: usize) -> usize {
        if tail >= head {
            tail - head
        } else {
            tail + Self::WRAP - head
        }
    }

    #[inline(always)]
    const fn step(cursor: usize, by: usize) -> usize {
        (cursor + by) % Self::WRAP
    }

    #[inline(always)]
    fn slot_ptr(&self, cursor: usize) -> *mut T {
        let index = if cursor >= N { cursor - N } else { cursor };
        // SAFETY: `index < N`, so the offset stays inside the slot array.
        unsafe { self.slots.get().cast::<T>().add(index) }
    }
}

impl<T: Copy + Default, const N: usize> Default for SpscRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Producer<'a, T, const N: usize> {
    ring: &'a SpscRing<T, N>,
}

impl<T: Copy, const N: usize> Producer<'_, T, N> {
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slots available for writing. Exact from the producer's side: the
    /// consumer can only make it grow.
    pub fn free(&self) -> usize {
        let tail = self.ring.tail.0.load(Ordering::Relaxed);
        let head = self.ring.head.0.load(Ordering::Acquire);
        N - SpscRing::<T, N>::distance(head, tail)
    }

    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    pub fn set(&mut self, value: T) -> bool {
        let tail = self.ring.tail.0.load(Ordering::Relaxed);
        let head = self.ring.head.0.load(Ordering::Acquire);
        if SpscRing::<T, N>::distance(head, tail) == N {
            return false;
        }
        // SAFETY: the slot at `tail` is not readable by the consumer until the
        // store below publishes it.
        unsafe { self.ring.slot_ptr(tail).write(value) };
        self.ring
            .tail
            .0
            .store(SpscRing::<T, N>::step(tail, 1), Ordering::Release);
        true
    }

    /// Store as many of `values` as fit, in order, and publish them with a
    /// single cursor update.
    pub fn set_bulk(&mut self, values: &[T]) -> usize {
        let tail = self.ring.tail.0.load(Ordering::Relaxed);
        let head = self.ring.head.0.load(Ordering::Acquire);
        let n = values.len().min(N - SpscRing::<T, N>::distance(head, tail));
        for (i, &value) in values[..n].iter().enumerate() {
            let cursor = SpscRing::<T, N>::step(tail, i);
            // SAFETY: as in `set`; none of these slots is published yet.
            unsafe { self.ring.slot_ptr(cursor).write(value) };
        }
        self.ring
            .tail
            .0
            .store(SpscRing::<T, N>::step(tail, n), Ordering::Release);
        n
    }
}

pub struct Consumer<'a, T, const N: usize> {
    ring: &'a SpscRing<T, N>,
}

impl<T: Copy, const N: usize> Consumer<'_, T, N> {
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Elements ready to read. Exact from the consumer's side: the producer
    /// can only make it grow.
    pub fn len(&self) -> usize {
        let head = self.ring.head.0.load(Ordering::Relaxed);
        let tail = self.ring.tail.0.load(Ordering::Acquire);
        SpscRing::<T, N>::distance(head, tail)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&mut self) -> Option<T> {
        let head = self.ring.head.0.load(Ordering::Relaxed);
        let tail = self.ring.tail.0.load(Ordering::Acquire);
        if head == tail {
            return None;
        }
        // SAFETY: the Acquire load of `tail` makes the producer's write to
        // this slot visible, and the producer will not reuse it until the
        // store below releases it.
        let value = unsafe { self.ring.slot_ptr(head).read() };
        self.ring
            .head
            .0
            .store(SpscRing::<T, N>::step(head, 1), Ordering::Release);
        Some(value)
    }

    pub fn get_bulk(&mut self, out: &mut [T]) -> usize {
        let head = self.ring.head.0.load(Ordering::Relaxed);
        let tail = self.ring.tail.0.load(Ordering::Acquire);
        let n = out.len().min(SpscRing::<T, N>::distance(head, tail));
        for (i, slot) in out[..n].iter_mut().enumerate() {
            let cursor = SpscRing::<T, N>::step(head, i);
            // SAFETY: as in `get`; all `n` slots were published before the
            // Acquire load of `tail`.
            *slot = unsafe { self.ring.slot_ptr(cursor).read() };
        }
        self.ring
            .head
            .0
            .store(SpscRing::<T, N>::step(head, n), Ordering::Release);
        n
    }
}
