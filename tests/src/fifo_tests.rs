use ringfifo_lib::testing::TestResult;
use ringfifo_lib::{
    BufferError, RingBuffer, RingState, assert_eq_test, assert_err, assert_none, assert_ok,
    assert_some, assert_test, assert_zero, define_test_suite, fail, pass,
};

// ============================================================================
// SINGLE-ELEMENT TESTS
// ============================================================================

/// Test ring buffer basic set/get
pub fn test_ring_buffer_basic() -> TestResult {
    let mut rb: RingBuffer<u32, 8> = RingBuffer::new();
    assert_test!(rb.is_empty(), "new buffer should be empty");
    assert_test!(rb.set(42), "set on empty buffer failed");
    assert_test!(!rb.is_empty(), "buffer should not be empty after set");

    let val = rb.get();
    assert_test!(val == Some(42), "get returned wrong value");
    assert_test!(rb.is_empty(), "buffer should be empty after get");
    pass!()
}

/// Test ring buffer FIFO order
pub fn test_ring_buffer_fifo() -> TestResult {
    let mut rb: RingBuffer<u32, 8> = RingBuffer::new();
    rb.set(1);
    rb.set(2);
    rb.set(3);

    assert_test!(rb.get() == Some(1), "FIFO order violated (expected 1)");
    assert_test!(rb.get() == Some(2), "FIFO order violated (expected 2)");
    assert_test!(rb.get() == Some(3), "FIFO order violated (expected 3)");
    pass!()
}

/// Test get on an empty buffer, repeated
pub fn test_ring_buffer_empty_get_idempotent() -> TestResult {
    let mut rb: RingBuffer<u32, 8> = RingBuffer::new();
    for _ in 0..5 {
        assert_none!(rb.get(), "get from empty should return None");
        assert_zero!(rb.len(), "len changed by empty get");
        assert_eq_test!(rb.free(), 8, "free changed by empty get");
    }
    let error = assert_err!(rb.try_get(), "try_get on empty");
    assert_eq_test!(error, BufferError::Empty);
    pass!()
}

/// Test set on a full buffer, repeated
pub fn test_ring_buffer_full() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
    for i in 0..4 {
        if rb.is_full() {
            return fail!("buffer full after only {} sets", i);
        }
        if !rb.set(i) {
            return fail!("set {} failed unexpectedly", i);
        }
    }

    assert_test!(rb.is_full(), "buffer should be full");
    for _ in 0..3 {
        assert_test!(!rb.set(999), "set on full buffer should fail");
        assert_eq_test!(rb.len(), 4);
        assert_zero!(rb.free());
    }
    let error = assert_err!(rb.try_set(999), "try_set on full");
    assert_eq_test!(error, BufferError::Full);
    assert_eq_test!(rb.peek().copied(), Some(0), "oldest element disturbed");
    pass!()
}

/// Test ring buffer wrap around
pub fn test_ring_buffer_wrap() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
    rb.set(1);
    rb.set(2);
    rb.set(3);

    rb.get();
    rb.get();

    rb.set(4);
    rb.set(5);
    rb.set(6);

    assert_test!(rb.get() == Some(3), "wrap expected 3");
    assert_test!(rb.get() == Some(4), "wrap expected 4");
    assert_test!(rb.get() == Some(5), "wrap expected 5");
    assert_test!(rb.get() == Some(6), "wrap expected 6");
    pass!()
}

/// Fill and drain twice in a row; the second lap must not see stale values.
pub fn test_ring_buffer_fill_drain_twice() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
    for lap in 0..2u32 {
        for i in 0..4 {
            assert_test!(rb.set(lap * 100 + i), "lap {} set {} failed", lap, i);
        }
        assert_test!(rb.is_full(), "lap {} should end full", lap);
        for i in 0..4 {
            let got = assert_some!(rb.get(), "drain returned None early");
            assert_eq_test!(got, lap * 100 + i, "stale or corrupted slot");
        }
        assert_test!(rb.is_empty(), "lap {} should end empty", lap);
    }
    pass!()
}

/// The four-slot float scenario: four sets accepted, the fifth refused, four
/// gets in order, the fifth refused.
pub fn test_ring_buffer_float_scenario() -> TestResult {
    let mut rb: RingBuffer<f32, 4> = RingBuffer::new();
    for value in [5.2f32, 5.3, 5.4, 5.5] {
        assert_test!(rb.set(value), "set {} refused", value);
    }
    assert_test!(!rb.set(5.6), "fifth set should be refused");
    assert_eq_test!(rb.len(), 4);

    for expected in [5.2f32, 5.3, 5.4, 5.5] {
        assert_eq_test!(rb.get(), Some(expected));
    }
    assert_none!(rb.get(), "fifth get should find the buffer empty");
    pass!()
}

/// Test ring buffer clear
pub fn test_ring_buffer_clear() -> TestResult {
    let mut rb: RingBuffer<u32, 8> = RingBuffer::new();
    rb.set(1);
    rb.set(2);
    rb.set(3);
    rb.get();

    rb.clear();

    assert_test!(rb.is_empty(), "buffer should be empty after clear");
    assert_zero!(rb.len(), "length should be 0 after clear");
    assert_eq_test!(rb.free(), 8);
    assert_none!(rb.get(), "cleared contents must not be readable");

    rb.set(10);
    assert_eq_test!(rb.get(), Some(10), "value after clear");
    pass!()
}

/// Test ring buffer capacity
pub fn test_ring_buffer_capacity() -> TestResult {
    let rb: RingBuffer<u32, 16> = RingBuffer::new();
    assert_test!(rb.capacity() == 16, "capacity should be 16");

    let one: RingBuffer<u8, 1> = RingBuffer::new_with(0);
    assert_eq_test!(one.capacity(), 1);
    pass!()
}

/// len + free stays equal to the capacity through mixed traffic.
pub fn test_ring_buffer_len_free_identity() -> TestResult {
    let mut rb: RingBuffer<u16, 5> = RingBuffer::new();
    for step in 0..40u16 {
        if step % 3 == 0 {
            rb.get();
        } else {
            rb.set(step);
        }
        assert_eq_test!(rb.len() + rb.free(), 5, "identity broken");
    }
    pass!()
}

/// Test state flags across the four combinations.
pub fn test_ring_buffer_state() -> TestResult {
    let mut rb: RingBuffer<u8, 2> = RingBuffer::new();
    assert_eq_test!(rb.state(), RingState::EMPTY);
    rb.set(1);
    assert_eq_test!(rb.state(), RingState::empty(), "partially filled");
    rb.set(2);
    assert_eq_test!(rb.state(), RingState::FULL);

    let mut single: RingBuffer<u8, 1> = RingBuffer::new();
    assert_test!(single.state().has_space());
    single.set(1);
    assert_test!(!single.state().has_space());
    assert_test!(single.state().has_data());
    pass!()
}

/// Test ring buffer overwrite mode
pub fn test_ring_buffer_overwrite() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
    for i in 0..4u32 {
        rb.set_overwrite(i);
    }

    let evicted = rb.set_overwrite(99);
    assert_eq_test!(evicted, Some(0), "overwrite should evict the oldest");

    assert_test!(rb.get() == Some(1), "overwrite test failed (expected 1)");
    let next = assert_ok!(rb.try_get());
    assert_eq_test!(next, 2);
    pass!()
}

define_test_suite!(
    ring_fifo,
    [
        test_ring_buffer_basic,
        test_ring_buffer_fifo,
        test_ring_buffer_empty_get_idempotent,
        test_ring_buffer_full,
        test_ring_buffer_wrap,
        test_ring_buffer_fill_drain_twice,
        test_ring_buffer_float_scenario,
        test_ring_buffer_clear,
        test_ring_buffer_capacity,
        test_ring_buffer_len_free_identity,
        test_ring_buffer_state,
        test_ring_buffer_overwrite,
    ]
);
