use ringfifo_lib::testing::TestResult;
use ringfifo_lib::{RingBuffer, assert_eq_test, assert_test, assert_zero, define_test_suite, pass};

/// set_bulk followed by get_bulk on an empty buffer returns the same run.
pub fn test_bulk_round_trip() -> TestResult {
    let mut rb: RingBuffer<u32, 8> = RingBuffer::new();
    let input = [10, 20, 30, 40, 50];
    assert_eq_test!(rb.set_bulk(&input), 5);

    let mut out = [0u32; 5];
    assert_eq_test!(rb.get_bulk(&mut out), 5);
    assert_eq_test!(out, input);
    assert_test!(rb.is_empty());
    pass!()
}

/// set_bulk never stores more than the free space; the caller retries the
/// remainder once the consumer catches up.
pub fn test_bulk_partial_set_and_retry() -> TestResult {
    let mut rb: RingBuffer<u32, 4> = RingBuffer::new();
    rb.set(0);
    let input = [1, 2, 3, 4, 5, 6];

    let stored = rb.set_bulk(&input);
    assert_eq_test!(stored, 3, "only the free space should be used");
    assert_test!(rb.is_full());

    let mut out = [0u32; 2];
    assert_eq_test!(rb.get_bulk(&mut out), 2);
    assert_eq_test!(out, [0, 1]);

    let retried = rb.set_bulk(&input[stored..]);
    assert_eq_test!(retried, 2);

    let mut rest = [0u32; 4];
    assert_eq_test!(rb.get_bulk(&mut rest), 4);
    assert_eq_test!(rest, [2, 3, 4, 5]);
    pass!()
}

/// get_bulk returns fewer elements than asked when the buffer runs dry and
/// leaves the tail of the output untouched.
pub fn test_bulk_get_short() -> TestResult {
    let mut rb: RingBuffer<u8, 4> = RingBuffer::new();
    rb.set_bulk(&[7, 8]);
    let mut out = [0xFFu8; 4];
    assert_eq_test!(rb.get_bulk(&mut out), 2);
    assert_eq_test!(out, [7, 8, 0xFF, 0xFF]);
    assert_zero!(rb.get_bulk(&mut out), "empty buffer must yield nothing");
    pass!()
}

/// Zero-length requests are no-ops.
pub fn test_bulk_empty_requests() -> TestResult {
    let mut rb: RingBuffer<u8, 2> = RingBuffer::new();
    assert_zero!(rb.set_bulk(&[]));
    assert_zero!(rb.get_bulk(&mut []));
    rb.set_bulk(&[1, 2]);
    assert_zero!(rb.set_bulk(&[]));
    assert_eq_test!(rb.len(), 2);
    pass!()
}

/// Bulk traffic keeps FIFO order over many wraps.
pub fn test_bulk_many_wraps() -> TestResult {
    let mut rb: RingBuffer<u32, 7> = RingBuffer::new();
    let mut next_in = 0u32;
    let mut next_out = 0u32;
    for round in 0..64usize {
        let chunk: [u32; 5] = core::array::from_fn(|i| next_in + i as u32);
        next_in += rb.set_bulk(&chunk[..(round % 5) + 1]) as u32;

        let mut out = [0u32; 3];
        let n = rb.get_bulk(&mut out[..(round % 3) + 1]);
        for &value in &out[..n] {
            assert_eq_test!(value, next_out, "out of order after wrap");
            next_out += 1;
        }
        assert_eq_test!(rb.len() + rb.free(), 7);
    }
    for value in rb.drain(usize::MAX) {
        assert_eq_test!(value, next_out);
        next_out += 1;
    }
    assert_eq_test!(next_out, next_in, "elements lost");
    pass!()
}

/// drain removes at most the requested number of elements.
pub fn test_drain_bounded() -> TestResult {
    let mut rb: RingBuffer<u32, 6> = RingBuffer::new();
    rb.set_bulk(&[1, 2, 3, 4, 5]);

    let mut taken = 0;
    let mut sum = 0;
    for value in rb.drain(3) {
        taken += 1;
        sum += value;
    }
    assert_eq_test!(taken, 3);
    assert_eq_test!(sum, 6);
    assert_eq_test!(rb.len(), 2);
    assert_eq_test!(rb.peek().copied(), Some(4));
    pass!()
}

define_test_suite!(
    ring_bulk,
    [
        test_bulk_round_trip,
        test_bulk_partial_set_and_retry,
        test_bulk_get_short,
        test_bulk_empty_requests,
        test_bulk_many_wraps,
        test_drain_bounded,
    ]
);
