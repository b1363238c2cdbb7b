//! Four-slot `f32` FIFO: five writes (the last refused), five reads (the last
//! finds the buffer empty). Every transfer is traced through the diag log.

use ringfifo_lib::{DiagLevel, DiagObserver, RingBuffer, diag_register_backend, diag_set_level};

fn stdout_backend(args: core::fmt::Arguments<'_>) {
    println!("{args}");
}

fn main() {
    diag_register_backend(stdout_backend);
    diag_set_level(DiagLevel::Debug);

    let mut fifo: RingBuffer<f32, 4, DiagObserver> = RingBuffer::with_observer(DiagObserver);
    for value in [5.2, 5.3, 5.4, 5.5, 5.6] {
        fifo.set(value);
    }

    let drained: Vec<String> = (0..5)
        .map(|_| match fifo.get() {
            Some(value) => value.to_string(),
            None => "<empty>".to_string(),
        })
        .collect();
    println!("{}", drained.join(", "));
}
