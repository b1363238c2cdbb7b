#![cfg_attr(not(test), no_std)]

pub mod diag;
pub mod error;
pub mod observer;
pub mod ring_buffer;
pub mod shared;
pub mod spsc;
pub mod state;
pub mod testing;

#[doc(hidden)]
pub use paste;

pub use diag::{
    DiagBackend, DiagLevel, diag_get_level, diag_is_enabled, diag_register_backend,
    diag_reset_backend, diag_set_level,
};
pub use error::{BufferError, BufferResult};
pub use observer::{DiagObserver, NoopObserver, Observer, Op, OpRecord};
pub use ring_buffer::{Drain, Iter, RingBuffer};
pub use shared::SharedRingBuffer;
pub use spsc::{Consumer, Producer, SpscRing};
pub use state::RingState;
