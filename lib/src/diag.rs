//! Diagnostics logging.
//!
//! All diagnostic output funnels through a single **backend** function
//! pointer. Until a backend is registered every line is dropped, so the ring
//! buffers never write to a global channel on their own. Hosts that want to
//! see the traffic register a backend once at start-up:
//!
//! ```ignore
//! fn stdout_backend(args: core::fmt::Arguments<'_>) {
//!     println!("{args}");
//! }
//!
//! ringfifo_lib::diag::diag_register_backend(stdout_backend);
//! ringfifo_lib::diag::diag_set_level(DiagLevel::Debug);
//! ```
//!
//! # Backend contract
//!
//! The backend receives the pre-formatted arguments for a **single line** and
//! is responsible for writing it in one piece followed by a newline. Callers
//! must not put a newline in their format string.

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DiagLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => DiagLevel::Error,
            1 => DiagLevel::Warn,
            2 => DiagLevel::Info,
            3 => DiagLevel::Debug,
            _ => DiagLevel::Trace,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            DiagLevel::Error => "error",
            DiagLevel::Warn => "warn",
            DiagLevel::Info => "info",
            DiagLevel::Debug => "debug",
            DiagLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for DiagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(DiagLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: DiagLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a diagnostics backend.
///
/// The backend must write the formatted text **and** a trailing newline
/// without interleaving output from other threads.
pub type DiagBackend = fn(fmt::Arguments<'_>);

/// Stored as a raw pointer; `null` means "drop everything".
static BACKEND: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

#[inline]
fn dispatch(args: fmt::Arguments<'_>) {
    let ptr = BACKEND.load(Ordering::Acquire);
    if ptr.is_null() {
        return;
    }
    // SAFETY: `diag_register_backend` only stores valid `DiagBackend` fn
    // pointers, which have the same size and representation as `*mut ()`.
    let backend: DiagBackend = unsafe { core::mem::transmute::<*mut (), DiagBackend>(ptr) };
    backend(args);
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Register the backend that receives every enabled line.
pub fn diag_register_backend(backend: DiagBackend) {
    BACKEND.store(backend as *mut (), Ordering::Release);
}

/// Drop the registered backend; subsequent lines are discarded.
pub fn diag_reset_backend() {
    BACKEND.store(core::ptr::null_mut(), Ordering::Release);
}

pub fn diag_has_backend() -> bool {
    !BACKEND.load(Ordering::Acquire).is_null()
}

pub fn diag_set_level(level: DiagLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn diag_get_level() -> DiagLevel {
    DiagLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

pub fn diag_is_enabled(level: DiagLevel) -> bool {
    is_enabled(level)
}

/// Emit a formatted line at the given level.
pub fn log_args(level: DiagLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! diag {
    ($level:expr, $($arg:tt)*) => {{
        $crate::diag::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! diag_error {
    ($($arg:tt)*) => {
        $crate::diag::log_args($crate::diag::DiagLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_warn {
    ($($arg:tt)*) => {
        $crate::diag::log_args($crate::diag::DiagLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_info {
    ($($arg:tt)*) => {
        $crate::diag::log_args($crate::diag::DiagLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {
        $crate::diag::log_args($crate::diag::DiagLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_trace {
    ($($arg:tt)*) => {
        $crate::diag::log_args($crate::diag::DiagLevel::Trace, ::core::format_args!($($arg)*))
    };
}
