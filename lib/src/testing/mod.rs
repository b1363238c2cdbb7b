//! Suite-style test harness.
//!
//! Test functions return a [`TestResult`] and use the `assert_*` macros,
//! which log the failed condition through `diag` and return early.
//! [`define_test_suite!`] groups them into a named suite runner and, in test
//! builds, a `#[test]` wrapper that fails when any member fails.

pub mod harness;

mod assertions;
pub use harness::{TestRunSummary, TestSuiteDesc, TestSuiteResult, run_single_test};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skipped,
}

impl TestResult {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass | Self::Skipped)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::diag_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::diag_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

#[macro_export]
macro_rules! run_test {
    ($result:expr, $test_fn:expr) => {{
        let outcome = $crate::testing::run_single_test(stringify!($test_fn), || $test_fn());
        $result.record(stringify!($test_fn), outcome);
        outcome
    }};

    ($test_fn:expr) => {{ $crate::testing::run_single_test(stringify!($test_fn), || $test_fn()) }};
}

#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            pub fn [<run_ $suite_name _suite>]() -> $crate::testing::TestSuiteResult {
                let mut result = $crate::testing::TestSuiteResult::new(stringify!($suite_name));

                $(
                    $crate::run_test!(result, $test_fn);
                )*

                $crate::diag_info!(
                    "SUITE {}: {}/{} passed",
                    result.name,
                    result.passed,
                    result.total
                );
                result
            }

            pub const [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc =
                $crate::testing::TestSuiteDesc {
                    name: stringify!($suite_name),
                    run: [<run_ $suite_name _suite>],
                };

            #[cfg(test)]
            #[test]
            fn [<$suite_name _suite_passes>]() {
                let result = [<run_ $suite_name _suite>]();
                assert!(
                    result.all_passed(),
                    "suite {} failed {} of {} (first failure: {})",
                    result.name,
                    result.failed,
                    result.total,
                    result.first_failure.unwrap_or("?"),
                );
            }
        }
    };
}
