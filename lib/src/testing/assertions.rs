//! Assertion macros for suite tests.
//!
//! Each macro logs the failed check with its source location through `diag`
//! and returns [`TestResult::Fail`](crate::testing::TestResult::Fail) from the
//! enclosing test function. Compared operands are borrowed, so fields behind
//! a shared reference can be checked in place.

#[macro_export]
macro_rules! assert_eq_test {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    $crate::diag_info!(
                        "ASSERT_EQ {}:{}: expected {:?}, got {:?}",
                        file!(),
                        line!(),
                        right,
                        left
                    );
                    return $crate::testing::TestResult::Fail;
                }
            }
        }
    }};
    ($left:expr, $right:expr, $msg:expr) => {{
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    $crate::diag_info!(
                        "ASSERT_EQ {}:{}: {} - expected {:?}, got {:?}",
                        file!(),
                        line!(),
                        $msg,
                        right,
                        left
                    );
                    return $crate::testing::TestResult::Fail;
                }
            }
        }
    }};
}

/// Unwraps a `Some`, failing the test on `None`.
#[macro_export]
macro_rules! assert_some {
    ($opt:expr) => {
        $crate::assert_some!($opt, "expected Some")
    };
    ($opt:expr, $msg:expr) => {{
        match $opt {
            Some(v) => v,
            None => {
                $crate::diag_info!("ASSERT_SOME {}:{}: {} - got None", file!(), line!(), $msg);
                return $crate::testing::TestResult::Fail;
            }
        }
    }};
}

#[macro_export]
macro_rules! assert_none {
    ($opt:expr) => {
        $crate::assert_none!($opt, "expected None")
    };
    ($opt:expr, $msg:expr) => {{
        if let Some(v) = $opt {
            $crate::diag_info!("ASSERT_NONE {}:{}: {} - got Some({:?})", file!(), line!(), $msg, v);
            return $crate::testing::TestResult::Fail;
        }
    }};
}

#[macro_export]
macro_rules! assert_test {
    ($cond:expr) => {
        $crate::assert_test!($cond, "condition failed")
    };
    ($cond:expr, $msg:expr) => {{
        if !$cond {
            $crate::diag_info!("ASSERT {}:{}: {}", file!(), line!(), $msg);
            return $crate::testing::TestResult::Fail;
        }
    }};
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {{
        if !$cond {
            $crate::diag_info!(
                "ASSERT {}:{}: {}",
                file!(),
                line!(),
                ::core::format_args!($fmt, $($arg)*)
            );
            return $crate::testing::TestResult::Fail;
        }
    }};
}

/// Counts and lengths that must be zero.
#[macro_export]
macro_rules! assert_zero {
    ($val:expr) => {
        $crate::assert_zero!($val, "expected 0")
    };
    ($val:expr, $msg:expr) => {{
        let val: usize = $val;
        if val != 0 {
            $crate::diag_info!("ASSERT_ZERO {}:{}: {} - got {}", file!(), line!(), $msg, val);
            return $crate::testing::TestResult::Fail;
        }
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        $crate::assert_ok!($result, "expected Ok")
    };
    ($result:expr, $msg:expr) => {{
        match $result {
            Ok(v) => v,
            Err(e) => {
                $crate::diag_info!("ASSERT_OK {}:{}: {} - got Err({:?})", file!(), line!(), $msg, e);
                return $crate::testing::TestResult::Fail;
            }
        }
    }};
}

/// Unwraps the error of a `Result`, failing the test on `Ok`.
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        $crate::assert_err!($result, "expected Err")
    };
    ($result:expr, $msg:expr) => {{
        match $result {
            Err(e) => e,
            Ok(v) => {
                $crate::diag_info!("ASSERT_ERR {}:{}: {} - got Ok({:?})", file!(), line!(), $msg, v);
                return $crate::testing::TestResult::Fail;
            }
        }
    }};
}
