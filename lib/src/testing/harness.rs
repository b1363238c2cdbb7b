// Test harness types: TestSuiteResult, TestSuiteDesc, TestRunSummary.
// Suites are declared with define_test_suite! and listed by the host crate.

use crate::testing::TestResult;
use crate::{diag_debug, diag_info};

/// Result of executing a single test suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub first_failure: Option<&'static str>,
}

impl TestSuiteResult {
    /// Create a new result with just the suite name set.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            first_failure: None,
        }
    }

    /// Account for one test outcome.
    pub fn record(&mut self, test_name: &'static str, outcome: TestResult) {
        self.total = self.total.saturating_add(1);
        match outcome {
            TestResult::Pass => self.passed = self.passed.saturating_add(1),
            TestResult::Skipped => {
                self.passed = self.passed.saturating_add(1);
                self.skipped = self.skipped.saturating_add(1);
            }
            TestResult::Fail => {
                self.failed = self.failed.saturating_add(1);
                if self.first_failure.is_none() {
                    self.first_failure = Some(test_name);
                }
            }
        }
    }

    /// Check if all tests in this suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub type SuiteRunnerFn = fn() -> TestSuiteResult;

#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub run: SuiteRunnerFn,
}

/// Aggregated results from running several suites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestRunSummary {
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl TestRunSummary {
    /// Add results from a single suite to the summary.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        self.suite_count += 1;
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
        self.skipped = self.skipped.saturating_add(result.skipped);
    }

    /// Check if all tests across all suites passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Run every suite in `suites` and aggregate the outcome.
    pub fn run(suites: &[TestSuiteDesc]) -> Self {
        let mut summary = Self::default();
        for desc in suites {
            let result = (desc.run)();
            summary.add_suite_result(&result);
        }
        diag_info!(
            "TESTS: {} suites, {}/{} passed",
            summary.suite_count,
            summary.passed,
            summary.total_tests
        );
        summary
    }
}

/// Run one test function and log its outcome.
pub fn run_single_test<F>(name: &'static str, test: F) -> TestResult
where
    F: FnOnce() -> TestResult,
{
    let outcome = test();
    match outcome {
        TestResult::Pass => diag_debug!("TEST PASS: {}", name),
        TestResult::Skipped => diag_info!("TEST SKIP: {}", name),
        TestResult::Fail => diag_info!("TEST FAIL: {}", name),
    }
    outcome
}
