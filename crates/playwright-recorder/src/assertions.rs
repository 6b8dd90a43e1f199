// Assertions - expect() payloads for recorded assertions
//
// Recorded `assert*` actions become `Frame.expect` calls. Each matcher has a
// fixed protocol expression and a fixed API label; the expected text/value is
// left unbound.
//
// See: https://playwright.dev/docs/test-assertions

use crate::protocol::params::FrameExpectParams;

/// Default timeout for assertions in milliseconds (5 seconds, matching Playwright)
pub const DEFAULT_EXPECT_TIMEOUT_MS: u64 = 5_000;

/// Locator matchers a recorded assertion can turn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectMatcher {
    ToBeChecked,
    ToContainText,
    ToHaveValue,
    ToBeVisible,
    ToMatchAriaSnapshot,
}

impl ExpectMatcher {
    /// Expression evaluated by the protocol's `expect` method
    pub const fn expression(self) -> &'static str {
        match self {
            ExpectMatcher::ToBeChecked => "to.be.checked",
            ExpectMatcher::ToContainText => "to.have.text",
            ExpectMatcher::ToHaveValue => "to.have.value",
            ExpectMatcher::ToBeVisible => "to.be.visible",
            ExpectMatcher::ToMatchAriaSnapshot => "to.match.aria",
        }
    }

    /// API label shown in logs and traces
    pub const fn api_name(self) -> &'static str {
        match self {
            ExpectMatcher::ToBeChecked => "expect.toBeChecked",
            ExpectMatcher::ToContainText => "expect.toContainText",
            ExpectMatcher::ToHaveValue => "expect.toHaveValue",
            ExpectMatcher::ToBeVisible => "expect.toBeVisible",
            ExpectMatcher::ToMatchAriaSnapshot => "expect.toMatchAriaSnapshot",
        }
    }
}

/// Creates an expectation for a selector.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::assertions::{ExpectMatcher, expect};
///
/// let params = expect("#agree").not().params(ExpectMatcher::ToBeChecked);
/// assert_eq!(params.expression, "to.be.checked");
/// assert!(params.is_not);
/// assert_eq!(params.timeout, 5000);
/// ```
pub fn expect(selector: impl Into<String>) -> Expectation {
    Expectation::new(selector.into())
}

/// Selector plus negation and timeout, waiting for a matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    selector: String,
    timeout: u64,
    negate: bool,
}

impl Expectation {
    pub(crate) fn new(selector: String) -> Self {
        Self {
            selector,
            timeout: DEFAULT_EXPECT_TIMEOUT_MS,
            negate: false,
        }
    }

    /// Sets a custom timeout in milliseconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Negates the assertion.
    ///
    /// Note: We intentionally use `.not()` method instead of implementing `std::ops::Not`
    /// to match Playwright's API across all language bindings (JS/Python/Java/.NET).
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Builds the `expect` payload for `matcher`.
    ///
    /// `toContainText` always carries an empty `expectedText` list and
    /// `toHaveValue` leaves `expectedValue` unset.
    pub fn params(self, matcher: ExpectMatcher) -> FrameExpectParams {
        let expected_text = match matcher {
            ExpectMatcher::ToContainText => Some(Vec::new()),
            _ => None,
        };

        FrameExpectParams {
            selector: self.selector,
            expression: matcher.expression(),
            expected_text,
            expected_value: None,
            is_not: self.negate,
            timeout: self.timeout,
        }
    }
}
