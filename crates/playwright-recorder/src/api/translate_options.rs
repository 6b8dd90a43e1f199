// Options for Translator
//
// The translator has a single tunable: the timeout attached to recorded
// assertions. Everything else in a protocol call is fixed per action kind.

use serde::{Deserialize, Serialize};

/// Options for translating recorded actions
///
/// All options are optional and fall back to Playwright's defaults.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::{TranslateOptions, Translator};
///
/// let translator = Translator::new(
///     TranslateOptions::builder().expect_timeout(10_000).build(),
/// );
/// assert_eq!(translator.expect_timeout(), 10_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOptions {
    /// Timeout for `expect` calls in milliseconds (default: DEFAULT_EXPECT_TIMEOUT_MS)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expect_timeout: Option<u64>,
}

impl TranslateOptions {
    /// Create a new builder for TranslateOptions
    pub fn builder() -> TranslateOptionsBuilder {
        TranslateOptionsBuilder::default()
    }
}

/// Builder for TranslateOptions
#[derive(Debug, Clone, Default)]
pub struct TranslateOptionsBuilder {
    expect_timeout: Option<u64>,
}

impl TranslateOptionsBuilder {
    /// Set assertion timeout in milliseconds
    pub fn expect_timeout(mut self, timeout: u64) -> Self {
        self.expect_timeout = Some(timeout);
        self
    }

    /// Build the TranslateOptions
    pub fn build(self) -> TranslateOptions {
        TranslateOptions {
            expect_timeout: self.expect_timeout,
        }
    }
}
