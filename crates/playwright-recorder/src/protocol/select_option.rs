// Select option payload for dropdown selection
//
// The recorder captures selected options by their value attribute, so every
// option is sent to the protocol as `{"value": "..."}`.

use serde::Serialize;

/// One option to select in a `<select>` element, matched by value
///
/// See: <https://playwright.dev/docs/api/class-locator#locator-select-option>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Option value attribute
    pub value: String,
}

impl SelectOption {
    /// Wraps each recorded option value
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Vec<SelectOption> {
        values
            .iter()
            .map(|v| SelectOption::from(v.as_ref()))
            .collect()
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        SelectOption {
            value: value.to_string(),
        }
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        SelectOption { value }
    }
}
