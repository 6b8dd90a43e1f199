// Translator - recorded actions to protocol calls
//
// Maps each recorded action onto the Frame/Page/BrowserContext method that
// replays it, the API label that names it in traces, and the exact payload.
//
// Architecture:
// - Page-level actions (navigate, openPage, closePage) carry no selector and
//   never touch the frame description
// - Every other action needs a frame description; its selector is chained
//   through the frame path, except assertChecked which sends the frame-local
//   selector as recorded
// - Assertions always use the matcher's unbound default condition
//
// The translator holds no state besides its options, so it is `Send + Sync`
// and can be shared freely.

use crate::api::TranslateOptions;
use crate::assertions::{DEFAULT_EXPECT_TIMEOUT_MS, ExpectMatcher, Expectation, expect};
use crate::error::Result;
use crate::protocol::action::{Action, ActionInContext};
use crate::protocol::keyboard::{key_chord, to_keyboard_modifiers};
use crate::protocol::params::{
    FrameCheckParams, FrameClickParams, FrameFillParams, FrameGotoParams, FramePressParams,
    FrameSelectOptionParams, FrameSetInputFilesParams,
};
use crate::protocol::select_option::SelectOption;
use crate::protocol::selector::build_full_selector;
use serde::Serialize;

/// A protocol call ready to be sent over the automation channel
///
/// Serializes as `{"method": ..., "apiName": ..., "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolCall {
    /// Protocol method to invoke (`goto`, `click`, `expect`, ...)
    pub method: &'static str,
    /// Human-facing label used by logs and traces (`locator.click`, ...)
    pub api_name: &'static str,
    /// Method payload
    pub params: serde_json::Value,
}

impl ProtocolCall {
    fn new(method: &'static str, api_name: &'static str, params: impl Serialize) -> Result<Self> {
        Ok(Self {
            method,
            api_name,
            params: serde_json::to_value(params)?,
        })
    }

    /// Convert the call to its JSON form
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "method": self.method,
            "apiName": self.api_name,
            "params": self.params,
        })
    }
}

/// Translates recorded actions into protocol calls.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::{Action, ActionInContext, Translator};
///
/// let call = Translator::default().translate(&ActionInContext::new(Action::Navigate {
///     url: "https://x/y".to_string(),
/// }))?;
/// assert_eq!(call.method, "goto");
/// assert_eq!(call.api_name, "page.goto");
/// assert_eq!(call.params["url"], "https://x/y");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    /// Creates a translator with the given options
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Timeout attached to `expect` calls, in milliseconds
    pub fn expect_timeout(&self) -> u64 {
        self.options
            .expect_timeout
            .unwrap_or(DEFAULT_EXPECT_TIMEOUT_MS)
    }

    /// Translates one recorded action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContext`](crate::Error::InvalidContext) when a
    /// selector-bearing action has no frame description.
    pub fn translate(&self, context: &ActionInContext) -> Result<ProtocolCall> {
        let call = match &context.action {
            Action::Navigate { url } => {
                ProtocolCall::new("goto", "page.goto", FrameGotoParams { url: url.clone() })?
            }
            Action::OpenPage => {
                ProtocolCall::new("newPage", "browserContext.newPage", serde_json::json!({}))?
            }
            Action::ClosePage => ProtocolCall::new("close", "page.close", serde_json::json!({}))?,
            Action::Click {
                selector,
                modifiers,
                button,
                click_count,
                position,
            } => ProtocolCall::new(
                "click",
                "locator.click",
                FrameClickParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                    modifiers: to_keyboard_modifiers(*modifiers),
                    button: *button,
                    click_count: *click_count,
                    position: *position,
                },
            )?,
            Action::Press {
                selector,
                modifiers,
                key,
            } => ProtocolCall::new(
                "press",
                "locator.press",
                FramePressParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                    key: key_chord(*modifiers, key),
                },
            )?,
            Action::Fill { selector, text } => ProtocolCall::new(
                "fill",
                "locator.fill",
                FrameFillParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                    value: text.clone(),
                },
            )?,
            Action::SetInputFiles { selector, files } => ProtocolCall::new(
                "setInputFiles",
                "locator.setInputFiles",
                FrameSetInputFilesParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                    local_paths: files.clone(),
                },
            )?,
            Action::Check { selector } => ProtocolCall::new(
                "check",
                "locator.check",
                FrameCheckParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                },
            )?,
            Action::Uncheck { selector } => ProtocolCall::new(
                "uncheck",
                "locator.uncheck",
                FrameCheckParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                },
            )?,
            Action::Select { selector, options } => ProtocolCall::new(
                "selectOption",
                "locator.selectOption",
                FrameSelectOptionParams {
                    selector: full_selector(context, selector)?,
                    strict: true,
                    options: SelectOption::from_values(options),
                },
            )?,
            Action::AssertChecked { selector, checked } => {
                // Frame-local selector; the frame is still required.
                context.require_frame()?;
                let mut expectation = expect(selector.clone()).with_timeout(self.expect_timeout());
                if !*checked {
                    expectation = expectation.not();
                }
                expect_call(expectation, ExpectMatcher::ToBeChecked)?
            }
            Action::AssertText { selector } => {
                self.assertion(context, selector, ExpectMatcher::ToContainText)?
            }
            Action::AssertValue { selector } => {
                self.assertion(context, selector, ExpectMatcher::ToHaveValue)?
            }
            Action::AssertVisible { selector } => {
                self.assertion(context, selector, ExpectMatcher::ToBeVisible)?
            }
            Action::AssertSnapshot { selector } => {
                self.assertion(context, selector, ExpectMatcher::ToMatchAriaSnapshot)?
            }
        };

        tracing::debug!(
            action = context.action.name(),
            method = call.method,
            api_name = call.api_name,
            "Translated recorded action"
        );

        Ok(call)
    }

    /// Translates a recorded sequence in order, stopping at the first failure.
    ///
    /// Errors are wrapped with the index of the failing action.
    pub fn translate_all(&self, actions: &[ActionInContext]) -> Result<Vec<ProtocolCall>> {
        actions
            .iter()
            .enumerate()
            .map(|(index, action)| {
                self.translate(action)
                    .map_err(|e| e.context(format!("action #{}", index)))
            })
            .collect()
    }

    fn assertion(
        &self,
        context: &ActionInContext,
        selector: &str,
        matcher: ExpectMatcher,
    ) -> Result<ProtocolCall> {
        let expectation =
            expect(full_selector(context, selector)?).with_timeout(self.expect_timeout());
        expect_call(expectation, matcher)
    }
}

/// Translates one recorded action with default options.
pub fn translate(context: &ActionInContext) -> Result<ProtocolCall> {
    Translator::default().translate(context)
}

fn expect_call(expectation: Expectation, matcher: ExpectMatcher) -> Result<ProtocolCall> {
    ProtocolCall::new("expect", matcher.api_name(), expectation.params(matcher))
}

fn full_selector(context: &ActionInContext, selector: &str) -> Result<String> {
    let frame = context.require_frame()?;
    let full = build_full_selector(&frame.frame_path, selector);
    tracing::trace!(local = selector, full = %full, "Resolved frame selector");
    Ok(full)
}
