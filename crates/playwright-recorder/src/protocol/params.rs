// Frame method parameters
//
// Typed payloads for the Frame channel methods recorded actions map onto.
// Field names serialize to the protocol's camelCase keys; optional fields that
// the protocol treats as absent are skipped rather than sent as `null`.
//
// See: https://github.com/microsoft/playwright/blob/main/packages/protocol/src/protocol.yml

use crate::protocol::click::{MouseButton, Position};
use crate::protocol::keyboard::KeyboardModifier;
use crate::protocol::select_option::SelectOption;
use serde::Serialize;

/// `Frame.goto`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameGotoParams {
    pub url: String,
}

/// `Frame.click`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameClickParams {
    pub selector: String,
    pub strict: bool,
    pub modifiers: Vec<KeyboardModifier>,
    pub button: MouseButton,
    pub click_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// `Frame.press`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramePressParams {
    pub selector: String,
    pub strict: bool,
    /// Key chord, e.g. `Control+Shift+A`
    pub key: String,
}

/// `Frame.fill`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameFillParams {
    pub selector: String,
    pub strict: bool,
    pub value: String,
}

/// `Frame.setInputFiles`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSetInputFilesParams {
    pub selector: String,
    pub strict: bool,
    pub local_paths: Vec<String>,
}

/// `Frame.check` and `Frame.uncheck`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCheckParams {
    pub selector: String,
    pub strict: bool,
}

/// `Frame.selectOption`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSelectOptionParams {
    pub selector: String,
    pub strict: bool,
    pub options: Vec<SelectOption>,
}

/// `Frame.expect`
///
/// `expected_text` and `expected_value` are only present for the
/// expectations that carry them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameExpectParams {
    pub selector: String,
    pub expression: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_text: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<serde_json::Value>,
    pub is_not: bool,
    /// Milliseconds
    pub timeout: u64,
}
