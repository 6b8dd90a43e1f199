// Recorded actions and the frame context they happened in
//
// These types mirror the JSON the recorder emits for every user interaction:
//
// ```json
// {
//   "frame": { "pageGuid": "page@1", "pageAlias": "page", "framePath": [] },
//   "action": { "name": "fill", "selector": "textarea", "text": "test", "signals": [] },
//   "startTime": 1700000000000
// }
// ```
//
// Fields the translator has no use for (`signals`, timestamps, asserted text)
// are skipped on deserialization.

use crate::error::{Error, Result};
use crate::protocol::click::{MouseButton, Position};
use crate::protocol::keyboard::KeyboardModifiers;
use serde::{Deserialize, Serialize};

/// A single recorded, user-meaningful browser interaction
///
/// Serialized with the recorder's `name` tag, e.g. `{"name": "check", "selector": "#agree"}`.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::protocol::Action;
///
/// let action = Action::Fill {
///     selector: "textarea".to_string(),
///     text: "test".to_string(),
/// };
/// assert_eq!(action.name(), "fill");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "camelCase")]
pub enum Action {
    Navigate {
        url: String,
    },
    OpenPage,
    ClosePage,
    Click {
        selector: String,
        #[serde(default)]
        modifiers: KeyboardModifiers,
        button: MouseButton,
        #[serde(rename = "clickCount")]
        click_count: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    Press {
        selector: String,
        #[serde(default)]
        modifiers: KeyboardModifiers,
        key: String,
    },
    Fill {
        selector: String,
        text: String,
    },
    SetInputFiles {
        selector: String,
        files: Vec<String>,
    },
    Check {
        selector: String,
    },
    Uncheck {
        selector: String,
    },
    Select {
        selector: String,
        options: Vec<String>,
    },
    AssertChecked {
        selector: String,
        checked: bool,
    },
    AssertText {
        selector: String,
    },
    AssertValue {
        selector: String,
    },
    AssertVisible {
        selector: String,
    },
    AssertSnapshot {
        selector: String,
    },
}

impl Action {
    /// Recorder names of every supported action kind
    pub const NAMES: [&'static str; 15] = [
        "navigate",
        "openPage",
        "closePage",
        "click",
        "press",
        "fill",
        "setInputFiles",
        "check",
        "uncheck",
        "select",
        "assertChecked",
        "assertText",
        "assertValue",
        "assertVisible",
        "assertSnapshot",
    ];

    /// Recorder name of this action (the JSON `name` tag)
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::OpenPage => "openPage",
            Action::ClosePage => "closePage",
            Action::Click { .. } => "click",
            Action::Press { .. } => "press",
            Action::Fill { .. } => "fill",
            Action::SetInputFiles { .. } => "setInputFiles",
            Action::Check { .. } => "check",
            Action::Uncheck { .. } => "uncheck",
            Action::Select { .. } => "select",
            Action::AssertChecked { .. } => "assertChecked",
            Action::AssertText { .. } => "assertText",
            Action::AssertValue { .. } => "assertValue",
            Action::AssertVisible { .. } => "assertVisible",
            Action::AssertSnapshot { .. } => "assertSnapshot",
        }
    }

    /// Frame-local selector of the target element, if the action has one
    pub fn selector(&self) -> Option<&str> {
        match self {
            Action::Navigate { .. } | Action::OpenPage | Action::ClosePage => None,
            Action::Click { selector, .. }
            | Action::Press { selector, .. }
            | Action::Fill { selector, .. }
            | Action::SetInputFiles { selector, .. }
            | Action::Check { selector }
            | Action::Uncheck { selector }
            | Action::Select { selector, .. }
            | Action::AssertChecked { selector, .. }
            | Action::AssertText { selector }
            | Action::AssertValue { selector }
            | Action::AssertVisible { selector }
            | Action::AssertSnapshot { selector } => Some(selector),
        }
    }

    /// Whether this is an `assert*` action
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            Action::AssertChecked { .. }
                | Action::AssertText { .. }
                | Action::AssertValue { .. }
                | Action::AssertVisible { .. }
                | Action::AssertSnapshot { .. }
        )
    }
}

/// Page and frame an action was recorded in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescription {
    /// GUID of the page in the recording session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_guid: Option<String>,
    /// Variable name the page is known by (`page`, `page1`, ...)
    #[serde(default)]
    pub page_alias: String,
    /// Selectors of the iframes to traverse, from the main frame to the target frame
    #[serde(default)]
    pub frame_path: Vec<String>,
}

impl FrameDescription {
    /// Main frame of the given page
    pub fn main_frame(page_alias: impl Into<String>) -> Self {
        Self {
            page_alias: page_alias.into(),
            ..Default::default()
        }
    }

    /// Nested frame reached through `frame_path`
    pub fn with_frame_path<I, S>(mut self, frame_path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frame_path = frame_path.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_main_frame(&self) -> bool {
        self.frame_path.is_empty()
    }
}

/// An action together with the frame it was recorded in
///
/// `frame` may be absent for page-level actions (`navigate`, `openPage`,
/// `closePage`). Every other action needs it to build a selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionInContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameDescription>,
    pub action: Action,
}

impl ActionInContext {
    /// Creates an action with no frame description
    pub fn new(action: Action) -> Self {
        Self {
            frame: None,
            action,
        }
    }

    /// Creates an action recorded in the given frame
    pub fn in_frame(frame: FrameDescription, action: Action) -> Self {
        Self {
            frame: Some(frame),
            action,
        }
    }

    /// Returns the frame description or [`Error::InvalidContext`]
    pub fn require_frame(&self) -> Result<&FrameDescription> {
        self.frame
            .as_ref()
            .ok_or_else(|| Error::InvalidContext(self.action.name().to_string()))
    }

    /// Parses one recorded action from recorder JSON.
    ///
    /// An unrecognized `action.name` is reported as
    /// [`Error::UnsupportedActionKind`] rather than a generic JSON error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Same as [`ActionInContext::from_json`], from an already parsed value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let name = value
            .get("action")
            .and_then(|action| action.get("name"))
            .and_then(serde_json::Value::as_str);

        if let Some(name) = name
            && !Action::NAMES.contains(&name)
        {
            tracing::warn!(action = name, "Rejecting unsupported action kind");
            return Err(Error::UnsupportedActionKind(name.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Parses a JSON array of recorded actions, in order
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Self::from_value(value).map_err(|e| e.context(format!("action #{}", index)))
            })
            .collect()
    }
}
