//! playwright-recorder: Translate recorded browser actions into Playwright protocol calls
//!
//! The recorder captures what a user does in the browser as structured actions
//! (navigate, click, fill, assertions, ...) together with the frame they
//! happened in. This crate turns each of those into the protocol call that
//! replays it: a method name, an API label for traces, and the exact payload.
//!
//! Translation is pure: no I/O, no shared state, same input gives the same
//! output.
//!
//! # Examples
//!
//! ## Translating a recorded click
//!
//! ```ignore
//! use playwright_recorder::{Action, ActionInContext, FrameDescription, MouseButton, translate};
//! use playwright_recorder::KeyboardModifiers;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recorded = ActionInContext::in_frame(
//!         FrameDescription::main_frame("page").with_frame_path(["iframe[name=f1]"]),
//!         Action::Click {
//!             selector: "textarea".to_string(),
//!             modifiers: KeyboardModifiers::empty(),
//!             button: MouseButton::Left,
//!             click_count: 1,
//!             position: None,
//!         },
//!     );
//!
//!     let call = translate(&recorded)?;
//!     assert_eq!(call.method, "click");
//!     assert_eq!(call.api_name, "locator.click");
//!     assert_eq!(
//!         call.params["selector"],
//!         "iframe[name=f1] >> internal:control=enter-frame >> textarea"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Translating recorder JSON
//!
//! ```ignore
//! use playwright_recorder::{ActionInContext, TranslateOptions, Translator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let recorded = ActionInContext::list_from_json(
//!         r#"[
//!             {"action": {"name": "navigate", "url": "https://example.com"}},
//!             {"frame": {"pageAlias": "page", "framePath": []},
//!              "action": {"name": "assertVisible", "selector": "h1"}}
//!         ]"#,
//!     )?;
//!
//!     let translator = Translator::new(TranslateOptions::builder().expect_timeout(10_000).build());
//!     for call in translator.translate_all(&recorded)? {
//!         println!("{}", call.to_json());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod assertions;
mod error;
pub mod protocol;
mod translator;

// Re-export error types
pub use error::{Error, Result};

// Re-export translator entry points
pub use translator::{ProtocolCall, Translator, translate};

// Re-export configuration
pub use api::{TranslateOptions, TranslateOptionsBuilder};

// Re-export assertion defaults
pub use assertions::{DEFAULT_EXPECT_TIMEOUT_MS, ExpectMatcher};

// Re-export recorded action types
pub use protocol::{Action, ActionInContext, FrameDescription};

// Re-export input types
pub use protocol::{KeyboardModifier, KeyboardModifiers, MouseButton, Position, SelectOption};

// Re-export selector and modifier encoding
pub use protocol::{FRAME_BOUNDARY, build_full_selector, key_chord, to_keyboard_modifiers};
