// Copyright 2024 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Protocol Types - Rust representations of recorded actions and the
// Playwright protocol payloads they translate into
//
// Architecture:
// - `action` is the recorder side: what the user did and in which frame
// - `params` is the protocol side: one payload struct per Frame method
// - `keyboard`, `selector`, `select_option` and `click` hold the pieces both
//   sides share

pub mod action;
pub mod click;
pub mod keyboard;
pub mod params;
pub mod select_option;
pub mod selector;

pub use action::{Action, ActionInContext, FrameDescription};
pub use click::{MouseButton, Position};
pub use keyboard::{KeyboardModifier, KeyboardModifiers, key_chord, to_keyboard_modifiers};
pub use params::{
    FrameCheckParams, FrameClickParams, FrameExpectParams, FrameFillParams, FrameGotoParams,
    FramePressParams, FrameSelectOptionParams, FrameSetInputFilesParams,
};
pub use select_option::SelectOption;
pub use selector::{FRAME_BOUNDARY, build_full_selector};
