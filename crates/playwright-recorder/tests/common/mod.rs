// Shared helpers for integration tests

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use playwright_recorder::{Action, ActionInContext, FrameDescription};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring RUST_LOG. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Action recorded in the main frame of `page`
pub fn main_frame(action: Action) -> ActionInContext {
    ActionInContext::in_frame(FrameDescription::main_frame("page"), action)
}

/// Action recorded inside the given frame path of `page`
pub fn nested(frame_path: &[&str], action: Action) -> ActionInContext {
    ActionInContext::in_frame(
        FrameDescription::main_frame("page").with_frame_path(frame_path.iter().copied()),
        action,
    )
}
