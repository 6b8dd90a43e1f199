#![no_main]

use libfuzzer_sys::fuzz_target;
use playwright_recorder::{ActionInContext, translate};

// Arbitrary recorder JSON must either be rejected or translate without
// panicking, and translation must be deterministic.
fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(action) = ActionInContext::from_json(json) else {
        return;
    };
    if let Ok(call) = translate(&action) {
        assert!(!call.method.is_empty());
        assert!(!call.api_name.is_empty());
        assert_eq!(translate(&action).ok(), Some(call));
    }
});
