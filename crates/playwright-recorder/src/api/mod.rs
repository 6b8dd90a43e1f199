// Public API types module
//
// High-level configuration types with builder patterns.

pub mod translate_options;

pub use translate_options::{TranslateOptions, TranslateOptionsBuilder};
