// Selector resolution across frame boundaries
//
// A recorded selector is local to the frame it was captured in. To address it
// from the page, every iframe on the path is chained in front of it with the
// `internal:control=enter-frame` selector engine.
//
// See: https://playwright.dev/docs/api/class-framelocator

/// Selector fragment that steps into the content frame of the preceding match
pub const FRAME_BOUNDARY: &str = " >> internal:control=enter-frame >> ";

/// Builds a page-relative selector from a frame path and a frame-local selector.
///
/// Segments are joined root-to-leaf with [`FRAME_BOUNDARY`], ending with the
/// local selector. With an empty frame path the local selector is returned
/// unchanged. Selector text is never normalized or validated.
///
/// # Example
///
/// ```ignore
/// use playwright_recorder::protocol::selector::build_full_selector;
///
/// assert_eq!(build_full_selector::<&str>(&[], "textarea"), "textarea");
/// assert_eq!(
///     build_full_selector(&["iframe[name=f1]"], "textarea"),
///     "iframe[name=f1] >> internal:control=enter-frame >> textarea"
/// );
/// ```
pub fn build_full_selector<S: AsRef<str>>(frame_path: &[S], selector: &str) -> String {
    let mut full = String::new();
    for frame in frame_path {
        full.push_str(frame.as_ref());
        full.push_str(FRAME_BOUNDARY);
    }
    full.push_str(selector);
    full
}
