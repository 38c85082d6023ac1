//! Generated-artifact naming policy.
//!
//! The first file a project ever receives is its canonical entry file and is
//! the default target for generated code. Once the entry file exists, each
//! further generation lands in a fresh `generated_{seq}.jsx` file so prior
//! artifacts are never clobbered. The sequence number is a strictly
//! increasing counter scoped to the project (`projects.artifact_seq`), not a
//! wall-clock stamp, so rapid successive generations cannot collide.

/// Filename of the canonical entry file created on first generation.
pub const ENTRY_FILENAME: &str = "App.jsx";

/// Prefix for non-entry generated artifacts.
pub const GENERATED_PREFIX: &str = "generated_";

/// Extension for generated artifacts.
pub const GENERATED_EXT: &str = "jsx";

/// Filename for a generated artifact with the given sequence number.
///
/// ```
/// use codeforge_core::artifact::generated_filename;
///
/// assert_eq!(generated_filename(7), "generated_7.jsx");
/// ```
pub fn generated_filename(seq: i32) -> String {
    format!("{GENERATED_PREFIX}{seq}.{GENERATED_EXT}")
}

/// Decide the target filename for a freshly generated artifact.
///
/// * No files yet -> the canonical entry file.
/// * Entry file exists -> `None`; the caller must claim a sequence number
///   and use [`generated_filename`], re-claiming while the result collides
///   with a user-saved file of the same name.
pub fn merge_target(existing: &[String]) -> Option<&'static str> {
    if existing.is_empty() {
        Some(ENTRY_FILENAME)
    } else {
        None
    }
}
