//! The `readme.txt` bundled into each archive.

use crate::docs::DocEntry;
use crate::version::ScriptVersion;

pub const README_ENTRY_NAME: &str = "readme.txt";

/// Render the readme text.
///
/// Layout (newline-joined, no trailing newline):
///
/// ```text
/// <name> - <version>
/// <repo url>
///
/// Description: <description>
///
/// Usage: <instructions>
/// ```
pub fn render(name: &str, version: &ScriptVersion, repo_url: &str, entry: &DocEntry) -> String {
    [
        format!("{name} - {version}"),
        repo_url.to_owned(),
        String::new(),
        format!("Description: {}", entry.description),
        String::new(),
        format!("Usage: {}", entry.instructions),
    ]
    .join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
