//! Lookup of per-script sections in the shared documentation file.
//!
//! A section looks like:
//!
//! ```text
//! ## mergeDuplicateTimings.js
//!
//! **Version** 1.0.2
//!
//! **Description**
//! Merge duplicate drawing timings.
//!
//! **Instructions**
//! Select a layer and run the script.
//! ```
//!
//! The first line starting with `## <name>` opens the section.  Matching is a
//! case-sensitive prefix match, so `## foo.js` also opens on `## foo.jsx`.
//! [`find_entry`] has no explicit section end: markers are searched from the
//! heading to the end of the file.  The synchronizer instead stops at the next
//! line for which [`is_heading`] holds.

pub const DESCRIPTION_MARKER: &str = "**Description**";
pub const INSTRUCTIONS_MARKER: &str = "**Instructions**";

/// Heading text that opens the section for `name`.
pub fn section_heading(name: &str) -> String {
    format!("## {name}")
}

/// Returns `true` if `line` is any `## ` section heading.
pub fn is_heading(line: &str) -> bool {
    line.starts_with("## ")
}

/// Returns `true` if `line` opens the section whose heading is `heading`.
pub fn opens_section(line: &str, heading: &str) -> bool {
    line.starts_with(heading)
}

// ── DocEntry ──────────────────────────────────────────────────────────────────

/// Description and usage text of one documentation section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub description: String,
    pub instructions: String,
}

/// Find the entry for `name` (a compiled script name such as `foo.js`).
///
/// The line after each marker is its content, trimmed.  That line is consumed
/// and never itself treated as a marker.  The first description and first
/// instructions win.  Returns `None` unless both are found.
pub fn find_entry(text: &str, name: &str) -> Option<DocEntry> {
    let heading = section_heading(name);
    let mut lines = text.lines();
    let mut in_section = false;
    let mut description: Option<String> = None;
    let mut instructions: Option<String> = None;

    while let Some(line) = lines.next() {
        if description.is_some() && instructions.is_some() {
            break;
        }
        if !in_section && opens_section(line, &heading) {
            in_section = true;
        }
        if !in_section {
            continue;
        }

        let slot = if line.starts_with(DESCRIPTION_MARKER) {
            &mut description
        } else if line.starts_with(INSTRUCTIONS_MARKER) {
            &mut instructions
        } else {
            continue;
        };

        // Marker on the last line has no content to take.
        let Some(content) = lines.next() else { break };
        if slot.is_none() {
            *slot = Some(content.trim().to_owned());
        }
    }

    Some(DocEntry { description: description?, instructions: instructions? })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
