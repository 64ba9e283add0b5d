//! `@version` tag extraction.
//!
//! Scripts carry their version in a JSDoc-style comment:
//!
//! ```text
//! /**
//!  * @version 1.2.3
//!  */
//! ```
//!
//! The first line ending in `@version X.Y.Z` wins.  A script without such a
//! line is not an error at this level; see [`VersionLookup`].

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^.*@version (\d+\.\d+\.\d+)$").expect("static regex"))
}

// ── ScriptVersion ─────────────────────────────────────────────────────────────

/// A `major.minor.patch` version string as written in the script.
///
/// Only constructed from a successful tag match, so it always has three
/// dot-separated numeric components.  The text is kept verbatim (leading
/// zeros included) because it is copied into readmes as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptVersion(String);

impl ScriptVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── VersionLookup ─────────────────────────────────────────────────────────────

/// Outcome of scanning a script for its version tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLookup {
    Found(ScriptVersion),
    NotFound,
}

impl VersionLookup {
    pub fn into_found(self) -> Option<ScriptVersion> {
        match self {
            VersionLookup::Found(v) => Some(v),
            VersionLookup::NotFound => None,
        }
    }

    /// Turn `NotFound` into [`Error::MissingVersion`] for `script`.
    pub fn require(self, script: &str) -> Result<ScriptVersion> {
        self.into_found()
            .ok_or_else(|| Error::MissingVersion { script: script.to_owned() })
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Return the version captured from the first tagged line of `text`.
pub fn find_version(text: &str) -> VersionLookup {
    let re = tag_regex();
    text.lines()
        .find_map(|line| re.captures(line))
        .map(|caps| VersionLookup::Found(ScriptVersion(caps[1].to_owned())))
        .unwrap_or(VersionLookup::NotFound)
}

/// Read `path` and extract its version.  Only a read failure is an error.
pub fn read_version(path: &Path) -> Result<VersionLookup> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(find_version(&text))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
