//! Script name normalization and the per-script path bundle.
//!
//! All derived names (compiled output, UI, icon, archive, documentation
//! heading) go through [`swap_extension`], which only ever touches the
//! trailing extension.  `tsconfig.ts` therefore becomes `tsconfig.js`, not
//! `jsconfig.js`.
//!
//! [`list_scripts`] enumerates the source directory for both utilities.

use std::path::{Path, PathBuf};

use crate::config::{Layout, ARCHIVE_EXT, COMPILED_EXT, ICON_EXT, SOURCE_EXT, UI_EXT};
use crate::error::{Error, Result};

/// Strip a trailing `.from` extension, if present.
pub fn file_stem<'a>(name: &'a str, from: &str) -> &'a str {
    name.strip_suffix(from)
        .and_then(|s| s.strip_suffix('.'))
        .filter(|s| !s.is_empty())
        .unwrap_or(name)
}

/// Replace a trailing `.from` extension with `.to`.
///
/// A name that does not end in `.from` is returned unchanged.
pub fn swap_extension(name: &str, from: &str, to: &str) -> String {
    let stem = file_stem(name, from);
    if stem.len() == name.len() {
        name.to_owned()
    } else {
        format!("{stem}.{to}")
    }
}

/// Name of the compiled counterpart of a source script (`foo.ts` → `foo.js`).
///
/// This is also the name used for documentation headings.
pub fn compiled_name(script: &str) -> String {
    swap_extension(script, SOURCE_EXT, COMPILED_EXT)
}

/// Name of the distribution archive for a source script (`foo.ts` → `foo.zip`).
pub fn archive_name(script: &str) -> String {
    swap_extension(script, SOURCE_EXT, ARCHIVE_EXT)
}

/// Returns `true` if `name` carries the source-script extension.
pub fn is_source_script(name: &str) -> bool {
    file_stem(name, SOURCE_EXT).len() != name.len()
}

/// Final path component for messages, or the whole path if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sorted names of the files in `dir` accepted by `keep`.  Directories are
/// skipped.
pub fn list_scripts(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("skipping non-UTF-8 file name in {}", dir.display());
            continue;
        };
        if keep(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

// ── ScriptPaths ───────────────────────────────────────────────────────────────

/// A file name paired with its location on disk.
///
/// `name` is the entry name used inside archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPath {
    pub name: String,
    pub path: PathBuf,
}

impl NamedPath {
    fn new(name: String, dir: &Path) -> Self {
        let path = dir.join(&name);
        Self { name, path }
    }
}

/// Every path a single script's build touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPaths {
    pub src: NamedPath,
    pub compiled: NamedPath,
    pub ui: NamedPath,
    pub icon: NamedPath,
}

impl ScriptPaths {
    /// Derive the bundle for source file `script` (a bare file name).
    pub fn derive(layout: &Layout, script: &str) -> Self {
        let stem = file_stem(script, SOURCE_EXT);
        Self {
            src: NamedPath::new(script.to_owned(), &layout.src_dir),
            compiled: NamedPath::new(format!("{stem}.{COMPILED_EXT}"), &layout.scripts_dir),
            ui: NamedPath::new(format!("{stem}.{UI_EXT}"), &layout.scripts_dir),
            icon: NamedPath::new(format!("{stem}.{ICON_EXT}"), &layout.icons_dir),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
