//! Readme synchronizer: copy each script's `@version` into the
//! `**Version** X.Y.Z` line of its documentation section.
//!
//! The documentation file is read whole, rewritten in memory and written back
//! whole through a temporary file in the same directory.  The file is only
//! written when a version line was found and its text actually changed.

use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::Layout;
use crate::docs;
use crate::error::{Error, Result};
use crate::naming::{self, list_scripts};
use crate::version::{self, ScriptVersion};

fn version_line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| Regex::new(r"^\*\*Version\*\* (\d+\.\d+\.\d+)$").expect("static regex"))
}

// ── Rewrite ───────────────────────────────────────────────────────────────────

/// Result of rewriting the documentation text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Version found on the rewritten line, `None` if no line matched.
    pub previous: Option<String>,
}

/// Replace the version on the first `**Version**` line of the section for
/// `name`.  Every other byte, line terminators included, is kept.
///
/// The section ends at the next `## ` heading; a version line past it belongs
/// to another script and is never touched.
pub fn rewrite_version(text: &str, name: &str, version: &ScriptVersion) -> Rewrite {
    let heading = docs::section_heading(name);
    let re = version_line_regex();
    let mut out = String::with_capacity(text.len());
    let mut scan = Scan::Before;
    let mut previous = None;

    for line in text.split_inclusive('\n') {
        if previous.is_none() {
            scan = match scan {
                Scan::Before if docs::opens_section(line, &heading) => Scan::Inside,
                Scan::Inside if docs::is_heading(line) => Scan::Done,
                other => other,
            };
            if scan == Scan::Inside {
                let body = line.trim_end_matches(['\n', '\r']);
                if let Some(digits) = re.captures(body).and_then(|c| c.get(1)) {
                    previous = Some(digits.as_str().to_owned());
                    out.push_str(&line[..digits.start()]);
                    out.push_str(version.as_str());
                    out.push_str(&line[digits.end()..]);
                    continue;
                }
            }
        }
        out.push_str(line);
    }

    Rewrite { text: out, previous }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Before,
    Inside,
    Done,
}

// ── File-level operations ─────────────────────────────────────────────────────

/// What happened to the documentation file for one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The version line changed and the file was rewritten.
    Updated { from: String, to: String },
    /// The version line already held the script's version; nothing written.
    Unchanged,
}

/// Replace the file at `path` with `text`, keeping its permissions.
///
/// Symlinks are followed: the link's target is the file that gets replaced.
/// The temporary file is removed if anything fails before the final rename.
pub fn write_whole_file(path: &Path, text: &str) -> Result<()> {
    let target = std::fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
    let dir = target.parent().unwrap_or(Path::new("/"));
    let perms = std::fs::metadata(&target).map_err(|e| Error::io(&target, e))?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(text.as_bytes()).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().set_permissions(perms).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(&target)
        .map_err(|source| Error::Persist { path: target.clone(), source })?;
    Ok(())
}

/// Synchronize one documentation section with `version`.
///
/// `script` is the source file name; its section heading is the compiled name.
pub fn sync_document(doc_path: &Path, script: &str, version: &ScriptVersion) -> Result<SyncOutcome> {
    let original = std::fs::read_to_string(doc_path).map_err(|e| Error::io(doc_path, e))?;
    let heading_name = naming::compiled_name(script);
    let rewrite = rewrite_version(&original, &heading_name, version);

    let Some(from) = rewrite.previous else {
        return Err(Error::MissingVersionField {
            script: script.to_owned(),
            doc: naming::display_name(doc_path),
        });
    };

    if rewrite.text == original {
        log::debug!("{script}: already at {version}");
        return Ok(SyncOutcome::Unchanged);
    }

    write_whole_file(doc_path, &rewrite.text)?;
    log::info!("{script}: {from} -> {version}");
    Ok(SyncOutcome::Updated { from, to: version.to_string() })
}

/// Synchronize one source script.
///
/// A script without a version tag fails with [`Error::MissingVersion`] before
/// the documentation file is opened.
pub fn sync_script(layout: &Layout, script: &str) -> Result<SyncOutcome> {
    let version = version::read_version(&layout.src_dir.join(script))?.require(script)?;
    sync_document(&layout.readme_path, script, &version)
}

/// Synchronize every file under `layout.src_dir`, stopping at the first failure.
pub fn sync_all(layout: &Layout) -> Result<Vec<(String, SyncOutcome)>> {
    let scripts = list_scripts(&layout.src_dir, |_| true)?;
    log::info!("syncing {} script(s) into {}", scripts.len(), layout.readme_path.display());

    scripts
        .into_iter()
        .map(|script| sync_script(layout, &script).map(|outcome| (script, outcome)))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
