//! Archive builder: one `.zip` per source script.
//!
//! Scripts are processed in file-name order.  The first failure stops the
//! batch; archives written for earlier scripts are left in place.

use crate::archive::{self, ArchiveReport};
use crate::config::Layout;
use crate::docs;
use crate::error::{Error, Result};
use crate::naming::{self, list_scripts, ScriptPaths};
use crate::readme;
use crate::version;

/// Generate the readme text for one script.
///
/// `doc_text` is the full documentation file.  The section is looked up under
/// the compiled script name.
pub fn generate_readme(
    layout: &Layout,
    paths: &ScriptPaths,
    version: &version::ScriptVersion,
    doc_text: &str,
) -> Result<String> {
    let entry = docs::find_entry(doc_text, &paths.compiled.name).ok_or_else(|| {
        Error::MissingSection {
            script: paths.src.name.clone(),
            heading: docs::section_heading(&paths.compiled.name),
        }
    })?;
    Ok(readme::render(&paths.src.name, version, &layout.repo_url, &entry))
}

/// Build the archive for one source script.
pub fn build_script(layout: &Layout, script: &str) -> Result<ArchiveReport> {
    let paths = ScriptPaths::derive(layout, script);
    let version = version::read_version(&paths.src.path)?.require(script)?;
    log::debug!("{script}: version {version}, compiled {}", paths.compiled.path.display());

    let doc_text = std::fs::read_to_string(&layout.readme_path)
        .map_err(|e| Error::io(&layout.readme_path, e))?;
    let text = generate_readme(layout, &paths, &version, &doc_text)?;

    let report = archive::write_archive(&paths, &layout.dist_dir, &text)?;
    log::info!(
        "{script} {version} -> {} ({})",
        report.path.display(),
        report.entries.join(", ")
    );
    Ok(report)
}

/// Build archives for every source script under `layout.src_dir`.
pub fn build_all(layout: &Layout) -> Result<Vec<ArchiveReport>> {
    let scripts = list_scripts(&layout.src_dir, naming::is_source_script)?;
    log::info!("building {} archive(s) into {}", scripts.len(), layout.dist_dir.display());

    scripts.iter().map(|script| build_script(layout, script)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
