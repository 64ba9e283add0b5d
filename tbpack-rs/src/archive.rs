//! Distribution archive writer.
//!
//! Entry order is fixed: compiled script, icon (if present), UI file (if
//! present), `readme.txt`.  Entries are stored under their bare file names.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::naming::{self, NamedPath, ScriptPaths};
use crate::readme::README_ENTRY_NAME;

/// What ended up in a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub path: PathBuf,
    pub entries: Vec<String>,
}

/// Write `<dist_dir>/<script>.zip` for `paths`.
///
/// An existing archive of the same name is overwritten.  On failure the
/// partially written archive is removed.
pub fn write_archive(paths: &ScriptPaths, dist_dir: &Path, readme: &str) -> Result<ArchiveReport> {
    std::fs::create_dir_all(dist_dir).map_err(|e| Error::io(dist_dir, e))?;
    let out = dist_dir.join(naming::archive_name(&paths.src.name));

    let file = File::create(&out).map_err(|e| Error::io(&out, e))?;
    match write_entries(ZipWriter::new(file), &out, paths, readme) {
        Ok(entries) => Ok(ArchiveReport { path: out, entries }),
        Err(e) => {
            if let Err(rm) = std::fs::remove_file(&out) {
                log::warn!("could not remove partial archive {}: {rm}", out.display());
            }
            Err(e)
        }
    }
}

fn write_entries<W: Write + Seek>(
    mut zip: ZipWriter<W>,
    out: &Path,
    paths: &ScriptPaths,
    readme: &str,
) -> Result<Vec<String>> {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::with_capacity(4);

    add_file(&mut zip, out, options, &paths.compiled)?;
    entries.push(paths.compiled.name.clone());

    for optional in [&paths.icon, &paths.ui] {
        if optional.path.is_file() {
            add_file(&mut zip, out, options, optional)?;
            entries.push(optional.name.clone());
        } else {
            log::debug!("no {} on disk, skipping", optional.path.display());
        }
    }

    add_bytes(&mut zip, out, options, README_ENTRY_NAME, readme.as_bytes())?;
    entries.push(README_ENTRY_NAME.to_owned());

    zip.finish().map_err(|source| Error::Archive { path: out.to_path_buf(), source })?;
    Ok(entries)
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    out: &Path,
    options: FileOptions,
    file: &NamedPath,
) -> Result<()> {
    let data = std::fs::read(&file.path).map_err(|e| Error::io(&file.path, e))?;
    add_bytes(zip, out, options, &file.name, &data)
}

fn add_bytes<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    out: &Path,
    options: FileOptions,
    name: &str,
    data: &[u8],
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|source| Error::Archive { path: out.to_path_buf(), source })?;
    zip.write_all(data).map_err(|e| Error::io(out, e))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
