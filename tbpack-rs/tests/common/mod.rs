//! Throwaway repository layouts for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tbpack::config::Layout;

pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub layout: Layout,
}

impl Fixture {
    /// Empty `src/`, `scripts/script-icons/` and a `scripts/README.md`.
    pub fn new(readme: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::rooted(dir.path());
        std::fs::create_dir_all(&layout.src_dir).unwrap();
        std::fs::create_dir_all(&layout.icons_dir).unwrap();
        std::fs::write(&layout.readme_path, readme).unwrap();
        Self { dir, layout }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `src/<name>` tagged with `version` (untagged if `None`).
    pub fn source(&self, name: &str, version: Option<&str>) -> PathBuf {
        let tag = version.map(|v| format!(" * @version {v}\n")).unwrap_or_default();
        let path = self.layout.src_dir.join(name);
        std::fs::write(&path, format!("/**\n * A script.\n{tag} */\nfunction main() {{}}\n"))
            .unwrap();
        path
    }

    pub fn compiled(&self, name: &str) {
        std::fs::write(self.layout.scripts_dir.join(name), "function main() {}\n").unwrap();
    }

    pub fn ui(&self, name: &str) {
        std::fs::write(self.layout.scripts_dir.join(name), "<ui version=\"4.0\"/>\n").unwrap();
    }

    pub fn icon(&self, name: &str) {
        std::fs::write(self.layout.icons_dir.join(name), [0x89, b'P', b'N', b'G']).unwrap();
    }

    pub fn readme(&self) -> String {
        std::fs::read_to_string(&self.layout.readme_path).unwrap()
    }
}

/// Sorted entry names of a zip archive.
pub fn zip_entries(path: &Path) -> Vec<String> {
    let zip = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_owned).collect();
    names.sort();
    names
}

/// Text of one zip entry.
pub fn zip_text(path: &Path, entry: &str) -> String {
    let mut zip = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut text = String::new();
    zip.by_name(entry).unwrap().read_to_string(&mut text).unwrap();
    text
}
