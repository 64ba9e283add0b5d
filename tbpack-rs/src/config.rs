//! Project layout and the optional `tbpack.conf` file.
//!
//! The layout defaults to the repository convention:
//!
//! | Key       | Default             |
//! |-----------|---------------------|
//! | `src`     | `src`               |
//! | `scripts` | `scripts`           |
//! | `icons`   | `script-icons`      |
//! | `readme`  | `scripts/README.md` |
//! | `dist`    | `dist`              |
//! | `repo`    | `https://github.com/bob-ross27/toonboom` |
//!
//! Relative paths are resolved against the root directory.  `icons` is a
//! subdirectory of `scripts`.
//!
//! Config file syntax is one `key = value` per line; blank lines and lines
//! starting with `;` or `#` are ignored.

use std::path::{Path, PathBuf};

// ── Constants ─────────────────────────────────────────────────────────────────

pub const CONFIG_FILE_NAME: &str = "tbpack.conf";
pub const DEFAULT_REPO_URL: &str = "https://github.com/bob-ross27/toonboom";

pub const SOURCE_EXT: &str = "ts";
pub const COMPILED_EXT: &str = "js";
pub const UI_EXT: &str = "ui";
pub const ICON_EXT: &str = "png";
pub const ARCHIVE_EXT: &str = "zip";

// ── Public API ────────────────────────────────────────────────────────────────

/// A non-fatal error encountered while loading a config file.
#[derive(Debug)]
pub struct ConfigError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Resolved filesystem layout used by both utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    /// Script sources (`*.ts`).
    pub src_dir: PathBuf,
    /// Compiled `.js` and `.ui` files.
    pub scripts_dir: PathBuf,
    /// Icons, a subdirectory of `scripts_dir`.
    pub icons_dir: PathBuf,
    /// Shared documentation file.
    pub readme_path: PathBuf,
    /// Archive output directory.
    pub dist_dir: PathBuf,
    /// Repository link written into every generated readme.
    pub repo_url: String,
}

impl Layout {
    /// Default layout rooted at `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let scripts_dir = root.join("scripts");
        Self {
            src_dir: root.join("src"),
            icons_dir: scripts_dir.join("script-icons"),
            readme_path: scripts_dir.join("README.md"),
            scripts_dir,
            dist_dir: root.join("dist"),
            repo_url: DEFAULT_REPO_URL.to_owned(),
            root,
        }
    }

    /// Parse config text on top of the default layout for `root`.
    ///
    /// Unknown keys and malformed lines are reported but do not stop loading.
    pub fn load_str(root: impl Into<PathBuf>, s: &str) -> (Self, Vec<ConfigError>) {
        let mut layout = Layout::rooted(root);
        let errors = layout.apply_str(s);
        (layout, errors)
    }

    /// Read and parse a config file from disk.
    pub fn load_file(root: impl Into<PathBuf>, path: &Path) -> std::io::Result<(Self, Vec<ConfigError>)> {
        let s = std::fs::read_to_string(path)?;
        Ok(Self::load_str(root, &s))
    }

    /// Apply `key = value` lines to this layout.
    pub fn apply_str(&mut self, s: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (i, raw) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                errors.push(ConfigError {
                    line: lineno,
                    message: format!("expected `key = value`, got `{line}`"),
                });
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            if value.is_empty() {
                errors.push(ConfigError { line: lineno, message: format!("{key}: missing value") });
                continue;
            }

            if let Err(message) = self.set(key, value) {
                errors.push(ConfigError { line: lineno, message });
            }
        }

        errors
    }

    /// Set one layout key.  Path values are resolved against `root`, except
    /// `icons`, which is resolved against `scripts_dir`.
    ///
    /// Setting `scripts` moves `icons` and `readme` along with it only while
    /// they still hold their defaults.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "src" => self.src_dir = self.root.join(value),
            "scripts" => {
                let old = std::mem::replace(&mut self.scripts_dir, self.root.join(value));
                if self.icons_dir == old.join("script-icons") {
                    self.icons_dir = self.scripts_dir.join("script-icons");
                }
                if self.readme_path == old.join("README.md") {
                    self.readme_path = self.scripts_dir.join("README.md");
                }
            }
            "icons" => self.icons_dir = self.scripts_dir.join(value),
            "readme" => self.readme_path = self.root.join(value),
            "dist" => self.dist_dir = self.root.join(value),
            "repo" => self.repo_url = value.to_owned(),
            _ => return Err(format!("unknown key `{key}`")),
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let l = Layout::rooted("/repo");
        assert_eq!(l.src_dir, PathBuf::from("/repo/src"));
        assert_eq!(l.scripts_dir, PathBuf::from("/repo/scripts"));
        assert_eq!(l.icons_dir, PathBuf::from("/repo/scripts/script-icons"));
        assert_eq!(l.readme_path, PathBuf::from("/repo/scripts/README.md"));
        assert_eq!(l.dist_dir, PathBuf::from("/repo/dist"));
        assert_eq!(l.repo_url, DEFAULT_REPO_URL);
    }

    #[test]
    fn keys_override_defaults() {
        let (l, errs) = Layout::load_str(
            "/repo",
            "src = source\ndist = out/zips\nrepo = https://example.com/fork\n",
        );
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(l.src_dir, PathBuf::from("/repo/source"));
        assert_eq!(l.dist_dir, PathBuf::from("/repo/out/zips"));
        assert_eq!(l.repo_url, "https://example.com/fork");
    }

    #[test]
    fn scripts_moves_default_icons_and_readme() {
        let (l, errs) = Layout::load_str("/repo", "scripts = build");
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(l.icons_dir, PathBuf::from("/repo/build/script-icons"));
        assert_eq!(l.readme_path, PathBuf::from("/repo/build/README.md"));
    }

    #[test]
    fn explicit_readme_survives_scripts_change() {
        let (l, errs) = Layout::load_str("/repo", "readme = docs/SCRIPTS.md\nscripts = build");
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(l.readme_path, PathBuf::from("/repo/docs/SCRIPTS.md"));
    }

    #[test]
    fn icons_relative_to_scripts() {
        let (l, _) = Layout::load_str("/repo", "icons = icons");
        assert_eq!(l.icons_dir, PathBuf::from("/repo/scripts/icons"));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let (l, errs) = Layout::load_str("/repo", "; comment\n# another\n\nsrc = lib\n");
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(l.src_dir, PathBuf::from("/repo/lib"));
    }

    #[test]
    fn bad_lines_reported_with_line_numbers() {
        let (l, errs) = Layout::load_str("/repo", "src = lib\nbogus = 1\nno equals\ndist =\n");
        assert_eq!(errs.iter().map(|e| e.line).collect::<Vec<_>>(), [2, 3, 4]);
        assert!(errs[0].to_string().contains("unknown key `bogus`"));
        // good lines still apply
        assert_eq!(l.src_dir, PathBuf::from("/repo/lib"));
        assert_eq!(l.dist_dir, PathBuf::from("/repo/dist"));
    }

    #[test]
    fn load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Layout::load_file(dir.path(), &dir.path().join(CONFIG_FILE_NAME)).is_err());
    }
}
