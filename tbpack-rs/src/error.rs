//! Error taxonomy shared by both utilities.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::MissingVersion`] | a script has no `@version X.Y.Z` tag |
//! | [`Error::MissingSection`] | no `## <name>` section with both markers |
//! | [`Error::MissingVersionField`] | section found, but no `**Version**` line |
//! | [`Error::Io`] / [`Error::Archive`] / [`Error::Persist`] | filesystem failure |
//!
//! Every variant is fatal to the batch; nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no @version tag found in {script}")]
    MissingVersion { script: String },

    #[error("no documentation section `{heading}` with description and instructions for {script}")]
    MissingSection { script: String, heading: String },

    #[error("Couldn't find version for script {script} in {doc}")]
    MissingVersionField { script: String, doc: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attach `path` to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io { path: path.as_ref().to_path_buf(), source }
    }

    /// Short machine-friendly name of the failure class, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingVersion { .. } => "missing-version",
            Error::MissingSection { .. } => "missing-documentation-section",
            Error::MissingVersionField { .. } => "missing-version-field",
            Error::Io { .. } | Error::Archive { .. } | Error::Persist { .. } => "io",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
