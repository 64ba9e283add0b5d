//! Command-line argument parsing shared by both binaries.
//!
//! Usage:
//!   build-archives [-C<dir>] [-f[<file>]] [-s<dir>] [-d<file>] [-o<dir>] [-vqh]
//!   update-readme  [-C<dir>] [-f[<file>]] [-s<dir>] [-d<file>] [-vqh]

use std::path::{Path, PathBuf};

use crate::config::{Layout, CONFIG_FILE_NAME};

pub const ROOT_ENV: &str = "TBPACK_ROOT";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Project root override (`-C<dir>`).
    pub root: Option<PathBuf>,
    /// Config-file specification.
    pub config: ConfigFile,
    /// Source directory override (`-s<dir>`).
    pub src: Option<PathBuf>,
    /// Documentation file override (`-d<file>`).
    pub doc: Option<PathBuf>,
    /// Archive output directory override (`-o<dir>`).
    pub dist: Option<PathBuf>,
    /// Debug logging (`-v`).
    pub verbose: bool,
    /// Warnings only (`-q`).
    pub quiet: bool,
    /// Print usage and exit (`-h`).
    pub help: bool,
}

/// How to choose the config file.
#[derive(Debug, Default)]
pub enum ConfigFile {
    /// Use `<root>/tbpack.conf` if it exists (default).
    #[default]
    Search,
    /// `-f` with no file argument: skip the config file.
    Skip,
    /// `-f<file>`: load this specific file.
    Explicit(PathBuf),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        if !arg.starts_with('-') || arg == "-" {
            return Err(format!("unexpected argument: {arg}"));
        }

        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'v' => args.verbose = true,
                'q' => args.quiet = true,
                'h' => args.help = true,

                // -f[<file>]
                'f' => {
                    if j + 1 < chars.len() {
                        let file: String = chars[j + 1..].iter().collect();
                        args.config = ConfigFile::Explicit(PathBuf::from(file));
                        j = chars.len();
                    } else if i + 1 < argv.len() && !argv[i + 1].starts_with('-') {
                        i += 1;
                        args.config = ConfigFile::Explicit(PathBuf::from(&argv[i]));
                    } else {
                        args.config = ConfigFile::Skip;
                    }
                }

                // -C<dir>, -s<dir>, -d<file>, -o<dir>
                c @ ('C' | 's' | 'd' | 'o') => {
                    let value = if j + 1 < chars.len() {
                        let s: String = chars[j + 1..].iter().collect();
                        j = chars.len();
                        s
                    } else if i + 1 < argv.len() {
                        i += 1;
                        argv[i].clone()
                    } else {
                        return Err(format!("-{c} requires an argument"));
                    };
                    let value = Some(PathBuf::from(value));
                    match c {
                        'C' => args.root = value,
                        's' => args.src = value,
                        'd' => args.doc = value,
                        _ => args.dist = value,
                    }
                }

                c => return Err(format!("unknown option: -{c}")),
            }
            j += 1;
        }
        i += 1;
    }

    if args.verbose && args.quiet {
        return Err("-v and -q are mutually exclusive".to_owned());
    }

    Ok(args)
}

// ── Layout resolution ─────────────────────────────────────────────────────────

/// Determine the project root.
///
/// Priority: `-C<dir>` flag → `TBPACK_ROOT` env var → current directory.
pub fn resolve_root(cli_override: Option<&PathBuf>) -> PathBuf {
    if let Some(d) = cli_override {
        return d.clone();
    }
    if let Ok(d) = std::env::var(ROOT_ENV) {
        if !d.is_empty() {
            return PathBuf::from(d);
        }
    }
    PathBuf::from(".")
}

/// Config file to load for `root`, if any.
fn config_path(root: &Path, choice: &ConfigFile) -> Option<PathBuf> {
    match choice {
        ConfigFile::Skip => None,
        ConfigFile::Explicit(p) => Some(root.join(p)),
        ConfigFile::Search => Some(root.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    }
}

/// Build the [`Layout`] from defaults, the config file and flags, in that
/// order.  Config-file line errors are logged as warnings.  An explicit
/// config file that cannot be read is an error.
pub fn load_layout(args: &CliArgs) -> Result<Layout, String> {
    let root = resolve_root(args.root.as_ref());
    let mut layout = match config_path(&root, &args.config) {
        Some(path) => {
            log::debug!("loading config {}", path.display());
            let (layout, errors) = Layout::load_file(&root, &path)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            for err in errors {
                log::warn!("{}: {err}", path.display());
            }
            layout
        }
        None => Layout::rooted(&root),
    };

    if let Some(src) = &args.src {
        layout.src_dir = root.join(src);
    }
    if let Some(doc) = &args.doc {
        layout.readme_path = root.join(doc);
    }
    if let Some(dist) = &args.dist {
        layout.dist_dir = root.join(dist);
    }

    Ok(layout)
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Install the `env_logger` backend.  `RUST_LOG` wins over `-v` / `-q`.
pub fn init_logging(args: &CliArgs) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
