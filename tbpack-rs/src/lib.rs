//! Packaging tools for a Harmony script repository.
//!
//! - [`build`]: one `.zip` per source script (compiled `.js`, optional `.ui`
//!   and icon, generated `readme.txt`).
//! - [`sync`]: copy each script's `@version` tag into the shared `README.md`.

pub mod archive;
pub mod build;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod naming;
pub mod readme;
pub mod sync;
pub mod version;

pub use error::{Error, Result};
