mod common;

use common::{zip_entries, zip_text, Fixture};
use tbpack::build::{build_all, build_script};
use tbpack::Error;

const README: &str = "\
# Scripts

## foo.js

**Version** 1.2.3

**Description**
Does X things.

**Instructions**
Run it.

## bar.js

**Description**
Does bar.

**Instructions**
Select a node.
";

#[test]
fn readme_entry_has_fixed_layout() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", Some("1.2.3"));
    fx.compiled("foo.js");

    let report = build_script(&fx.layout, "foo.ts").unwrap();
    assert_eq!(
        zip_text(&report.path, "readme.txt"),
        "foo.ts - 1.2.3\nhttps://github.com/bob-ross27/toonboom\n\nDescription: Does X things.\n\nUsage: Run it."
    );
}

#[test]
fn without_optional_assets_archive_has_two_entries() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", Some("1.2.3"));
    fx.compiled("foo.js");

    let report = build_script(&fx.layout, "foo.ts").unwrap();
    assert_eq!(zip_entries(&report.path), ["foo.js", "readme.txt"]);
}

#[test]
fn optional_assets_included_when_present() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", Some("1.2.3"));
    fx.compiled("foo.js");
    fx.ui("foo.ui");
    fx.icon("foo.png");

    let report = build_script(&fx.layout, "foo.ts").unwrap();
    assert_eq!(zip_entries(&report.path), ["foo.js", "foo.png", "foo.ui", "readme.txt"]);
    assert_eq!(zip_text(&report.path, "foo.ui"), "<ui version=\"4.0\"/>\n");
}

#[test]
fn builds_every_ts_script_in_order() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", Some("1.2.3"));
    fx.source("bar.ts", Some("0.4.0"));
    fx.source("notes.md", None);
    fx.compiled("foo.js");
    fx.compiled("bar.js");

    let reports = build_all(&fx.layout).unwrap();
    let names: Vec<_> = reports
        .iter()
        .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["bar.zip", "foo.zip"]);
    assert!(zip_text(&reports[0].path, "readme.txt").starts_with("bar.ts - 0.4.0\n"));
}

#[test]
fn missing_version_aborts_run() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", None);
    fx.compiled("foo.js");

    let err = build_all(&fx.layout).unwrap_err();
    assert!(matches!(&err, Error::MissingVersion { script } if script == "foo.ts"), "{err}");
    assert!(!fx.layout.dist_dir.join("foo.zip").exists());
}

#[test]
fn missing_section_aborts_run() {
    let fx = Fixture::new(README);
    fx.source("baz.ts", Some("1.0.0"));
    fx.compiled("baz.js");

    let err = build_all(&fx.layout).unwrap_err();
    assert!(matches!(err, Error::MissingSection { .. }), "{err}");
}

#[test]
fn missing_compiled_script_is_io_failure() {
    let fx = Fixture::new(README);
    fx.source("foo.ts", Some("1.2.3"));

    let err = build_all(&fx.layout).unwrap_err();
    assert!(matches!(&err, Error::Io { path, .. } if path.ends_with("foo.js")), "{err}");
}

#[test]
fn failure_keeps_earlier_archives() {
    let fx = Fixture::new(README);
    fx.source("bar.ts", Some("0.4.0"));
    fx.source("foo.ts", None);
    fx.compiled("bar.js");
    fx.compiled("foo.js");

    assert!(build_all(&fx.layout).is_err());
    assert!(fx.layout.dist_dir.join("bar.zip").is_file());
    assert!(!fx.layout.dist_dir.join("foo.zip").exists());
}

#[test]
fn missing_readme_is_io_failure() {
    let fx = Fixture::new(README);
    std::fs::remove_file(&fx.layout.readme_path).unwrap();
    fx.source("foo.ts", Some("1.2.3"));
    fx.compiled("foo.js");

    let err = build_all(&fx.layout).unwrap_err();
    assert!(matches!(&err, Error::Io { path, .. } if path.ends_with("README.md")), "{err}");
}

#[test]
fn empty_source_dir_builds_nothing() {
    let fx = Fixture::new(README);
    assert!(build_all(&fx.layout).unwrap().is_empty());
}
