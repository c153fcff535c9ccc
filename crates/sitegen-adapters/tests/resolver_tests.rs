//! Resolver behaviour against real adapter filesystems.
//!
//! The in-memory filesystem checks merge precedence and the root-sentinel
//! short-circuit (via read counting); the tempdir tests confirm the same
//! walk works against the real filesystem.

use std::path::Path;

use serde_json::json;

use sitegen_adapters::{LocalFilesystem, MemoryFilesystem};
use sitegen_core::application::resolver::{self, CUSTOM_CONFIG_FILE_NAME};

const NAMES: &[&str] = &["conf.json"];

#[test]
fn nearest_config_wins_over_ancestor_base() {
    let fs = MemoryFilesystem::new()
        .with_file("/a/b/conf.json", r#"{"x":1,"y":{"z":2}}"#)
        .with_file("/conf.json", r#"{"x":9,"y":{"z":99},"root":true}"#);

    let merged = resolver::resolve(&fs, Path::new("/a/b/c"), NAMES, json!({}));

    // The /a/b values shadow the root-level base; the sentinel key rides
    // along in the result like any other merged key.
    assert_eq!(merged, json!({"x": 1, "y": {"z": 2}, "root": true}));
}

#[test]
fn ancestor_fills_in_missing_keys() {
    let fs = MemoryFilesystem::new()
        .with_file("/a/b/conf.json", r#"{"x":1}"#)
        .with_file("/a/conf.json", r#"{"x":5,"only_here":true}"#);

    let merged = resolver::resolve(&fs, Path::new("/a/b"), NAMES, json!({}));
    assert_eq!(merged, json!({"x": 1, "only_here": true}));
}

#[test]
fn root_sentinel_prevents_ancestor_reads() {
    let fs = MemoryFilesystem::new()
        .with_file("/a/b/conf.json", r#"{"root":true,"x":1}"#)
        .with_file("/a/conf.json", r#"{"x":9}"#)
        .with_file("/conf.json", r#"{"x":10}"#);

    let merged = resolver::resolve(&fs, Path::new("/a/b"), NAMES, json!({}));

    assert_eq!(merged, json!({"root": true, "x": 1}));
    assert_eq!(fs.read_count(Path::new("/a/conf.json")), 0);
    assert_eq!(fs.read_count(Path::new("/conf.json")), 0);
}

#[test]
fn walk_reads_once_per_level() {
    let fs = MemoryFilesystem::new().with_file("/a/b/conf.json", r#"{"x":1}"#);

    resolver::resolve(&fs, Path::new("/a/b"), NAMES, json!({}));

    // Chain /a/b -> /a -> /: one probe each.
    assert_eq!(fs.read_count(Path::new("/a/b/conf.json")), 1);
    assert_eq!(fs.read_count(Path::new("/a/conf.json")), 1);
    assert_eq!(fs.read_count(Path::new("/conf.json")), 1);
}

#[test]
fn missing_start_directory_degrades_to_seed() {
    let fs = MemoryFilesystem::new();
    let seed = json!({"keep": true});
    let merged = resolver::resolve(&fs, Path::new("/ghost/dir"), NAMES, seed.clone());
    assert_eq!(merged, seed);
}

#[test]
fn local_filesystem_chain_resolves_like_memory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let nested = root.join("a/b/c");
    std::fs::create_dir_all(&nested).unwrap();

    // Sentinel at the tempdir root keeps the walk inside the fixture even
    // though the real filesystem continues above it.
    std::fs::write(
        root.join(CUSTOM_CONFIG_FILE_NAME),
        r#"{"x":9,"y":{"z":99},"root":true}"#,
    )
    .unwrap();
    std::fs::write(
        root.join("a/b").join(CUSTOM_CONFIG_FILE_NAME),
        r#"{"x":1,"y":{"z":2}}"#,
    )
    .unwrap();

    let fs = LocalFilesystem::new();
    let merged = resolver::resolve(&fs, &nested, &[CUSTOM_CONFIG_FILE_NAME], json!({}));

    assert_eq!(merged, json!({"x": 1, "y": {"z": 2}, "root": true}));
}

#[test]
fn local_filesystem_malformed_file_acts_as_absent() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let nested = root.join("p/q");
    std::fs::create_dir_all(&nested).unwrap();

    std::fs::write(root.join(CUSTOM_CONFIG_FILE_NAME), r#"{"x":1,"root":true}"#).unwrap();
    std::fs::write(nested.join(CUSTOM_CONFIG_FILE_NAME), "{definitely not json").unwrap();

    let fs = LocalFilesystem::new();
    let merged = resolver::resolve(&fs, &nested, &[CUSTOM_CONFIG_FILE_NAME], json!({}));

    assert_eq!(merged, json!({"x": 1, "root": true}));
}

#[test]
fn find_up_locates_project_root_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let nested = root.join("src/components");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(root.join(".sitegenrc.json"), "{}").unwrap();

    let fs = LocalFilesystem::new();
    let found = resolver::find_up(&fs, &nested, ".sitegenrc.json");
    assert_eq!(found.as_deref(), Some(root));
}
