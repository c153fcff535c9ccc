//! Hierarchical configuration resolution.
//!
//! The resolver walks a directory chain upward from a start directory,
//! locates the nearest matching configuration file at each level, parses it,
//! and deep-merges the results so that configuration closer to the start
//! directory wins over configuration from ancestor directories.
//!
//! # Algorithm
//!
//! At each level the freshly parsed file becomes the *low*-precedence side of
//! the merge, while the accumulator (already biased toward the nearest
//! configs) flows upward as the high-precedence seed:
//!
//! ```text
//! merged(level) = deep_merge(file_config(level), merged(level - 1))
//! ```
//!
//! The walk stops when either
//! - the accumulated config contains `"root": true` (an explicit sentinel a
//!   project author places in a config file to stop the upward search), or
//! - the filesystem root is reached (a directory whose parent resolves to
//!   itself, expressed in Rust as [`Path::parent`] returning `None`).
//!
//! Each step moves strictly toward the filesystem root, so the walk
//! terminates in at most `depth(start) + 1` merge steps. Parent resolution
//! is purely lexical; symlinked directory entries are never followed, so no
//! cycle protection is needed.
//!
//! # Failure semantics
//!
//! Nothing in this module raises an error. Missing files, unreadable files,
//! unrecognised extensions, and malformed JSON all degrade to an empty
//! configuration object and merging proceeds. A non-existent start directory
//! simply finds no config at any level and returns the seed unchanged.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use crate::application::ports::Filesystem;
use crate::domain::merge::{deep_merge, empty_object};

/// Project-local config file probed during resolution.
pub const CUSTOM_CONFIG_FILE_NAME: &str = ".sitegen.json";

/// Per-project settings file written by `sitegen init`.
pub const SETTINGS_FILE_NAME: &str = ".sitegenrc.json";

/// Namespace key the settings file nests its payload under. Unwrapped
/// transparently by [`parse_config`] so a settings file encountered during
/// resolution contributes its payload, not the wrapper.
pub const SETTINGS_NAMESPACE: &str = "sitegen";

/// Reserved boolean key halting the upward search when `true`.
pub const ROOT_SENTINEL_KEY: &str = "root";

/// A located, read configuration candidate file. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub file_name: String,
    pub absolute_path: PathBuf,
    pub contents: String,
    /// Extension without the leading dot (e.g. `json`), empty when absent.
    pub extension: String,
}

/// Return the first file from `file_names` that exists non-empty in `dir`.
///
/// This is a short-circuiting search, not an aggregation: only the first
/// matching name per directory is used, most-preferred first. Missing and
/// unreadable files are treated identically as "absent".
pub fn find_first_config_file(
    fs: &dyn Filesystem,
    dir: &Path,
    file_names: &[&str],
) -> Option<ConfigFile> {
    for file_name in file_names {
        let absolute_path = dir.join(file_name);
        if let Some(contents) = fs.read_to_string(&absolute_path) {
            if contents.is_empty() {
                continue;
            }
            let extension = absolute_path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string();
            trace!(path = %absolute_path.display(), "Config candidate found");
            return Some(ConfigFile {
                file_name: (*file_name).to_string(),
                absolute_path,
                contents,
                extension,
            });
        }
    }

    None
}

/// Parse config file contents into a configuration object.
///
/// Best-effort: malformed content and unrecognised extensions yield an empty
/// object rather than an error. Only JSON is recognised. When the parsed
/// object is wrapped in the reserved [`SETTINGS_NAMESPACE`] key (the shape
/// the settings store writes), the payload under that key is unwrapped and
/// used as the effective config.
pub fn parse_config(contents: &str, extension: &str) -> Value {
    match extension {
        "json" => parse_json(contents),
        _ => empty_object(),
    }
}

fn parse_json(contents: &str) -> Value {
    let parsed: Value = match serde_json::from_str(contents) {
        Ok(value) => value,
        Err(e) => {
            trace!(error = %e, "Ignoring malformed config file");
            return empty_object();
        }
    };

    // Top-level non-objects (a bare string, array, number) carry no keys to
    // merge and are treated as absent.
    let Value::Object(map) = parsed else {
        return empty_object();
    };

    match map.get(SETTINGS_NAMESPACE) {
        Some(namespaced) if namespaced.is_object() => namespaced.clone(),
        _ => Value::Object(map),
    }
}

/// Resolve configuration by recursively merging config files from
/// `start_dir` up to the filesystem root (or a `root: true` sentinel).
///
/// `seed` values take precedence over everything discovered on disk; pass an
/// empty object to get the pure on-disk resolution. When no config file
/// exists anywhere in the chain, the seed is returned unchanged.
///
/// The upward walk is a plain loop; recursion is not load-bearing here.
pub fn resolve(fs: &dyn Filesystem, start_dir: &Path, file_names: &[&str], seed: Value) -> Value {
    let mut merged = seed;
    let mut dir = start_dir.to_path_buf();

    loop {
        let file = find_first_config_file(fs, &dir, file_names);
        let file_config = match &file {
            Some(f) => parse_config(&f.contents, &f.extension),
            None => empty_object(),
        };

        merged = deep_merge(file_config, merged);
        debug!(dir = %dir.display(), found = file.is_some(), "Config level merged");

        if is_root_sentinel(&merged) {
            debug!(dir = %dir.display(), "Root sentinel found, stopping ancestor search");
            return merged;
        }

        // Filesystem root is the fixed point of parent(); `Path::parent`
        // expresses it as `None`.
        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => return merged,
        }
    }
}

/// Return the nearest directory, starting at `start_dir` and walking upward,
/// that contains `file_name`. Used to anchor generation at the project root
/// (the directory holding the settings file) rather than wherever the tool
/// happens to be invoked.
pub fn find_up(fs: &dyn Filesystem, start_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        if fs.exists(&dir.join(file_name)) {
            return Some(dir);
        }
        match dir.parent() {
            Some(parent) if parent != dir => dir = parent.to_path_buf(),
            _ => return None,
        }
    }
}

fn is_root_sentinel(config: &Value) -> bool {
    config.get(ROOT_SENTINEL_KEY).and_then(Value::as_bool) == Some(true)
}
