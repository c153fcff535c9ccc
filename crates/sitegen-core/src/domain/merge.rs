//! Deep-merge engine for configuration objects.
//!
//! Configuration is represented as [`serde_json::Value`]: an arbitrarily
//! nested mapping of string keys to scalars, nested mappings, or arrays.
//! No schema is enforced beyond the reserved `root` sentinel key consumed by
//! the resolver.
//!
//! # Merge semantics
//!
//! - mapping ⊕ mapping: merged recursively, key by key.
//! - scalar vs scalar: the overlay (higher precedence) value wins.
//! - arrays: the overlay array replaces the base array wholesale. Arrays are
//!   never concatenated element-wise across levels; concatenation would grow
//!   without bound as ancestor directories are merged in.
//! - mismatched shapes (mapping vs scalar, etc.): the overlay wins.

use serde_json::{Map, Value};

/// An empty configuration object (`{}`).
///
/// The normal form for "no configuration found": absent files, malformed
/// content, and unrecognised extensions all collapse to this.
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Deep-merge `overlay` into `base`, with `overlay` taking precedence.
///
/// Both inputs are consumed; the result reuses their allocations. Pure with
/// respect to external state: merging the same two values always produces
/// the same output.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        // Scalars, arrays, and shape mismatches: overlay wins.
        (_, overlay) => overlay,
    }
}

/// Recursively remove empty entries from a configuration object.
///
/// Drops values that are `null`, an empty string, or a mapping or array that
/// is (or becomes) empty after pruning. Used to clean up prompt answers
/// before they are persisted, so optional questions the user skipped do not
/// litter the settings file.
pub fn remove_empty(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut pruned = Map::new();
            for (key, entry) in map {
                let kept = remove_empty(entry);
                if !is_empty(&kept) {
                    pruned.insert(key, kept);
                }
            }
            Value::Object(pruned)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(remove_empty)
                .filter(|item| !is_empty(item))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
