//! Structural equivalence over JSON value trees.
//!
//! Typed content checks serialize the expected value and compare it
//! against the parsed body as JSON. Objects are compared by the
//! expectation's keys (extra actual fields are ignored), arrays
//! element-wise with matching lengths. Comparison stops at the first
//! difference, reported with its dotted path.

use std::fmt;

use serde_json::{Map, Value};

use crate::render::render_json;

/// Field-selection options for structural equivalence checks.
///
/// Paths are dotted field paths rooted at the body (`"IntProperty"`,
/// `"customer.name"`). With a non-empty include list only the named paths
/// are compared; excluded paths are skipped in either mode.
///
/// # Examples
///
/// ```
/// use should_http::equivalency::EquivalencyOptions;
///
/// let options = EquivalencyOptions::new()
///     .including("name")
///     .excluding("id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquivalencyOptions {
    including: Vec<String>,
    excluding: Vec<String>,
}

impl EquivalencyOptions {
    /// Creates options that compare every field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the comparison to the given field path.
    pub fn including(mut self, path: impl Into<String>) -> Self {
        self.including.push(path.into());
        self
    }

    /// Skips the given field path.
    pub fn excluding(mut self, path: impl Into<String>) -> Self {
        self.excluding.push(path.into());
        self
    }

    fn should_compare(&self, path: &str, fold_case: bool) -> bool {
        if self
            .excluding
            .iter()
            .any(|selector| covers(selector, path, fold_case))
        {
            return false;
        }
        if self.including.is_empty() {
            return true;
        }
        // Compare a field when it sits inside an included path, or on the
        // way down to one.
        self.including.iter().any(|selector| {
            covers(selector, path, fold_case) || covers(path, selector, fold_case)
        })
    }
}

/// True when `outer` equals `inner` or is an ancestor of it at a path
/// boundary (`.` or `[`).
fn covers(outer: &str, inner: &str, fold_case: bool) -> bool {
    if fold_case {
        covers_folded(&outer.to_ascii_lowercase(), &inner.to_ascii_lowercase())
    } else {
        covers_folded(outer, inner)
    }
}

fn covers_folded(outer: &str, inner: &str) -> bool {
    match inner.strip_prefix(outer) {
        Some("") => true,
        Some(rest) => rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

/// The first difference found by a structural comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Dotted path to the differing field; empty at the root.
    pub path: String,
    /// Rendering of the expected value at that path.
    pub expected: String,
    /// Rendering of the actual value at that path.
    pub actual: String,
}

impl Difference {
    fn new(path: &str, expected: String, actual: String) -> Self {
        Self {
            path: path.to_string(),
            expected,
            actual,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(
                f,
                "a difference at the root: expected {}, found {}",
                self.expected, self.actual
            )
        } else {
            write!(
                f,
                "a difference at \"{}\": expected {}, found {}",
                self.path, self.expected, self.actual
            )
        }
    }
}

/// Compares two JSON value trees for structural equivalence.
pub fn compare(
    expected: &Value,
    actual: &Value,
    options: &EquivalencyOptions,
    fold_case: bool,
) -> Result<(), Difference> {
    compare_at("", expected, actual, options, fold_case)
}

fn compare_at(
    path: &str,
    expected: &Value,
    actual: &Value,
    options: &EquivalencyOptions,
    fold_case: bool,
) -> Result<(), Difference> {
    match (expected, actual) {
        (Value::Object(expected_map), Value::Object(actual_map)) => {
            for (key, expected_value) in expected_map {
                let child = join_path(path, key);
                if !options.should_compare(&child, fold_case) {
                    continue;
                }
                match lookup(actual_map, key, fold_case) {
                    Some(actual_value) => {
                        compare_at(&child, expected_value, actual_value, options, fold_case)?;
                    }
                    None => {
                        return Err(Difference::new(
                            &child,
                            render_json(expected_value),
                            "<missing>".to_string(),
                        ));
                    }
                }
            }
            Ok(())
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            if expected_items.len() != actual_items.len() {
                return Err(Difference::new(
                    path,
                    format!("an array of {} items", expected_items.len()),
                    format!("{} items", actual_items.len()),
                ));
            }
            for (index, (expected_item, actual_item)) in
                expected_items.iter().zip(actual_items).enumerate()
            {
                let child = format!("{path}[{index}]");
                compare_at(&child, expected_item, actual_item, options, fold_case)?;
            }
            Ok(())
        }
        _ => {
            if expected == actual {
                Ok(())
            } else {
                Err(Difference::new(
                    path,
                    render_json(expected),
                    render_json(actual),
                ))
            }
        }
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str, fold_case: bool) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }
    if !fold_case {
        return None;
    }
    map.iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}
