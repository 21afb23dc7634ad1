//! Structural comparison and rendering of FHIR JSON documents.
//!
//! Two documents are equivalent when:
//! - objects have the same key sets with equivalent values, in any key order
//! - arrays have the same length and equivalent elements in the same order
//! - numbers have the same JSON text (`1.50` and `1.5` differ)
//! - strings, booleans and `null` are equal
//!
//! Every [`Difference`] carries a JSON path such as `$.coverage[0].priority`.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("documents differ in {} place(s):\n{}", .0.len(), render_differences(.0))]
    NotEquivalent(Vec<Difference>),
}

/// Output style of [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    /// Present in the expected document only.
    Missing(Value),
    /// Present in the actual document only.
    Unexpected(Value),
    /// Both present, but of a different JSON type.
    TypeMismatch { expected: Value, actual: Value },
    /// Same JSON type, different value.
    ValueMismatch { expected: Value, actual: Value },
    /// Arrays of a different length. Elements are not compared further.
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub path: String,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DifferenceKind::Missing(value) => write!(f, "{}: missing, expected {}", self.path, value),
            DifferenceKind::Unexpected(value) => write!(f, "{}: unexpected {}", self.path, value),
            DifferenceKind::TypeMismatch { expected, actual } => write!(
                f,
                "{}: expected {} {}, found {} {}",
                self.path,
                type_name(expected),
                expected,
                type_name(actual),
                actual
            ),
            DifferenceKind::ValueMismatch { expected, actual } => {
                write!(f, "{}: expected {}, found {}", self.path, expected, actual)
            }
            DifferenceKind::LengthMismatch { expected, actual } => write!(
                f,
                "{}: expected {} element(s), found {}",
                self.path, expected, actual
            ),
        }
    }
}

fn render_differences(differences: &[Difference]) -> String {
    differences
        .iter()
        .map(|d| format!("  {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Lists every structural difference between `expected` and `actual`.
pub fn diff(expected: &Value, actual: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    diff_value("$", expected, actual, &mut differences);
    differences
}

/// `Ok(())` when the documents are structurally equivalent.
pub fn ensure_equivalent(expected: &Value, actual: &Value) -> Result<(), FormatError> {
    let differences = diff(expected, actual);
    if differences.is_empty() {
        Ok(())
    } else {
        Err(FormatError::NotEquivalent(differences))
    }
}

pub fn parse_json(input: &str) -> Result<Value, FormatError> {
    Ok(serde_json::from_str(input)?)
}

pub fn render(value: &Value, style: Style) -> Result<String, FormatError> {
    let text = match style {
        Style::Compact => serde_json::to_string(value)?,
        Style::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

fn diff_value(path: &str, expected: &Value, actual: &Value, out: &mut Vec<Difference>) {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => diff_object(path, expected, actual, out),
        (Value::Array(expected), Value::Array(actual)) => {
            if expected.len() != actual.len() {
                out.push(Difference {
                    path: path.to_string(),
                    kind: DifferenceKind::LengthMismatch {
                        expected: expected.len(),
                        actual: actual.len(),
                    },
                });
                return;
            }
            for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
                diff_value(&format!("{}[{}]", path, index), e, a, out);
            }
        }
        (Value::Number(e), Value::Number(a)) => {
            if e.to_string() != a.to_string() {
                out.push(value_mismatch(path, expected, actual));
            }
        }
        (Value::String(e), Value::String(a)) if e != a => {
            out.push(value_mismatch(path, expected, actual));
        }
        (Value::Bool(e), Value::Bool(a)) if e != a => {
            out.push(value_mismatch(path, expected, actual));
        }
        (Value::String(_), Value::String(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Null, Value::Null) => {}
        _ => out.push(Difference {
            path: path.to_string(),
            kind: DifferenceKind::TypeMismatch {
                expected: expected.clone(),
                actual: actual.clone(),
            },
        }),
    }
}

fn diff_object(
    path: &str,
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    out: &mut Vec<Difference>,
) {
    for (key, e) in expected {
        let child = format!("{}.{}", path, key);
        match actual.get(key) {
            Some(a) => diff_value(&child, e, a, out),
            None => out.push(Difference {
                path: child,
                kind: DifferenceKind::Missing(e.clone()),
            }),
        }
    }
    for (key, a) in actual {
        if !expected.contains_key(key) {
            out.push(Difference {
                path: format!("{}.{}", path, key),
                kind: DifferenceKind::Unexpected(a.clone()),
            });
        }
    }
}

fn value_mismatch(path: &str, expected: &Value, actual: &Value) -> Difference {
    Difference {
        path: path.to_string(),
        kind: DifferenceKind::ValueMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        },
    }
}
