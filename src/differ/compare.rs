//! Structural comparison of JSON trees.
use std::fmt;

use serde_json::{Map, Number, Value};

/// Numeric comparison tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Maximum relative difference between two numbers.
    pub rel_err: f64,
    /// Magnitude below which a number is treated as zero.
    pub abs_zero: f64,
}

impl Tolerance {
    /// Whether `gold` and `actual` agree within tolerance.
    ///
    /// Numerically equal values always agree, whatever their JSON form.
    /// Two values below `abs_zero` in magnitude agree; otherwise the
    /// difference relative to the larger magnitude must not exceed `rel_err`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn numbers_match(&self, gold: &Number, actual: &Number) -> bool {
        if gold == actual {
            return true;
        }
        let (Some(a), Some(b)) = (gold.as_f64(), actual.as_f64()) else {
            return false;
        };
        if a == b {
            return true;
        }
        if a.abs() < self.abs_zero && b.abs() < self.abs_zero {
            return true;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() / scale <= self.rel_err
    }
}

/// What differs at a location.
#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    /// Both sides hold the same type but a different value.
    Changed {
        /// Gold value.
        gold: Value,
        /// Produced value.
        actual: Value,
    },
    /// The sides hold values of different JSON types.
    TypeChanged {
        /// Gold value.
        gold: Value,
        /// Produced value.
        actual: Value,
    },
    /// A key present in gold is absent from the output.
    Missing(Value),
    /// A key present in the output is absent from gold.
    Unexpected(Value),
    /// Arrays of different length.
    LengthChanged {
        /// Gold length.
        gold: usize,
        /// Produced length.
        actual: usize,
    },
}

/// A single mismatch between a gold tree and an output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Location in `root['key'][index]` form.
    pub path: String,
    /// What differs there.
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            DifferenceKind::Changed { gold, actual } => {
                write!(f, "{path}: value changed from {gold} to {actual}")
            }
            DifferenceKind::TypeChanged { gold, actual } => {
                write!(f, "{path}: type changed from {gold} to {actual}")
            }
            DifferenceKind::Missing(gold) => write!(f, "{path}: missing (gold has {gold})"),
            DifferenceKind::Unexpected(actual) => {
                write!(f, "{path}: unexpected item {actual}")
            }
            DifferenceKind::LengthChanged { gold, actual } => {
                write!(f, "{path}: length changed from {gold} to {actual}")
            }
        }
    }
}

/// Compare `actual` against `gold`, skipping object keys named in `ignored`
/// at any depth.
///
/// Returns every difference found, in document order of the gold tree.
#[must_use]
pub fn compare(
    gold: &Value,
    actual: &Value,
    ignored: &[String],
    tolerance: Tolerance,
) -> Vec<Difference> {
    let mut walker = Walker {
        ignored,
        tolerance,
        found: Vec::new(),
    };
    walker.visit("root".to_string(), gold, actual);
    walker.found
}

struct Walker<'a> {
    ignored: &'a [String],
    tolerance: Tolerance,
    found: Vec<Difference>,
}

impl Walker<'_> {
    fn push(&mut self, path: String, kind: DifferenceKind) {
        self.found.push(Difference { path, kind });
    }

    fn is_ignored(&self, key: &str) -> bool {
        self.ignored.iter().any(|k| k == key)
    }

    fn visit(&mut self, path: String, gold: &Value, actual: &Value) {
        match (gold, actual) {
            (Value::Object(g), Value::Object(a)) => self.visit_object(&path, g, a),
            (Value::Array(g), Value::Array(a)) => {
                if g.len() == a.len() {
                    for (i, (gv, av)) in g.iter().zip(a).enumerate() {
                        self.visit(format!("{path}[{i}]"), gv, av);
                    }
                } else {
                    self.push(
                        path,
                        DifferenceKind::LengthChanged {
                            gold: g.len(),
                            actual: a.len(),
                        },
                    );
                }
            }
            (Value::Number(g), Value::Number(a)) => {
                if !self.tolerance.numbers_match(g, a) {
                    self.changed(path, gold, actual);
                }
            }
            (Value::String(_), Value::String(_))
            | (Value::Bool(_), Value::Bool(_))
            | (Value::Null, Value::Null) => {
                if gold != actual {
                    self.changed(path, gold, actual);
                }
            }
            _ => self.push(
                path,
                DifferenceKind::TypeChanged {
                    gold: gold.clone(),
                    actual: actual.clone(),
                },
            ),
        }
    }

    fn changed(&mut self, path: String, gold: &Value, actual: &Value) {
        self.push(
            path,
            DifferenceKind::Changed {
                gold: gold.clone(),
                actual: actual.clone(),
            },
        );
    }

    fn visit_object(&mut self, path: &str, gold: &Map<String, Value>, actual: &Map<String, Value>) {
        for (key, gv) in gold {
            if self.is_ignored(key) {
                continue;
            }
            let child = format!("{path}['{key}']");
            match actual.get(key) {
                Some(av) => self.visit(child, gv, av),
                None => self.push(child, DifferenceKind::Missing(gv.clone())),
            }
        }
        for (key, av) in actual {
            if !gold.contains_key(key) && !self.is_ignored(key) {
                self.push(
                    format!("{path}['{key}']"),
                    DifferenceKind::Unexpected(av.clone()),
                );
            }
        }
    }
}
