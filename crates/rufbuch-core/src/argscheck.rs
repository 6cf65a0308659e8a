// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pattern-string argument shape checker for bridge invocations.
//
// Arguments crossing the bridge arrive untyped, so call sites declare the
// shape they accept as a compact pattern and check it before doing any work:
// `a` array, `s` string, `n` number, `f` callback, `*` anything. A pattern
// shorter than the argument list leaves the surplus arguments unchecked.

use std::fmt;

use serde_json::Value;

/// One dynamic argument of a bridge invocation.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// A JSON value forwarded from the embedding app.
    Value(&'a Value),
    /// A callback slot; `present` is false when the caller omitted it.
    Callback { present: bool },
}

impl Arg<'_> {
    /// Whether this argument satisfies one pattern character.
    fn matches(&self, pattern: char) -> bool {
        match (pattern, self) {
            ('*', _) => true,
            ('f', Arg::Callback { present }) => *present,
            ('a', Arg::Value(v)) => v.is_array(),
            ('s', Arg::Value(v)) => v.is_string(),
            ('n', Arg::Value(v)) => v.is_number(),
            _ => false,
        }
    }

    /// Short description of the argument's actual shape, for error messages.
    fn describe(&self) -> &'static str {
        match self {
            Arg::Callback { present: true } => "function",
            Arg::Callback { present: false } => "missing",
            Arg::Value(Value::Array(_)) => "array",
            Arg::Value(Value::String(_)) => "string",
            Arg::Value(Value::Number(_)) => "number",
            Arg::Value(Value::Bool(_)) => "boolean",
            Arg::Value(Value::Object(_)) => "object",
            Arg::Value(Value::Null) => "null",
        }
    }
}

/// Human name of a pattern character.
fn expected_name(pattern: char) -> &'static str {
    match pattern {
        'a' => "array",
        's' => "string",
        'n' => "number",
        'f' => "function",
        _ => "value",
    }
}

/// A single argument that failed its pattern position.
#[derive(Debug, Clone)]
pub struct ShapeMismatch {
    /// Which call site declared the pattern (e.g. `CallLogWrite.writeBulk`).
    pub caller: &'static str,
    /// Zero-based position of the offending argument.
    pub index: usize,
    /// What the pattern expected at that position.
    pub expected: &'static str,
    /// What was actually there.
    pub actual: &'static str,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: argument {} must be {}, got {}",
            self.caller, self.index, self.expected, self.actual
        )
    }
}

/// Check an argument list against a shape pattern.
///
/// Fails at the first position whose argument does not match its pattern
/// character; a required position with no argument at all fails as
/// `missing`.
pub fn check_args(
    pattern: &str,
    caller: &'static str,
    args: &[Arg<'_>],
) -> Result<(), ShapeMismatch> {
    for (index, expected) in pattern.chars().enumerate() {
        match args.get(index) {
            Some(arg) if arg.matches(expected) => {}
            Some(arg) => {
                return Err(ShapeMismatch {
                    caller,
                    index,
                    expected: expected_name(expected),
                    actual: arg.describe(),
                });
            }
            None if expected == '*' => {}
            None => {
                return Err(ShapeMismatch {
                    caller,
                    index,
                    expected: expected_name(expected),
                    actual: "missing",
                });
            }
        }
    }
    Ok(())
}

/// Like [`check_args`], but only checks arguments that are actually present.
/// Absent trailing positions are left to the caller's own arity checks.
pub fn check_present(
    pattern: &str,
    caller: &'static str,
    args: &[Arg<'_>],
) -> Result<(), ShapeMismatch> {
    for (index, expected) in pattern.chars().enumerate() {
        let Some(arg) = args.get(index) else { break };
        if !arg.matches(expected) {
            return Err(ShapeMismatch {
                caller,
                index,
                expected: expected_name(expected),
                actual: arg.describe(),
            });
        }
    }
    Ok(())
}
