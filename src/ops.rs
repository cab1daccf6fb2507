use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp;
use std::fmt;

/// The binary operations a calculus node can apply to its dependencies.
///
/// The enum is closed: an unrecognized operation cannot be constructed, so
/// "unsupported operation" failures are rejected when a flow definition is
/// parsed, never at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

impl Op {
    /// Combines two numbers. Division by zero follows IEEE-754 and yields
    /// an infinity or NaN rather than an error.
    pub fn apply_number(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
            Op::Min => lhs.min(rhs),
            Op::Max => lhs.max(rhs),
        }
    }

    /// Combines two text values.
    ///
    /// `Sub`, `Mul` and `Div` have unusual but stable semantics: character
    /// removal, cartesian character pairing and split-at-first-match. See
    /// the free functions below.
    pub fn apply_text(self, lhs: &str, rhs: &str) -> String {
        match self {
            Op::Add => format!("{lhs}{rhs}"),
            Op::Sub => strip_chars(lhs, rhs),
            Op::Mul => pair_chars(lhs, rhs),
            Op::Div => prefix_before(lhs, rhs),
            Op::Min => cmp::min(lhs, rhs).to_string(),
            Op::Max => cmp::max(lhs, rhs).to_string(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mul => "Mul",
            Op::Div => "Div",
            Op::Min => "Min",
            Op::Max => "Max",
        };
        write!(f, "{}", name)
    }
}

/// Left-fold over a sequence of numbers: the first element seeds the
/// accumulator, every following element is combined in order.
///
/// Returns `None` for an empty sequence. Callers guard with the
/// zero-dependency short-circuit before reducing, so `None` is never
/// surfaced as an operator-visible error.
pub fn reduce_numbers(values: &[f64], op: Op) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &next| op.apply_number(acc, next)))
}

/// Left-fold over a sequence of text values. Order matters for the
/// non-commutative operations (`Sub`, `Div`, `Mul`).
pub fn reduce_text(values: &[String], op: Op) -> Option<String> {
    let (first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold(first.clone(), |acc, next| op.apply_text(&acc, next)),
    )
}

/// Removes from `lhs` the first occurrence of each character of `rhs`,
/// scanning `rhs` left to right: `"aab" - "a" == "ab"`.
fn strip_chars(lhs: &str, rhs: &str) -> String {
    let mut result: Vec<char> = lhs.chars().collect();
    for ch in rhs.chars() {
        if let Some(pos) = result.iter().position(|&c| c == ch) {
            result.remove(pos);
        }
    }
    result.into_iter().collect()
}

/// Renders the cartesian product of the two character sequences as
/// `(a,b)` pairs: `"ab" * "c" == "(a,c)(b,c)"`.
fn pair_chars(lhs: &str, rhs: &str) -> String {
    lhs.chars()
        .cartesian_product(rhs.chars())
        .map(|(a, b)| format!("({},{})", a, b))
        .collect()
}

/// Keeps the prefix of `lhs` before the first occurrence of `rhs` as a
/// substring; `lhs` is returned unchanged when there is no match.
fn prefix_before(lhs: &str, rhs: &str) -> String {
    match lhs.find(rhs) {
        Some(pos) => lhs[..pos].to_string(),
        None => lhs.to_string(),
    }
}
