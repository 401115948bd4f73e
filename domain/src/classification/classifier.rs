//! Character-class heuristic for "looks mathematical".

use regex::Regex;
use std::sync::LazyLock;

/// A question is mathematical if it contains a digit or one of `+ - * / =`.
///
/// `\d` matches any Unicode decimal digit. Word problems such as
/// "fourteen divided by two" do not match; this gap is kept for compatibility.
pub const MATH_PATTERN: &str = r"[\d+\-*/=]";

static MATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MATH_PATTERN).expect("MATH_PATTERN is a valid regex"));

/// Gatekeeper that decides whether a question reaches the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathClassifier;

impl MathClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if the question looks mathematical.
    pub fn classify(&self, question: &str) -> bool {
        MATH_REGEX.is_match(question)
    }
}
