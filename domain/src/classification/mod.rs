//! Question classification.
//!
//! Decides whether a question is worth sending to the math tutor at all.

mod category;
mod classifier;

pub use category::Category;
pub use classifier::{MATH_PATTERN, MathClassifier};
