//! Route delay evaluation.

mod evaluator;

pub use evaluator::{DelayEvaluator, ORIGIN};
