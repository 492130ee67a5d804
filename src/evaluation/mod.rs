//! Independent trip evaluation and feasibility checking.

mod evaluator;

pub use evaluator::{TripEvaluator, Violation, ViolationType};
