//! Sample-by-sample image comparison.

mod checker;
mod deviation;

pub use checker::{Checker, Config, DifferenceResult, Verdict, TOLERANCE};
pub use deviation::max_deviation;
