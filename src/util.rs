/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between
/// floating-point numbers and the integer quantities the evaluator needs:
/// indices, repetition counts, and range spans. All conversions either
/// stay within the exactly-representable integer range of `f64` or report
/// failure instead of silently losing data.
pub mod num;
