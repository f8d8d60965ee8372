/// Comparison evaluation.
///
/// Implements the ordering relation and structural equality used by the
/// six comparison operators. Comparisons are not lifted; tuples compare
/// lexicographically as a whole.
pub mod comparison;

/// Binary handler dispatch.
///
/// Routes each handler family to its evaluation shape.
pub mod core;

/// Short-circuit operators.
///
/// Implements `|`, `&`, `?` and `;`, which may skip their right operand.
pub mod logic;

/// Arithmetic operators and tuple lifting.
///
/// Implements the kind-pair dispatch tables for `+ - * / % ^` and the
/// zip-and-pad combinator that lifts them over tuples.
pub mod scalar;
