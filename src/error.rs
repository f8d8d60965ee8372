/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source text. Parse errors include unexpected tokens, unterminated
/// strings, unbalanced groups, and trailing input after the expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operator
/// and application errors on undefined kind combinations, subcontexting of
/// a non-namespace, built-in argument rejections, invalid binding targets,
/// and failures propagated from host callables.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
