/// Application of values to arguments.
///
/// Dispatches juxtaposition on the kind of the applied value: function
/// calls, string and list indexing, namespace application, and the tuple
/// lift.
pub mod apply;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary handlers, including the lifted
/// arithmetic family, comparisons, and the short-circuit operators.
pub mod binary;

/// Binding forms.
///
/// Implements labelling, assignment, function definition with lexical
/// capture, and subcontexting.
pub mod binding;

/// Core evaluation logic and context management.
///
/// Contains the scope chain, the main evaluation dispatch, and the result
/// and future type aliases.
pub mod core;

/// Built-in functions.
///
/// The intrinsic surface exposed in the default root scope.
pub mod function;
