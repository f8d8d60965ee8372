use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, function::FunctionValue},
    },
};

/// `map f`: a function that applies `f` to each element of its argument
/// tuple and returns the tuple of results.
///
/// A non-function argument raises `Map not defined for <Kind>`.
pub(crate) fn map_of(arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    let argument = Value::from_elements(arguments);

    match argument {
        Value::Function(func) => Ok(Value::Function(FunctionValue::Mapped(Rc::new(func)))),
        other => Err(RuntimeError::Builtin { operation: "Map",
                                             kind: other.kind_name(),
                                             line }),
    }
}
