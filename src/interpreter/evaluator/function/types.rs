use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// `type X`: the kind name of `X` as a string.
pub(crate) fn type_of(arguments: Vec<Value>, _line: usize) -> EvalResult<Value> {
    Ok(Value::String(Value::from_elements(arguments).kind_name()
                                                    .to_string()))
}
