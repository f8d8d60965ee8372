use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i64_trunc,
};

/// `range N`: the tuple `0, 1, …, sign(N)·(|N|−1)`.
///
/// `N` is truncated toward zero; `range 0` is `Nothing`, and a negative
/// `N` counts downward (`range -3` is `0, -1, -2`). A non-numeric
/// argument raises `Range not defined for <Kind>`.
pub(crate) fn range_of(arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    let argument = Value::from_elements(arguments);

    let Value::Number(n) = argument else {
        return Err(RuntimeError::Builtin { operation: "Range",
                                           kind: argument.kind_name(),
                                           line });
    };

    let Some(span) = f64_to_i64_trunc(n) else {
        return Err(RuntimeError::OutOfRange { operation: "Range",
                                              line });
    };
    if span == 0 {
        return Ok(Value::Nothing);
    }

    let step = if span < 0 { -1.0 } else { 1.0 };
    let count = span.unsigned_abs();

    let mut items = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
    let mut current = 0.0;
    for _ in 0..count {
        items.push(Value::Number(current));
        current += step;
    }

    Ok(Value::from_elements(items))
}
