use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::Handler,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Orders two values.
///
/// `Nothing` is strictly less than anything else. Otherwise both operands
/// must share a kind: booleans order `false < true`, numbers numerically,
/// strings by code unit, and lists lexicographically by element (a list
/// that is a prefix of the other is the lesser one). Tuples compare
/// lexicographically element-wise, with `Nothing` standing in for the
/// missing elements of the shorter side; a non-tuple operand takes part
/// as a one-element sequence.
///
/// Namespaces and functions have no order; comparing them (or operands of
/// two different kinds) is a Comparison operator error.
///
/// # Parameters
/// - `left`: First value.
/// - `right`: Second value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The ordering of `left` relative to `right`.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use tuplet::interpreter::{evaluator::binary::comparison::compare, value::core::Value};
///
/// assert_eq!(compare(&Value::Nothing, &Value::Number(0.0), 1).unwrap(),
///            Ordering::Less);
/// assert_eq!(compare(&Value::Number(2.0), &Value::Number(2.0), 1).unwrap(),
///            Ordering::Equal);
/// assert!(compare(&Value::Number(1.0), &Value::Boolean(true), 1).is_err());
/// ```
pub fn compare(left: &Value, right: &Value, line: usize) -> EvalResult<Ordering> {
    match (left, right) {
        (Value::Nothing, Value::Nothing) => Ok(Ordering::Equal),
        (Value::Nothing, _) => Ok(Ordering::Less),
        (_, Value::Nothing) => Ok(Ordering::Greater),

        (Value::Tuple(_), _) | (_, Value::Tuple(_)) => {
            let lhs = left.clone().into_elements();
            let rhs = right.clone().into_elements();
            let len = lhs.len().max(rhs.len());

            for i in 0..len {
                let x = lhs.get(i).unwrap_or(&Value::Nothing);
                let y = rhs.get(i).unwrap_or(&Value::Nothing);
                match compare(x, y, line)? {
                    Ordering::Equal => {},
                    decided => return Ok(decided),
                }
            }
            Ok(Ordering::Equal)
        },

        (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),

        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                match compare(x, y, line)? {
                    Ordering::Equal => {},
                    decided => return Ok(decided),
                }
            }
            Ok(a.len().cmp(&b.len()))
        },

        _ => Err(RuntimeError::Operator { operation: "Comparison",
                                          left: left.kind_name(),
                                          right: right.kind_name(),
                                          line }),
    }
}

/// Evaluates a comparison handler on two values.
///
/// `==` and `!=` use structural equality: values of different kinds are
/// simply unequal, functions compare by identity, and no error is ever
/// raised. The four ordering operators go through [`compare`] and share
/// its errors.
pub(crate) fn eval_comparison(handler: Handler,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
    let result = match handler {
        Handler::Eq => left == right,
        Handler::Ne => left != right,
        Handler::Lt => compare(left, right, line)? == Ordering::Less,
        Handler::Le => compare(left, right, line)? != Ordering::Greater,
        Handler::Gt => compare(left, right, line)? == Ordering::Greater,
        Handler::Ge => compare(left, right, line)? != Ordering::Less,
        _ => unreachable!("eval_comparison used with a non-comparison handler"),
    };

    Ok(Value::Boolean(result))
}
