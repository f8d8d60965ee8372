use std::rc::Rc;

use crate::{
    ast::Handler,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_count,
};

/// Applies an arithmetic operator with tuple lifting.
///
/// When either operand is a tuple, the two element sequences are zipped
/// pairwise, padding the shorter side with `Nothing`, and the scalar
/// operation runs on each pair; the results re-normalize into a value. A
/// scalar operand behaves as a one-element tuple, and `Nothing` as an
/// empty one, so the plain scalar path is just the degenerate case.
///
/// # Parameters
/// - `handler`: One of the six arithmetic handlers.
/// - `left`: Fully evaluated left operand.
/// - `right`: Fully evaluated right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The normalized result, or the operator error of the first failing
/// element pair.
pub(crate) fn eval_lifted(handler: Handler,
                          left: Value,
                          right: Value,
                          line: usize)
                          -> EvalResult<Value> {
    if !left.is_tuple() && !right.is_tuple() {
        return eval_scalar(handler, &left, &right, line);
    }

    let lhs = left.into_elements();
    let rhs = right.into_elements();
    let len = lhs.len().max(rhs.len());

    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let x = lhs.get(i).unwrap_or(&Value::Nothing);
        let y = rhs.get(i).unwrap_or(&Value::Nothing);
        items.push(eval_scalar(handler, x, y, line)?);
    }

    Ok(Value::from_elements(items))
}

/// Applies an arithmetic operator to a pair of non-tuple values.
///
/// Each operator dispatches on the pair of kinds; combinations outside
/// the defined table produce an operator error naming the operation and
/// both kinds.
pub(crate) fn eval_scalar(handler: Handler,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
    match handler {
        Handler::Add => eval_sum(left, right, line),
        Handler::Sub => eval_difference(left, right, line),
        Handler::Mul => eval_product(left, right, line),
        Handler::Div => eval_quotient(left, right, line),
        Handler::Mod => eval_remainder(left, right, line),
        Handler::Pow => eval_power(left, right, line),
        _ => unreachable!("eval_scalar used with a non-arithmetic handler"),
    }
}

fn operator_error(handler: Handler, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::Operator { operation: handler.operation_name(),
                             left: left.kind_name(),
                             right: right.kind_name(),
                             line }
}

/// `+`: identity on `Nothing`, logical or on booleans, numeric sum,
/// string and list concatenation, and right-biased namespace merge.
fn eval_sum(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, value) | (value, Value::Nothing) => Ok(value.clone()),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a + b)),
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::String(joined))
        },
        (Value::List(a), Value::List(b)) => {
            let mut joined = Vec::with_capacity(a.len() + b.len());
            joined.extend(a.iter().cloned());
            joined.extend(b.iter().cloned());
            Ok(Value::List(Rc::new(joined)))
        },
        (Value::Namespace(a), Value::Namespace(b)) => {
            let mut merged = a.as_ref().clone();
            for (name, value) in b.iter() {
                merged.insert(name, value.clone());
            }
            Ok(Value::from(merged))
        },
        _ => Err(operator_error(Handler::Add, left, right, line)),
    }
}

/// `-`: `Nothing` minus anything is `Nothing`, anything minus `Nothing`
/// is itself, and numbers subtract.
fn eval_difference(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, _) => Ok(Value::Nothing),
        (value, Value::Nothing) => Ok(value.clone()),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a - b)),
        _ => Err(operator_error(Handler::Sub, left, right, line)),
    }
}

/// `*`: absorbing on `Nothing`, logical and on booleans, numeric
/// product, and string or list repetition with a truncated count.
fn eval_product(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, _) | (_, Value::Nothing) => Ok(Value::Nothing),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a * b)),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            Ok(Value::String(s.repeat(f64_to_count(*n))))
        },
        (Value::Number(n), Value::List(items)) | (Value::List(items), Value::Number(n)) => {
            let count = f64_to_count(*n);
            let mut repeated = Vec::with_capacity(items.len() * count);
            for _ in 0..count {
                repeated.extend(items.iter().cloned());
            }
            Ok(Value::List(Rc::new(repeated)))
        },
        _ => Err(operator_error(Handler::Mul, left, right, line)),
    }
}

/// `/`: `Nothing` divided by anything is `Nothing`; numbers divide with
/// IEEE-754 semantics, so division by zero yields an infinity (and `0/0`
/// normalizes to `Nothing` through the NaN rule).
fn eval_quotient(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, _) => Ok(Value::Nothing),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a / b)),
        _ => Err(operator_error(Handler::Div, left, right, line)),
    }
}

/// `%`: `Nothing` modulo anything yields the right operand; numbers take
/// the remainder.
fn eval_remainder(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, value) => Ok(value.clone()),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a % b)),
        _ => Err(operator_error(Handler::Mod, left, right, line)),
    }
}

/// `^`: `Nothing` raised to anything is `Nothing`; numbers exponentiate.
fn eval_power(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Nothing, _) => Ok(Value::Nothing),
        (Value::Number(a), Value::Number(b)) => Ok(Value::number(a.powf(*b))),
        _ => Err(operator_error(Handler::Pow, left, right, line)),
    }
}
