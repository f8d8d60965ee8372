use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalFuture},
        value::{core::Value, function::FunctionValue, namespace::APPLY_HOOK},
    },
};

/// Applies a value to an argument, dispatching on the kind of the target.
///
/// - A function is invoked with the flat tuple of the argument's
///   elements.
/// - A string or list indexes itself with a numeric argument (0-based,
///   floored, negative counts from the end); a miss yields the empty
///   string or `Nothing` respectively.
/// - A namespace delegates to its `__apply__` hook when it owns a
///   callable one; otherwise a string argument looks up an owned
///   identifier.
/// - A tuple lifts: each element applies to the same argument and the
///   results re-normalize.
/// - Any other kind is not applicable and raises.
///
/// # Parameters
/// - `target`: The value in function position.
/// - `argument`: The already-evaluated argument value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A future resolving to the application result.
pub(crate) fn apply(target: Value, argument: Value, line: usize) -> EvalFuture<'static> {
    Box::pin(async move {
        match target {
            Value::Function(func) => {
                call_function(&func, argument.into_elements(), line).await
            },

            Value::String(s) => Ok(index_string(&s, &argument)),
            Value::List(items) => Ok(index_list(&items, &argument)),

            Value::Namespace(ns) => {
                if let Some(Value::Function(hook)) = ns.get(APPLY_HOOK) {
                    let hook = hook.clone();
                    return call_function(&hook, argument.into_elements(), line).await;
                }
                match argument {
                    Value::String(name) => {
                        Ok(ns.get(&name).cloned().unwrap_or(Value::Nothing))
                    },
                    other => Err(RuntimeError::Operator { operation: "Application",
                                                          left: "Namespace",
                                                          right: other.kind_name(),
                                                          line }),
                }
            },

            Value::Tuple(items) => {
                let mut results = Vec::with_capacity(items.len());
                for item in items.iter() {
                    results.push(apply(item.clone(), argument.clone(), line).await?);
                }
                Ok(Value::from_elements(results))
            },

            other => Err(RuntimeError::OperatorSingle { operation: "Application",
                                                        kind: other.kind_name(),
                                                        line }),
        }
    })
}

/// Invokes a callable with already-evaluated arguments.
///
/// Lambdas re-enter their captured scope chain with a fresh innermost
/// frame, bind their parameters against the argument tuple with the
/// labelling rule, and evaluate their body there. Built-ins run
/// synchronously from the static table. A mapped function applies its
/// target to each argument element separately. Host callables may
/// suspend; their failures propagate untouched.
pub(crate) fn call_function(func: &FunctionValue,
                            arguments: Vec<Value>,
                            line: usize)
                            -> EvalFuture<'static> {
    let func = func.clone();
    Box::pin(async move {
        match func {
            FunctionValue::Lambda(lambda) => {
                let mut context = Context::from_frames(lambda.captured.clone());
                context.push_frame();
                context.bind_names(&lambda.params, Value::from_elements(arguments));
                context.eval(&lambda.body).await
            },

            FunctionValue::Builtin(def) => (def.func)(arguments, line),

            FunctionValue::Mapped(target) => {
                let mut results = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    results.push(call_function(&target, vec![argument], line).await?);
                }
                Ok(Value::from_elements(results))
            },

            FunctionValue::Host(host) => host.call(arguments).await,
        }
    })
}

/// Indexes a string with a numeric argument.
///
/// The index is floored; a negative index counts from the end. Anything
/// out of range, and any non-numeric argument, yields the empty string.
fn index_string(s: &str, index: &Value) -> Value {
    let Some(i) = resolve_index(index, s.chars().count()) else {
        return Value::String(String::new());
    };
    s.chars()
     .nth(i)
     .map_or_else(|| Value::String(String::new()), |c| Value::String(c.to_string()))
}

/// Indexes a list with a numeric argument.
///
/// Same rule as string indexing, except that a miss yields `Nothing`.
fn index_list(items: &[Value], index: &Value) -> Value {
    let Some(i) = resolve_index(index, items.len()) else {
        return Value::Nothing;
    };
    items.get(i).cloned().unwrap_or(Value::Nothing)
}

/// Resolves a numeric index value against a collection length.
///
/// Returns the effective 0-based position, or `None` for non-numeric
/// arguments and out-of-range indices.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
fn resolve_index(index: &Value, len: usize) -> Option<usize> {
    let Value::Number(n) = index else {
        return None;
    };
    if !n.is_finite() {
        return None;
    }

    let mut position = n.floor();
    if position < 0.0 {
        position += len as f64;
    }
    if position < 0.0 || position >= len as f64 {
        return None;
    }
    Some(position as usize)
}
