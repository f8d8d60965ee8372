use crate::interpreter::{
    evaluator::core::EvalResult,
    value::{core::Value, namespace::STR_HOOK},
};

/// `str X`: the string form of `X`.
pub(crate) fn str_of(arguments: Vec<Value>, _line: usize) -> EvalResult<Value> {
    Ok(Value::String(stringify(&Value::from_elements(arguments))))
}

/// Converts a value to its string form.
///
/// - `Nothing` is the empty string.
/// - Booleans print as `TRUE` and `FALSE`.
/// - Numbers print in canonical decimal form.
/// - Strings are themselves.
/// - A tuple is the concatenation of its elements' string forms.
/// - A namespace honors its `__str__` hook when that hook holds a
///   string.
/// - Lists, functions, and hook-less namespaces have descriptive
///   placeholders rather than a reversible syntax.
///
/// ## Example
/// ```
/// use tuplet::interpreter::{evaluator::function::stringify::stringify, value::core::Value};
///
/// assert_eq!(stringify(&Value::Nothing), "");
/// assert_eq!(stringify(&Value::Boolean(true)), "TRUE");
/// assert_eq!(stringify(&Value::Number(120.0)), "120");
/// assert_eq!(stringify(&Value::String("abc".to_string())), "abc");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Nothing => String::new(),
        Value::Boolean(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        },
        Value::Number(n) => format!("{n}"),
        Value::String(s) => s.clone(),
        Value::List(items) => format!("<list({})>", items.len()),
        Value::Namespace(ns) => match ns.get(STR_HOOK) {
            Some(Value::String(s)) => s.clone(),
            _ => format!("<namespace({})>", ns.len()),
        },
        Value::Function(_) => "<function>".to_string(),
        Value::Tuple(items) => items.iter().map(stringify).collect(),
    }
}
