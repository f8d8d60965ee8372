use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, namespace::Bindings},
    },
    util::num::usize_to_f64,
};

/// `size X`: the length of a string or list, or the owned identifier
/// count of a namespace.
///
/// Any other kind raises `Size not defined for <Kind>`.
pub(crate) fn size_of(arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    let argument = Value::from_elements(arguments);

    let len = match &argument {
        Value::String(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Namespace(ns) => ns.len(),
        other => {
            return Err(RuntimeError::Builtin { operation: "Size",
                                               kind: other.kind_name(),
                                               line });
        },
    };

    Ok(Value::Number(usize_to_f64(len)))
}

/// `enum X`: a tuple of record namespaces describing the entries of `X`.
///
/// - A namespace yields `{name, value}` records in insertion order.
/// - A list yields `{index, value}` records, indices starting at 0.
/// - A string yields `{index, value}` records of single-character
///   strings.
///
/// Any other kind raises `Enum not defined for <Kind>`.
pub(crate) fn enumerate(arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    let argument = Value::from_elements(arguments);

    let records = match &argument {
        Value::Namespace(ns) => {
            ns.iter()
              .map(|(name, value)| named_record(name, value.clone()))
              .collect()
        },
        Value::List(items) => {
            items.iter()
                 .enumerate()
                 .map(|(index, value)| indexed_record(index, value.clone()))
                 .collect()
        },
        Value::String(s) => {
            s.chars()
             .enumerate()
             .map(|(index, c)| indexed_record(index, Value::String(c.to_string())))
             .collect()
        },
        other => {
            return Err(RuntimeError::Builtin { operation: "Enum",
                                               kind: other.kind_name(),
                                               line });
        },
    };

    Ok(Value::from_elements(records))
}

fn named_record(name: &str, value: Value) -> Value {
    let mut record = Bindings::new();
    record.insert("name", Value::String(name.to_string()));
    record.insert("value", value);
    Value::from(record)
}

fn indexed_record(index: usize, value: Value) -> Value {
    let mut record = Bindings::new();
    record.insert("index", Value::Number(usize_to_f64(index)));
    record.insert("value", value);
    Value::from(record)
}
