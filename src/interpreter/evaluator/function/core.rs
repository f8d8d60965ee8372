use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{collection, logic, map, range, stringify, types},
        },
        value::{core::Value, function::FunctionValue, namespace::Bindings},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the flat tuple of evaluated argument values and the
/// line number of the call site. Built-ins never suspend; only host
/// callables do.
pub type BuiltinFn = fn(Vec<Value>, usize) -> EvalResult<Value>;

/// One entry of the static builtin table.
///
/// Builtin function values hold a reference to their table entry, which
/// also gives them their identity for `==`.
pub struct BuiltinDef {
    /// The name the builtin is bound to in the root scope.
    pub name:        &'static str,
    /// The handler implementing it.
    pub(crate) func: BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing
/// the builtin. The macro produces:
/// - `BUILTIN_TABLE` (static table the root scope is seeded from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of the built-ins present in the default root scope.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "bool"  => logic::bool_of,
    "not"   => logic::not_of,
    "str"   => stringify::str_of,
    "size"  => collection::size_of,
    "enum"  => collection::enumerate,
    "range" => range::range_of,
    "type"  => types::type_of,
    "map"   => map::map_of,
}

/// Builds the bindings of the default root frame.
///
/// Contains every entry of the builtin table as a function value, plus
/// the two boolean constants `TRUE` and `FALSE`. Host globals inserted
/// afterwards shadow these.
#[must_use]
pub fn builtin_bindings() -> Bindings {
    let mut bindings = Bindings::new();
    for def in BUILTIN_TABLE {
        bindings.insert(def.name, Value::Function(FunctionValue::Builtin(def)));
    }
    bindings.insert("TRUE", Value::Boolean(true));
    bindings.insert("FALSE", Value::Boolean(false));
    bindings
}
