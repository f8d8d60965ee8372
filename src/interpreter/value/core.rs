use std::rc::Rc;

use crate::interpreter::value::{
    function::{FunctionValue, HostFn},
    namespace::{Bindings, namespace_eq},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models the closed universe of kinds a program can produce.
/// Two of the kinds are normalized at construction time and therefore obey
/// extra invariants everywhere else:
///
/// - `Number` never holds a NaN; [`Value::number`] turns NaN into
///   [`Value::Nothing`].
/// - `Tuple` is always flat, never contains `Nothing`, and always has at
///   least two elements; [`Value::from_elements`] enforces this.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value; equivalent to an empty tuple.
    Nothing,
    /// A boolean value (`TRUE` or `FALSE`).
    Boolean(bool),
    /// A numeric value (double precision floating-point, never NaN).
    Number(f64),
    /// An immutable string.
    String(String),
    /// An ordered sequence of values. Lists are deep: a list element that
    /// is itself a list stays a list.
    List(Rc<Vec<Self>>),
    /// A mapping from identifiers to values, with optional `__apply__` and
    /// `__str__` hooks.
    Namespace(Rc<Bindings>),
    /// A callable value.
    Function(FunctionValue),
    /// A flat sequence of at least two non-Nothing values.
    Tuple(Rc<Vec<Self>>),
}

impl Value {
    /// Creates a numeric value, normalizing NaN to `Nothing`.
    ///
    /// ## Example
    /// ```
    /// use tuplet::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::number(1.5), Value::Number(1.5));
    /// assert_eq!(Value::number(f64::NAN), Value::Nothing);
    /// ```
    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Nothing
        } else {
            Self::Number(value)
        }
    }

    /// Builds a normalized value from a sequence of elements.
    ///
    /// Construction follows the tuple discipline: nested tuples are
    /// flattened eagerly, `Nothing` elements are dropped, and the result
    /// normalizes to `Nothing` for zero elements and to the sole element
    /// for one.
    ///
    /// ## Example
    /// ```
    /// use tuplet::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_elements(vec![]), Value::Nothing);
    /// assert_eq!(Value::from_elements(vec![Value::Nothing, Value::Number(7.0)]),
    ///            Value::Number(7.0));
    ///
    /// let pair = Value::from_elements(vec![Value::Number(1.0), Value::Number(2.0)]);
    /// let nested = Value::from_elements(vec![pair.clone(), Value::Nothing, Value::Number(3.0)]);
    /// assert_eq!(nested,
    ///            Value::from_elements(vec![Value::Number(1.0),
    ///                                      Value::Number(2.0),
    ///                                      Value::Number(3.0)]));
    /// ```
    #[must_use]
    pub fn from_elements(items: Vec<Self>) -> Self {
        let mut flat = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Self::Nothing => {},
                Self::Tuple(inner) => flat.extend(inner.iter().cloned()),
                value => flat.push(value),
            }
        }
        match flat.len() {
            0 => Self::Nothing,
            1 => flat.remove(0),
            _ => Self::Tuple(Rc::new(flat)),
        }
    }

    /// Decomposes a value into its tuple elements.
    ///
    /// `Nothing` has no elements, a tuple has its items, and any other
    /// value is its own single element. `from_elements` composed with
    /// `into_elements` is the identity on normalized values.
    #[must_use]
    pub fn into_elements(self) -> Vec<Self> {
        match self {
            Self::Nothing => Vec::new(),
            Self::Tuple(items) => items.to_vec(),
            value => vec![value],
        }
    }

    /// The kind name, as reported by `type` and used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::Boolean(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Namespace(_) => "Namespace",
            Self::Function(_) => "Function",
            Self::Tuple(_) => "Tuple",
        }
    }

    /// Whether the value is the absent value.
    ///
    /// Tuples normalize away at construction and numbers never hold NaN,
    /// so the check reduces to matching `Nothing` itself.
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// The truthiness used by `bool`, `not` and the short-circuit
    /// operators.
    ///
    /// Booleans are themselves; numbers are true iff non-zero; strings,
    /// lists and namespaces are true iff non-empty; functions are always
    /// true; a tuple is true iff any element is true; `Nothing` is false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nothing => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Namespace(ns) => !ns.is_empty(),
            Self::Function(_) => true,
            Self::Tuple(items) => items.iter().any(Self::is_truthy),
        }
    }

    /// Wraps a host closure as a callable value.
    ///
    /// The closure receives the flat tuple of argument values and returns
    /// a boxed future, which lets the host suspend the evaluation at the
    /// call boundary.
    #[must_use]
    pub fn host<F>(func: F) -> Self
        where F: Fn(Vec<Self>) -> crate::interpreter::evaluator::core::EvalFuture<'static> + 'static
    {
        Self::Function(FunctionValue::Host(Rc::new(func)))
    }

    /// Returns `true` if the value is a [`Value::Tuple`].
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(..))
    }
}

impl PartialEq for Value {
    /// Structural equality with the language's `==` semantics.
    ///
    /// Values of different kinds are never equal. Booleans, numbers and
    /// strings compare by value, lists element-wise, namespaces by owned
    /// identifier sets, and functions by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nothing, Self::Nothing) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Namespace(a), Self::Namespace(b)) => namespace_eq(a, b),
            (Self::Function(a), Self::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(Rc::new(value))
    }
}

impl From<Bindings> for Value {
    fn from(value: Bindings) -> Self {
        Self::Namespace(Rc::new(value))
    }
}

impl From<Rc<dyn HostFn>> for Value {
    fn from(value: Rc<dyn HostFn>) -> Self {
        Self::Function(FunctionValue::Host(value))
    }
}

impl From<&crate::ast::LiteralValue> for Value {
    fn from(literal: &crate::ast::LiteralValue) -> Self {
        use crate::ast::LiteralValue;

        match literal {
            LiteralValue::Nothing => Self::Nothing,
            LiteralValue::Number(n) => Self::number(*n),
            LiteralValue::Str { value, .. } => Self::String(value.clone()),
        }
    }
}
