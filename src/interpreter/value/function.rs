use std::rc::Rc;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{EvalFuture, ScopeRef},
        value::core::Value,
    },
};

/// A callable supplied by the embedding host.
///
/// Host callables receive the flat tuple of argument values and return a
/// boxed future, so a host may suspend (for I/O, timers, or cancellation)
/// in the middle of an otherwise synchronous evaluation. Failures are
/// reported as [`crate::error::RuntimeError::Host`] and propagate to the
/// embedding caller untouched.
pub trait HostFn {
    /// Invokes the callable with already-evaluated arguments.
    fn call(&self, arguments: Vec<Value>) -> EvalFuture<'_>;
}

impl<F> HostFn for F where F: Fn(Vec<Value>) -> EvalFuture<'static>
{
    fn call(&self, arguments: Vec<Value>) -> EvalFuture<'_> {
        self(arguments)
    }
}

/// A function defined in the language with `params -> body`.
///
/// The captured scope chain is shared, not copied: a lambda closed over an
/// outer frame observes later writes to that frame, which is what makes
/// `f = n -> n * f(n - 1)` style recursion work.
pub struct Lambda {
    /// Parameter names, bound against the call arguments.
    pub params:   Vec<String>,
    /// The body subtree, evaluated per call.
    pub body:     Expr,
    /// The scope chain in effect at the definition site.
    pub captured: Vec<ScopeRef>,
}

/// A callable runtime value.
///
/// Functions compare by identity: two functions are equal only when they
/// are literally the same definition, built-in table entry, `map` wrapper,
/// or host object.
#[derive(Clone)]
pub enum FunctionValue {
    /// A function defined in the language.
    Lambda(Rc<Lambda>),
    /// An intrinsic from the built-in table.
    Builtin(&'static crate::interpreter::evaluator::function::core::BuiltinDef),
    /// The result of `map f`: applies `f` to each element of its argument
    /// tuple.
    Mapped(Rc<FunctionValue>),
    /// A callable injected by the embedding host.
    Host(Rc<dyn HostFn>),
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Lambda(a), Self::Lambda(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Mapped(a), Self::Mapped(b)) => Rc::ptr_eq(a, b),
            (Self::Host(a), Self::Host(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lambda(lambda) => write!(f, "<function({})>", lambda.params.join(", ")),
            Self::Builtin(def) => write!(f, "<builtin {}>", def.name),
            Self::Mapped(_) => write!(f, "<mapped function>"),
            Self::Host(_) => write!(f, "<host function>"),
        }
    }
}
