use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::builtin_bindings,
        value::{core::Value, namespace::Bindings},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A suspendable evaluation step.
///
/// Evaluation is a single cooperative task: the future is not `Send`, and
/// its only genuine suspension points are host-callable invocations. It is
/// safe to abandon an evaluation by dropping the future.
pub type EvalFuture<'a> = Pin<Box<dyn Future<Output = EvalResult<Value>> + 'a>>;

/// One frame of the scope chain, shared between the owning context and any
/// functions that captured it.
pub type ScopeRef = Rc<RefCell<Bindings>>;

/// Stores the runtime evaluation context.
///
/// A context is a chain of scope frames, innermost last. Reads walk the
/// chain from innermost to outermost and produce `Nothing` for unmapped
/// names; writes always go to the innermost frame. Frames are shared, not
/// copied, when a function captures its definition scope, so later writes
/// to an outer frame stay visible to earlier captures.
///
/// ## Usage
///
/// A context is created once per evaluation task, optionally seeded with
/// host globals, mutated by labelling and assignment forms while the task
/// runs, and discarded afterwards. It must not be shared between
/// concurrent evaluations.
pub struct Context {
    pub(crate) frames: Vec<ScopeRef>,
}

impl Context {
    /// Creates a root context.
    ///
    /// The outer frame holds the built-ins (`bool`, `not`, `str`, `size`,
    /// `enum`, `range`, `type`, `map`, `TRUE`, `FALSE`); an empty inner
    /// frame receives the evaluation's own bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Rc::new(RefCell::new(builtin_bindings())),
                            Rc::new(RefCell::new(Bindings::new()))], }
    }

    /// Creates a root context with host-supplied globals.
    ///
    /// Globals land in the same outer frame as the built-ins and shadow
    /// them on name collisions.
    ///
    /// # Example
    /// ```
    /// use tuplet::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let context = Context::with_globals([("answer".to_string(), Value::Number(42.0))]);
    ///
    /// assert_eq!(context.get("answer"), Value::Number(42.0));
    /// ```
    #[must_use]
    pub fn with_globals<I>(globals: I) -> Self
        where I: IntoIterator<Item = (String, Value)>
    {
        let context = Self::new();
        {
            let mut outer = context.frames[0].borrow_mut();
            for (name, value) in globals {
                outer.insert(&name, value);
            }
        }
        context
    }

    /// Builds a context directly over an existing frame chain.
    ///
    /// Used when a function call re-enters its captured scope.
    pub(crate) const fn from_frames(frames: Vec<ScopeRef>) -> Self {
        Self { frames }
    }

    /// Pushes a fresh, empty innermost frame.
    pub(crate) fn push_frame(&mut self) {
        self.frames.push(Rc::new(RefCell::new(Bindings::new())));
    }

    /// Pushes an innermost frame seeded with the given bindings.
    pub(crate) fn push_bindings(&mut self, bindings: Bindings) {
        self.frames.push(Rc::new(RefCell::new(bindings)));
    }

    /// Removes the innermost frame and returns it.
    pub(crate) fn pop_frame(&mut self) -> Option<ScopeRef> {
        self.frames.pop()
    }

    /// A shared handle on the current frame chain, as captured by `->`.
    pub(crate) fn capture(&self) -> Vec<ScopeRef> {
        self.frames.clone()
    }

    /// Resolves a name against the scope chain.
    ///
    /// Lookup begins at the innermost frame and proceeds outward. An
    /// unmapped name resolves to `Nothing` rather than failing; so does
    /// any name that is not a legal identifier, even if a host injected a
    /// value under it.
    ///
    /// # Example
    /// ```
    /// use tuplet::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.bind("x", Value::Number(5.0));
    ///
    /// assert_eq!(context.get("x"), Value::Number(5.0));
    /// assert_eq!(context.get("missing"), Value::Nothing);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.borrow().get(name) {
                return value.clone();
            }
        }
        Value::Nothing
    }

    /// Binds a name in the innermost frame.
    ///
    /// Labelling and assignment only ever write here; outer frames are
    /// never touched, which is what makes namespace literals and function
    /// bodies self-contained.
    pub fn bind(&mut self, name: &str, value: Value) {
        if let Some(frame) = self.frames.last() {
            frame.borrow_mut().insert(name, value);
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the node: literals and names resolve
    /// directly, binary nodes go through the handler dispatch, and the
    /// two literal forms for lists and namespaces manage their own frame.
    ///
    /// Evaluation is strictly left-to-right; the returned future only
    /// suspends where a host callable is invoked.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// A future resolving to the normalized result value.
    pub fn eval<'a>(&'a mut self, expr: &'a Expr) -> EvalFuture<'a> {
        Box::pin(async move {
            match expr {
                Expr::Literal { value, .. } => Ok(Value::from(value)),
                Expr::Name { name, .. } => Ok(self.get(name)),
                Expr::Binary { handler,
                               left,
                               right,
                               line, } => self.eval_binary(*handler, left, right, *line).await,
                Expr::List { expr, .. } => {
                    let value = self.eval(expr).await?;
                    Ok(Value::from(value.into_elements()))
                },
                Expr::Namespace { expr, .. } => self.eval_namespace_literal(expr).await,
            }
        })
    }

    /// Evaluates a namespace literal body in a fresh frame.
    ///
    /// Whatever the body binds in that frame becomes the namespace; the
    /// body's own result is discarded. The frame is removed again even
    /// when the body fails.
    pub(crate) async fn eval_namespace_literal(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.push_frame();
        let result = self.eval(expr).await;
        let frame = self.pop_frame();

        result?;

        let bindings = frame.map(|f| f.borrow().clone()).unwrap_or_default();
        Ok(Value::from(bindings))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
