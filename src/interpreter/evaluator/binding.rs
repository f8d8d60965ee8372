use std::rc::Rc;

use crate::{
    ast::{Expr, Handler, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            function::{FunctionValue, Lambda},
            namespace::Bindings,
        },
    },
};

/// Collects the identifiers of a binding target.
///
/// The left side of `:`, `=` and `->` is read in a restricted mode:
/// names stand for themselves, pairs and parentheses are honored, and
/// the empty group contributes no names. Any other construct is a
/// bind-target error.
///
/// # Parameters
/// - `expr`: The target subtree.
///
/// # Returns
/// The names in source order.
pub(crate) fn binding_names(expr: &Expr) -> EvalResult<Vec<String>> {
    fn collect(expr: &Expr, names: &mut Vec<String>) -> EvalResult<()> {
        match expr {
            Expr::Name { name, .. } => {
                names.push(name.clone());
                Ok(())
            },
            Expr::Binary { handler: Handler::Pair,
                           left,
                           right,
                           .. } => {
                collect(left, names)?;
                collect(right, names)
            },
            Expr::Literal { value: LiteralValue::Nothing,
                            .. } => Ok(()),
            other => Err(RuntimeError::BindTarget { line: other.line_number() }),
        }
    }

    let mut names = Vec::new();
    collect(expr, &mut names)?;
    Ok(names)
}

impl Context {
    /// Evaluates a labelling (`:`) or assignment (`=`) node.
    ///
    /// The right side evaluates first; its element tuple is then bound
    /// against the names of the left side in the current innermost frame.
    /// Labelling returns the values, assignment returns `Nothing`.
    pub(crate) async fn eval_binding(&mut self,
                                     target: &Expr,
                                     value_expr: &Expr,
                                     returns_values: bool)
                                     -> EvalResult<Value> {
        let names = binding_names(target)?;
        let values = self.eval(value_expr).await?;

        self.bind_names(&names, values.clone());

        if returns_values {
            Ok(values)
        } else {
            Ok(Value::Nothing)
        }
    }

    /// Binds a tuple of values against a sequence of names.
    ///
    /// The distribution rule: values match names positionally; when
    /// values run out, the remaining names bind to `Nothing`; when names
    /// run out, the last name receives the tuple of all remaining values.
    /// Every name ends up bound, whatever the two lengths are.
    pub(crate) fn bind_names(&mut self, names: &[String], values: Value) {
        let mut items = values.into_elements();

        for (i, name) in names.iter().enumerate() {
            let value = if i + 1 == names.len() && items.len() > names.len() {
                Value::from_elements(items.split_off(i))
            } else {
                items.get(i).cloned().unwrap_or(Value::Nothing)
            };
            self.bind(name, value);
        }
    }

    /// Evaluates a function definition (`->`).
    ///
    /// The parameter names are read from the left side, the body subtree
    /// is kept as-is, and the current scope chain is captured by
    /// reference. Nothing about the body runs until the function is
    /// applied.
    pub(crate) fn eval_def(&mut self, params: &Expr, body: &Expr) -> EvalResult<Value> {
        let params = binding_names(params)?;

        Ok(Value::Function(FunctionValue::Lambda(Rc::new(Lambda { params,
                                                                  body: body.clone(),
                                                                  captured: self.capture() }))))
    }

    /// Evaluates a subcontexting (`.`) node.
    ///
    /// The left side must produce a namespace, or a tuple of namespaces
    /// (in which case the right side evaluates once per namespace and the
    /// results re-normalize). The namespace's entries are pushed as a new
    /// innermost frame while the right side runs, so they shadow the
    /// outer context without replacing it.
    pub(crate) async fn eval_dot(&mut self,
                                 left: &Expr,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        let target = self.eval(left).await?;

        match target {
            Value::Namespace(ns) => self.eval_in_namespace(&ns, right).await,

            Value::Tuple(items) => {
                let mut results = Vec::with_capacity(items.len());
                for item in items.iter() {
                    match item {
                        Value::Namespace(ns) => {
                            results.push(self.eval_in_namespace(ns, right).await?);
                        },
                        _ => return Err(RuntimeError::NamespaceExpected { line }),
                    }
                }
                Ok(Value::from_elements(results))
            },

            _ => Err(RuntimeError::NamespaceExpected { line }),
        }
    }

    /// Evaluates an expression with a namespace's entries pushed as the
    /// innermost frame.
    ///
    /// The frame is seeded with a copy of the entries, so writes inside
    /// the expression stay local to the subcontext and never mutate the
    /// namespace value itself. The frame pops again even when the
    /// expression fails.
    async fn eval_in_namespace(&mut self, ns: &Bindings, expr: &Expr) -> EvalResult<Value> {
        self.push_bindings(ns.clone());
        let result = self.eval(expr).await;
        self.pop_frame();
        result
    }
}
