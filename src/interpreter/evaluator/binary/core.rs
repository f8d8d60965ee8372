use crate::{
    ast::{Expr, Handler},
    interpreter::{
        evaluator::{
            apply::apply,
            binary::{comparison::eval_comparison, scalar::eval_lifted},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary node by dispatching on its handler.
    ///
    /// The handlers fall into a few families with different evaluation
    /// shapes:
    /// - pairing concatenates the element sequences of both operands;
    /// - the short-circuit family may skip its right operand entirely;
    /// - comparisons and the lifted arithmetic family evaluate both
    ///   operands first and then work on values;
    /// - application evaluates both operands and dispatches on the kind
    ///   of the left one;
    /// - subcontexting, labelling, assignment and definition manipulate
    ///   the scope chain and get the operand subtrees unevaluated.
    ///
    /// Operands always evaluate left-to-right, with the left operand
    /// completing before the right one starts.
    ///
    /// # Parameters
    /// - `handler`: The operation recorded by the parser.
    /// - `left`: Left operand subtree.
    /// - `right`: Right operand subtree.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The evaluated, normalized result value.
    pub(crate) async fn eval_binary(&mut self,
                                    handler: Handler,
                                    left: &Expr,
                                    right: &Expr,
                                    line: usize)
                                    -> EvalResult<Value> {
        match handler {
            Handler::Pair => {
                let mut items = self.eval(left).await?.into_elements();
                items.extend(self.eval(right).await?.into_elements());
                Ok(Value::from_elements(items))
            },

            Handler::Or | Handler::And | Handler::If | Handler::Else => {
                self.eval_short_circuit(handler, left, right).await
            },

            Handler::Eq
            | Handler::Ne
            | Handler::Lt
            | Handler::Le
            | Handler::Gt
            | Handler::Ge => {
                let lhs = self.eval(left).await?;
                let rhs = self.eval(right).await?;
                eval_comparison(handler, &lhs, &rhs, line)
            },

            Handler::Add
            | Handler::Sub
            | Handler::Mul
            | Handler::Div
            | Handler::Mod
            | Handler::Pow => {
                let lhs = self.eval(left).await?;
                let rhs = self.eval(right).await?;
                eval_lifted(handler, lhs, rhs, line)
            },

            Handler::Apply => {
                let target = self.eval(left).await?;
                let argument = self.eval(right).await?;
                apply(target, argument, line).await
            },

            Handler::Dot => self.eval_dot(left, right, line).await,

            Handler::Label => self.eval_binding(left, right, true).await,
            Handler::Set => self.eval_binding(left, right, false).await,
            Handler::Def => self.eval_def(left, right),
        }
    }
}
