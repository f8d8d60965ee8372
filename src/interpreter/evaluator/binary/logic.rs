use crate::{
    ast::{Expr, Handler},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a short-circuit operator.
    ///
    /// The left operand always evaluates first; the right operand only
    /// evaluates when the left one does not already determine the result:
    ///
    /// - `X | Y` returns `X` when truthy, else `Y`.
    /// - `X & Y` returns `Y` when `X` is truthy, else `X`.
    /// - `X ? Y` returns `Y` when `X` is truthy, else `Nothing`.
    /// - `X ; Y` returns `X` unless it is `Nothing`, else `Y`.
    ///
    /// Skipping the right operand is observable whenever it would invoke
    /// host callables with side effects, so the order here is part of the
    /// language semantics, not an optimization.
    pub(crate) async fn eval_short_circuit(&mut self,
                                           handler: Handler,
                                           left: &Expr,
                                           right: &Expr)
                                           -> EvalResult<Value> {
        let condition = self.eval(left).await?;

        match handler {
            Handler::Or => {
                if condition.is_truthy() {
                    Ok(condition)
                } else {
                    self.eval(right).await
                }
            },
            Handler::And => {
                if condition.is_truthy() {
                    self.eval(right).await
                } else {
                    Ok(condition)
                }
            },
            Handler::If => {
                if condition.is_truthy() {
                    self.eval(right).await
                } else {
                    Ok(Value::Nothing)
                }
            },
            Handler::Else => {
                if condition.is_nothing() {
                    self.eval(right).await
                } else {
                    Ok(condition)
                }
            },
            _ => unreachable!("eval_short_circuit used with a non-short-circuit handler"),
        }
    }
}
