use std::iter::Peekable;

use crate::{
    ast::{Expr, Handler},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{APPLICATION_PRECEDENCE, THEN_PRECEDENCE, binary_op_info, starts_operand},
            primary::parse_primary,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts the
/// precedence climb at the loosest binding level; the climb loop resolves
/// the whole operator table in one pass.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary(tokens, 0)
}

/// Parses a binary expression by precedence climbing.
///
/// An operand is parsed first, then operators at or above
/// `min_precedence` are folded in from the left. Three cases extend the
/// expression:
///
/// 1. **Table operators.** The operator's row decides how tightly the
///    right operand binds: left-associative operators re-enter the climb
///    one level tighter, the right-associative `->` re-enters at its own
///    level.
/// 2. **Then-if with an attached else.** After the then-branch of `?`, a
///    directly following `;` is consumed as the else-branch, so a
///    conditional keeps its fallback even in positions (such as a `->`
///    body) that bind tighter than a standalone else-chain.
/// 3. **Juxtaposition.** When the next token could begin a fresh operand,
///    the two expressions combine with the application handler at the
///    precedence of `.`.
///
/// Grammar:
/// ```text
///     binary := primary (operator binary | binary)*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `min_precedence`: Loosest operator level this call may consume.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                                  min_precedence: u8)
                                  -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_primary(tokens)?;

    loop {
        let Some((token, line)) = tokens.peek() else {
            break;
        };
        let line = *line;

        if let Some(info) = binary_op_info(token) {
            if info.precedence < min_precedence {
                break;
            }
            tokens.next();

            if matches!(info.handler, Handler::If) {
                left = parse_then_else(tokens, left, line)?;
                continue;
            }

            let next_min = if info.right_assoc {
                info.precedence
            } else {
                info.precedence + 1
            };
            let right = parse_binary(tokens, next_min)?;

            left = Expr::Binary { handler: info.handler,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }

        if starts_operand(token) && APPLICATION_PRECEDENCE >= min_precedence {
            let right = parse_binary(tokens, APPLICATION_PRECEDENCE + 1)?;
            left = Expr::Binary { handler: Handler::Apply,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses the branches of a `?` whose token has just been consumed.
///
/// The then-branch binds one level tighter than `?`. If the next token is
/// `;`, it is consumed here and the else-branch re-enters the climb at the
/// `?` level, so `a ? b ; c ? d ; e` nests as `a ? b ; (c ? d ; e)`.
///
/// The resulting tree uses the ordinary `If` and `Else` handlers; the
/// attachment is purely a parsing affair.
fn parse_then_else<'a, I>(tokens: &mut Peekable<I>,
                          condition: Expr,
                          line: usize)
                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let then_branch = parse_binary(tokens, THEN_PRECEDENCE + 1)?;

    let mut node = Expr::Binary { handler: Handler::If,
                                  left: Box::new(condition),
                                  right: Box::new(then_branch),
                                  line };

    if let Some((Token::Semicolon, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();

        let else_branch = parse_binary(tokens, THEN_PRECEDENCE)?;
        node = Expr::Binary { handler: Handler::Else,
                              left:    Box::new(node),
                              right:   Box::new(else_branch),
                              line:    else_line, };
    }

    Ok(node)
}
