use crate::{ast::Handler, interpreter::lexer::Token};

/// Describes one row of the binary operator table.
///
/// Lower precedence means looser binding. Only `->` is right-associative;
/// every other operator associates to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    /// Binding strength; operands group with the higher-precedence
    /// neighbor.
    pub precedence:  u8,
    /// Whether the operator groups `a op (b op c)` instead of
    /// `(a op b) op c`.
    pub right_assoc: bool,
    /// The evaluator handler the parser records on the node.
    pub handler:     Handler,
}

/// Precedence of juxtaposition, which is the application operator.
///
/// Application binds exactly as tightly as `.`.
pub const APPLICATION_PRECEDENCE: u8 = 30;

/// Precedence of the then-branch of `?`; an attached `; else` re-enters
/// the climb at the `?` level so that chains like `a ? b ; c ? d ; e`
/// nest to the right.
pub const THEN_PRECEDENCE: u8 = 22;

/// Maps a token to its row of the binary operator table.
///
/// Returns `None` for tokens that are not binary operators, which is how
/// the climb loop recognizes the end of an expression (or a juxtaposition,
/// when the token can instead begin an operand).
///
/// A note on `;`: a standalone else-chain binds looser than `=` and `:`,
/// so that `ns = {p=7}; ns.p` reads as "bind, then fall through to the
/// rest". When `;` directly follows the then-branch of a `?`, the `?`
/// parse consumes it as the else-branch instead (see
/// [`crate::interpreter::parser::core::parse_binary`]), which is what lets
/// `n <= 1 ? 1 ; n * f(n - 1)` stay inside a `->` body.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(OpInfo)` if the token corresponds to a binary operator, otherwise
/// `None`.
///
/// # Example
/// ```
/// use tuplet::{
///     ast::Handler,
///     interpreter::{lexer::Token, parser::binary::binary_op_info},
/// };
///
/// let info = binary_op_info(&Token::Plus).unwrap();
/// assert_eq!(info.handler, Handler::Add);
/// assert!(!info.right_assoc);
/// assert!(binary_op_info(&Token::LParen).is_none());
/// ```
#[must_use]
pub const fn binary_op_info(token: &Token) -> Option<OpInfo> {
    const fn left(precedence: u8, handler: Handler) -> OpInfo {
        OpInfo { precedence,
                 right_assoc: false,
                 handler }
    }

    Some(match token {
        Token::Semicolon => left(9, Handler::Else),
        Token::Comma => left(10, Handler::Pair),
        Token::Equals => left(11, Handler::Set),
        Token::Colon => left(11, Handler::Label),
        Token::Arrow => OpInfo { precedence:  12,
                                 right_assoc: true,
                                 handler:     Handler::Def, },
        Token::Question => left(THEN_PRECEDENCE, Handler::If),
        Token::Pipe => left(23, Handler::Or),
        Token::Ampersand => left(23, Handler::And),
        Token::EqualEqual => left(24, Handler::Eq),
        Token::BangEqual => left(24, Handler::Ne),
        Token::Less => left(24, Handler::Lt),
        Token::LessEqual => left(24, Handler::Le),
        Token::Greater => left(24, Handler::Gt),
        Token::GreaterEqual => left(24, Handler::Ge),
        Token::Plus => left(25, Handler::Add),
        Token::Minus => left(25, Handler::Sub),
        Token::Star => left(26, Handler::Mul),
        Token::Slash => left(26, Handler::Div),
        Token::Percent => left(26, Handler::Mod),
        Token::Caret => left(27, Handler::Pow),
        Token::Dot => left(APPLICATION_PRECEDENCE, Handler::Dot),
        _ => return None,
    })
}

/// Tests whether a token can begin an operand.
///
/// Used by the climb loop to recognize juxtaposition: when the next token
/// could start a fresh operand and no binary operator separates it from
/// the expression so far, the two are combined with the application
/// handler.
#[must_use]
pub const fn starts_operand(token: &Token) -> bool {
    matches!(token,
             Token::Number(_)
             | Token::DoubleStr(_)
             | Token::SingleStr(_)
             | Token::BacktickStr(_)
             | Token::Identifier(_)
             | Token::LParen
             | Token::LBracket
             | Token::LBrace)
}
