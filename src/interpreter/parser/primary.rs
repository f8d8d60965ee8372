use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, StringKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and
/// include:
/// - numeric literals, with a directly preceding `-` folded in
/// - string literals in any of the three delimiter kinds
/// - names
/// - parenthesized groups, where the empty group `()` is the Nothing
///   literal
/// - list literals (`[ ... ]`)
/// - namespace literals (`{ ... }`)
///
/// Grammar (simplified):
/// ```text
///     primary := ["-"] NUMBER
///              | STRING
///              | NAME
///              | "(" expression? ")"
///              | "[" expression? "]"
///              | "{" expression? "}"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(_) | Token::Minus, _) => parse_number_literal(tokens),
        (Token::DoubleStr(_) | Token::SingleStr(_) | Token::BacktickStr(_), _) => {
            parse_string_literal(tokens)
        },
        (Token::Identifier(_), _) => parse_name(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (Token::LBrace, _) => parse_namespace_literal(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a numeric literal, folding a directly preceding `-` into the
/// value.
///
/// The minus sign is only unary in this position; everywhere else `-` is
/// the subtraction operator. A `-` that is not followed by a numeric
/// literal is an error here.
fn parse_number_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: (*n).into(),
                                                             line:  *line, }),
        Some((Token::Minus, line)) => match tokens.next() {
            Some((Token::Number(n), _)) => Ok(Expr::Literal { value: (-*n).into(),
                                                              line:  *line, }),
            Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                                   line:  *line, }),
            None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a string literal, keeping track of which delimiter kind
/// enclosed it.
fn parse_string_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::DoubleStr(s), line)) => Ok(string_literal(s, StringKind::Double, *line)),
        Some((Token::SingleStr(s), line)) => Ok(string_literal(s, StringKind::Single, *line)),
        Some((Token::BacktickStr(s), line)) => Ok(string_literal(s, StringKind::Backtick, *line)),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

fn string_literal(value: &str, kind: StringKind, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Str { value: value.to_string(),
                                               kind },
                    line }
}

/// Parses a name reference.
fn parse_name<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Name { name: name.clone(),
                                                                 line: *line, }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )` or the empty group `()`.
///
/// Parentheses group only; they never build a tuple by themselves (the
/// pairing operator does that), so the inner expression is returned
/// without a wrapper node. The empty group is the Nothing literal.
///
/// Grammar: `grouping := "(" expression? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is, or a Nothing literal for `()`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Literal { value: LiteralValue::Nothing,
                                  line });
    }

    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses a list literal of the form `[ expression ]`.
///
/// The single inner expression supplies the elements: at evaluation time
/// it flattens to a tuple whose items become the list, so `[1, 2, 3]` is
/// the element expression `1, 2, 3` inside brackets. `[]` is the empty
/// list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
///
/// # Returns
/// An [`Expr::List`] node.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::List { expr: Box::new(Expr::Literal { value: LiteralValue::Nothing,
                                                              line }),
                               line });
    }

    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RBracket, _)) => Ok(Expr::List { expr: Box::new(expr),
                                                      line }),
        _ => Err(ParseError::ExpectedClosingBracket { line }),
    }
}

/// Parses a namespace literal of the form `{ expression }`.
///
/// The inner expression runs in a fresh scope frame; the names bound in
/// that frame become the namespace. `{}` is the empty namespace.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `{`.
///
/// # Returns
/// An [`Expr::Namespace`] node.
fn parse_namespace_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Namespace { expr: Box::new(Expr::Literal { value: LiteralValue::Nothing,
                                                                   line }),
                                    line });
    }

    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RBrace, _)) => Ok(Expr::Namespace { expr: Box::new(expr),
                                                         line }),
        _ => Err(ParseError::ExpectedClosingBrace { line }),
    }
}
