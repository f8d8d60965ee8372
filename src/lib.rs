//! # tuplet
//!
//! tuplet is a small embeddable expression language written in Rust.
//! Programs are single expressions; a precedence-climbing parser turns
//! source text into an immutable executable tree, and an asynchronous
//! tree evaluator reduces it to a value against a caller-supplied context
//! of named bindings. Every binary operator lifts uniformly over the flat
//! tuple value, which is what keeps the language small.
//!
//! The crate exposes four primitives to the embedding host: [`parse`],
//! [`create_context`], [`evaluate`] and [`stringify`]. Hosts extend the
//! language by injecting values (including asynchronous callables) into
//! the root context before evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
        value::core::Value,
    },
};
use logos::Logos;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the executable tree built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines node and literal payload types for all language constructs.
/// - Names the evaluator handler of each inner node.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries the documented message forms together with source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser,
///   evaluator, host).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and error handling to provide a complete runtime for
/// embedded expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   value types.
/// - Provides the pieces behind the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and integer quantities without silent data
///   loss.
pub mod util;

/// Parses source text into an immutable, re-runnable program.
///
/// The program may be evaluated any number of times, against any number
/// of contexts, and shared between tasks.
///
/// # Errors
/// Returns a [`ParseError`] with a source line for malformed input:
/// unknown characters, unterminated strings, unbalanced groups, missing
/// operands, or trailing tokens.
///
/// # Examples
/// ```
/// assert!(tuplet::parse("(x, y) -> x + y").is_ok());
/// assert!(tuplet::parse("1 +").is_err());
/// assert!(tuplet::parse("'unterminated").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          line:  *line, });
    }

    Ok(Program { root })
}

/// Creates a fresh root context for evaluation.
///
/// The outer frame of the returned scope chain holds the language's
/// built-ins plus the caller-supplied globals; globals shadow built-ins
/// on name collisions. Anything the evaluation itself binds lands in a
/// separate inner frame.
///
/// Globals may include asynchronous callables built with [`Value::host`];
/// invoking one is the only point where an evaluation suspends.
///
/// # Examples
/// ```
/// use tuplet::interpreter::value::core::Value;
///
/// let context = tuplet::create_context([("a".to_string(), Value::Number(10.0))]);
/// assert_eq!(context.get("a"), Value::Number(10.0));
/// ```
pub fn create_context<I>(globals: I) -> Context
    where I: IntoIterator<Item = (String, Value)>
{
    Context::with_globals(globals)
}

/// Runs a program in a context, returning the normalized result value.
///
/// Evaluation is a single cooperative task: it may suspend only while a
/// host callable runs, and it is safe to abandon by dropping the future.
/// Labelling and assignment forms mutate the context's innermost frame;
/// a failed evaluation leaves earlier mutations in place, so discard the
/// context on error.
///
/// # Errors
/// Returns a [`crate::error::RuntimeError`] when an operator or built-in
/// rejects its operand kinds, when `.` is applied to a non-namespace, or
/// when a host callable fails.
///
/// # Examples
/// ```
/// let program = tuplet::parse("1 + 2 * 3").unwrap();
/// let mut context = tuplet::create_context([]);
///
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let value = runtime.block_on(tuplet::evaluate(&program, &mut context)).unwrap();
///
/// assert_eq!(tuplet::stringify(&value), "7");
/// ```
pub async fn evaluate(program: &Program, context: &mut Context) -> EvalResult<Value> {
    context.eval(program.root()).await
}

/// Converts a value to its string form.
///
/// This is the same conversion the `str` built-in applies: booleans
/// become `TRUE`/`FALSE`, numbers print canonically, tuples concatenate
/// their elements, and namespaces honor their `__str__` hook.
///
/// # Examples
/// ```
/// use tuplet::interpreter::value::core::Value;
///
/// assert_eq!(tuplet::stringify(&Value::Nothing), "");
/// assert_eq!(tuplet::stringify(&Value::Number(2.5)), "2.5");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    interpreter::evaluator::function::stringify::stringify(value)
}

/// Parses and evaluates source text in one step.
///
/// Convenience wrapper over [`parse`] and [`evaluate`] for hosts (and the
/// bundled CLI) that do not need to re-run the program.
///
/// # Errors
/// Returns the parse or runtime error of the failing phase.
///
/// # Examples
/// ```
/// let mut context = tuplet::create_context([]);
/// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
///
/// let value = runtime.block_on(tuplet::eval_source("'ab' * 3", &mut context))
///                    .unwrap();
/// assert_eq!(tuplet::stringify(&value), "ababab");
/// ```
pub async fn eval_source(source: &str,
                         context: &mut Context)
                         -> Result<Value, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    Ok(evaluate(&program, context).await?)
}
