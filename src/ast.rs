/// Distinguishes the three string literal delimiters.
///
/// All three kinds evaluate to the same `String` values; the parser keeps
/// them apart so that an embedding host can give one of them (typically the
/// backtick form) a special meaning such as template interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// A string delimited by `"…"`.
    Double,
    /// A string delimited by `'…'`.
    Single,
    /// A string delimited by `` `…` ``.
    Backtick,
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly
/// in source code: the empty group `()`, numbers, and string literals.
/// It is used in the executable tree as the payload of literal nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The absent value, written `()` in source.
    Nothing,
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal together with the delimiter kind it was written in.
    Str {
        /// The characters between the delimiters.
        value: String,
        /// Which of the three delimiters enclosed the literal.
        kind:  StringKind,
    },
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Names the operation an inner tree node performs.
///
/// The parser resolves precedence and associativity, then records one of
/// these handlers on the node; all semantics live in the evaluator. Each
/// handler corresponds to one row of the binary operator table, plus the
/// application handler for juxtaposition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Tuple pairing (`,`).
    Pair,
    /// Assignment (`=`); binds names and returns nothing.
    Set,
    /// Labelling (`:`); binds names and returns the values.
    Label,
    /// Function definition (`->`).
    Def,
    /// Else-chain (`;`).
    Else,
    /// Then-if (`?`).
    If,
    /// Short-circuit or (`|`).
    Or,
    /// Short-circuit and (`&`).
    And,
    /// Equal to (`==`).
    Eq,
    /// Not equal to (`!=`).
    Ne,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Addition, concatenation, or merge (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication or repetition (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Remainder (`%`).
    Mod,
    /// Exponentiation (`^`).
    Pow,
    /// Subcontexting (`.`).
    Dot,
    /// Application (juxtaposition).
    Apply,
}

impl Handler {
    /// The operation name used in error messages, e.g. `Sum` for `+`.
    #[must_use]
    pub const fn operation_name(self) -> &'static str {
        match self {
            Self::Add => "Sum",
            Self::Sub => "Difference",
            Self::Mul => "Product",
            Self::Div => "Quotient",
            Self::Mod => "Remainder",
            Self::Pow => "Power",
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge => "Comparison",
            Self::Apply => "Application",
            Self::Pair => "Pair",
            Self::Set => "Assignment",
            Self::Label => "Label",
            Self::Def => "Definition",
            Self::Else => "Else",
            Self::If => "Then",
            Self::Or => "Or",
            Self::And => "And",
            Self::Dot => "Subcontext",
        }
    }
}

impl std::fmt::Display for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Pair => ",",
            Self::Set => "=",
            Self::Label => ":",
            Self::Def => "->",
            Self::Else => ";",
            Self::If => "?",
            Self::Or => "|",
            Self::And => "&",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Dot => ".",
            Self::Apply => " ",
        };
        write!(f, "{operator}")
    }
}

/// A node of the executable tree built by the parser.
///
/// `Expr` is a pure description of the program: literal payloads, name
/// references, and handler-tagged inner nodes with child subtrees. The tree
/// is immutable after parsing and freely re-runnable; each node carries the
/// source line it came from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant payload.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a name, resolved against the context at evaluation time.
    Name {
        /// The identifier being referenced.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation named by its handler.
    Binary {
        /// The operation to perform.
        handler: Handler,
        /// Left operand subtree.
        left:    Box<Self>,
        /// Right operand subtree.
        right:   Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A list literal `[ expr ]`; the inner expression flattens to the
    /// elements.
    List {
        /// The element expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A namespace literal `{ expr }`; the inner expression runs in a fresh
    /// scope frame whose bindings become the namespace.
    Namespace {
        /// The body expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tuplet::ast::Expr;
    ///
    /// let expr = Expr::Name { name: "x".to_string(),
    ///                         line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Name { line, .. }
            | Self::Binary { line, .. }
            | Self::List { line, .. }
            | Self::Namespace { line, .. } => *line,
        }
    }
}

/// A parsed program: a single expression, immutable and re-runnable.
///
/// Programs hold no evaluation state. They may be shared freely between
/// tasks and evaluated any number of times against different contexts.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub(crate) root: Expr,
}

impl Program {
    /// The root node of the executable tree.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }
}
