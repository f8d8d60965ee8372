#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant except [`RuntimeError::Host`] carries the source line of
/// the failing node. The documented message form (without the line prefix)
/// is available through [`RuntimeError::message`].
pub enum RuntimeError {
    /// A binary operator was applied to a kind combination it is not
    /// defined for.
    Operator {
        /// The operation name, e.g. `Sum`.
        operation: &'static str,
        /// Kind name of the left operand.
        left:      &'static str,
        /// Kind name of the right operand.
        right:     &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An operator rejected its sole relevant operand, e.g. application of
    /// a number.
    OperatorSingle {
        /// The operation name, e.g. `Application`.
        operation: &'static str,
        /// Kind name of the offending operand.
        kind:      &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The left operand of `.` did not evaluate to a namespace.
    NamespaceExpected {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A built-in rejected the kind of its argument.
    Builtin {
        /// The built-in operation name, e.g. `Size`.
        operation: &'static str,
        /// Kind name of the rejected argument.
        kind:      &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The left side of `:`, `=` or `->` contained something other than
    /// names, pairs and parentheses.
    BindTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric argument was outside the range an operation can handle.
    OutOfRange {
        /// The operation name, e.g. `Range`.
        operation: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A failure raised by a host-supplied callable, propagated untouched.
    Host {
        /// The host's error message.
        message: String,
    },
}

impl RuntimeError {
    /// The documented message form, without any line prefix.
    ///
    /// ## Example
    /// ```
    /// use tuplet::error::RuntimeError;
    ///
    /// let error = RuntimeError::Operator { operation: "Sum",
    ///                                      left:      "Boolean",
    ///                                      right:     "Number",
    ///                                      line:      1, };
    ///
    /// assert_eq!(error.message(),
    ///            "Sum operation not defined between Boolean and Number");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Operator { operation,
                             left,
                             right,
                             .. } => {
                format!("{operation} operation not defined between {left} and {right}")
            },
            Self::OperatorSingle { operation, kind, .. } => {
                format!("{operation} operation not defined for {kind}")
            },
            Self::NamespaceExpected { .. } => "namespace expected on the left of '.'".to_string(),
            Self::Builtin { operation, kind, .. } => {
                format!("{operation} not defined for {kind}")
            },
            Self::BindTarget { .. } => "name expected on the left of ':'".to_string(),
            Self::OutOfRange { operation, .. } => {
                format!("{operation} argument is out of range")
            },
            Self::Host { message } => message.clone(),
        }
    }

    /// The source line the error is attached to, when one is available.
    ///
    /// Host errors carry no position of their own.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Operator { line, .. }
            | Self::OperatorSingle { line, .. }
            | Self::NamespaceExpected { line }
            | Self::Builtin { line, .. }
            | Self::BindTarget { line }
            | Self::OutOfRange { line, .. } => Some(*line),
            Self::Host { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line() {
            Some(line) => write!(f, "Error on line {line}: {}.", self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for RuntimeError {}
