// ABOUTME: Error types for the tokenizer, reader, and evaluator

use thiserror::Error;

// ===== Arity constant strings (eliminates allocations in error paths) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";
pub const ARITY_ZERO_OR_ONE: &str = "0-1";

/// Lexical and structural errors raised before evaluation begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("integer literal out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("unexpected '{0}'")]
    UnexpectedToken(&'static str),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("expected ')' after dotted tail")]
    MissingCloseParen,

    #[error("trailing input after expression")]
    TrailingInput,
}

/// Errors raised while evaluating a well-formed expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Type mismatch with function name, expected type, actual type, and position
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: &'static str,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    },

    /// Arity error with function name, expected count/range, and actual count
    #[error("{function}: expected {expected} argument{}, got {actual}", if *.expected == "1" { "" } else { "s" })]
    Arity {
        function: &'static str,
        expected: &'static str, // "1", "2", "at least 1"
        actual: usize,
    },

    #[error("unknown procedure: {0}")]
    UnknownProcedure(String),

    #[error("value is not callable")]
    NotCallable,

    #[error("nothing to evaluate")]
    EmptyProgram,

    #[error("improper argument list")]
    DottedArguments,

    #[error("{function}: empty list")]
    EmptyList { function: &'static str },

    #[error("{function}: index {index} out of range")]
    IndexOutOfRange {
        function: &'static str,
        index: usize,
    },

    #[error("{function}: division by zero")]
    DivisionByZero { function: &'static str },

    #[error("procedures have no printed form")]
    UnprintableProcedure,
}

impl RuntimeError {
    /// Create a type mismatch error with full context
    pub fn type_mismatch(
        function: &'static str,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    ) -> Self {
        RuntimeError::TypeMismatch {
            function,
            expected,
            actual,
            position,
        }
    }

    /// Create an arity error with expected and actual counts
    pub fn arity(function: &'static str, expected: &'static str, actual: usize) -> Self {
        RuntimeError::Arity {
            function,
            expected,
            actual,
        }
    }
}

/// The error type surfaced by [`crate::Interpreter::run`]; the two error
/// kinds stay distinguishable through the variant tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
