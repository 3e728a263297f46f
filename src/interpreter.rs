// ABOUTME: Interpreter facade running the tokenize -> read -> eval -> print pipeline

use crate::builtins::Registry;
use crate::error::{InterpreterError, RuntimeError};
use crate::eval::eval;
use crate::reader::read;
use crate::value::{print, Value, ValueRef};

/// A reusable interpreter. Each [`run`](Interpreter::run) call is
/// independent; the only state carried across calls is the lazily filled
/// registry of shared procedure values.
pub struct Interpreter {
    registry: Registry,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            registry: Registry::new(),
        }
    }

    /// Evaluate exactly one expression and return its canonical printed
    /// form. Trailing input is a syntax error; a bare `()` program is a
    /// runtime error.
    pub fn run(&mut self, input: &str) -> Result<String, InterpreterError> {
        let expr = read(input)?;
        let expr = expr.ok_or(RuntimeError::EmptyProgram)?;
        let result = eval(&expr, &mut self.registry)?;
        let result = canonicalize(result);
        Ok(print(&result)?)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// Wrap bare list results in a quote so they print parenthesized, the way
/// they were written.
fn canonicalize(result: ValueRef) -> ValueRef {
    match result.as_deref() {
        None | Some(Value::Cell { .. }) => Value::quote(result),
        Some(_) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    #[test]
    fn test_run_atom() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.run("42").unwrap(), "42");
        assert_eq!(interpreter.run("#t").unwrap(), "#t");
        assert_eq!(interpreter.run("foo").unwrap(), "foo");
    }

    #[test]
    fn test_run_wraps_list_results() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.run("(cdr '(1 2 3))").unwrap(), "(2 3)");
        assert_eq!(interpreter.run("(list)").unwrap(), "()");
    }

    #[test]
    fn test_nil_program_is_runtime_error() {
        let mut interpreter = Interpreter::new();
        assert_eq!(
            interpreter.run("()"),
            Err(InterpreterError::Runtime(RuntimeError::EmptyProgram))
        );
    }

    #[test]
    fn test_error_kinds_stay_distinct() {
        let mut interpreter = Interpreter::new();
        assert!(matches!(
            interpreter.run("(1"),
            Err(InterpreterError::Syntax(SyntaxError::UnexpectedEof))
        ));
        assert!(matches!(
            interpreter.run("(bogus 1)"),
            Err(InterpreterError::Runtime(RuntimeError::UnknownProcedure(_)))
        ));
    }

    #[test]
    fn test_runs_are_independent() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.run("(+ 1 2)").unwrap(), "3");
        assert!(interpreter.run("(oops)").is_err());
        // An error leaves the interpreter usable
        assert_eq!(interpreter.run("(+ 1 2)").unwrap(), "3");
    }
}
