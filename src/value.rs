// ABOUTME: Value types representing parsed expressions and evaluation results

use crate::builtins::Builtin;
use crate::error::RuntimeError;
use std::fmt;
use std::rc::Rc;

/// A possibly-absent value. `None` is the empty list (nil); every other
/// value is shared behind an `Rc` so readers and built-ins can alias
/// subtrees without copying.
pub type ValueRef = Option<Rc<Value>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Bool(bool),
    Symbol(String),
    /// A cons cell. A proper list is a chain of cells whose final `rest`
    /// is nil; anything else in `rest` makes the cell a dotted pair.
    Cell { first: ValueRef, rest: ValueRef },
    /// A quoted value, produced only by the reader. `Quote(None)` is the
    /// quoted empty list `'()`.
    Quote(ValueRef),
    /// A built-in procedure. Created only by registry lookup, never by
    /// the reader.
    Procedure(Builtin),
}

impl Value {
    pub fn integer(n: i64) -> ValueRef {
        Some(Rc::new(Value::Integer(n)))
    }

    pub fn boolean(b: bool) -> ValueRef {
        Some(Rc::new(Value::Bool(b)))
    }

    pub fn symbol(name: impl Into<String>) -> ValueRef {
        Some(Rc::new(Value::Symbol(name.into())))
    }

    pub fn cell(first: ValueRef, rest: ValueRef) -> ValueRef {
        Some(Rc::new(Value::Cell { first, rest }))
    }

    pub fn quote(inner: ValueRef) -> ValueRef {
        Some(Rc::new(Value::Quote(inner)))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::Cell { .. } => "pair",
            Value::Quote(_) => "quoted value",
            Value::Procedure(_) => "procedure",
        }
    }

    fn contains_procedure(&self) -> bool {
        match self {
            Value::Procedure(_) => true,
            Value::Cell { first, rest } => {
                ref_contains_procedure(first) || ref_contains_procedure(rest)
            }
            Value::Quote(inner) => ref_contains_procedure(inner),
            _ => false,
        }
    }
}

fn ref_contains_procedure(value: &ValueRef) -> bool {
    value.as_deref().is_some_and(Value::contains_procedure)
}

/// Name of a value's type for error reporting; nil has no variant of its own.
pub fn type_name(value: &ValueRef) -> &'static str {
    match value {
        Some(v) => v.type_name(),
        None => "nil",
    }
}

/// Canonical printed form of an evaluation result.
///
/// Procedures (and anything containing one) have no printed form and
/// produce a runtime error instead.
pub fn print(value: &ValueRef) -> Result<String, RuntimeError> {
    match value {
        Some(v) if v.contains_procedure() => Err(RuntimeError::UnprintableProcedure),
        Some(v) => Ok(v.to_string()),
        None => Ok("()".to_string()),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Quote(None) => write!(f, "()"),
            Value::Quote(Some(inner)) => write!(f, "({})", inner),
            // Cells print flat; the enclosing quote supplies the parentheses.
            Value::Cell { first, rest } => match (first, rest) {
                (None, _) => write!(f, "()"),
                (Some(a), None) => write!(f, "{}", a),
                (Some(a), Some(b)) if matches!(b.as_ref(), Value::Cell { .. }) => {
                    write!(f, "{} {}", a, b)
                }
                (Some(a), Some(b)) => write!(f, "{} . {}", a, b),
            },
            Value::Procedure(builtin) => write!(f, "#<builtin {}>", builtin.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Bool(true).to_string(), "#t");
        assert_eq!(Value::Bool(false).to_string(), "#f");
        assert_eq!(Value::Symbol("foo".to_string()).to_string(), "foo");
    }

    #[test]
    fn test_quoted_list_display() {
        // '(1 2 3)
        let chain = Value::cell(
            Value::integer(1),
            Value::cell(Value::integer(2), Value::cell(Value::integer(3), None)),
        );
        let quoted = Value::quote(chain);
        assert_eq!(print(&quoted).unwrap(), "(1 2 3)");
    }

    #[test]
    fn test_dotted_pair_display() {
        // '(1 2 . 3)
        let chain = Value::cell(
            Value::integer(1),
            Value::cell(Value::integer(2), Value::integer(3)),
        );
        let quoted = Value::quote(chain);
        assert_eq!(print(&quoted).unwrap(), "(1 2 . 3)");
    }

    #[test]
    fn test_empty_list_display() {
        assert_eq!(print(&Value::quote(None)).unwrap(), "()");
        assert_eq!(print(&None).unwrap(), "()");
    }

    #[test]
    fn test_quote_inside_chain_keeps_parens() {
        // ((1 2) . 3) built from a quoted first element
        let inner = Value::quote(Value::cell(
            Value::integer(1),
            Value::cell(Value::integer(2), None),
        ));
        let pair = Value::quote(Value::cell(inner, Value::integer(3)));
        assert_eq!(print(&pair).unwrap(), "((1 2) . 3)");
    }

    #[test]
    fn test_procedure_is_unprintable() {
        let proc = Some(Rc::new(Value::Procedure(Builtin::Add)));
        assert_eq!(print(&proc), Err(RuntimeError::UnprintableProcedure));

        let wrapped = Value::quote(Value::cell(
            Some(Rc::new(Value::Procedure(Builtin::Add))),
            None,
        ));
        assert_eq!(print(&wrapped), Err(RuntimeError::UnprintableProcedure));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::integer(1)), "integer");
        assert_eq!(type_name(&Value::quote(None)), "quoted value");
        assert_eq!(type_name(&None), "nil");
    }
}
