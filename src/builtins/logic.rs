//! Logic operations: not, and, or
//!
//! Truthiness: only `#f` and the empty list (nil, or a quoted nil) count
//! as false; integers, symbols, pairs, and non-empty quoted values are all
//! true. `not` has its own narrower contract and rejects arguments the
//! other two accept.

use crate::error::{RuntimeError, ARITY_ONE};
use crate::value::{type_name, Value, ValueRef};

/// False-equivalence test shared by `and` and `or`.
fn is_falsey(value: &ValueRef) -> bool {
    match value.as_deref() {
        None => true,
        Some(Value::Bool(false)) => true,
        Some(Value::Quote(None)) => true,
        _ => false,
    }
}

/// Negation over a single argument.
///
/// Integers negate to `#f`; a quoted value negates by whether it holds
/// anything: `(not '())` => `#f`, `(not '(1))` => `#t`.
pub fn builtin_not(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::arity("not", ARITY_ONE, args.len()));
    }
    match args[0].as_deref() {
        Some(Value::Integer(_)) => Ok(Value::boolean(false)),
        Some(Value::Bool(b)) => Ok(Value::boolean(!b)),
        Some(Value::Quote(None)) => Ok(Value::boolean(false)),
        Some(Value::Quote(Some(_))) => Ok(Value::boolean(true)),
        _ => Err(RuntimeError::type_mismatch(
            "not",
            "integer, boolean, or quoted value",
            type_name(&args[0]),
            1,
        )),
    }
}

/// Logical AND. `#f` at the first false-equivalent argument, otherwise the
/// last argument.
///
/// ```lisp
/// (and 1 2 3) => 3
/// (and) => #t
/// ```
pub fn builtin_and(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    for arg in args {
        if is_falsey(arg) {
            return Ok(Value::boolean(false));
        }
    }
    match args.last() {
        Some(last) => Ok(last.clone()),
        None => Ok(Value::boolean(true)),
    }
}

/// Logical OR. The first true-equivalent argument, otherwise the last
/// argument.
///
/// ```lisp
/// (or #f 2) => 2
/// (or) => #f
/// ```
pub fn builtin_or(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    for arg in args {
        if !is_falsey(arg) {
            return Ok(arg.clone());
        }
    }
    match args.last() {
        Some(last) => Ok(last.clone()),
        None => Ok(Value::boolean(false)),
    }
}
