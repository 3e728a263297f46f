//! Type predicates: number?, boolean?, pair?, null?, list?
//!
//! All return boolean. `number?` and `boolean?` accept one or more
//! arguments and require every one to match; the structural predicates
//! take a single argument.

use crate::error::{RuntimeError, ARITY_AT_LEAST_ONE, ARITY_ONE, ARITY_ZERO_OR_ONE};
use crate::value::{Value, ValueRef};

/// Tests if every argument is an integer.
pub fn builtin_number_p(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("number?", ARITY_AT_LEAST_ONE, 0));
    }
    let all = args
        .iter()
        .all(|arg| matches!(arg.as_deref(), Some(Value::Integer(_))));
    Ok(Value::boolean(all))
}

/// Tests if every argument is a boolean.
pub fn builtin_boolean_p(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("boolean?", ARITY_AT_LEAST_ONE, 0));
    }
    let all = args
        .iter()
        .all(|arg| matches!(arg.as_deref(), Some(Value::Bool(_))));
    Ok(Value::boolean(all))
}

/// Tests if the argument holds at least one element: a non-empty quoted
/// value or a non-empty cell.
pub fn builtin_pair_p(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::arity("pair?", ARITY_ONE, args.len()));
    }
    let result = match args[0].as_deref() {
        Some(Value::Quote(inner)) => inner.is_some(),
        Some(Value::Cell { first, .. }) => first.is_some(),
        _ => false,
    };
    Ok(Value::boolean(result))
}

/// Tests if the argument is the empty list. Calling with no argument at
/// all also answers `#t`.
pub fn builtin_null_p(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.len() > 1 {
        return Err(RuntimeError::arity("null?", ARITY_ZERO_OR_ONE, args.len()));
    }
    let result = match args.first().map(Option::as_deref) {
        None => true,
        Some(None) => true,
        Some(Some(Value::Quote(inner))) => inner.is_none(),
        Some(Some(Value::Cell { first, .. })) => first.is_none(),
        Some(Some(_)) => false,
    };
    Ok(Value::boolean(result))
}

/// Tests if the argument is a proper list: nil, or a cell chain whose
/// final rest link is nil. A quoted argument is judged by its inner value.
///
/// ```lisp
/// (list? '(1 2 3)) => #t
/// (list? '(1 . 2)) => #f
/// ```
pub fn builtin_list_p(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::arity("list?", ARITY_ONE, args.len()));
    }
    let subject = match args[0].as_deref() {
        Some(Value::Quote(inner)) => inner,
        _ => &args[0],
    };
    Ok(Value::boolean(is_proper_list(subject)))
}

/// Follow rest links to the end of the chain.
fn is_proper_list(value: &ValueRef) -> bool {
    let mut cursor = value;
    loop {
        match cursor.as_deref() {
            None => return true,
            Some(Value::Cell { rest, .. }) => cursor = rest,
            Some(_) => return false,
        }
    }
}
