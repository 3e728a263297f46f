//! Comparison operations: =, <, <=, >, >=
//!
//! Chain comparisons over integers: every adjacent pair must satisfy the
//! relation. Zero or one argument is trivially true. The chain is checked
//! left to right and stops at the first failing pair.

use crate::error::RuntimeError;
use crate::value::{type_name, Value, ValueRef};

fn chain(
    function: &'static str,
    args: &[ValueRef],
    relation: fn(i64, i64) -> bool,
) -> Result<ValueRef, RuntimeError> {
    let mut previous: Option<i64> = None;
    for (index, arg) in args.iter().enumerate() {
        let current = match arg.as_deref() {
            Some(Value::Integer(n)) => *n,
            _ => {
                return Err(RuntimeError::type_mismatch(
                    function,
                    "integer",
                    type_name(arg),
                    index + 1,
                ))
            }
        };
        if let Some(previous) = previous {
            if !relation(previous, current) {
                return Ok(Value::boolean(false));
            }
        }
        previous = Some(current);
    }
    Ok(Value::boolean(true))
}

/// Tests if all arguments are equal as integers.
///
/// ```lisp
/// (= 5 5 5) => #t
/// (=) => #t
/// ```
pub fn builtin_eq(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    chain("=", args, |a, b| a == b)
}

/// Tests if the arguments are strictly increasing.
pub fn builtin_lt(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    chain("<", args, |a, b| a < b)
}

/// Tests if the arguments are non-decreasing.
pub fn builtin_le(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    chain("<=", args, |a, b| a <= b)
}

/// Tests if the arguments are strictly decreasing.
pub fn builtin_gt(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    chain(">", args, |a, b| a > b)
}

/// Tests if the arguments are non-increasing.
pub fn builtin_ge(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    chain(">=", args, |a, b| a >= b)
}
