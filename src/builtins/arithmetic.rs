//! Arithmetic operations: +, -, *, /, max, min, abs
//!
//! Pure integer arithmetic over variadic arguments. Overflow wraps
//! (two's-complement); division by zero is a runtime error.
//!
//! - `+`: Sum of all arguments (identity: 0)
//! - `-`: Subtract subsequent args from first
//! - `*`: Product of all arguments (identity: 1)
//! - `/`: Divide first by subsequent args in order
//! - `max` / `min`: Extremum of the arguments
//! - `abs`: Absolute value - exactly 1 arg required

use crate::error::{RuntimeError, ARITY_AT_LEAST_ONE, ARITY_ONE};
use crate::value::{type_name, Value, ValueRef};

/// Integer payload of the argument at `position` (1-based, for errors).
fn expect_integer(
    function: &'static str,
    args: &[ValueRef],
    position: usize,
) -> Result<i64, RuntimeError> {
    match args[position - 1].as_deref() {
        Some(Value::Integer(n)) => Ok(*n),
        _ => Err(RuntimeError::type_mismatch(
            function,
            "integer",
            type_name(&args[position - 1]),
            position,
        )),
    }
}

/// Returns the sum of all arguments.
///
/// ```lisp
/// (+ 1 2 3) => 6
/// (+) => 0
/// ```
pub fn builtin_add(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let mut sum: i64 = 0;
    for position in 1..=args.len() {
        sum = sum.wrapping_add(expect_integer("+", args, position)?);
    }
    Ok(Value::integer(sum))
}

/// Subtracts subsequent arguments from the first.
///
/// ```lisp
/// (- 10 3 2) => 5
/// (- 5) => 5
/// ```
pub fn builtin_sub(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("-", ARITY_AT_LEAST_ONE, 0));
    }
    let mut result = expect_integer("-", args, 1)?;
    for position in 2..=args.len() {
        result = result.wrapping_sub(expect_integer("-", args, position)?);
    }
    Ok(Value::integer(result))
}

/// Returns the product of all arguments.
///
/// ```lisp
/// (* 2 3 4) => 24
/// (*) => 1
/// ```
pub fn builtin_mul(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let mut product: i64 = 1;
    for position in 1..=args.len() {
        product = product.wrapping_mul(expect_integer("*", args, position)?);
    }
    Ok(Value::integer(product))
}

/// Divides the first argument by each subsequent argument in order.
/// Integer division, truncating toward zero.
///
/// ```lisp
/// (/ 100 2 5) => 10
/// (/ 5) => 5
/// ```
pub fn builtin_div(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("/", ARITY_AT_LEAST_ONE, 0));
    }
    let mut result = expect_integer("/", args, 1)?;
    for position in 2..=args.len() {
        let divisor = expect_integer("/", args, position)?;
        if divisor == 0 {
            return Err(RuntimeError::DivisionByZero { function: "/" });
        }
        result = result.wrapping_div(divisor);
    }
    Ok(Value::integer(result))
}

/// Returns the largest argument.
pub fn builtin_max(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("max", ARITY_AT_LEAST_ONE, 0));
    }
    let mut best = expect_integer("max", args, 1)?;
    for position in 2..=args.len() {
        best = best.max(expect_integer("max", args, position)?);
    }
    Ok(Value::integer(best))
}

/// Returns the smallest argument.
pub fn builtin_min(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("min", ARITY_AT_LEAST_ONE, 0));
    }
    let mut best = expect_integer("min", args, 1)?;
    for position in 2..=args.len() {
        best = best.min(expect_integer("min", args, position)?);
    }
    Ok(Value::integer(best))
}

/// Returns the absolute value of its single argument.
pub fn builtin_abs(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::arity("abs", ARITY_ONE, args.len()));
    }
    let n = expect_integer("abs", args, 1)?;
    Ok(Value::integer(n.wrapping_abs()))
}
