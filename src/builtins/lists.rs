//! List operations: cons, car, cdr, list, list-ref, list-tail
//!
//! Functions for building and taking apart cell chains.
//!
//! - `cons`: Pair the first argument with the second
//! - `car`: First element of a quoted pair
//! - `cdr`: Rest of a quoted pair
//! - `list`: Build a proper list from the arguments
//! - `list-ref`: Element at a zero-based index of a quoted list
//! - `list-tail`: Suffix starting at a zero-based index of a quoted list

use crate::error::{RuntimeError, ARITY_AT_LEAST_ONE, ARITY_ONE, ARITY_TWO};
use crate::value::{type_name, Value, ValueRef};

/// Constructs a cell from the first argument and (if present) the second.
///
/// A quoted second argument is unwrapped so consing onto a quoted list
/// extends the list instead of nesting the quote:
///
/// ```lisp
/// (cons 1 2) => (1 . 2)
/// (cons 1 '(2 3)) => (1 2 3)
/// (cons 1 '()) => (1)
/// ```
pub fn builtin_cons(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    if args.is_empty() {
        return Err(RuntimeError::arity("cons", ARITY_AT_LEAST_ONE, 0));
    }
    let first = args[0].clone();
    let rest = match args.get(1).map(Option::as_deref) {
        Some(Some(Value::Quote(inner))) => inner.clone(),
        Some(_) => args[1].clone(),
        None => None,
    };
    Ok(Value::cell(first, rest))
}

/// Cell payload of a quoted-pair argument, shared by car and cdr.
fn expect_quoted_pair<'a>(
    function: &'static str,
    args: &'a [ValueRef],
) -> Result<(&'a ValueRef, &'a ValueRef), RuntimeError> {
    if args.len() != 1 {
        return Err(RuntimeError::arity(function, ARITY_ONE, args.len()));
    }
    match args[0].as_deref() {
        Some(Value::Quote(Some(inner))) => match inner.as_ref() {
            Value::Cell { first, rest } => Ok((first, rest)),
            _ => Err(RuntimeError::type_mismatch(
                function,
                "pair",
                inner.type_name(),
                1,
            )),
        },
        Some(Value::Quote(None)) => Err(RuntimeError::EmptyList { function }),
        _ => Err(RuntimeError::type_mismatch(
            function,
            "quoted pair",
            type_name(&args[0]),
            1,
        )),
    }
}

/// Returns the first element of a quoted pair.
pub fn builtin_car(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let (first, _) = expect_quoted_pair("car", args)?;
    Ok(first.clone())
}

/// Returns everything after the first element of a quoted pair.
pub fn builtin_cdr(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let (_, rest) = expect_quoted_pair("cdr", args)?;
    Ok(rest.clone())
}

/// Builds a proper list containing all arguments in order.
///
/// ```lisp
/// (list 1 2 3) => (1 2 3)
/// (list) => ()
/// ```
pub fn builtin_list(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let chain = args
        .iter()
        .rev()
        .fold(None, |rest, arg| Value::cell(arg.clone(), rest));
    Ok(chain)
}

/// Quoted-list operand and zero-based index shared by list-ref and list-tail.
fn expect_list_and_index<'a>(
    function: &'static str,
    args: &'a [ValueRef],
) -> Result<(&'a ValueRef, usize), RuntimeError> {
    if args.len() != 2 {
        return Err(RuntimeError::arity(function, ARITY_TWO, args.len()));
    }
    let inner = match args[0].as_deref() {
        Some(Value::Quote(inner)) => inner,
        _ => {
            return Err(RuntimeError::type_mismatch(
                function,
                "quoted list",
                type_name(&args[0]),
                1,
            ))
        }
    };
    let index = match args[1].as_deref() {
        Some(Value::Integer(n)) if *n >= 0 => *n as usize,
        Some(Value::Integer(_)) => {
            return Err(RuntimeError::type_mismatch(
                function,
                "non-negative integer",
                "integer",
                2,
            ))
        }
        _ => {
            return Err(RuntimeError::type_mismatch(
                function,
                "integer",
                type_name(&args[1]),
                2,
            ))
        }
    };
    Ok((inner, index))
}

/// Returns the element at a zero-based index of a quoted list.
///
/// ```lisp
/// (list-ref '(1 2 3) 1) => 2
/// ```
pub fn builtin_list_ref(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let (list, index) = expect_list_and_index("list-ref", args)?;

    // A quoted atom (or nil) still answers for index 0.
    if !matches!(list.as_deref(), Some(Value::Cell { .. })) {
        if index == 0 {
            return Ok(list.clone());
        }
        return Err(RuntimeError::IndexOutOfRange {
            function: "list-ref",
            index,
        });
    }

    let mut cursor = list;
    let mut remaining = index;
    loop {
        match cursor.as_deref() {
            Some(Value::Cell { first, rest }) => {
                if remaining == 0 {
                    return Ok(first.clone());
                }
                remaining -= 1;
                cursor = rest;
            }
            _ => {
                return Err(RuntimeError::IndexOutOfRange {
                    function: "list-ref",
                    index,
                })
            }
        }
    }
}

/// Returns the suffix of a quoted list starting at a zero-based index.
/// The index may equal the list length, giving the empty list.
///
/// ```lisp
/// (list-tail '(1 2 3) 1) => (2 3)
/// (list-tail '(1 2 3) 3) => ()
/// ```
pub fn builtin_list_tail(args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
    let (list, index) = expect_list_and_index("list-tail", args)?;

    if !matches!(list.as_deref(), Some(Value::Cell { .. })) {
        if index == 0 {
            return Ok(list.clone());
        }
        return Err(RuntimeError::IndexOutOfRange {
            function: "list-tail",
            index,
        });
    }

    let mut cursor = list;
    for _ in 0..index {
        match cursor.as_deref() {
            Some(Value::Cell { rest, .. }) => cursor = rest,
            _ => {
                return Err(RuntimeError::IndexOutOfRange {
                    function: "list-tail",
                    index,
                })
            }
        }
    }
    Ok(cursor.clone())
}
