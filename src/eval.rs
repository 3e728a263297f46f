// ABOUTME: Evaluator walking the value tree and dispatching built-in applications

use crate::builtins::Registry;
use crate::error::RuntimeError;
use crate::value::{Value, ValueRef};
use std::rc::Rc;

/// Evaluate one expression against the interpreter's registry.
///
/// Atoms and quoted values are self-evaluating; a cell is a procedure
/// application. There is no variable binding in this language, so a bare
/// symbol also evaluates to itself.
pub fn eval(expr: &Rc<Value>, registry: &mut Registry) -> Result<ValueRef, RuntimeError> {
    match expr.as_ref() {
        Value::Integer(_)
        | Value::Bool(_)
        | Value::Symbol(_)
        | Value::Quote(_)
        | Value::Procedure(_) => Ok(Some(expr.clone())),
        Value::Cell { first, rest } => apply(first, rest, registry),
    }
}

/// Apply the operator in a cell's head to the argument chain in its tail.
fn apply(
    operator: &ValueRef,
    arguments: &ValueRef,
    registry: &mut Registry,
) -> Result<ValueRef, RuntimeError> {
    match operator.as_deref() {
        Some(Value::Symbol(name)) => {
            let procedure = registry
                .lookup(name)
                .ok_or_else(|| RuntimeError::UnknownProcedure(name.clone()))?;
            let args = eval_arguments(arguments, registry)?;
            match procedure.as_ref() {
                Value::Procedure(builtin) => builtin.apply(&args),
                _ => Err(RuntimeError::NotCallable),
            }
        }
        // A quoted operator takes no arguments and yields its inner value.
        Some(Value::Quote(inner)) => {
            if arguments.is_some() {
                return Err(RuntimeError::NotCallable);
            }
            Ok(inner.clone())
        }
        _ => Err(RuntimeError::NotCallable),
    }
}

/// Unroll the argument chain into an ordered vector. Elements that are
/// themselves cells are evaluated; atoms and quoted values pass through
/// untouched. The chain must be a proper list.
fn eval_arguments(
    arguments: &ValueRef,
    registry: &mut Registry,
) -> Result<Vec<ValueRef>, RuntimeError> {
    let mut args = Vec::new();
    let mut cursor = arguments;
    while let Some(node) = cursor {
        match node.as_ref() {
            Value::Cell { first, rest } => {
                let arg = match first {
                    Some(element) if matches!(element.as_ref(), Value::Cell { .. }) => {
                        eval(element, registry)?
                    }
                    other => other.clone(),
                };
                args.push(arg);
                cursor = rest;
            }
            _ => return Err(RuntimeError::DottedArguments),
        }
    }
    Ok(args)
}
