//! # Built-in Procedures Module
//!
//! The fixed procedure set of the language, organized into 5 categories
//! with 26 total procedures.
//!
//! ## Categories
//!
//! - **[arithmetic]** (7): +, -, *, /, max, min, abs
//! - **[comparison]** (5): =, <, <=, >, >= - Integer chain comparisons
//! - **[logic]** (3): not, and, or - Truthiness operations
//! - **[types]** (5): number?, boolean?, pair?, null?, list? - Predicates
//! - **[lists]** (6): cons, car, cdr, list, list-ref, list-tail
//!
//! Procedures are a closed enumeration: [`Builtin`] carries the identity,
//! [`Builtin::apply`] dispatches to the category modules, and [`Registry`]
//! hands out shared procedure values by name. `quote` is not listed here;
//! the reader resolves it before evaluation ever sees the name.

use crate::error::RuntimeError;
use crate::value::{Value, ValueRef};
use std::collections::HashMap;
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod lists;
pub mod logic;
pub mod types;

/// Identity of a built-in procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Max,
    Min,
    Abs,
    NumEq,
    Lt,
    Le,
    Gt,
    Ge,
    IsNumber,
    IsBoolean,
    IsPair,
    IsNull,
    IsList,
    Not,
    And,
    Or,
    Cons,
    Car,
    Cdr,
    List,
    ListRef,
    ListTail,
}

impl Builtin {
    /// Resolve a source-level name to a builtin identity.
    pub fn from_name(name: &str) -> Option<Builtin> {
        let builtin = match name {
            "+" => Builtin::Add,
            "-" => Builtin::Sub,
            "*" => Builtin::Mul,
            "/" => Builtin::Div,
            "max" => Builtin::Max,
            "min" => Builtin::Min,
            "abs" => Builtin::Abs,
            "=" => Builtin::NumEq,
            "<" => Builtin::Lt,
            "<=" => Builtin::Le,
            ">" => Builtin::Gt,
            ">=" => Builtin::Ge,
            "number?" => Builtin::IsNumber,
            "boolean?" => Builtin::IsBoolean,
            "pair?" => Builtin::IsPair,
            "null?" => Builtin::IsNull,
            "list?" => Builtin::IsList,
            "not" => Builtin::Not,
            "and" => Builtin::And,
            "or" => Builtin::Or,
            "cons" => Builtin::Cons,
            "car" => Builtin::Car,
            "cdr" => Builtin::Cdr,
            "list" => Builtin::List,
            "list-ref" => Builtin::ListRef,
            "list-tail" => Builtin::ListTail,
            _ => return None,
        };
        Some(builtin)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Max => "max",
            Builtin::Min => "min",
            Builtin::Abs => "abs",
            Builtin::NumEq => "=",
            Builtin::Lt => "<",
            Builtin::Le => "<=",
            Builtin::Gt => ">",
            Builtin::Ge => ">=",
            Builtin::IsNumber => "number?",
            Builtin::IsBoolean => "boolean?",
            Builtin::IsPair => "pair?",
            Builtin::IsNull => "null?",
            Builtin::IsList => "list?",
            Builtin::Not => "not",
            Builtin::And => "and",
            Builtin::Or => "or",
            Builtin::Cons => "cons",
            Builtin::Car => "car",
            Builtin::Cdr => "cdr",
            Builtin::List => "list",
            Builtin::ListRef => "list-ref",
            Builtin::ListTail => "list-tail",
        }
    }

    /// Apply the procedure to an already-evaluated argument vector.
    pub fn apply(self, args: &[ValueRef]) -> Result<ValueRef, RuntimeError> {
        match self {
            Builtin::Add => arithmetic::builtin_add(args),
            Builtin::Sub => arithmetic::builtin_sub(args),
            Builtin::Mul => arithmetic::builtin_mul(args),
            Builtin::Div => arithmetic::builtin_div(args),
            Builtin::Max => arithmetic::builtin_max(args),
            Builtin::Min => arithmetic::builtin_min(args),
            Builtin::Abs => arithmetic::builtin_abs(args),
            Builtin::NumEq => comparison::builtin_eq(args),
            Builtin::Lt => comparison::builtin_lt(args),
            Builtin::Le => comparison::builtin_le(args),
            Builtin::Gt => comparison::builtin_gt(args),
            Builtin::Ge => comparison::builtin_ge(args),
            Builtin::IsNumber => types::builtin_number_p(args),
            Builtin::IsBoolean => types::builtin_boolean_p(args),
            Builtin::IsPair => types::builtin_pair_p(args),
            Builtin::IsNull => types::builtin_null_p(args),
            Builtin::IsList => types::builtin_list_p(args),
            Builtin::Not => logic::builtin_not(args),
            Builtin::And => logic::builtin_and(args),
            Builtin::Or => logic::builtin_or(args),
            Builtin::Cons => lists::builtin_cons(args),
            Builtin::Car => lists::builtin_car(args),
            Builtin::Cdr => lists::builtin_cdr(args),
            Builtin::List => lists::builtin_list(args),
            Builtin::ListRef => lists::builtin_list_ref(args),
            Builtin::ListTail => lists::builtin_list_tail(args),
        }
    }
}

/// Interpreter-scoped store of shared procedure values, filled in on the
/// first lookup of each name.
#[derive(Default)]
pub struct Registry {
    procedures: HashMap<&'static str, Rc<Value>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            procedures: HashMap::new(),
        }
    }

    /// Shared procedure value for `name`, or `None` when the name is not a
    /// builtin. The caller turns the miss into a runtime error so the
    /// failure carries the application context.
    pub fn lookup(&mut self, name: &str) -> Option<Rc<Value>> {
        if let Some(procedure) = self.procedures.get(name) {
            return Some(procedure.clone());
        }
        let builtin = Builtin::from_name(name)?;
        let procedure = Rc::new(Value::Procedure(builtin));
        self.procedures.insert(builtin.name(), procedure.clone());
        Some(procedure)
    }
}
