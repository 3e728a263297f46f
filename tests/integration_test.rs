// ABOUTME: End-to-end tests for the tokenize -> read -> eval -> print pipeline

use mini_scheme::error::{InterpreterError, RuntimeError, SyntaxError};
use mini_scheme::Interpreter;

fn run(input: &str) -> Result<String, InterpreterError> {
    Interpreter::new().run(input)
}

fn run_ok(input: &str) -> String {
    run(input).unwrap_or_else(|error| panic!("{input}: {error}"))
}

fn expect_syntax_error(input: &str) {
    match run(input) {
        Err(InterpreterError::Syntax(_)) => {}
        other => panic!("{input}: expected syntax error, got {other:?}"),
    }
}

fn expect_runtime_error(input: &str) {
    match run(input) {
        Err(InterpreterError::Runtime(_)) => {}
        other => panic!("{input}: expected runtime error, got {other:?}"),
    }
}

// ===== Literals =====

#[test]
fn test_integer_literals_round_trip() {
    assert_eq!(run_ok("42"), "42");
    assert_eq!(run_ok("-7"), "-7");
    assert_eq!(run_ok("0"), "0");
    // Sign normalization: an explicit plus is not reprinted
    assert_eq!(run_ok("+5"), "5");
}

#[test]
fn test_boolean_literals() {
    assert_eq!(run_ok("#t"), "#t");
    assert_eq!(run_ok("#f"), "#f");
}

#[test]
fn test_symbols_self_evaluate() {
    assert_eq!(run_ok("foo"), "foo");
    assert_eq!(run_ok("+"), "+");
    assert_eq!(run_ok("list-tail"), "list-tail");
}

// ===== Quoting =====

#[test]
fn test_quoted_lists_print_as_written() {
    assert_eq!(run_ok("'(1 2 3)"), "(1 2 3)");
    assert_eq!(run_ok("'(1 2 . 3)"), "(1 2 . 3)");
    assert_eq!(run_ok("'(1 . 2)"), "(1 . 2)");
    assert_eq!(run_ok("'()"), "()");
}

#[test]
fn test_quote_symbol_form_in_operator_position() {
    // (quote X) applies the quote, yielding the wrapped value
    assert_eq!(run_ok("(quote (1 2))"), "(1 2)");
    assert_eq!(run_ok("(quote ())"), "()");
}

#[test]
fn test_quoted_operator_yields_inner_value() {
    assert_eq!(run_ok("('(1 2))"), "(1 2)");
    assert_eq!(run_ok("('5)"), "5");
}

#[test]
fn test_quoted_bool_and_symbol_shapes() {
    assert_eq!(run_ok("'#t"), "(#t)");
    assert_eq!(run_ok("'x"), "(x)");
}

// ===== End-to-end scenarios =====

#[test]
fn test_arithmetic_scenario() {
    assert_eq!(run_ok("(+ 1 2 3)"), "6");
}

#[test]
fn test_nested_application_scenario() {
    assert_eq!(run_ok("(max 1 (+ 2 3) 4)"), "5");
}

#[test]
fn test_unsupported_special_form_is_unknown_procedure() {
    assert_eq!(
        run("(if #t 1 2)"),
        Err(InterpreterError::Runtime(RuntimeError::UnknownProcedure(
            "if".to_string()
        )))
    );
    expect_runtime_error("(define x 1)");
    expect_runtime_error("(lambda (x) x)");
}

#[test]
fn test_proper_and_dotted_list_detection() {
    assert_eq!(run_ok("(list? '(1 2 3))"), "#t");
    assert_eq!(run_ok("(list? '(1 . 2))"), "#f");
}

#[test]
fn test_cdr_scenario() {
    assert_eq!(run_ok("(cdr '(1 2 3))"), "(2 3)");
}

// ===== Invariants =====

#[test]
fn test_list_detection_agrees_with_construction() {
    assert_eq!(run_ok("(list? (list 1 2 3))"), "#t");
    assert_eq!(run_ok("(list? (list))"), "#t");
}

#[test]
fn test_cons_invariant() {
    // Non-list rest prints dotted; list rest extends the list
    assert_eq!(run_ok("(cons 1 2)"), "(1 . 2)");
    assert_eq!(run_ok("(cons 1 '(2 3))"), "(1 2 3)");
    assert_eq!(run_ok("(cons 1 '())"), "(1)");
    assert_eq!(run_ok("(cons '(1 2) 3)"), "((1 2) . 3)");
}

#[test]
fn test_arguments_are_evaluated_recursively() {
    assert_eq!(run_ok("(+ (+ 1 2) (* 2 (abs -3)))"), "9");
    assert_eq!(run_ok("(number? (+ 1 2))"), "#t");
    assert_eq!(run_ok("(null? (list))"), "#t");
}

#[test]
fn test_symbol_arguments_pass_through_unevaluated() {
    assert_eq!(run_ok("(list a b c)"), "(a b c)");
}

// ===== Boundary behaviors =====

#[test]
fn test_empty_input_is_syntax_error() {
    expect_syntax_error("");
    expect_syntax_error("   ");
    expect_syntax_error("\t\n");
}

#[test]
fn test_unmatched_parens_are_syntax_errors() {
    expect_syntax_error("(");
    expect_syntax_error(")");
    expect_syntax_error("(1 2");
    expect_syntax_error("(+ 1))");
}

#[test]
fn test_misplaced_dot_is_syntax_error() {
    expect_syntax_error(".");
    expect_syntax_error("(. 1)");
    expect_syntax_error("(1 . 2 3)");
}

#[test]
fn test_trailing_tokens_are_syntax_errors() {
    assert_eq!(
        run("1 2"),
        Err(InterpreterError::Syntax(SyntaxError::TrailingInput))
    );
    expect_syntax_error("(+ 1 2) (+ 3 4)");
}

#[test]
fn test_unrecognized_character() {
    assert_eq!(
        run("(+ 1 @)"),
        Err(InterpreterError::Syntax(SyntaxError::UnexpectedChar('@')))
    );
}

#[test]
fn test_nil_program_is_runtime_error() {
    expect_runtime_error("()");
}

#[test]
fn test_dotted_argument_list_is_runtime_error() {
    assert_eq!(
        run("(+ 1 . 2)"),
        Err(InterpreterError::Runtime(RuntimeError::DottedArguments))
    );
}

#[test]
fn test_non_procedure_application() {
    expect_runtime_error("(1 2 3)");
    expect_runtime_error("((+ 1 2) 3)");
}

// ===== Interpreter reuse =====

#[test]
fn test_successive_runs_are_independent() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.run("(+ 1 2)").unwrap(), "3");
    assert_eq!(interpreter.run("'(a b)").unwrap(), "(a b)");
    assert!(interpreter.run("(nope)").is_err());
    assert_eq!(interpreter.run("(+ 1 2)").unwrap(), "3");
}

#[test]
fn test_integer_overflow_wraps() {
    assert_eq!(
        run_ok("(+ 9223372036854775807 1)"),
        "-9223372036854775808"
    );
    assert_eq!(run_ok("(abs -9223372036854775808)"), "-9223372036854775808");
}
