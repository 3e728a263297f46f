// ABOUTME: Recursive-descent reader turning the token stream into a value tree

use crate::error::SyntaxError;
use crate::tokenizer::{Token, Tokenizer};
use crate::value::{Value, ValueRef};

/// Parse exactly one expression from `input`.
///
/// Trailing tokens after the expression are a syntax error. The result is
/// `None` for the bare empty list `()`.
pub fn read(input: &str) -> Result<ValueRef, SyntaxError> {
    let mut tokenizer = Tokenizer::new(input)?;
    let expr = read_expr(&mut tokenizer)?;
    if !tokenizer.is_end() {
        return Err(SyntaxError::TrailingInput);
    }
    Ok(expr)
}

/// Read one complete expression, dispatching on the current token.
fn read_expr(tokenizer: &mut Tokenizer) -> Result<ValueRef, SyntaxError> {
    if tokenizer.is_end() {
        return Err(SyntaxError::UnexpectedEof);
    }
    match tokenizer.token().clone() {
        Token::Integer(n) => {
            tokenizer.advance()?;
            Ok(Value::integer(n))
        }
        Token::Bool(b) => {
            tokenizer.advance()?;
            Ok(Value::boolean(b))
        }
        Token::Symbol(name) => {
            tokenizer.advance()?;
            if name == "quote" {
                let inner = read_expr(tokenizer)?;
                Ok(Value::quote(inner))
            } else {
                Ok(Value::symbol(name))
            }
        }
        Token::Quote => {
            tokenizer.advance()?;
            let inner = read_expr(tokenizer)?;
            Ok(Value::quote(inner))
        }
        Token::OpenParen => {
            tokenizer.advance()?;
            read_list_tail(tokenizer)
        }
        Token::CloseParen => Err(SyntaxError::UnexpectedToken(")")),
        Token::Dot => Err(SyntaxError::UnexpectedToken(".")),
    }
}

/// Consume list items up to the matching close paren. Called with the
/// opening paren already consumed; returns nil for `()`.
fn read_list_tail(tokenizer: &mut Tokenizer) -> Result<ValueRef, SyntaxError> {
    if tokenizer.is_end() {
        return Err(SyntaxError::UnexpectedEof);
    }
    if tokenizer.token() == &Token::CloseParen {
        tokenizer.advance()?;
        return Ok(None);
    }

    let head = read_expr(tokenizer)?;
    if tokenizer.is_end() {
        return Err(SyntaxError::UnexpectedEof);
    }
    if tokenizer.token() == &Token::Dot {
        tokenizer.advance()?;
        let tail = read_expr(tokenizer)?;
        if tokenizer.is_end() || tokenizer.token() != &Token::CloseParen {
            return Err(SyntaxError::MissingCloseParen);
        }
        tokenizer.advance()?;
        Ok(Value::cell(head, tail))
    } else {
        let rest = read_list_tail(tokenizer)?;
        Ok(Value::cell(head, rest))
    }
}
