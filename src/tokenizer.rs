// ABOUTME: Streaming tokenizer producing one token of lookahead over a character source

use crate::error::SyntaxError;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(i64),
    Symbol(String),
    Bool(bool),
    OpenParen,
    CloseParen,
    Dot,
    Quote,
}

/// Characters that may begin a symbol, besides ASCII letters.
fn is_symbol_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '=' | '*' | '#' | '-' | '+' | '/' | '>' | '<')
}

/// Characters that may continue a symbol.
fn is_symbol_continuation(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '<' | '>' | '=' | '/' | '*' | '#' | '?' | '!' | '+' | '-')
}

/// A lookahead lexical scanner. Holds the current token; `advance` reads
/// the next one. The constructor primes the first token, so lexical errors
/// at the very start of the input surface immediately.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    current: Token,
    ended: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Result<Self, SyntaxError> {
        let mut tokenizer = Tokenizer {
            chars: input.chars().peekable(),
            // Stale until the priming advance; never observed by callers
            // that check is_end first.
            current: Token::Quote,
            ended: false,
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    /// The current token. Stale once `is_end` reports true; callers must
    /// check the end flag first.
    pub fn token(&self) -> &Token {
        &self.current
    }

    pub fn is_end(&self) -> bool {
        self.ended
    }

    /// Scan the next token. Once the source is exhausted the end flag is
    /// set and further calls are no-ops.
    pub fn advance(&mut self) -> Result<(), SyntaxError> {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }

        let Some(ch) = self.chars.next() else {
            self.ended = true;
            return Ok(());
        };

        self.current = match ch {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '.' => Token::Dot,
            '\'' => Token::Quote,
            _ if ch.is_ascii_digit() => self.lex_integer(ch)?,
            '-' | '+' if matches!(self.chars.peek(), Some(c) if c.is_ascii_digit()) => {
                self.lex_integer(ch)?
            }
            '#' if matches!(self.chars.peek(), Some('f') | Some('t')) => {
                Token::Bool(self.chars.next() == Some('t'))
            }
            _ if is_symbol_start(ch) => self.lex_symbol(ch),
            _ => return Err(SyntaxError::UnexpectedChar(ch)),
        };
        Ok(())
    }

    /// Maximal digit run after an optional sign already consumed as `lead`.
    fn lex_integer(&mut self, lead: char) -> Result<Token, SyntaxError> {
        let mut literal = String::new();
        literal.push(lead);
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            literal.push(c);
            self.chars.next();
        }
        let value = literal
            .parse::<i64>()
            .map_err(|_| SyntaxError::IntegerOutOfRange(literal.clone()))?;
        Ok(Token::Integer(value))
    }

    fn lex_symbol(&mut self, lead: char) -> Token {
        let mut name = String::new();
        name.push(lead);
        while let Some(&c) = self.chars.peek() {
            if !is_symbol_continuation(c) {
                break;
            }
            name.push(c);
            self.chars.next();
        }
        Token::Symbol(name)
    }
}

/// Drain an input string into a token vector. Test and diagnostic helper;
/// the reader consumes tokens lazily instead.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokenizer = Tokenizer::new(input)?;
    let mut tokens = Vec::new();
    while !tokenizer.is_end() {
        tokens.push(tokenizer.token().clone());
        tokenizer.advance()?;
    }
    Ok(tokens)
}
