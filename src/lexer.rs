use std::{collections::HashMap, fmt::Display};

use fancy_regex::Regex;
use once_cell::sync::Lazy;

use crate::tokens::{TokenType, create_keyword_map, get_all_tokens};

static TOKEN_RULES: Lazy<Vec<(TokenType, Regex)>> = Lazy::new(|| {
    get_all_tokens()
        .into_iter()
        .map(|(t, s)| (t, Regex::new(&s).expect("lexical rules are valid patterns")))
        .collect()
});

static KEYWORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(create_keyword_map);

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPosition {
    pub line: usize,
    pub col: usize,
}

impl Default for TokenPosition {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} col {}", self.line, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub lexeme: &'a str,
    pub pos: TokenPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character {ch:?} at {pos}")]
pub struct LexError {
    pub ch: char,
    pub pos: TokenPosition,
}

pub struct Lexer<'a> {
    codes: &'a str,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(codes: &'a str) -> Lexer<'a> {
        Lexer {
            codes,
            line: 1,
            col: 1,
        }
    }

    pub fn get_pos(&self) -> TokenPosition {
        TokenPosition {
            line: self.line,
            col: self.col,
        }
    }

    fn consume(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.codes = &self.codes[lexeme.len()..];
    }

    /// Scans the next significant token. Once the input is exhausted every
    /// call yields an `EOF` token.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            let pos = self.get_pos();
            if self.codes.is_empty() {
                return Ok(Token {
                    token_type: TokenType::EOF,
                    lexeme: self.codes,
                    pos,
                });
            }

            let codes = self.codes;
            let matched = TOKEN_RULES.iter().find_map(|(t, re)| {
                re.find(codes)
                    .ok()
                    .flatten()
                    .filter(|m| !m.as_str().is_empty())
                    .map(|m| (*t, m.as_str()))
            });

            let Some((token_type, lexeme)) = matched else {
                let ch = codes.chars().next().unwrap_or_default();
                return Err(LexError { ch, pos });
            };

            self.consume(lexeme);

            if token_type.should_skip() {
                continue;
            }

            let token_type = match token_type {
                TokenType::Id => KEYWORDS.get(lexeme).copied().unwrap_or(TokenType::Id),
                other => other,
            };

            tracing::trace!(?token_type, lexeme, %pos, "token");
            return Ok(Token {
                token_type,
                lexeme,
                pos,
            });
        }
    }
}

/// Lexes the whole input. The result always ends with exactly one `EOF` token.
pub fn tokenize(codes: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(codes);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let is_eof = token.token_type == TokenType::EOF;
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    tracing::debug!(count = tokens.len(), "lexing finished");
    Ok(tokens)
}

pub struct TokenBuffer<'a> {
    buffer: Vec<Token<'a>>,
}

/// Cursor over a token buffer with one token of lookahead. The trailing `EOF`
/// token is never stepped over.
#[derive(Debug, Clone)]
pub struct TokenIter<'a> {
    buffer: &'a [Token<'a>],
    pos: usize,
}

impl<'a> TokenIter<'a> {
    pub fn advance(&mut self) {
        if self.pos + 1 < self.buffer.len() {
            self.pos += 1;
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &'a Token<'a> {
        let ret = self.peek();
        self.advance();
        ret
    }

    pub fn peek(&self) -> &'a Token<'a> {
        &self.buffer[self.pos]
    }

    pub fn peek_type(&self) -> TokenType {
        self.peek().token_type
    }

    pub fn is_at_end(&self) -> bool {
        self.peek_type() == TokenType::EOF
    }

    /// Consumes the current token if it has the given type.
    pub fn eat_if(&mut self, token_type: TokenType) -> Option<&'a Token<'a>> {
        if self.peek_type() == token_type {
            Some(self.next())
        } else {
            None
        }
    }

    pub fn get_pos(&self) -> TokenPosition {
        self.peek().pos
    }
}

impl<'a> TokenBuffer<'a> {
    pub fn new(codes: &'a str) -> Result<TokenBuffer<'a>, LexError> {
        Ok(Self::from_tokens(tokenize(codes)?))
    }

    /// Wraps an already lexed stream, appending an `EOF` token if missing.
    pub fn from_tokens(mut buffer: Vec<Token<'a>>) -> TokenBuffer<'a> {
        if buffer.last().is_none_or(|t| t.token_type != TokenType::EOF) {
            let pos = buffer.last().map_or_else(TokenPosition::default, |t| t.pos);
            buffer.push(Token {
                token_type: TokenType::EOF,
                lexeme: "",
                pos,
            });
        }
        TokenBuffer { buffer }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.buffer
    }

    pub fn iter(&self) -> TokenIter<'_> {
        TokenIter {
            buffer: &self.buffer,
            pos: 0,
        }
    }
}
