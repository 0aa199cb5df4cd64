pub mod expr;
pub mod node;
pub mod printer;
pub mod stmt;
pub mod ty;

use std::fmt::Display;

use crate::{
    ast::stmt::Stmt,
    lexer::{Token, TokenBuffer, TokenIter, TokenPosition},
    tokens::TokenType,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub String);

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub begin: TokenPosition,
    pub end: TokenPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ASTErrorKind {
    MisMatch {
        expected: TokenType,
        actual: TokenType,
    },
    InvalidStatement(TokenType),
    InvalidExpression(TokenType),
    InvalidLiteral(String),
}

impl Display for ASTErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ASTErrorKind::MisMatch {
                expected: TokenType::Id,
                actual,
            } => write!(f, "expected identifier, found {actual}"),
            ASTErrorKind::MisMatch { expected, actual } => {
                write!(f, "expected {expected}, found {actual}")
            }
            ASTErrorKind::InvalidStatement(actual) => write!(f, "invalid statement at {actual}"),
            ASTErrorKind::InvalidExpression(actual) => {
                write!(f, "invalid expression at {actual}")
            }
            ASTErrorKind::InvalidLiteral(lexeme) => write!(f, "invalid literal {lexeme}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ASTError {
    pub kind: ASTErrorKind,
    pub pos: TokenPosition,
}

impl Display for ASTError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.pos)
    }
}

impl std::error::Error for ASTError {}

pub type ASTResult<T> = Result<T, ASTError>;

/// A grammar rule. Each rule consumes exactly the tokens it owns and fails
/// without recovery on the first unexpected token.
pub trait Eatable: Sized {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self>;
}

#[macro_export]
macro_rules! match_keyword {
    ($iter:expr, $token_type:expr) => {{
        let token = $iter.peek();
        if token.token_type != $token_type {
            return Err($crate::ast::ASTError {
                kind: $crate::ast::ASTErrorKind::MisMatch {
                    expected: $token_type,
                    actual: token.token_type,
                },
                pos: token.pos,
            });
        }
        $iter.next()
    }};
}

#[derive(Debug)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Eatable for Program {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        let begin = iter.get_pos();

        let mut stmts = Vec::new();
        while !iter.is_at_end() {
            if let Some(stmt) = Stmt::eat_optional(iter)? {
                stmts.push(stmt);
            }
        }

        Ok(Self {
            stmts,
            span: Span {
                begin,
                end: iter.get_pos(),
            },
        })
    }
}

/// Builds the AST of a whole program from a lexed token stream.
pub fn parse(tokens: Vec<Token<'_>>) -> ASTResult<Program> {
    let buffer = TokenBuffer::from_tokens(tokens);
    let program = Program::eat(&mut buffer.iter())?;
    tracing::debug!(statements = program.stmts.len(), "parsing finished");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn empty_program() {
        let program = parse(tokenize("").unwrap()).unwrap();
        assert!(program.stmts.is_empty());
    }

    #[test]
    fn empty_statements_are_dropped() {
        let program = parse(tokenize(";; int x; ;").unwrap()).unwrap();
        assert_eq!(program.stmts.len(), 1);
    }

    #[test]
    fn error_points_at_offending_token() {
        let err = parse(tokenize("int x\nx = 1;").unwrap()).unwrap_err();
        assert_eq!(
            err.kind,
            ASTErrorKind::MisMatch {
                expected: TokenType::Semi,
                actual: TokenType::Id
            }
        );
        assert_eq!(err.pos, TokenPosition { line: 2, col: 1 });
        assert_eq!(err.to_string(), "expected ';', found Id at line 2 col 1");
    }

    #[test]
    fn stray_closing_brace() {
        let err = parse(tokenize("}").unwrap()).unwrap_err();
        assert_eq!(
            err.kind,
            ASTErrorKind::InvalidStatement(TokenType::CloseCurly)
        );
    }
}
