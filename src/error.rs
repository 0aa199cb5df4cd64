use serde::{Deserialize, Serialize};

use crate::{
    ast::ASTError,
    lexer::{LexError, TokenPosition},
    semantics::SemanticError,
};

/// Error categories a caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Declaration,
    Scope,
    Type,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] ASTError),

    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexical(_) => ErrorKind::Lexical,
            CompileError::Syntax(_) => ErrorKind::Syntax,
            CompileError::Semantic(err) => err.category(),
        }
    }

    pub fn pos(&self) -> Option<TokenPosition> {
        match self {
            CompileError::Lexical(err) => Some(err.pos),
            CompileError::Syntax(err) => Some(err.pos),
            CompileError::Semantic(err) => err.pos,
        }
    }
}
