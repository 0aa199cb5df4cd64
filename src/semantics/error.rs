use std::fmt::Display;

use crate::{
    ast::{Symbol, expr::BinOp, ty::Ty},
    error::ErrorKind,
    lexer::TokenPosition,
};

#[derive(Debug, Clone)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub pos: Option<TokenPosition>,
    #[cfg(debug_assertions)]
    pub file: &'static str,
    #[cfg(debug_assertions)]
    pub line: u32,
}

impl SemanticError {
    /// Keeps the innermost position: only the first call has an effect.
    pub fn set_pos(mut self, pos: TokenPosition) -> Self {
        if self.pos.is_none() {
            self.pos = Some(pos);
        }

        self
    }

    pub fn category(&self) -> ErrorKind {
        self.kind.category()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    DeclarationConflict(Symbol),
    Undeclared(Symbol),
    TypeMismatch { expected: Ty, found: Ty },
    OperandMismatch { op: BinOp, lhs: Ty, rhs: Ty },
}

impl SemanticErrorKind {
    pub fn category(&self) -> ErrorKind {
        match self {
            SemanticErrorKind::DeclarationConflict(_) => ErrorKind::Declaration,
            SemanticErrorKind::Undeclared(_) => ErrorKind::Scope,
            SemanticErrorKind::TypeMismatch { .. } | SemanticErrorKind::OperandMismatch { .. } => {
                ErrorKind::Type
            }
        }
    }
}

impl Display for SemanticErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticErrorKind::DeclarationConflict(name) => {
                write!(f, "variable '{name}' is already declared")
            }
            SemanticErrorKind::Undeclared(name) => write!(f, "variable '{name}' is not declared"),
            SemanticErrorKind::TypeMismatch { expected, found } => {
                write!(f, "mismatched types: expected {expected}, found {found}")
            }
            SemanticErrorKind::OperandMismatch { op, lhs, rhs } => {
                write!(f, "operands of '{op}' have different types: {lhs} and {rhs}")
            }
        }
    }
}

#[macro_export]
macro_rules! make_semantic_error {
    ($kind:ident $($tail:tt)*) => {
        $crate::semantics::error::SemanticError {
            kind: $crate::semantics::error::SemanticErrorKind::$kind $($tail)*,
            pos: None,
            #[cfg(debug_assertions)]
            file: file!(),
            #[cfg(debug_assertions)]
            line: line!(),
        }
    };
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "{} at {}", self.kind, pos),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for SemanticError {}

pub type SemanticResult<T> = Result<T, SemanticError>;
