use enum_as_inner::EnumAsInner;

use crate::{
    ast::{ASTError, ASTErrorKind, ASTResult, Eatable, Span, Symbol, ty::Ty},
    lexer::{Token, TokenIter},
    match_keyword,
    tokens::TokenType,
    utils::string::strip_quotes,
};

#[derive(Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, EnumAsInner)]
pub enum ExprKind {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Lit(LitExpr),
    Var(VarExpr),
}

impl Eatable for Expr {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        Self::eat_with_priority(iter, 0)
    }
}

impl Expr {
    /// Precedence climbing over the binary operators. The right operand is
    /// parsed one level tighter, which makes every level left-associative.
    pub fn eat_with_priority(iter: &mut TokenIter, min_priority: usize) -> ASTResult<Self> {
        let begin = iter.get_pos();
        let mut expr1 = Self::eat_unary(iter)?;

        while let Ok(op) = BinOp::try_from(iter.peek()) {
            if op.get_priority() < min_priority {
                break;
            }
            iter.advance();

            let expr2 = Self::eat_with_priority(iter, op.get_priority() + 1)?;
            expr1 = Expr {
                kind: ExprKind::Binary(BinaryExpr(op, Box::new(expr1), Box::new(expr2))),
                span: Span {
                    begin,
                    end: iter.get_pos(),
                },
            };
        }

        Ok(expr1)
    }

    fn eat_unary(iter: &mut TokenIter) -> ASTResult<Self> {
        let begin = iter.get_pos();

        if let Ok(op) = UnOp::try_from(iter.peek()) {
            iter.advance();
            let expr = Self::eat_unary(iter)?;
            return Ok(Expr {
                kind: ExprKind::Unary(UnaryExpr(op, Box::new(expr))),
                span: Span {
                    begin,
                    end: iter.get_pos(),
                },
            });
        }

        Self::eat_primary(iter)
    }

    fn eat_primary(iter: &mut TokenIter) -> ASTResult<Self> {
        let begin = iter.get_pos();

        let kind = match iter.peek_type() {
            TokenType::IntLit | TokenType::FloatLit | TokenType::StrLit => {
                ExprKind::Lit(LitExpr::eat(iter)?)
            }
            TokenType::Id => ExprKind::Var(VarExpr(iter.next().lexeme.into())),
            TokenType::OpenPar => {
                iter.advance();
                let inner = Expr::eat(iter)?;
                match_keyword!(iter, TokenType::ClosePar);
                return Ok(inner);
            }
            actual => {
                return Err(ASTError {
                    kind: ASTErrorKind::InvalidExpression(actual),
                    pos: begin,
                });
            }
        };

        Ok(Expr {
            kind,
            span: Span {
                begin,
                end: iter.get_pos(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    Int(i64),
    Float(f64),
    /// String content without the surrounding quotes.
    Str(String),
}

impl LitValue {
    pub fn ty(&self) -> Ty {
        match self {
            LitValue::Int(_) => Ty::Int,
            LitValue::Float(_) => Ty::Float,
            LitValue::Str(_) => Ty::String,
        }
    }
}

#[derive(Debug)]
pub struct LitExpr(pub LitValue);

impl LitExpr {
    pub fn ty(&self) -> Ty {
        self.0.ty()
    }
}

impl Eatable for LitExpr {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        let token = iter.next();
        let invalid = || ASTError {
            kind: ASTErrorKind::InvalidLiteral(token.lexeme.to_owned()),
            pos: token.pos,
        };

        let value = match token.token_type {
            TokenType::IntLit => LitValue::Int(token.lexeme.parse().map_err(|_| invalid())?),
            TokenType::FloatLit => LitValue::Float(token.lexeme.parse().map_err(|_| invalid())?),
            TokenType::StrLit => {
                LitValue::Str(strip_quotes(token.lexeme).ok_or_else(invalid)?.to_owned())
            }
            _ => return Err(invalid()),
        };

        Ok(Self(value))
    }
}

#[derive(Debug)]
pub struct VarExpr(pub Symbol);

#[derive(Debug)]
pub struct UnaryExpr(pub UnOp, pub Box<Expr>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum UnOp {
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "-")]
    Neg,
}

impl<'a> TryFrom<&Token<'a>> for UnOp {
    type Error = ();

    fn try_from(value: &Token<'a>) -> Result<Self, Self::Error> {
        match value.token_type {
            TokenType::Not => Ok(UnOp::Not),
            TokenType::Minus => Ok(UnOp::Neg),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
pub struct BinaryExpr(pub BinOp, pub Box<Expr>, pub Box<Expr>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum BinOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Le,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Ge,
}

impl BinOp {
    pub fn get_priority(&self) -> usize {
        match self {
            Self::Or => 10,
            Self::And => 20,
            Self::Eq | Self::Ne => 30,
            Self::Lt | Self::Gt | Self::Le | Self::Ge => 40,
            Self::Add | Self::Sub => 50,
            Self::Mul | Self::Div => 60,
        }
    }
}

impl<'a> TryFrom<&Token<'a>> for BinOp {
    type Error = ();

    fn try_from(value: &Token<'a>) -> Result<Self, Self::Error> {
        match value.token_type {
            TokenType::Plus => Ok(BinOp::Add),
            TokenType::Minus => Ok(BinOp::Sub),
            TokenType::Star => Ok(BinOp::Mul),
            TokenType::Slash => Ok(BinOp::Div),
            TokenType::AndAnd => Ok(BinOp::And),
            TokenType::OrOr => Ok(BinOp::Or),
            TokenType::EqEq => Ok(BinOp::Eq),
            TokenType::Ne => Ok(BinOp::Ne),
            TokenType::Lt => Ok(BinOp::Lt),
            TokenType::Le => Ok(BinOp::Le),
            TokenType::Gt => Ok(BinOp::Gt),
            TokenType::Ge => Ok(BinOp::Ge),
            _ => Err(()),
        }
    }
}
