use enum_as_inner::EnumAsInner;

use crate::{
    ast::{ASTError, ASTErrorKind, ASTResult, Eatable, Span, Symbol, expr::Expr, ty::Ty},
    lexer::TokenIter,
    match_keyword,
    tokens::TokenType,
};

#[derive(Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, EnumAsInner)]
pub enum StmtKind {
    VarDecl(VarDeclStmt),
    Assign(AssignStmt),
    Print(PrintStmt),
    Read(ReadStmt),
    If(IfStmt),
    While(WhileStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// Parses one statement, returning `None` for a lone `;`.
    pub fn eat_optional(iter: &mut TokenIter) -> ASTResult<Option<Self>> {
        let begin = iter.get_pos();

        let kind = match iter.peek_type() {
            TokenType::Int | TokenType::Float | TokenType::String => {
                StmtKind::VarDecl(VarDeclStmt::eat(iter)?)
            }
            // A statement starting with a name is always an assignment.
            TokenType::Id => StmtKind::Assign(AssignStmt::eat(iter)?),
            TokenType::Print => StmtKind::Print(PrintStmt::eat(iter)?),
            TokenType::Read => StmtKind::Read(ReadStmt::eat(iter)?),
            TokenType::If => StmtKind::If(IfStmt::eat(iter)?),
            TokenType::While => StmtKind::While(WhileStmt::eat(iter)?),
            TokenType::OpenCurly => StmtKind::Block(BlockStmt::eat(iter)?),
            TokenType::Semi => {
                iter.advance();
                return Ok(None);
            }
            actual => {
                return Err(ASTError {
                    kind: ASTErrorKind::InvalidStatement(actual),
                    pos: begin,
                });
            }
        };

        Ok(Some(Self {
            kind,
            span: Span {
                begin,
                end: iter.get_pos(),
            },
        }))
    }
}

impl Eatable for Stmt {
    /// Used for branch and loop bodies, where a lone `;` stands for an empty
    /// block.
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        let begin = iter.get_pos();
        Ok(Self::eat_optional(iter)?.unwrap_or_else(|| Stmt {
            kind: StmtKind::Block(BlockStmt(Vec::new())),
            span: Span {
                begin,
                end: iter.get_pos(),
            },
        }))
    }
}

#[derive(Debug)]
pub struct VarDeclStmt {
    pub ty: Ty,
    pub name: Symbol,
    pub init: Option<Box<Expr>>,
}

impl Eatable for VarDeclStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        let ty_token = iter.next();
        let ty = Ty::try_from(ty_token.token_type).map_err(|_| ASTError {
            kind: ASTErrorKind::InvalidStatement(ty_token.token_type),
            pos: ty_token.pos,
        })?;

        let name = match_keyword!(iter, TokenType::Id).lexeme.into();

        let init = if iter.eat_if(TokenType::Eq).is_some() {
            Some(Box::new(Expr::eat(iter)?))
        } else {
            None
        };

        match_keyword!(iter, TokenType::Semi);

        Ok(Self { ty, name, init })
    }
}

#[derive(Debug)]
pub struct AssignStmt {
    pub name: Symbol,
    pub value: Box<Expr>,
}

impl Eatable for AssignStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        let name = match_keyword!(iter, TokenType::Id).lexeme.into();
        match_keyword!(iter, TokenType::Eq);
        let value = Expr::eat(iter)?;
        match_keyword!(iter, TokenType::Semi);

        Ok(Self {
            name,
            value: Box::new(value),
        })
    }
}

#[derive(Debug)]
pub struct PrintStmt(pub Vec<Expr>);

impl Eatable for PrintStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        match_keyword!(iter, TokenType::Print);
        match_keyword!(iter, TokenType::OpenPar);

        let mut exprs = vec![Expr::eat(iter)?];
        while iter.eat_if(TokenType::Comma).is_some() {
            exprs.push(Expr::eat(iter)?);
        }

        match_keyword!(iter, TokenType::ClosePar);
        match_keyword!(iter, TokenType::Semi);

        Ok(Self(exprs))
    }
}

#[derive(Debug)]
pub struct ReadStmt(pub Symbol);

impl Eatable for ReadStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        match_keyword!(iter, TokenType::Read);
        match_keyword!(iter, TokenType::OpenPar);
        let name = match_keyword!(iter, TokenType::Id).lexeme.into();
        match_keyword!(iter, TokenType::ClosePar);
        match_keyword!(iter, TokenType::Semi);

        Ok(Self(name))
    }
}

#[derive(Debug)]
pub struct IfStmt {
    pub cond: Box<Expr>,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl Eatable for IfStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        match_keyword!(iter, TokenType::If);
        match_keyword!(iter, TokenType::OpenPar);
        let cond = Expr::eat(iter)?;
        match_keyword!(iter, TokenType::ClosePar);

        let then_branch = Stmt::eat(iter)?;

        // Greedy: an `else` belongs to the innermost `if` still open.
        let else_branch = if iter.eat_if(TokenType::Else).is_some() {
            Some(Box::new(Stmt::eat(iter)?))
        } else {
            None
        };

        Ok(Self {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }
}

#[derive(Debug)]
pub struct WhileStmt {
    pub cond: Box<Expr>,
    pub body: Box<Stmt>,
}

impl Eatable for WhileStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        match_keyword!(iter, TokenType::While);
        match_keyword!(iter, TokenType::OpenPar);
        let cond = Expr::eat(iter)?;
        match_keyword!(iter, TokenType::ClosePar);
        let body = Stmt::eat(iter)?;

        Ok(Self {
            cond: Box::new(cond),
            body: Box::new(body),
        })
    }
}

#[derive(Debug)]
pub struct BlockStmt(pub Vec<Stmt>);

impl Eatable for BlockStmt {
    fn eat(iter: &mut TokenIter) -> ASTResult<Self> {
        match_keyword!(iter, TokenType::OpenCurly);

        let mut stmts = Vec::new();
        while !matches!(iter.peek_type(), TokenType::CloseCurly | TokenType::EOF) {
            if let Some(stmt) = Stmt::eat_optional(iter)? {
                stmts.push(stmt);
            }
        }

        match_keyword!(iter, TokenType::CloseCurly);

        Ok(Self(stmts))
    }
}
