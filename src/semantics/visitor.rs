use crate::ast::{
    Program,
    expr::{BinaryExpr, Expr, LitExpr, UnaryExpr, VarExpr},
    stmt::{AssignStmt, BlockStmt, IfStmt, PrintStmt, ReadStmt, Stmt, VarDeclStmt, WhileStmt},
};

macro_rules! func_sig {
    ($cat:ident, $res:ident, $($name:ident)?) => {
        paste::paste!{
            fn [<visit_ $($name:snake _)? $cat:snake>](&mut self, [<$cat:snake>]: &'ast [<$($name:camel)? $cat:camel>]) -> Self::[<$res:camel Res>];
        }
    };
}

macro_rules! add_func {
    ($cat:ident, $res:ident, ($($name:ident),*)) => {
        func_sig!{$cat, $res,}
        $(
            func_sig!{$cat, $res, $name}
        )*
    };
}

/// One method per node kind. `visit_stmt` and `visit_expr` are expected to
/// dispatch with an exhaustive match, so a new node kind fails to compile
/// until every consumer handles it.
pub trait Visitor<'ast> {
    type DefaultRes;
    type StmtRes;
    type ExprRes;

    fn visit_program(&mut self, program: &'ast Program) -> Self::DefaultRes;

    add_func! {
        Stmt, Stmt,
        (VarDecl, Assign, Print, Read, If, While, Block)
    }

    add_func! {
        Expr, Expr,
        (Binary, Unary, Lit, Var)
    }
}
