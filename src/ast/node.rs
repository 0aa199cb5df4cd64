//! Uniform, read-only view of AST nodes for generic consumers such as the
//! printer. Every node exposes a kind name and its named fields in source
//! order; each field value is classified so a consumer knows whether to
//! recurse into it or treat it as a leaf.

use crate::{
    ast::{
        Program,
        expr::{BinaryExpr, Expr, ExprKind, LitValue, UnaryExpr, VarExpr},
        stmt::{
            AssignStmt, BlockStmt, IfStmt, PrintStmt, ReadStmt, Stmt, StmtKind, VarDeclStmt,
            WhileStmt,
        },
    },
    utils::string::float_literal,
};

#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    None,
    /// A member of a fixed enumeration, such as a type or an operator.
    Const(&'static str),
    Scalar(String),
    Seq(Vec<FieldValue<'a>>),
    Node(NodeRef<'a>),
}

impl<'a> From<&'a Stmt> for FieldValue<'a> {
    fn from(value: &'a Stmt) -> Self {
        FieldValue::Node(NodeRef::Stmt(value))
    }
}

impl<'a> From<&'a Expr> for FieldValue<'a> {
    fn from(value: &'a Expr) -> Self {
        FieldValue::Node(NodeRef::Expr(value))
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::None, Into::into)
    }
}

fn seq<'a, T: 'a>(items: &'a [T]) -> FieldValue<'a>
where
    &'a T: Into<FieldValue<'a>>,
{
    FieldValue::Seq(items.iter().map(Into::into).collect())
}

impl<'a> NodeRef<'a> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeRef::Program(_) => "Program",
            NodeRef::Stmt(stmt) => match &stmt.kind {
                StmtKind::VarDecl(_) => "VarDecl",
                StmtKind::Assign(_) => "Assignment",
                StmtKind::Print(_) => "Print",
                StmtKind::Read(_) => "Read",
                StmtKind::If(_) => "If",
                StmtKind::While(_) => "While",
                StmtKind::Block(_) => "Block",
            },
            NodeRef::Expr(expr) => match &expr.kind {
                ExprKind::Binary(_) => "BinaryExpr",
                ExprKind::Unary(_) => "UnaryExpr",
                ExprKind::Lit(_) => "Literal",
                ExprKind::Var(_) => "Variable",
            },
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, FieldValue<'a>)> {
        match *self {
            NodeRef::Program(Program { stmts, span: _ }) => vec![("statements", seq(stmts))],
            NodeRef::Stmt(stmt) => match &stmt.kind {
                StmtKind::VarDecl(VarDeclStmt { ty, name, init }) => vec![
                    ("var_type", FieldValue::Const(ty.into())),
                    ("name", FieldValue::Scalar(name.to_string())),
                    ("initializer", FieldValue::from(init.as_deref())),
                ],
                StmtKind::Assign(AssignStmt { name, value }) => vec![
                    ("name", FieldValue::Scalar(name.to_string())),
                    ("value", FieldValue::from(&**value)),
                ],
                StmtKind::Print(PrintStmt(exprs)) => vec![("expressions", seq(exprs))],
                StmtKind::Read(ReadStmt(name)) => {
                    vec![("name", FieldValue::Scalar(name.to_string()))]
                }
                StmtKind::If(IfStmt {
                    cond,
                    then_branch,
                    else_branch,
                }) => vec![
                    ("condition", FieldValue::from(&**cond)),
                    ("then_branch", FieldValue::from(&**then_branch)),
                    ("else_branch", FieldValue::from(else_branch.as_deref())),
                ],
                StmtKind::While(WhileStmt { cond, body }) => vec![
                    ("condition", FieldValue::from(&**cond)),
                    ("body", FieldValue::from(&**body)),
                ],
                StmtKind::Block(BlockStmt(stmts)) => vec![("statements", seq(stmts))],
            },
            NodeRef::Expr(expr) => match &expr.kind {
                ExprKind::Binary(BinaryExpr(op, lhs, rhs)) => vec![
                    ("left", FieldValue::from(&**lhs)),
                    ("operator", FieldValue::Const(op.into())),
                    ("right", FieldValue::from(&**rhs)),
                ],
                ExprKind::Unary(UnaryExpr(op, operand)) => vec![
                    ("operator", FieldValue::Const(op.into())),
                    ("expr", FieldValue::from(&**operand)),
                ],
                ExprKind::Lit(lit) => vec![
                    (
                        "value",
                        FieldValue::Scalar(match &lit.0 {
                            LitValue::Int(i) => i.to_string(),
                            LitValue::Float(x) => float_literal(*x),
                            LitValue::Str(s) => s.clone(),
                        }),
                    ),
                    ("literal_type", FieldValue::Const(lit.ty().into())),
                ],
                ExprKind::Var(VarExpr(name)) => {
                    vec![("name", FieldValue::Scalar(name.to_string()))]
                }
            },
        }
    }
}
