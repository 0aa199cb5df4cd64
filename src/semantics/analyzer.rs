use crate::{
    ast::{
        Program,
        expr::{BinaryExpr, Expr, ExprKind, LitExpr, UnaryExpr, VarExpr},
        stmt::{
            AssignStmt, BlockStmt, IfStmt, PrintStmt, ReadStmt, Stmt, StmtKind, VarDeclStmt,
            WhileStmt,
        },
        ty::Ty,
    },
    make_semantic_error,
    semantics::{error::SemanticResult, scope::SymbolTable, visitor::Visitor},
};

/// Single-pass scope and type checker. The first error ends the run.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    table: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(&mut self, program: &Program) -> SemanticResult<()> {
        self.visit_program(program)?;
        tracing::debug!(symbols = self.table.len(), "semantic analysis finished");
        Ok(())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    fn expect_ty(expected: Ty, found: Ty) -> SemanticResult<()> {
        if expected != found {
            return Err(make_semantic_error!(TypeMismatch { expected, found }));
        }
        Ok(())
    }
}

impl<'ast> Visitor<'ast> for SemanticAnalyzer {
    type DefaultRes = SemanticResult<()>;
    type StmtRes = SemanticResult<()>;
    type ExprRes = SemanticResult<Ty>;

    fn visit_program(&mut self, Program { stmts, span: _ }: &'ast Program) -> Self::DefaultRes {
        for stmt in stmts {
            self.visit_stmt(stmt)?;
        }
        Ok(())
    }

    fn visit_stmt(&mut self, Stmt { kind, span }: &'ast Stmt) -> Self::StmtRes {
        match kind {
            StmtKind::VarDecl(stmt) => self.visit_var_decl_stmt(stmt),
            StmtKind::Assign(stmt) => self.visit_assign_stmt(stmt),
            StmtKind::Print(stmt) => self.visit_print_stmt(stmt),
            StmtKind::Read(stmt) => self.visit_read_stmt(stmt),
            StmtKind::If(stmt) => self.visit_if_stmt(stmt),
            StmtKind::While(stmt) => self.visit_while_stmt(stmt),
            StmtKind::Block(stmt) => self.visit_block_stmt(stmt),
        }
        .map_err(|e| e.set_pos(span.begin))
    }

    fn visit_var_decl_stmt(
        &mut self,
        VarDeclStmt { ty, name, init }: &'ast VarDeclStmt,
    ) -> Self::StmtRes {
        // Declared before the initializer is checked, so `int x = x;` passes.
        self.table.declare(name, *ty)?;

        if let Some(init) = init {
            let init_ty = self.visit_expr(init)?;
            Self::expect_ty(*ty, init_ty).map_err(|e| e.set_pos(init.span.begin))?;
        }
        Ok(())
    }

    fn visit_assign_stmt(&mut self, AssignStmt { name, value }: &'ast AssignStmt) -> Self::StmtRes {
        let var_ty = self.table.get(name)?;
        let value_ty = self.visit_expr(value)?;
        Self::expect_ty(var_ty, value_ty).map_err(|e| e.set_pos(value.span.begin))
    }

    fn visit_print_stmt(&mut self, PrintStmt(exprs): &'ast PrintStmt) -> Self::StmtRes {
        for expr in exprs {
            self.visit_expr(expr)?;
        }
        Ok(())
    }

    fn visit_read_stmt(&mut self, ReadStmt(name): &'ast ReadStmt) -> Self::StmtRes {
        self.table.get(name)?;
        Ok(())
    }

    fn visit_if_stmt(
        &mut self,
        IfStmt {
            cond,
            then_branch,
            else_branch,
        }: &'ast IfStmt,
    ) -> Self::StmtRes {
        self.visit_expr(cond)?;
        self.visit_stmt(then_branch)?;
        if let Some(else_branch) = else_branch {
            self.visit_stmt(else_branch)?;
        }
        Ok(())
    }

    fn visit_while_stmt(&mut self, WhileStmt { cond, body }: &'ast WhileStmt) -> Self::StmtRes {
        self.visit_expr(cond)?;
        self.visit_stmt(body)
    }

    fn visit_block_stmt(&mut self, BlockStmt(stmts): &'ast BlockStmt) -> Self::StmtRes {
        for stmt in stmts {
            self.visit_stmt(stmt)?;
        }
        Ok(())
    }

    fn visit_expr(&mut self, Expr { kind, span }: &'ast Expr) -> Self::ExprRes {
        match kind {
            ExprKind::Binary(expr) => self.visit_binary_expr(expr),
            ExprKind::Unary(expr) => self.visit_unary_expr(expr),
            ExprKind::Lit(expr) => self.visit_lit_expr(expr),
            ExprKind::Var(expr) => self.visit_var_expr(expr),
        }
        .map_err(|e| e.set_pos(span.begin))
    }

    fn visit_binary_expr(&mut self, BinaryExpr(op, lhs, rhs): &'ast BinaryExpr) -> Self::ExprRes {
        let lhs = self.visit_expr(lhs)?;
        let rhs = self.visit_expr(rhs)?;
        if lhs != rhs {
            return Err(make_semantic_error!(OperandMismatch { op: *op, lhs, rhs }));
        }
        Ok(lhs)
    }

    /// The operator is not checked against the operand type.
    fn visit_unary_expr(&mut self, UnaryExpr(_, expr): &'ast UnaryExpr) -> Self::ExprRes {
        self.visit_expr(expr)
    }

    fn visit_lit_expr(&mut self, lit: &'ast LitExpr) -> Self::ExprRes {
        Ok(lit.ty())
    }

    fn visit_var_expr(&mut self, VarExpr(name): &'ast VarExpr) -> Self::ExprRes {
        self.table.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::parse,
        error::ErrorKind,
        lexer::{TokenPosition, tokenize},
        semantics::error::{SemanticError, SemanticErrorKind},
    };

    fn analyze(src: &str) -> SemanticResult<SemanticAnalyzer> {
        let program = parse(tokenize(src).unwrap()).unwrap();
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&program).map(|_| analyzer)
    }

    fn analyze_err(src: &str) -> SemanticError {
        analyze(src).unwrap_err()
    }

    #[test]
    fn table_is_populated() {
        let analyzer = analyze("int a; float b = 1.0; string c = \"s\";").unwrap();
        let table = analyzer.symbols();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"b".into()).unwrap(), Ty::Float);
        assert_eq!(table.get(&"c".into()).unwrap(), Ty::String);
    }

    #[test]
    fn no_numeric_promotion() {
        let err = analyze_err("float f = 1;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::TypeMismatch {
                expected: Ty::Float,
                found: Ty::Int
            }
        );
        assert_eq!(err.category(), ErrorKind::Type);
    }

    #[test]
    fn binary_operands_must_agree() {
        let err = analyze_err("int a = 1;\nfloat b = 2.0;\nprint(a + b);");
        assert!(matches!(
            err.kind,
            SemanticErrorKind::OperandMismatch {
                lhs: Ty::Int,
                rhs: Ty::Float,
                ..
            }
        ));
        assert_eq!(err.pos, Some(TokenPosition { line: 3, col: 7 }));
    }

    #[test]
    fn comparison_yields_operand_type() {
        // `a < 5` has type int, so it can initialise an int.
        analyze("int a = 1; int b = a < 5;").unwrap();
        let err = analyze_err("int a = 1; float b = a < 5;");
        assert_eq!(err.category(), ErrorKind::Type);
    }

    #[test]
    fn unary_keeps_operand_type() {
        analyze("float f = -1.5; string s = !\"x\"; int i = !3;").unwrap();
    }

    #[test]
    fn undeclared_names() {
        for src in ["x = 1;", "read(x);", "print(x);", "int y = x;", "if (x) {}", "while (x) ;"] {
            let err = analyze_err(src);
            assert_eq!(err.kind, SemanticErrorKind::Undeclared("x".into()), "{src}");
            assert_eq!(err.category(), ErrorKind::Scope);
        }
    }

    #[test]
    fn duplicate_declaration_in_nested_block() {
        let err = analyze_err("int x; { int x; }");
        assert_eq!(err.kind, SemanticErrorKind::DeclarationConflict("x".into()));
        assert_eq!(err.category(), ErrorKind::Declaration);
        assert_eq!(err.pos, Some(TokenPosition { line: 1, col: 10 }));
    }

    #[test]
    fn flat_scope_outlives_blocks() {
        analyze("{ int x; } x = 2;").unwrap();
    }

    #[test]
    fn self_reference_in_initializer() {
        analyze("int x = x + 1;").unwrap();
    }

    #[test]
    fn first_error_wins() {
        let err = analyze_err("y = 1; int x = 1.5;");
        assert_eq!(err.kind, SemanticErrorKind::Undeclared("y".into()));
    }

    #[test]
    fn assignment_type_checked() {
        let err = analyze_err("string s; s = 3;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::TypeMismatch {
                expected: Ty::String,
                found: Ty::Int
            }
        );
        assert_eq!(err.pos, Some(TokenPosition { line: 1, col: 15 }));
        assert_eq!(
            err.to_string(),
            "mismatched types: expected string, found int at line 1 col 15"
        );
    }
}
