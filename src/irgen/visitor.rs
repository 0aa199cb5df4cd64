use crate::{
    ast::{
        Program,
        expr::{BinaryExpr, Expr, ExprKind, LitExpr, UnaryExpr, VarExpr},
        stmt::{
            AssignStmt, BlockStmt, IfStmt, PrintStmt, ReadStmt, Stmt, StmtKind, VarDeclStmt,
            WhileStmt,
        },
    },
    ir::{Instruction, ir_value::Operand},
    irgen::IRGenerator,
    semantics::visitor::Visitor,
};

impl<'ast> Visitor<'ast> for IRGenerator {
    type DefaultRes = ();
    type StmtRes = ();
    type ExprRes = Operand;

    fn visit_program(&mut self, Program { stmts, span: _ }: &'ast Program) -> Self::DefaultRes {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, Stmt { kind, span: _ }: &'ast Stmt) -> Self::StmtRes {
        match kind {
            StmtKind::VarDecl(stmt) => self.visit_var_decl_stmt(stmt),
            StmtKind::Assign(stmt) => self.visit_assign_stmt(stmt),
            StmtKind::Print(stmt) => self.visit_print_stmt(stmt),
            StmtKind::Read(stmt) => self.visit_read_stmt(stmt),
            StmtKind::If(stmt) => self.visit_if_stmt(stmt),
            StmtKind::While(stmt) => self.visit_while_stmt(stmt),
            StmtKind::Block(stmt) => self.visit_block_stmt(stmt),
        }
    }

    fn visit_var_decl_stmt(
        &mut self,
        VarDeclStmt { ty: _, name, init }: &'ast VarDeclStmt,
    ) -> Self::StmtRes {
        if let Some(init) = init {
            let src = self.visit_expr(init);
            self.emit(Instruction::Copy {
                dest: name.clone(),
                src,
            });
        }
    }

    fn visit_assign_stmt(&mut self, AssignStmt { name, value }: &'ast AssignStmt) -> Self::StmtRes {
        let src = self.visit_expr(value);
        self.emit(Instruction::Copy {
            dest: name.clone(),
            src,
        });
    }

    fn visit_print_stmt(&mut self, PrintStmt(exprs): &'ast PrintStmt) -> Self::StmtRes {
        for expr in exprs {
            let operand = self.visit_expr(expr);
            self.emit(Instruction::Print(operand));
        }
    }

    fn visit_read_stmt(&mut self, ReadStmt(name): &'ast ReadStmt) -> Self::StmtRes {
        self.emit(Instruction::Read(name.clone()));
    }

    fn visit_if_stmt(
        &mut self,
        IfStmt {
            cond,
            then_branch,
            else_branch,
        }: &'ast IfStmt,
    ) -> Self::StmtRes {
        let cond = self.visit_expr(cond);
        let else_label = self.new_label();
        let end_label = self.new_label();

        self.emit(Instruction::IfFalse {
            cond,
            target: else_label,
        });
        self.visit_stmt(then_branch);
        self.emit(Instruction::Goto(end_label));
        self.emit(Instruction::Label(else_label));
        if let Some(else_branch) = else_branch {
            self.visit_stmt(else_branch);
        }
        self.emit(Instruction::Label(end_label));
    }

    fn visit_while_stmt(&mut self, WhileStmt { cond, body }: &'ast WhileStmt) -> Self::StmtRes {
        let start_label = self.new_label();
        let end_label = self.new_label();

        self.emit(Instruction::Label(start_label));
        let cond = self.visit_expr(cond);
        self.emit(Instruction::IfFalse {
            cond,
            target: end_label,
        });
        self.visit_stmt(body);
        self.emit(Instruction::Goto(start_label));
        self.emit(Instruction::Label(end_label));
    }

    fn visit_block_stmt(&mut self, BlockStmt(stmts): &'ast BlockStmt) -> Self::StmtRes {
        for stmt in stmts {
            self.visit_stmt(stmt);
        }
    }

    fn visit_expr(&mut self, Expr { kind, span: _ }: &'ast Expr) -> Self::ExprRes {
        match kind {
            ExprKind::Binary(expr) => self.visit_binary_expr(expr),
            ExprKind::Unary(expr) => self.visit_unary_expr(expr),
            ExprKind::Lit(expr) => self.visit_lit_expr(expr),
            ExprKind::Var(expr) => self.visit_var_expr(expr),
        }
    }

    fn visit_binary_expr(&mut self, BinaryExpr(op, lhs, rhs): &'ast BinaryExpr) -> Self::ExprRes {
        let lhs = self.visit_expr(lhs);
        let rhs = self.visit_expr(rhs);
        let dest = self.new_temp();
        self.emit(Instruction::Binary {
            dest,
            op: *op,
            lhs,
            rhs,
        });
        dest.into()
    }

    fn visit_unary_expr(&mut self, UnaryExpr(op, expr): &'ast UnaryExpr) -> Self::ExprRes {
        let operand = self.visit_expr(expr);
        let dest = self.new_temp();
        self.emit(Instruction::Unary {
            dest,
            op: *op,
            operand,
        });
        dest.into()
    }

    fn visit_lit_expr(&mut self, LitExpr(value): &'ast LitExpr) -> Self::ExprRes {
        Operand::Const(value.clone())
    }

    fn visit_var_expr(&mut self, VarExpr(name): &'ast VarExpr) -> Self::ExprRes {
        Operand::Var(name.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::parse, irgen::IRGenerator, lexer::tokenize};

    fn lower(src: &str) -> Vec<String> {
        let program = parse(tokenize(src).unwrap()).unwrap();
        IRGenerator::new()
            .generate(&program)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn literals_are_inlined() {
        assert_eq!(lower("int x = 5; print(x, 2.5, \"s\");"), [
            "x = 5",
            "print x",
            "print 2.5",
            "print \"s\"",
        ]);
    }

    #[test]
    fn declaration_without_initializer_emits_nothing() {
        assert!(lower("int x; float y;").is_empty());
    }

    #[test]
    fn nested_expression_order() {
        assert_eq!(lower("x = (a + b) * -c;"), [
            "t1 = a + b",
            "t2 = -c",
            "t3 = t1 * t2",
            "x = t3",
        ]);
    }

    #[test]
    fn if_else_lowering() {
        assert_eq!(lower("if (a == 1) print(1); else print(2);"), [
            "t1 = a == 1",
            "ifFalse t1 goto L2",
            "print 1",
            "goto L3",
            "L2:",
            "print 2",
            "L3:",
        ]);
    }

    #[test]
    fn if_without_else_still_emits_both_labels() {
        assert_eq!(lower("if (a) read(a);"), [
            "ifFalse a goto L1",
            "read a",
            "goto L2",
            "L1:",
            "L2:",
        ]);
    }

    #[test]
    fn counter_spans_generate_calls() {
        let program = parse(tokenize("x = a + 1;").unwrap()).unwrap();
        let mut generator = IRGenerator::new();
        let first = generator.generate(&program);
        let second = generator.generate(&program);
        assert_eq!(first[0].to_string(), "t1 = a + 1");
        assert_eq!(second[0].to_string(), "t2 = a + 1");
    }
}
