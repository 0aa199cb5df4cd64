use std::fmt::Display;

use crate::{
    ast::expr::LitValue,
    ir::{
        Instruction, TacProgram,
        ir_value::{Label, Operand, Temp},
    },
    utils::string::{float_literal, quote},
};

impl Display for Temp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Temp(temp) => write!(f, "{temp}"),
            Operand::Var(name) => write!(f, "{name}"),
            Operand::Const(LitValue::Int(i)) => write!(f, "{i}"),
            Operand::Const(LitValue::Float(x)) => write!(f, "{}", float_literal(*x)),
            Operand::Const(LitValue::Str(s)) => write!(f, "{}", quote(s)),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Copy { dest, src } => write!(f, "{dest} = {src}"),
            Instruction::Binary { dest, op, lhs, rhs } => write!(f, "{dest} = {lhs} {op} {rhs}"),
            Instruction::Unary { dest, op, operand } => write!(f, "{dest} = {op}{operand}"),
            Instruction::Print(operand) => write!(f, "print {operand}"),
            Instruction::Read(name) => write!(f, "read {name}"),
            Instruction::Goto(label) => write!(f, "goto {label}"),
            Instruction::IfFalse { cond, target } => write!(f, "ifFalse {cond} goto {target}"),
            Instruction::Label(label) => write!(f, "{label}:"),
        }
    }
}

impl Display for TacProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::{BinOp, UnOp};

    #[test]
    fn instruction_text() {
        let cases = [
            (
                Instruction::Binary {
                    dest: Temp(3),
                    op: BinOp::Le,
                    lhs: Operand::Var("a".into()),
                    rhs: Operand::Const(LitValue::Int(5)),
                },
                "t3 = a <= 5",
            ),
            (
                Instruction::Unary {
                    dest: Temp(1),
                    op: UnOp::Neg,
                    operand: Operand::Const(LitValue::Float(2.0)),
                },
                "t1 = -2.0",
            ),
            (
                Instruction::Copy {
                    dest: "s".into(),
                    src: Operand::Const(LitValue::Str("hi".to_owned())),
                },
                "s = \"hi\"",
            ),
            (
                Instruction::IfFalse {
                    cond: Operand::Temp(Temp(4)),
                    target: Label(2),
                },
                "ifFalse t4 goto L2",
            ),
            (
                Instruction::Copy {
                    dest: "tiny".into(),
                    src: Operand::Const(LitValue::Float(0.00001)),
                },
                "tiny = 0.00001",
            ),
            (
                Instruction::Print(Operand::Const(LitValue::Float(1e16))),
                "print 10000000000000000.0",
            ),
            (Instruction::Label(Label(7)), "L7:"),
            (Instruction::Read("n".into()), "read n"),
        ];

        for (instruction, text) in cases {
            assert_eq!(instruction.to_string(), text);
        }
    }
}
