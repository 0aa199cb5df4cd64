pub mod ir_output;
pub mod ir_value;

use std::ops::Deref;

use enum_as_inner::EnumAsInner;

use crate::{
    ast::{
        Symbol,
        expr::{BinOp, UnOp},
    },
    ir::ir_value::{Label, Operand, Temp},
};

/// One three-address instruction. Every computing instruction has at most one
/// operator; control flow is expressed only through labels and jumps.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Instruction {
    /// `dest = src`
    Copy { dest: Symbol, src: Operand },
    /// `dest = lhs op rhs`
    Binary {
        dest: Temp,
        op: BinOp,
        lhs: Operand,
        rhs: Operand,
    },
    /// `dest = op operand`
    Unary {
        dest: Temp,
        op: UnOp,
        operand: Operand,
    },
    Print(Operand),
    Read(Symbol),
    Goto(Label),
    /// Jumps to `target` when `cond` is false, falls through otherwise.
    IfFalse { cond: Operand, target: Label },
    Label(Label),
}

/// A lowered program: the flat instruction list handed to later stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TacProgram {
    pub instructions: Vec<Instruction>,
}

impl TacProgram {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.instructions.iter().filter_map(|i| i.as_label().copied())
    }
}

impl Deref for TacProgram {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.instructions
    }
}

impl IntoIterator for TacProgram {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}
