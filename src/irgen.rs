pub mod visitor;

use crate::{
    ast::Program,
    ir::{
        Instruction, TacProgram,
        ir_value::{Label, NameCounter, Temp},
    },
    semantics::visitor::Visitor,
};

/// Lowers an AST to three-address code. It does not consult the semantic
/// analyzer and will lower programs the analyzer rejects.
#[derive(Debug, Default)]
pub struct IRGenerator {
    code: Vec<Instruction>,
    counter: NameCounter,
}

impl IRGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowers `program`. The name counter lives as long as the generator, so
    /// successive calls on one instance never reuse a temporary or label.
    pub fn generate(&mut self, program: &Program) -> TacProgram {
        self.visit_program(program);
        let program = TacProgram::new(std::mem::take(&mut self.code));
        tracing::debug!(instructions = program.len(), "TAC generation finished");
        program
    }

    pub(crate) fn emit(&mut self, instruction: Instruction) {
        tracing::trace!(%instruction, "emit");
        self.code.push(instruction);
    }

    pub(crate) fn new_temp(&mut self) -> Temp {
        self.counter.new_temp()
    }

    pub(crate) fn new_label(&mut self) -> Label {
        self.counter.new_label()
    }
}
