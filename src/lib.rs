pub mod ast;
pub mod error;
pub mod ir;
pub mod irgen;
pub mod lexer;
pub mod semantics;
pub mod tokens;
pub mod utils;

use crate::{
    ast::{Program, parse},
    error::CompileError,
    ir::TacProgram,
    irgen::IRGenerator,
    lexer::tokenize,
    semantics::SemanticAnalyzer,
};

/// Whether lowering waits for the semantic check or runs ahead of it.
/// Either way a failing check fails the whole compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineOrder {
    #[default]
    ValidateThenGenerate,
    GenerateThenValidate,
}

#[derive(Debug)]
pub struct Compilation {
    pub program: Program,
    pub tac: TacProgram,
}

/// Runs every stage over one source text with fresh state.
pub fn compile(src: &str, order: PipelineOrder) -> Result<Compilation, CompileError> {
    let tokens = tokenize(src)?;
    let program = parse(tokens)?;

    let mut analyzer = SemanticAnalyzer::new();
    let mut generator = IRGenerator::new();

    let tac = match order {
        PipelineOrder::ValidateThenGenerate => {
            analyzer.analyze(&program)?;
            generator.generate(&program)
        }
        PipelineOrder::GenerateThenValidate => {
            let tac = generator.generate(&program);
            analyzer.analyze(&program)?;
            tac
        }
    };

    Ok(Compilation { program, tac })
}
