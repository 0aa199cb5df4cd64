pub mod analyzer;
pub mod error;
pub mod scope;
pub mod visitor;

pub use analyzer::SemanticAnalyzer;
pub use error::{SemanticError, SemanticErrorKind, SemanticResult};
pub use scope::SymbolTable;
