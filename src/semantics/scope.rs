use std::collections::HashMap;

use crate::{
    ast::{Symbol, ty::Ty},
    make_semantic_error,
    semantics::error::SemanticResult,
};

/// The single flat scope of a program. A name is bound to one type for the
/// whole run; there is no nesting and no shadowing.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<Symbol, Ty>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &Symbol, ty: Ty) -> SemanticResult<()> {
        if self.symbols.contains_key(name) {
            return Err(make_semantic_error!(DeclarationConflict(name.clone())));
        }
        self.symbols.insert(name.clone(), ty);
        Ok(())
    }

    pub fn get(&self, name: &Symbol) -> SemanticResult<Ty> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| make_semantic_error!(Undeclared(name.clone())))
    }

    pub fn contains(&self, name: &Symbol) -> bool {
        self.symbols.contains_key(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::error::SemanticErrorKind;

    #[test]
    fn declare_then_get() {
        let mut table = SymbolTable::new();
        table.declare(&"x".into(), Ty::Float).unwrap();
        assert_eq!(table.get(&"x".into()).unwrap(), Ty::Float);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn redeclaration_keeps_first_type() {
        let mut table = SymbolTable::new();
        table.declare(&"x".into(), Ty::Int).unwrap();
        let err = table.declare(&"x".into(), Ty::String).unwrap_err();
        assert_eq!(err.kind, SemanticErrorKind::DeclarationConflict("x".into()));
        assert_eq!(table.get(&"x".into()).unwrap(), Ty::Int);
    }

    #[test]
    fn missing_name() {
        let table = SymbolTable::new();
        let err = table.get(&"y".into()).unwrap_err();
        assert_eq!(err.kind, SemanticErrorKind::Undeclared("y".into()));
        assert!(!table.contains(&"y".into()));
    }
}
