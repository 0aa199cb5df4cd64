use crate::ast::{Symbol, expr::LitValue};

/// Compiler-generated temporary, rendered as `t<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temp(pub usize);

/// Jump target, rendered as `L<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Temp(Temp),
    Var(Symbol),
    /// Literals are always inlined, never loaded into a temporary.
    Const(LitValue),
}

impl From<Temp> for Operand {
    fn from(value: Temp) -> Self {
        Operand::Temp(value)
    }
}

/// Issues the numbers behind both temporaries and labels. One counter per
/// generator, so every synthetic name in a program is distinct.
#[derive(Debug, Default)]
pub struct NameCounter(usize);

impl NameCounter {
    pub fn next_id(&mut self) -> usize {
        self.0 += 1;
        self.0
    }

    pub fn new_temp(&mut self) -> Temp {
        Temp(self.next_id())
    }

    pub fn new_label(&mut self) -> Label {
        Label(self.next_id())
    }
}
