use crate::tokens::TokenType;

/// Declared and inferred value types. Types only ever compare for exact
/// equality; there is no promotion between `int` and `float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Ty {
    Int,
    Float,
    String,
}

impl TryFrom<TokenType> for Ty {
    type Error = ();

    fn try_from(value: TokenType) -> Result<Self, Self::Error> {
        match value {
            TokenType::Int => Ok(Ty::Int),
            TokenType::Float => Ok(Ty::Float),
            TokenType::String => Ok(Ty::String),
            _ => Err(()),
        }
    }
}
