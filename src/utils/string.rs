/// Returns the content between the quotes of a string literal lexeme.
pub fn strip_quotes(lexeme: &str) -> Option<&str> {
    lexeme.strip_prefix('"')?.strip_suffix('"')
}

/// Inverse of [`strip_quotes`], used when a string value is written back out.
pub fn quote(content: &str) -> String {
    format!("\"{content}\"")
}

/// Spells a float the way the lexer accepts it: plain decimal, always with a
/// fractional part.
pub fn float_literal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
