use std::collections::HashMap;

macro_rules! define_rules {
    ($($id:ident: $rule:literal), *) => {
        pub fn get_lex_rules() -> Vec<(String, String)> {
            let mut rules: Vec<(String, String)> = Vec::new();

            $(
                let mut li = $rule.to_string();
                for prev_rule in &rules {
                    li = li.replace(&prev_rule.0, &prev_rule.1);
                }
                rules.push((format!("{{{}}}", stringify!($id)), format!("({})", li)));
            )*

            rules
        }
    };
}

define_rules! {
    DEC_DIGIT: "[0-9]",
    DEC_LITERAL: "{DEC_DIGIT}+",

    IDENTIFIER_OR_KEYWORD: "[A-Za-z_][A-Za-z0-9_]*",

    INTEGER_LITERAL: "{DEC_LITERAL}",
    FLOAT_LITERAL: r"{DEC_LITERAL}\.{DEC_LITERAL}",
    STRING_LITERAL: r#""[^"\n]*""#
}

macro_rules! define_tokens {
    (@action_is_skip) => {false};
    (@action_is_skip skip) => {true};
    (@action_is_skip $other:ident) => {false};

    (@is_literal) => {false};
    (@is_literal literal) => {true};
    (@is_literal $other:ident) => {false};

    (@is_keyword) => {false};
    (@is_keyword keyword) => {true};
    (@is_keyword $other:ident) => {false};

    ($($token:ident : $([$attr:ident])? $pattern:literal $(-> $action:ident)?), *) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
        pub enum TokenType {
            $($token, )*
            EOF
        }

        /// Reserved words. They are never matched by a rule of their own; an
        /// identifier-shaped lexeme found in this table is reclassified.
        pub fn create_keyword_map() -> HashMap<&'static str, TokenType> {
            let mut map = HashMap::new();
            $(
                if define_tokens!(@is_keyword $($attr)?) {
                    map.insert($pattern, TokenType::$token);
                }
            )*
            map
        }

        /// The ordered rule table. The first rule matching at the current
        /// position wins, so multi-character operators come before their
        /// single-character prefixes.
        pub fn get_all_tokens() -> Vec<(TokenType, String)> {
            let lex_rules = get_lex_rules();

            let mut v = Vec::new();
            $(
                if !define_tokens!(@is_keyword $($attr)?) {
                    let pat = if define_tokens!(@is_literal $($attr)?) {
                        regex::escape($pattern)
                    } else {
                        let mut t: String = $pattern.to_string();
                        for rule in &lex_rules {
                            t = t.replace(&rule.0, &rule.1);
                        }
                        t
                    };
                    let pat = format!(r"\A(?:{})", pat);

                    v.push((TokenType::$token, pat));
                }
            )*
            v
        }

        impl TokenType {
            /// Fixed source text of keywords and punctuation.
            pub fn to_keyword(&self) -> Option<&'static str> {
                match self {
                    $(
                        TokenType::$token => {
                            if define_tokens!(@is_keyword $($attr)?) || define_tokens!(@is_literal $($attr)?) {
                                Some($pattern)
                            } else {
                                None
                            }
                        }
                    )*
                    TokenType::EOF => None
                }
            }

            pub fn should_skip(&self) -> bool {
                match self {
                    $(
                        TokenType::$token => define_tokens!(@action_is_skip $($action)?),
                    )*
                    TokenType::EOF => false
                }
            }
        }
    };
}

define_tokens! {
    // Keywords
    Int    :[keyword] "int",
    Float  :[keyword] "float",
    String :[keyword] "string",
    If     :[keyword] "if",
    Else   :[keyword] "else",
    While  :[keyword] "while",
    Print  :[keyword] "print",
    Read   :[keyword] "read",

    // Operators, longest first
    EqEq   :[literal] "==",
    Ne     :[literal] "!=",
    Ge     :[literal] ">=",
    Le     :[literal] "<=",
    AndAnd :[literal] "&&",
    OrOr   :[literal] "||",

    Comment: r"//[^\n]*" -> skip,

    Gt     :[literal] ">",
    Lt     :[literal] "<",
    Eq     :[literal] "=",
    Plus   :[literal] "+",
    Minus  :[literal] "-",
    Star   :[literal] "*",
    Slash  :[literal] "/",
    Not    :[literal] "!",

    // Delimiters
    OpenPar   :[literal] "(",
    ClosePar  :[literal] ")",
    OpenCurly :[literal] "{",
    CloseCurly:[literal] "}",
    Comma     :[literal] ",",
    Semi      :[literal] ";",

    // Literals
    StrLit: "{STRING_LITERAL}",
    FloatLit: "{FLOAT_LITERAL}",
    IntLit: "{INTEGER_LITERAL}",

    // Identifiers
    Id: "{IDENTIFIER_OR_KEYWORD}",

    // Others
    Whitespace: r"[ \t\r]+" -> skip,
    Newline: r"\n" -> skip
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_keyword() {
            Some(text) => write!(f, "'{text}'"),
            None => {
                let name: &'static str = self.into();
                write!(f, "{name}")
            }
        }
    }
}
