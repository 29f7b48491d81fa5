//! Reserved words and the fixed character sets of the Java subset
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Reserved words of the Java subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === MODIFIERS ===
    Public,
    Private,
    Static,
    Final,

    // === DECLARATIONS ===
    Class,
    New,

    // === TYPES ===
    Int,
    Double,
    Void,
    /// `String` is reserved in this subset even though Java treats it as a class name
    String,

    // === CONTROL FLOW ===
    If,
    Else,
    Return,
}

impl Keyword {
    pub const ALL: [Keyword; 13] = [
        Self::Public,
        Self::Private,
        Self::Static,
        Self::Final,
        Self::Class,
        Self::New,
        Self::Int,
        Self::Double,
        Self::Void,
        Self::String,
        Self::If,
        Self::Else,
        Self::Return,
    ];

    /// Exact spelling in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Class => "class",
            Self::New => "new",
            Self::Int => "int",
            Self::Double => "double",
            Self::Void => "void",
            Self::String => "String",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }

    /// Case-sensitive lookup
    pub fn from_str(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-character operators, always tried before single-character ones
pub const TWO_CHAR_OPERATORS: [&str; 12] = [
    "<=", ">=", "==", "!=", "++", "--", "+=", "-=", "*=", "/=", "&&", "||",
];

pub const ONE_CHAR_OPERATORS: [char; 9] = ['=', '+', '-', '*', '/', '<', '>', '!', '%'];

pub const DELIMITERS: [char; 9] = ['(', ')', '{', '}', '[', ']', ';', ',', '.'];

/// Immutable recognition sets owned by a scanner instance
#[derive(Debug, Clone)]
pub struct LexicalSets {
    keywords: HashSet<&'static str>,
    two_char_operators: HashSet<&'static str>,
    one_char_operators: HashSet<char>,
    delimiters: HashSet<char>,
}

impl LexicalSets {
    pub fn java_subset() -> Self {
        Self {
            keywords: Keyword::ALL.iter().map(|kw| kw.as_str()).collect(),
            two_char_operators: TWO_CHAR_OPERATORS.into_iter().collect(),
            one_char_operators: ONE_CHAR_OPERATORS.into_iter().collect(),
            delimiters: DELIMITERS.into_iter().collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// The operator spelled by `first` followed by `second`, if recognized
    pub fn two_char_operator(&self, first: char, second: Option<char>) -> Option<&'static str> {
        let second = second?;
        let mut buf = [0u8; 8];
        let first_len = first.encode_utf8(&mut buf).len();
        let second_len = second.encode_utf8(&mut buf[first_len..]).len();
        let candidate = std::str::from_utf8(&buf[..first_len + second_len]).ok()?;
        self.two_char_operators.get(candidate).copied()
    }

    pub fn is_one_char_operator(&self, ch: char) -> bool {
        self.one_char_operators.contains(&ch)
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }
}

impl Default for LexicalSets {
    fn default() -> Self {
        Self::java_subset()
    }
}
