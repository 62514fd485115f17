use std::fmt::Display;

pub mod diagnostics;
pub mod keywords;

/// Line/column position of the first character of a lexeme. Both start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Account for one consumed character. A newline bumps the line and
    /// resets the column; everything else bumps the column.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Extra payload carried by string and character literal tokens. Numeric
/// tokens keep their value in the lexeme text only and never populate this.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Import,
    Iter,
    While,
    If,
    Else,
    Enum,
    Compare,
    On,
    Default,
    Public,
    Private,
    Continue,
    Break,
    ExitProgram,
    Vec,
    Tuple,
    Destroy,
    Delete,

    // Type keywords
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    Str,

    // Literals
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    Identifier,

    // Operators
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Modulo,       // %
    Assign,       // =
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    And,          // ?+
    Or,           // ??
    Not,          // !
    Arrow,        // ->
    BiArrow,      // <->
    Range,        // ..
    DoubleColon,  // ::

    // References
    Ampersand,   // & (mutable reference)
    AmpersandAt, // &@ (immutable reference)

    Pipe, // |

    // Punctuation
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Dot,          // .

    // Special symbols
    At,   // @
    Hash, // #

    Eof,
    Unknown,
}

impl TokenKind {
    /// Canonical text for fixed symbols and keywords, a descriptive name
    /// for the value-carrying kinds.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Import => "import",
            TokenKind::Iter => "iter",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Compare => "compare",
            TokenKind::On => "on",
            TokenKind::Default => "default",
            TokenKind::Public => "public",
            TokenKind::Private => "private",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
            TokenKind::ExitProgram => "exitProgram",
            TokenKind::Vec => "vec",
            TokenKind::Tuple => "tuple",
            TokenKind::Destroy => "destroy",
            TokenKind::Delete => "delete",
            TokenKind::U8 => "u8",
            TokenKind::U16 => "u16",
            TokenKind::U32 => "u32",
            TokenKind::U64 => "u64",
            TokenKind::I8 => "i8",
            TokenKind::I16 => "i16",
            TokenKind::I32 => "i32",
            TokenKind::I64 => "i64",
            TokenKind::F32 => "f32",
            TokenKind::F64 => "f64",
            TokenKind::Bool => "bool",
            TokenKind::Str => "str",
            TokenKind::IntegerLiteral => "integer_literal",
            TokenKind::FloatLiteral => "float_literal",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::CharLiteral => "char_literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::And => "?+",
            TokenKind::Or => "??",
            TokenKind::Not => "!",
            TokenKind::Arrow => "->",
            TokenKind::BiArrow => "<->",
            TokenKind::Range => "..",
            TokenKind::DoubleColon => "::",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandAt => "&@",
            TokenKind::Pipe => "|",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified unit of source text. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    location: Location,
    literal: Option<Literal>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, location: Location) -> Self {
        Self {
            kind,
            lexeme,
            location,
            literal: None,
        }
    }

    pub fn with_literal(
        kind: TokenKind,
        lexeme: String,
        location: Location,
        literal: Literal,
    ) -> Self {
        Self {
            kind,
            lexeme,
            location,
            literal: Some(literal),
        }
    }

    /// A fixed-symbol token whose lexeme is the kind's canonical text.
    pub fn fixed(kind: TokenKind, location: Location) -> Self {
        Self::new(kind, kind.as_str().to_owned(), location)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn has_literal(&self) -> bool {
        self.literal.is_some()
    }

    pub fn int_literal(&self) -> Option<i64> {
        match self.literal {
            Some(Literal::Int(v)) => Some(v),
            _ => None,
        }
    }

    pub fn float_literal(&self) -> Option<f64> {
        match self.literal {
            Some(Literal::Float(v)) => Some(v),
            _ => None,
        }
    }

    pub fn char_value(&self) -> Option<char> {
        match self.literal {
            Some(Literal::Char(v)) => Some(v),
            _ => None,
        }
    }

    pub fn str_value(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Str(v)) => Some(v),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, \"{}\", at {}",
            self.kind, self.lexeme, self.location
        )?;
        if let Some(literal) = &self.literal {
            match literal {
                Literal::Int(v) => write!(f, ", literal: {v}")?,
                Literal::Float(v) => write!(f, ", literal: {v}")?,
                Literal::Char(v) => write!(f, ", literal: {v}")?,
                Literal::Str(v) => write!(f, ", literal: {v}")?,
            }
        }
        write!(f, ")")
    }
}
