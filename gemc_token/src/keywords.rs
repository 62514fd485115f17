use phf::phf_map;

use crate::TokenKind;

/// Reserved words of the Gem language, keywords and type keywords both.
/// Built once at compile time; identifier scanning does a single lookup here.
pub const RESERVED: phf::Map<&'static str, TokenKind> = phf_map! {
    "import" => TokenKind::Import,
    "iter" => TokenKind::Iter,
    "while" => TokenKind::While,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "enum" => TokenKind::Enum,
    "compare" => TokenKind::Compare,
    "on" => TokenKind::On,
    "default" => TokenKind::Default,
    "public" => TokenKind::Public,
    "private" => TokenKind::Private,
    "continue" => TokenKind::Continue,
    "break" => TokenKind::Break,
    "exitProgram" => TokenKind::ExitProgram,
    "vec" => TokenKind::Vec,
    "tuple" => TokenKind::Tuple,
    "destroy" => TokenKind::Destroy,
    "delete" => TokenKind::Delete,
    "u8" => TokenKind::U8,
    "u16" => TokenKind::U16,
    "u32" => TokenKind::U32,
    "u64" => TokenKind::U64,
    "i8" => TokenKind::I8,
    "i16" => TokenKind::I16,
    "i32" => TokenKind::I32,
    "i64" => TokenKind::I64,
    "f32" => TokenKind::F32,
    "f64" => TokenKind::F64,
    "bool" => TokenKind::Bool,
    "str" => TokenKind::Str,
};

pub fn check_reserved(ident: &str) -> Option<TokenKind> {
    RESERVED.get(ident).copied()
}
