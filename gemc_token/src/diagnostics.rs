use std::fmt::Display;

use crate::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    Hint,
    Warning,
    Error,
}

/// Additive side channel for conditions the scanner deliberately does not
/// fail on. Reading (or ignoring) these never changes the token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct LexWarning {
    pub kind: LexWarningKind,
    pub location: Location,
    pub level: DiagnosticLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexWarningKind {
    UnknownCharacter(char),
    UnterminatedString,
    UnterminatedChar,
    UnterminatedBlockComment,
}

impl LexWarning {
    pub fn new(kind: LexWarningKind, location: Location) -> Self {
        Self {
            kind,
            location,
            level: DiagnosticLevel::Warning,
        }
    }
}

impl Display for LexWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LexWarningKind::UnknownCharacter(c) => {
                write!(f, "{}: unrecognised character '{c}'", self.location)
            }
            LexWarningKind::UnterminatedString => {
                write!(f, "{}: unterminated string literal", self.location)
            }
            LexWarningKind::UnterminatedChar => {
                write!(f, "{}: unterminated character literal", self.location)
            }
            LexWarningKind::UnterminatedBlockComment => {
                write!(f, "{}: unterminated block comment", self.location)
            }
        }
    }
}
