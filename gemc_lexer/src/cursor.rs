use std::str::Chars;

use gemc_token::Location;

/// Peekable view over the source text. Owns the only mutable scanning
/// state: the character iterator and the current line/column.
#[derive(Debug)]
pub struct Cursor<'a> {
    chars: Chars<'a>,
    location: Location,
}

pub const EOF_CHAR: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            location: Location::default(),
        }
    }

    /// Location of the next character to be consumed.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub fn second(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    pub fn third(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.location.advance(c);
        Some(c)
    }

    /// Consume the next character only when it satisfies the predicate.
    pub fn bump_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        if !self.is_eof() && predicate(self.first()) {
            self.bump()
        } else {
            None
        }
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}
