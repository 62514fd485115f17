pub mod cursor;

use cursor::Cursor;

use gemc_token::{
    diagnostics::{LexWarning, LexWarningKind},
    keywords::check_reserved,
    Literal, Location, Token, TokenKind,
};

/// Single-pass scanner over one source buffer. Never fails: malformed
/// input degrades to Unknown tokens or silently truncated literals, with
/// the details reported on the additive warnings channel.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    warnings: Vec<LexWarning>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            warnings: vec![],
        }
    }

    /// Drive the scanner to completion. The result always ends with
    /// exactly one Eof token at the final cursor position.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = vec![];
        loop {
            self.skip_trivia();
            if self.cursor.is_eof() {
                break;
            }
            tokens.push(self.scan_token());
        }
        tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.cursor.location(),
        ));
        tokens
    }

    /// Warnings accumulated so far. Strictly observational; the token
    /// stream is identical whether or not this is ever read.
    pub fn warnings(&self) -> &[LexWarning] {
        &self.warnings
    }

    fn warn(&mut self, kind: LexWarningKind, location: Location) {
        self.warnings.push(LexWarning::new(kind, location));
    }

    /// Consume whitespace, `||` line comments and `|--`..`--|` block
    /// comments until something token-worthy is next.
    fn skip_trivia(&mut self) {
        loop {
            let c = self.cursor.first();
            if c.is_ascii_whitespace() && !self.cursor.is_eof() {
                self.cursor.bump();
            } else if c == '|' && self.cursor.second() == '|' {
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.eat_while(|c| c != '\n');
            } else if c == '|' && self.cursor.second() == '-' && self.cursor.third() == '-' {
                let open = self.cursor.location();
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.bump();
                self.skip_block_comment(open);
            } else {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self, open: Location) {
        loop {
            if self.cursor.is_eof() {
                // no closing marker; the rest of the input is gone
                self.warn(LexWarningKind::UnterminatedBlockComment, open);
                return;
            }
            if self.cursor.first() == '-'
                && self.cursor.second() == '-'
                && self.cursor.third() == '|'
            {
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.bump();
                return;
            }
            self.cursor.bump();
        }
    }

    fn scan_token(&mut self) -> Token {
        self.skip_trivia();
        let start = self.cursor.location();
        let c = match self.cursor.bump() {
            Some(c) => c,
            None => return Token::new(TokenKind::Eof, String::new(), start),
        };

        match c {
            '+' => Token::fixed(TokenKind::Plus, start),
            '-' => {
                if self.cursor.first() == '>' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::Arrow, start)
                } else {
                    Token::fixed(TokenKind::Minus, start)
                }
            }
            '*' => Token::fixed(TokenKind::Multiply, start),
            '/' => Token::fixed(TokenKind::Divide, start),
            '%' => Token::fixed(TokenKind::Modulo, start),
            '=' => {
                if self.cursor.first() == '=' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::Equal, start)
                } else {
                    Token::fixed(TokenKind::Assign, start)
                }
            }
            '!' => {
                if self.cursor.first() == '=' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::NotEqual, start)
                } else {
                    Token::fixed(TokenKind::Not, start)
                }
            }
            '<' => {
                if self.cursor.first() == '=' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::LessEqual, start)
                } else if self.cursor.first() == '-' && self.cursor.second() == '>' {
                    // only commit the '-' once the '>' is known to follow;
                    // a bare "<-" leaves the '-' for the next token
                    self.cursor.bump();
                    self.cursor.bump();
                    Token::fixed(TokenKind::BiArrow, start)
                } else {
                    Token::fixed(TokenKind::Less, start)
                }
            }
            '>' => {
                if self.cursor.first() == '=' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::GreaterEqual, start)
                } else {
                    Token::fixed(TokenKind::Greater, start)
                }
            }
            '?' => match self.cursor.first() {
                '+' => {
                    self.cursor.bump();
                    Token::fixed(TokenKind::And, start)
                }
                '?' => {
                    self.cursor.bump();
                    Token::fixed(TokenKind::Or, start)
                }
                _ => {
                    self.warn(LexWarningKind::UnknownCharacter('?'), start);
                    Token::new(TokenKind::Unknown, "?".to_owned(), start)
                }
            },
            '&' => {
                if self.cursor.first() == '@' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::AmpersandAt, start)
                } else {
                    Token::fixed(TokenKind::Ampersand, start)
                }
            }
            // comment openers never reach dispatch, so '|' is always Pipe
            '|' => Token::fixed(TokenKind::Pipe, start),
            ':' => {
                if self.cursor.first() == ':' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::DoubleColon, start)
                } else {
                    Token::fixed(TokenKind::Colon, start)
                }
            }
            '.' => {
                if self.cursor.first() == '.' {
                    self.cursor.bump();
                    Token::fixed(TokenKind::Range, start)
                } else {
                    Token::fixed(TokenKind::Dot, start)
                }
            }
            '(' => Token::fixed(TokenKind::LeftParen, start),
            ')' => Token::fixed(TokenKind::RightParen, start),
            '{' => Token::fixed(TokenKind::LeftBrace, start),
            '}' => Token::fixed(TokenKind::RightBrace, start),
            '[' => Token::fixed(TokenKind::LeftBracket, start),
            ']' => Token::fixed(TokenKind::RightBracket, start),
            ',' => Token::fixed(TokenKind::Comma, start),
            ';' => Token::fixed(TokenKind::Semicolon, start),
            '@' => Token::fixed(TokenKind::At, start),
            '#' => Token::fixed(TokenKind::Hash, start),
            '"' => self.string_literal(),
            '\'' => self.char_literal(),
            c if c.is_ascii_digit() => self.number(c, start),
            c if is_ident_start(c) => self.identifier_or_keyword(c, start),
            c => {
                self.warn(LexWarningKind::UnknownCharacter(c), start);
                Token::new(TokenKind::Unknown, c.to_string(), start)
            }
        }
    }

    /// Digit run, optionally extended by `.` and a further digit run. The
    /// `.` only extends the number when not followed by another `.`, which
    /// keeps `1..2` lexing as integer, range, integer. The value stays in
    /// the lexeme text; no literal payload is attached.
    fn number(&mut self, first: char, start: Location) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.cursor.bump_if(|c| c.is_ascii_digit()) {
            text.push(c);
        }
        if self.cursor.first() == '.' && self.cursor.second() != '.' {
            if let Some(dot) = self.cursor.bump() {
                text.push(dot);
            }
            while let Some(c) = self.cursor.bump_if(|c| c.is_ascii_digit()) {
                text.push(c);
            }
            return Token::new(TokenKind::FloatLiteral, text, start);
        }
        Token::new(TokenKind::IntegerLiteral, text, start)
    }

    /// Text between double quotes. A backslash drops itself and copies the
    /// following character into the text verbatim; there is no escape
    /// translation. Reaching end of input truncates silently.
    fn string_literal(&mut self) -> Token {
        let start = self.cursor.location();
        let mut text = String::new();
        loop {
            if self.cursor.is_eof() {
                self.warn(LexWarningKind::UnterminatedString, start);
                break;
            }
            match self.cursor.first() {
                '"' => {
                    self.cursor.bump();
                    break;
                }
                '\\' => {
                    self.cursor.bump();
                    if let Some(escaped) = self.cursor.bump() {
                        text.push(escaped);
                    }
                }
                _ => {
                    if let Some(c) = self.cursor.bump() {
                        text.push(c);
                    }
                }
            }
        }
        Token::with_literal(
            TokenKind::StringLiteral,
            text.clone(),
            start,
            Literal::Str(text),
        )
    }

    /// Same consumption policy as string literals with `'` delimiters.
    fn char_literal(&mut self) -> Token {
        let start = self.cursor.location();
        let mut text = String::new();
        loop {
            if self.cursor.is_eof() {
                self.warn(LexWarningKind::UnterminatedChar, start);
                break;
            }
            match self.cursor.first() {
                '\'' => {
                    self.cursor.bump();
                    break;
                }
                '\\' => {
                    self.cursor.bump();
                    if let Some(escaped) = self.cursor.bump() {
                        text.push(escaped);
                    }
                }
                _ => {
                    if let Some(c) = self.cursor.bump() {
                        text.push(c);
                    }
                }
            }
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Token::with_literal(TokenKind::CharLiteral, text.clone(), start, Literal::Char(c))
            }
            _ => Token::new(TokenKind::CharLiteral, text, start),
        }
    }

    fn identifier_or_keyword(&mut self, first: char, start: Location) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.cursor.bump_if(is_ident_continue) {
            text.push(c);
        }
        match check_reserved(&text) {
            Some(kind) => Token::new(kind, text, start),
            None => Token::new(TokenKind::Identifier, text, start),
        }
    }
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '#')
}

/// Convenience entry point: tokenize the whole buffer in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use gemc_token::diagnostics::LexWarningKind;
    use gemc_token::{Location, TokenKind};

    use super::{tokenize, Lexer};

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind()).collect()
    }

    fn lexemes(input: &str) -> Vec<String> {
        tokenize(input).iter().map(|t| t.lexeme().to_owned()).collect()
    }

    #[test]
    fn exit_program_statement() {
        let got = tokenize("exitProgram 5;");
        let expected = [
            (TokenKind::ExitProgram, "exitProgram"),
            (TokenKind::IntegerLiteral, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];
        assert_eq!(got.len(), expected.len());
        for (token, (kind, lexeme)) in got.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.lexeme(), lexeme);
        }
    }

    #[test]
    fn bi_arrow() {
        assert_eq!(
            kinds("a <-> b"),
            vec![
                TokenKind::Identifier,
                TokenKind::BiArrow,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexemes("a <-> b")[1], "<->");
    }

    #[test]
    fn bare_less_does_not_become_bi_arrow() {
        assert_eq!(
            kinds("x < y"),
            vec![
                TokenKind::Identifier,
                TokenKind::Less,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn less_never_overconsumes() {
        // "<x": the 'x' must begin the next token
        let got = tokenize("<x");
        assert_eq!(got[0].kind(), TokenKind::Less);
        assert_eq!(got[1].kind(), TokenKind::Identifier);
        assert_eq!(got[1].lexeme(), "x");
        assert_eq!(got[1].location(), Location::new(1, 2));

        // "<-y": no '>' follows, so the '-' stays for the next token
        assert_eq!(
            kinds("<-y"),
            vec![
                TokenKind::Less,
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn float_then_range() {
        let got = tokenize("1.5 .. 2");
        assert_eq!(got[0].kind(), TokenKind::FloatLiteral);
        assert_eq!(got[0].lexeme(), "1.5");
        assert_eq!(got[1].kind(), TokenKind::Range);
        assert_eq!(got[2].kind(), TokenKind::IntegerLiteral);
        assert_eq!(got[2].lexeme(), "2");
        assert_eq!(got[3].kind(), TokenKind::Eof);
    }

    #[test]
    fn integer_range_disambiguation() {
        assert_eq!(
            kinds("1..2"),
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::Range,
                TokenKind::IntegerLiteral,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn trailing_dot_extends_float() {
        let got = tokenize("1.");
        assert_eq!(got[0].kind(), TokenKind::FloatLiteral);
        assert_eq!(got[0].lexeme(), "1.");
    }

    #[test]
    fn numbers_carry_no_literal_payload() {
        let got = tokenize("42 1.5");
        assert!(!got[0].has_literal());
        assert_eq!(got[0].int_literal(), None);
        assert!(!got[1].has_literal());
    }

    #[test]
    fn line_comment_elided() {
        let got = tokenize("|| nothing to see here\nfoo");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind(), TokenKind::Identifier);
        assert_eq!(got[0].lexeme(), "foo");
        assert_eq!(got[0].location(), Location::new(2, 1));
        assert_eq!(got[1].kind(), TokenKind::Eof);
    }

    #[test]
    fn block_comment_elided() {
        let got = tokenize("|-- a { } exitProgram --| x");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind(), TokenKind::Identifier);
        assert_eq!(got[0].lexeme(), "x");
    }

    #[test]
    fn unterminated_block_comment_swallows_rest() {
        let mut lexer = Lexer::new("a |-- b c d");
        let got = lexer.tokenize();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind(), TokenKind::Identifier);
        assert_eq!(got[1].kind(), TokenKind::Eof);
        assert_eq!(lexer.warnings().len(), 1);
        assert_eq!(
            lexer.warnings()[0].kind,
            LexWarningKind::UnterminatedBlockComment
        );
    }

    #[test]
    fn unterminated_string_truncates_silently() {
        let mut lexer = Lexer::new("\"unterminated");
        let got = lexer.tokenize();
        assert_eq!(got[0].kind(), TokenKind::StringLiteral);
        assert_eq!(got[0].lexeme(), "unterminated");
        assert_eq!(got[1].kind(), TokenKind::Eof);
        assert_eq!(got.len(), 2);
        assert_eq!(lexer.warnings().len(), 1);
        assert_eq!(lexer.warnings()[0].kind, LexWarningKind::UnterminatedString);
    }

    #[test]
    fn string_escapes_copy_the_next_character_verbatim() {
        // written \n stays the plain character 'n', and \" does not close
        let got = tokenize("\"a\\nb\\\"c\"");
        assert_eq!(got[0].kind(), TokenKind::StringLiteral);
        assert_eq!(got[0].lexeme(), "anb\"c");
        assert_eq!(got[0].str_value(), Some("anb\"c"));
    }

    #[test]
    fn char_literal_payload() {
        let got = tokenize("'c'");
        assert_eq!(got[0].kind(), TokenKind::CharLiteral);
        assert_eq!(got[0].lexeme(), "c");
        assert_eq!(got[0].char_value(), Some('c'));

        // more than one accumulated character still lexes, without payload
        let got = tokenize("'ab'");
        assert_eq!(got[0].kind(), TokenKind::CharLiteral);
        assert_eq!(got[0].lexeme(), "ab");
        assert_eq!(got[0].char_value(), None);
    }

    #[test]
    fn unterminated_char_literal() {
        let mut lexer = Lexer::new("'x");
        let got = lexer.tokenize();
        assert_eq!(got[0].kind(), TokenKind::CharLiteral);
        assert_eq!(got[0].lexeme(), "x");
        assert_eq!(lexer.warnings()[0].kind, LexWarningKind::UnterminatedChar);
    }

    #[test]
    fn compound_operator_lexeme_fidelity() {
        let input = "-> == != <= >= ?+ ?? &@ :: .. <->";
        let got = tokenize(input);
        let expected = [
            (TokenKind::Arrow, "->"),
            (TokenKind::Equal, "=="),
            (TokenKind::NotEqual, "!="),
            (TokenKind::LessEqual, "<="),
            (TokenKind::GreaterEqual, ">="),
            (TokenKind::And, "?+"),
            (TokenKind::Or, "??"),
            (TokenKind::AmpersandAt, "&@"),
            (TokenKind::DoubleColon, "::"),
            (TokenKind::Range, ".."),
            (TokenKind::BiArrow, "<->"),
        ];
        for (token, (kind, lexeme)) in got.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.lexeme(), lexeme);
        }
        assert_eq!(got.len(), expected.len() + 1);
    }

    #[test]
    fn single_char_fallbacks() {
        assert_eq!(
            kinds("- = ! < > & : . |"),
            vec![
                TokenKind::Minus,
                TokenKind::Assign,
                TokenKind::Not,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Ampersand,
                TokenKind::Colon,
                TokenKind::Dot,
                TokenKind::Pipe,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("(){}[],;@#"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::At,
                TokenKind::Hash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lone_question_mark_is_unknown() {
        let mut lexer = Lexer::new("?");
        let got = lexer.tokenize();
        assert_eq!(got[0].kind(), TokenKind::Unknown);
        assert_eq!(got[0].lexeme(), "?");
        assert_eq!(
            lexer.warnings()[0].kind,
            LexWarningKind::UnknownCharacter('?')
        );
    }

    #[test]
    fn unknown_character_keeps_scanning() {
        let mut lexer = Lexer::new("a $ b");
        let got = lexer.tokenize();
        assert_eq!(
            got.iter().map(|t| t.kind()).collect::<Vec<_>>(),
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(got[1].lexeme(), "$");
        assert_eq!(
            lexer.warnings()[0].kind,
            LexWarningKind::UnknownCharacter('$')
        );
    }

    #[test]
    fn keyword_identifier_partition() {
        for (text, kind) in gemc_token::keywords::RESERVED.entries() {
            let got = tokenize(text);
            assert_eq!(got[0].kind(), *kind);
            assert_eq!(got[0].lexeme(), *text);
        }
        // near misses stay identifiers
        for text in ["exitprogram", "While", "u128", "_if", "iterate"] {
            let got = tokenize(text);
            assert_eq!(got[0].kind(), TokenKind::Identifier, "{text}");
        }
    }

    #[test]
    fn identifier_continue_characters() {
        let got = tokenize("a@b");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].kind(), TokenKind::Identifier);
        assert_eq!(got[0].lexeme(), "a@b");

        let got = tokenize("_x1#y");
        assert_eq!(got[0].lexeme(), "_x1#y");
    }

    #[test]
    fn eof_exactly_once() {
        for input in ["", "   ", "a b c", "|| only a comment", "\"open"] {
            let got = tokenize(input);
            let eofs = got.iter().filter(|t| t.kind() == TokenKind::Eof).count();
            assert_eq!(eofs, 1, "{input:?}");
            assert_eq!(got.last().map(|t| t.kind()), Some(TokenKind::Eof));
            assert_eq!(got.last().map(|t| t.lexeme().to_owned()), Some(String::new()));
        }
    }

    #[test]
    fn locations_track_lines_and_columns() {
        let got = tokenize("a\nbc =");
        assert_eq!(got[0].location(), Location::new(1, 1));
        assert_eq!(got[1].location(), Location::new(2, 1));
        assert_eq!(got[2].location(), Location::new(2, 4));
        assert_eq!(got[3].kind(), TokenKind::Eof);
        assert_eq!(got[3].location(), Location::new(2, 5));
    }

    #[test]
    fn string_location_is_first_content_character() {
        let got = tokenize("\"hi\"");
        assert_eq!(got[0].location(), Location::new(1, 2));
    }
}
