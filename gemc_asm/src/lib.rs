use std::fmt::Write;

use gemc_token::{Token, TokenKind};

/// Turn a token sequence into NASM-style assembly text.
///
/// Every `exitProgram` token immediately followed by an integer literal
/// consumes both and emits the exit sequence with the literal's lexeme.
/// One trailing `call ExitProcess` is emitted regardless of how many
/// pairs matched.
pub fn tokens_to_asm(tokens: &[Token]) -> String {
    let mut output = String::from(
        "section .text\n\
         global main\n\
         extern ExitProcess\n\n\
         main:\n",
    );

    let mut tokens = tokens.iter().peekable();
    while let Some(token) = tokens.next() {
        if token.kind() != TokenKind::ExitProgram {
            continue;
        }
        if let Some(literal) = tokens.next_if(|t| t.kind() == TokenKind::IntegerLiteral) {
            // shadow space plus 8 bytes of alignment
            output.push_str("    sub rsp, 40\n");
            let _ = writeln!(output, "    mov rcx, {}", literal.lexeme());
        }
    }

    output.push_str("    call ExitProcess\n");
    output
}
