use std::fs;

use gemc_asm::tokens_to_asm;
use gemc_lexer::Lexer;
use gemc_token::TokenKind;

use anyhow::Result;

fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("err: source file not provided");
        eprintln!("usage: gemc base.gem [out.asm]");
        std::process::exit(1);
    };
    let out_path = std::env::args().nth(2).unwrap_or_else(|| "out.asm".to_owned());

    let source = fs::read_to_string(&path)?;

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();

    for warning in lexer.warnings() {
        eprintln!("{path}:{warning}");
    }
    for token in tokens.iter().filter(|t| t.kind() == TokenKind::Unknown) {
        eprintln!(
            "{path}:{}: unknown token \"{}\"",
            token.location(),
            token.lexeme()
        );
    }

    let asm = tokens_to_asm(&tokens);

    println!("{asm}");
    fs::write(&out_path, &asm)?;

    Ok(())
}
