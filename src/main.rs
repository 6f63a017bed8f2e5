use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use toyparse::{
    ast::ast::render_program, display_error, lexer::lexer::tokenize, lexer::tokens::Token,
    parser::parser::parse,
};

/// Tokenize and parse a source file, printing the tokens and the AST
#[derive(Parser, Debug)]
#[command(name = "toyparse", version, about)]
struct Cli {
    /// Source file to read
    file: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree
    #[arg(long)]
    ast: bool,

    /// Report how long each phase took (on stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Neither flag means both
    let (show_tokens, show_ast) = if cli.tokens || cli.ast {
        (cli.tokens, cli.ast)
    } else {
        (true, true)
    };

    let file_name = cli.file.to_string_lossy().to_string();
    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: cannot open file {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);

    if cli.verbose {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    if show_tokens {
        println!("=== Tokens ===");
        for token in &tokens {
            println!("  {}", token);
        }
        println!();
    }

    for error in tokens.iter().filter_map(Token::lex_error) {
        display_error(&error, &source, &file_name);
    }

    if !show_ast {
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    println!("=== AST ===");
    println!("{}", render_program(&program));

    ExitCode::SUCCESS
}
