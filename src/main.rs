use std::{env, fs::read_to_string, process::exit, rc::Rc, time::Instant};

use minic::{display_error, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("minic"));
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&Error::from(error), &source, file_path);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());
    println!("Tokens:");
    for token in &tokens {
        println!("  {}", token.debug());
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(program) => program,
        Err(error) => {
            display_error(&Error::from(error), &source, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("AST:\n{}", program);
    println!("Total time: {:?}", start.elapsed());
}
