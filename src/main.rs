use std::{env, path::PathBuf, rc::Rc, time::Instant};

use rill::{
    display_error, lexer::lexer::tokenize, parser::parser::parse, type_checker::type_checker::check,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: rill <file>");
        std::process::exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let file_contents = std::fs::read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            std::process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(String::from(file_name))) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            std::process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let check_start = Instant::now();
    let diagnostics = check(&ast);

    println!("Type checked in {:?}", check_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    if diagnostics.is_empty() {
        println!("0 errors.");
    } else {
        for diagnostic in &diagnostics {
            println!("{}", diagnostic);
        }
        println!("{} errors.", diagnostics.len());
        std::process::exit(1);
    }
}
