use std::io::{self, Write};
use std::{env, process};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rocks_lang::Rocks;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        n if n > 2 => {
            println!("Usage: plox [script]");
            process::exit(64);
        }
        2 => run_file(&args[1]),
        _ => run_prompt(),
    }
}

fn run_file(path: &str) {
    let mut stdout = io::stdout();
    let mut rocks = Rocks::new(&mut stdout);

    if let Err(err) = rocks.run_file(path) {
        eprintln!("Failed to read {path}: {err}");
        process::exit(64);
    }
}

fn run_prompt() {
    let history_path = home::home_dir().map(|mut home| {
        home.push(".rocks_history");
        home
    });

    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");

    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    let mut stdout = io::stdout();
    let mut rocks = Rocks::new(&mut stdout);

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                rocks.run_line(&line);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error reading input: {err}");
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
}
