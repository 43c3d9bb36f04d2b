mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod reader;
mod value;

use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use config::{PROMPT, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use env::Environment;
use error::DriverError;
use eval::eval;
use reader::{read_line, read_program};
use value::Value;

/// Lispy: a minimal tree-walking Lisp interpreter
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(version = config::VERSION)]
#[command(about = "A minimal tree-walking Lisp interpreter")]
struct CliArgs {
    /// Source files to load and evaluate, in order. With none, starts the REPL.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new();
    builtins::register_builtins(&env);

    if args.files.is_empty() {
        run_repl(&env);
    } else {
        for path in &args.files {
            run_file(&env, path);
        }
    }
}

/// Loads and evaluates each top-level form in `path` individually against
/// the shared root environment. An error in one form is printed but does
/// not prevent the remaining forms (or remaining files) from running.
fn run_file(env: &Rc<Environment>, path: &PathBuf) {
    let path_str = path.display().to_string();

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(source) => {
            eprintln!("{}", DriverError::Io { path: path_str, source });
            return;
        }
    };

    let forms = match read_program(&contents) {
        Ok(forms) => forms,
        Err(reason) => {
            eprintln!("{}", DriverError::Parse { path: path_str, reason });
            return;
        }
    };

    for form in forms {
        if let Value::Error(msg) = eval(env, form) {
            eprintln!("Error: {msg}");
        }
    }
}

/// One whole line is read as a single top-level expression and evaluated in
/// one `eval` call — unlike file mode, multiple forms typed on one line are
/// a parse error, not two evaluations.
fn run_repl(env: &Rc<Environment>) {
    println!("{WELCOME_MESSAGE}");
    println!("{WELCOME_SUBTITLE}");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize REPL: {e}");
            return;
        }
    };

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if line.trim().is_empty() {
                    continue;
                }
                match read_line(&line) {
                    Ok(expr) => println!("{}", eval(env, expr)),
                    Err(e) => eprintln!("Parse error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }
}
