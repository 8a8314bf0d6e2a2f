use clap::Parser;
use mathex::{eval_line, interpreter::evaluator::Context};
use rustyline::{DefaultEditor, error::ReadlineError};

/// mathex is an easy to use calculator language for numeric mathematics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits instead of starting the
    /// interactive session.
    expression: Option<String>,
}

const HELP: &str = "\
Enter a mathematical expression to evaluate it, or one of:
  >exit      leave the session
  >clear     remove every variable binding
  >context   list the current variable bindings
  >help      show this message";

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut context = Context::new();

    if let Some(expression) = args.expression {
        match eval_line(&expression, &mut context) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            std::process::exit(1);
        },
    };

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            ">exit" => break,
            ">clear" => context.clear_variables(),
            ">context" => {
                let mut bindings: Vec<_> = context.variables().iter().collect();
                bindings.sort_by(|a, b| a.0.cmp(b.0));
                for (name, value) in bindings {
                    println!("{name} = {value}");
                }
            },
            ">help" => println!("{HELP}"),
            _ => match eval_line(input, &mut context) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("{e}"),
            },
        }
    }
}
