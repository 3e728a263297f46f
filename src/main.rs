use clap::Parser;
use mini_scheme::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Scheme-subset expression interpreter
#[derive(Parser, Debug)]
#[command(name = "mini-scheme")]
#[command(version)]
#[command(about = "A Scheme-subset expression interpreter")]
struct CliArgs {
    /// Expression to evaluate (starts a REPL when omitted)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut interpreter = Interpreter::new();

    match args.expression {
        Some(expression) => match interpreter.run(&expression) {
            Ok(result) => println!("{}", result),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        },
        None => repl(&mut interpreter)?,
    }

    Ok(())
}

/// Read-eval-print loop. Every line is an independent run; errors are
/// reported and the loop continues.
fn repl(interpreter: &mut Interpreter) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                match interpreter.run(&line) {
                    Ok(result) => println!("{}", result),
                    Err(error) => eprintln!("{}", error),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error),
        }
    }

    Ok(())
}
