use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lisplet_core::lexer::Tokenizer;
use lisplet_core::parser::Parser;
use lisplet_interpreter::environment::Environment;
use lisplet_interpreter::evaluator;

const PROMPT: &str = ">> ";

/// One environment lives for the whole session, so a `define` on one line
/// is visible on the next.
pub fn start() {
    let mut rl = DefaultEditor::new().unwrap();
    let mut environment = Environment::new_standard();

    loop {
        let readline = rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
            Ok(line) => line,
        };

        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(&line).unwrap();

        let tokens = Tokenizer::new(&line).collect::<Vec<_>>();
        let expression = match Parser::new(&tokens).parse_expression() {
            Ok(expression) => expression,
            Err(error) => {
                println!("Parsing error: {}", error);
                continue;
            }
        };

        match evaluator::eval(&expression, &mut environment) {
            Ok(value) => println!("{}", value),
            Err(error) => println!("Error evaluating:\n{}", error),
        }
    }
}
