pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod object;

use thiserror::Error;

use lisplet_core::lexer::Tokenizer;
use lisplet_core::parser::{ParseError, Parser};

use crate::environment::Environment;
use crate::object::{EvaluationError, Value};

#[derive(Debug, PartialEq, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Evaluates one top-level form against a fresh standard environment.
/// Nothing persists between calls; tokens after the first complete form are
/// ignored.
pub fn run(source: &str) -> Result<Value, RunError> {
    let tokens = Tokenizer::new(source).collect::<Vec<_>>();
    let expression = Parser::new(&tokens).parse_expression()?;
    let mut environment = Environment::new_standard();
    Ok(evaluator::eval(&expression, &mut environment)?)
}

#[cfg(test)]
mod tests {
    use super::{run, RunError};
    use crate::object::{EvaluationError, Value};
    use lisplet_core::parser::ParseError;

    #[test]
    fn test_arithmetic() {
        assert_eq!(run("(+ 1 2)"), Ok(Value::Integer(3)));
        assert_eq!(run("(* 5 5)"), Ok(Value::Integer(25)));
        assert_eq!(run("(> 10 3)"), Ok(Value::Boolean(true)));
    }

    #[test]
    fn test_true_division() {
        assert_eq!(run("(/ 1 2)"), Ok(Value::Float(0.5)));
        assert_eq!(run("(/ 6 3)"), Ok(Value::Float(2.0)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            run(""),
            Err(RunError::Parse(ParseError::UnexpectedEndOfInput))
        );
        assert_eq!(
            run("(+ 1 2"),
            Err(RunError::Parse(ParseError::UnexpectedEndOfInput))
        );
        assert_eq!(
            run(")"),
            Err(RunError::Parse(ParseError::UnexpectedCloseParen))
        );
    }

    #[test]
    fn test_no_state_persists_between_runs() {
        assert_eq!(run("(define x 10)"), Ok(Value::Integer(10)));
        assert_eq!(
            run("(+ x 1)"),
            Err(RunError::Evaluation(EvaluationError::UnboundName(
                "x".into()
            )))
        );
    }

    #[test]
    fn test_only_the_first_form_is_evaluated() {
        assert_eq!(run("(+ 1 2) (+ 3 4)"), Ok(Value::Integer(3)));
        assert_eq!(run("1 )"), Ok(Value::Integer(1)));
    }
}
