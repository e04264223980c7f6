use lisplet_core::ast::{Atom, Expression};

use crate::environment::Environment;
use crate::object::{EvaluationError, Value};

pub fn eval(
    expression: &Expression,
    environment: &mut Environment,
) -> Result<Value, EvaluationError> {
    match expression {
        Expression::Atom(Atom::Integer(value)) => Ok(Value::Integer(*value)),
        Expression::Atom(Atom::Float(value)) => Ok(Value::Float(*value)),
        Expression::Atom(Atom::Symbol(name)) => environment
            .get(name)
            .ok_or_else(|| EvaluationError::UnboundName(name.clone())),
        Expression::List(items) => eval_list(items, environment),
    }
}

fn eval_list(
    items: &[Expression],
    environment: &mut Environment,
) -> Result<Value, EvaluationError> {
    match items.split_first() {
        None => Err(EvaluationError::EmptyApplication),
        Some((head, arguments)) if is_define(head) => eval_define(arguments, environment),
        Some((head, arguments)) => {
            let procedure = match eval(head, environment)? {
                Value::Builtin(procedure) => procedure,
                other => return Err(EvaluationError::NotCallable(other)),
            };
            let mut evaluated = Vec::with_capacity(arguments.len());
            for argument in arguments {
                evaluated.push(eval(argument, environment)?);
            }
            (procedure.func)(evaluated)
        }
    }
}

// `define` is recognized syntactically by its head symbol, before any
// environment lookup
fn is_define(expression: &Expression) -> bool {
    matches!(expression, Expression::Atom(Atom::Symbol(name)) if name.as_ref() == "define")
}

/// `(define name value)`: binds `name` to the evaluated value and returns
/// the bound value. Any other shape is malformed.
fn eval_define(
    arguments: &[Expression],
    environment: &mut Environment,
) -> Result<Value, EvaluationError> {
    let (name, value_expression) = match arguments {
        [Expression::Atom(Atom::Symbol(name)), value_expression] => (name, value_expression),
        _ => return Err(EvaluationError::MalformedDefine),
    };
    let value = eval(value_expression, environment)?;
    environment.define(name.clone(), value.clone());
    Ok(value)
}
