use std::fmt::Display;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Builtin(BuiltinProcedure),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            // {:?} keeps a decimal point on whole floats
            Value::Float(value) => write!(f, "{:?}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Builtin(procedure) => write!(f, "<builtin {}>", procedure.name),
        }
    }
}

#[derive(Clone)]
pub struct BuiltinProcedure {
    pub name: &'static str,
    pub func: fn(Vec<Value>) -> Result<Value, EvaluationError>,
}

impl PartialEq for BuiltinProcedure {
    fn eq(&self, other: &Self) -> bool {
        self.func as usize == other.func as usize
    }
}

impl std::fmt::Debug for BuiltinProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinProcedure")
            .field("name", &self.name)
            .field("ptr", &(self.func as usize))
            .finish()
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Unbound name: {0}")]
    UnboundName(Rc<str>),
    #[error("Called a value that is not a procedure: {0:?}")]
    NotCallable(Value),
    #[error("Cannot evaluate an empty application form")]
    EmptyApplication,
    #[error("Malformed define, expected (define name value)")]
    MalformedDefine,
    #[error("Wrong number of arguments for {name}. Expected {expected}, got {actual}")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Expected a number, got {0:?}")]
    NotANumber(Value),
    #[error("Division by zero")]
    DivisionByZero,
}
