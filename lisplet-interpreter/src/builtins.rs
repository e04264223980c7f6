use crate::object::{BuiltinProcedure, EvaluationError, Value};

fn binary_args(name: &'static str, args: Vec<Value>) -> Result<(Value, Value), EvaluationError> {
    let [lhs, rhs]: [Value; 2] =
        args.try_into()
            .map_err(|args: Vec<Value>| EvaluationError::ArityMismatch {
                name,
                expected: 2,
                actual: args.len(),
            })?;
    Ok((lhs, rhs))
}

fn as_float(value: Value) -> Result<f64, EvaluationError> {
    match value {
        Value::Integer(value) => Ok(value as f64),
        Value::Float(value) => Ok(value),
        other => Err(EvaluationError::NotANumber(other)),
    }
}

fn builtin_add(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("+", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs + rhs)),
        (lhs, rhs) => Ok(Value::Float(as_float(lhs)? + as_float(rhs)?)),
    }
}

fn builtin_subtract(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("-", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs - rhs)),
        (lhs, rhs) => Ok(Value::Float(as_float(lhs)? - as_float(rhs)?)),
    }
}

fn builtin_multiply(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("*", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Integer(lhs * rhs)),
        (lhs, rhs) => Ok(Value::Float(as_float(lhs)? * as_float(rhs)?)),
    }
}

// True division: the quotient is always a float, never truncated
fn builtin_divide(args: Vec<Value>) -> Result<Value, EvaluationError> {
    let (lhs, rhs) = binary_args("/", args)?;
    let (lhs, rhs) = (as_float(lhs)?, as_float(rhs)?);
    if rhs == 0.0 {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(Value::Float(lhs / rhs))
}

fn builtin_greater_than(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args(">", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Boolean(lhs > rhs)),
        (lhs, rhs) => Ok(Value::Boolean(as_float(lhs)? > as_float(rhs)?)),
    }
}

fn builtin_less_than(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("<", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Boolean(lhs < rhs)),
        (lhs, rhs) => Ok(Value::Boolean(as_float(lhs)? < as_float(rhs)?)),
    }
}

fn builtin_greater_equal(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args(">=", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Boolean(lhs >= rhs)),
        (lhs, rhs) => Ok(Value::Boolean(as_float(lhs)? >= as_float(rhs)?)),
    }
}

fn builtin_less_equal(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("<=", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Boolean(lhs <= rhs)),
        (lhs, rhs) => Ok(Value::Boolean(as_float(lhs)? <= as_float(rhs)?)),
    }
}

fn builtin_equal(args: Vec<Value>) -> Result<Value, EvaluationError> {
    match binary_args("=", args)? {
        (Value::Integer(lhs), Value::Integer(rhs)) => Ok(Value::Boolean(lhs == rhs)),
        (lhs, rhs) => Ok(Value::Boolean(as_float(lhs)? == as_float(rhs)?)),
    }
}

pub(crate) fn standard_builtins() -> [BuiltinProcedure; 9] {
    [
        BuiltinProcedure {
            name: "+",
            func: builtin_add,
        },
        BuiltinProcedure {
            name: "-",
            func: builtin_subtract,
        },
        BuiltinProcedure {
            name: "*",
            func: builtin_multiply,
        },
        BuiltinProcedure {
            name: "/",
            func: builtin_divide,
        },
        BuiltinProcedure {
            name: ">",
            func: builtin_greater_than,
        },
        BuiltinProcedure {
            name: "<",
            func: builtin_less_than,
        },
        BuiltinProcedure {
            name: ">=",
            func: builtin_greater_equal,
        },
        BuiltinProcedure {
            name: "<=",
            func: builtin_less_equal,
        },
        BuiltinProcedure {
            name: "=",
            func: builtin_equal,
        },
    ]
}
