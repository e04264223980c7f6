use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Atom {
    Integer(i64),
    Float(f64),
    Symbol(Rc<str>),
}

impl Atom {
    /// Classifies a token: integer parse first, float parse second, symbol
    /// otherwise. Total — every token lands in exactly one variant, so `3`
    /// is an integer, `3.0` a float and `+` a symbol.
    pub fn classify(token: &str) -> Atom {
        if let Ok(value) = token.parse::<i64>() {
            Atom::Integer(value)
        } else if let Ok(value) = token.parse::<f64>() {
            Atom::Float(value)
        } else {
            Atom::Symbol(token.into())
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Integer(value) => write!(f, "{}", value),
            // {:?} keeps a decimal point on whole floats, so `3.0` does not
            // print the same as the integer `3`
            Atom::Float(value) => write!(f, "{:?}", value),
            Atom::Symbol(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Atom(Atom),
    List(Vec<Expression>),
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Atom(atom) => write!(f, "{}", atom),
            Expression::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
