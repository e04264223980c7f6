use std::collections::HashMap;
use std::rc::Rc;

use crate::builtins;
use crate::object::Value;

/// A single flat name-to-value mapping, owned by one evaluation session.
#[derive(Debug, PartialEq, Clone)]
pub struct Environment {
    store: HashMap<Rc<str>, Value>,
}

impl Environment {
    /// An environment with the standard operators `+ - * / > < >= <= =`
    /// pre-bound.
    pub fn new_standard() -> Self {
        let mut environment = Environment {
            store: HashMap::new(),
        };
        for procedure in builtins::standard_builtins() {
            environment.define(procedure.name.into(), Value::Builtin(procedure));
        }
        environment
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.store.get(key).cloned()
    }

    /// Inserts or overwrites a binding. Rebinding a standard operator is
    /// allowed.
    pub fn define(&mut self, key: Rc<str>, value: Value) {
        self.store.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::object::Value;

    #[test]
    fn test_standard_bindings_are_callable() {
        let environment = Environment::new_standard();
        for name in ["+", "-", "*", "/", ">", "<", ">=", "<=", "="] {
            assert!(
                matches!(environment.get(name), Some(Value::Builtin(_))),
                "missing builtin: {name}"
            );
        }
    }

    #[test]
    fn test_get_missing_name() {
        let environment = Environment::new_standard();
        assert_eq!(environment.get("x"), None);
    }

    #[test]
    fn test_define_and_overwrite() {
        let mut environment = Environment::new_standard();

        environment.define("x".into(), Value::Integer(10));
        assert_eq!(environment.get("x"), Some(Value::Integer(10)));

        environment.define("x".into(), Value::Float(2.5));
        assert_eq!(environment.get("x"), Some(Value::Float(2.5)));

        // Builtins may be shadowed
        environment.define("+".into(), Value::Integer(1));
        assert_eq!(environment.get("+"), Some(Value::Integer(1)));
    }
}
