use crate::error::Error;
use std::collections::HashMap;

/// Values bound to variable names, consulted when evaluating a tree.
///
/// Names are case sensitive. Bindings are only ever added or overwritten,
/// evaluation never creates one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Bind `value` to `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    /// Get the value bound to `name`. `UnboundVariable(name)` error means the
    /// variable was never assigned a value using `set`.
    pub fn get(&self, name: &str) -> Result<f64, Error> {
        match self.bindings.get(name) {
            Some(value) => Ok(*value),
            None => Err(Error::UnboundVariable(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut env = Environment::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>> Extend<(K, f64)> for Environment {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
