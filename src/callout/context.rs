//! Host message context

use std::collections::HashMap;

/// Named string variables shared between a host and its callouts
pub trait MessageContext {
    /// Value of a variable, `None` if it is not set
    fn variable(&self, name: &str) -> Option<String>;

    /// Set or replace a variable
    fn set_variable(&mut self, name: &str, value: String);

    /// Remove a variable if present
    fn remove_variable(&mut self, name: &str);
}

/// In-memory [`MessageContext`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowVariables {
    variables: HashMap<String, String>,
}

impl FlowVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a variable without cloning it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl MessageContext for FlowVariables {
    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: String) {
        self.variables.insert(name.to_string(), value);
    }

    fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }
}

impl<K, V> FromIterator<(K, V)> for FlowVariables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
