use crate::{AliasTable, Error, SymbolTable};
use regex::Regex;
use std::collections::HashMap;

impl<V> SymbolTable<V> {
    pub(crate) fn new(screen: Regex) -> Self {
        Self {
            entries: HashMap::new(),
            screen,
        }
    }

    /// Register a symbol under `key`, replacing any previous entry.
    ///
    /// The key must match the lexer pattern of this table's category, otherwise the
    /// symbol could never be produced by tokenization.
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), Error> {
        if !self.screen.is_match(key) {
            return Err(Error::UnsuitableName(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.entries.iter()
    }

    /// The registered keys in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

impl AliasTable {
    pub(crate) fn new(key_screen: Regex, value_screen: Regex) -> Self {
        Self {
            entries: HashMap::new(),
            key_screen,
            value_screen,
        }
    }

    /// Register an alias from a symbolic token to a function name, replacing any
    /// previous entry. The key must look like a sign run and the target like a name.
    pub fn insert(&mut self, key: &str, target: &str) -> Result<(), Error> {
        if !self.key_screen.is_match(key) {
            return Err(Error::UnsuitableName(key.to_string()));
        }
        if !self.value_screen.is_match(target) {
            return Err(Error::UnsuitableName(target.to_string()));
        }
        self.entries.insert(key.to_string(), target.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Reverse lookup: the symbolic token aliased onto `target`, when there is one.
    pub(crate) fn alias_of(&self, target: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, name)| name.as_str() == target)
            .map(|(key, _)| key.as_str())
    }

    /// The registered alias tokens in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}
