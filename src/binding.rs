use crate::{Error, Lexer, NumericImpl, VariableBinding};
use std::cell::Cell;

impl<T: NumericImpl> VariableBinding<T> {
    /// Create a binding for the declared variable names, screening each against the
    /// lexer name pattern and rejecting duplicates.
    pub(crate) fn new(names: Vec<String>, lexer: &Lexer<T>) -> Result<Self, Error> {
        for (position, name) in names.iter().enumerate() {
            if !lexer.name_regex().is_match(name) {
                return Err(Error::UnsuitableName(name.clone()));
            }
            if names[..position].contains(name) {
                return Err(Error::RepeatedSymbol(name.clone()));
            }
        }
        Ok(Self::unchecked(names))
    }

    /// Create a binding from names already validated by an earlier binding.
    pub(crate) fn unchecked(names: Vec<String>) -> Self {
        let slots = names.iter().map(|_| Cell::new(T::default())).collect();
        Self { names, slots }
    }

    /// The declared variable names in their declaration order.
    pub fn variables(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Slot position of a declared variable.
    pub(crate) fn index(&self, token: &str) -> Result<usize, Error> {
        self.names
            .iter()
            .position(|name| name == token)
            .ok_or_else(|| Error::UndefinedSymbol(token.to_string()))
    }

    pub(crate) fn value(&self, index: usize) -> T {
        self.slots[index].get()
    }

    /// Write the evaluation arguments into the slots, one per declared variable.
    pub(crate) fn update(&self, values: &[T]) -> Result<(), Error> {
        if values.len() != self.slots.len() {
            return Err(Error::ArgumentsMismatch {
                needed: self.slots.len(),
                provided: values.len(),
                token: None,
            });
        }
        for (slot, value) in self.slots.iter().zip(values) {
            slot.set(*value);
        }
        Ok(())
    }
}
