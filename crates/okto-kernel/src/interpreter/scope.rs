//! Variable storage for an Oktolang session.
//!
//! One flat namespace per kernel. Names are defined once and live until the
//! session ends; there is no shadowing and no deletion.

use std::collections::HashMap;

use crate::value::Value;

use super::error::StoreError;

/// Name → value mapping owned by one kernel.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, Value>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new variable. Redefinition is an error, not an overwrite.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Result<(), StoreError> {
        let name = name.into();
        if self.vars.contains_key(&name) {
            return Err(StoreError::AlreadyDefined(name));
        }
        self.vars.insert(name, value);
        Ok(())
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Result<&Value, StoreError> {
        self.vars
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Replace the value of an existing variable.
    ///
    /// Callers keep the value's kind; the store does not check it.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), StoreError> {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// All variable names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vars.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
