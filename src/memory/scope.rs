//! Variable bindings
//!
//! The tour runs in a single flat namespace. Binding a name replaces whatever
//! it held before, including values of another type, and loop variables stay
//! bound once the loop ends.

use crate::memory::value::Value;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Scope {
    vars: FxHashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Bind `name`, returning the value it replaced
    pub fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        match self.vars.get_mut(name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.vars.insert(name.to_string(), value);
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
