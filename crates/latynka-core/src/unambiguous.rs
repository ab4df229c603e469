//! Context-free letter substitution, applied once before any rule runs.

use std::collections::HashMap;

/// Letters with exactly one Latin rendering regardless of context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnambiguousMap {
    table: HashMap<char, String>,
}

impl UnambiguousMap {
    pub(crate) fn new(table: HashMap<char, String>) -> Self {
        Self { table }
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Replace every mapped character of `text`; everything else passes
    /// through unchanged.
    pub fn translate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.table.get(&c) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
        }
        out
    }
}
