//! The romanization pipeline: the unambiguous map once, then every rule in
//! `RULE_ORDER`, each run to exhaustion before the next starts.

use tracing::debug_span;

use crate::explain::{explain, ExplainResult};
use crate::mapsa::Mapsa;
use crate::rules::resolve;

/// A romanization engine bound to a set of tables.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Romanizer<'m> {
    mapsa: &'m Mapsa,
}

impl<'m> Romanizer<'m> {
    pub fn new(mapsa: &'m Mapsa) -> Self {
        Self { mapsa }
    }

    /// Engine over the global tables (custom if installed, else the default).
    pub fn global() -> Romanizer<'static> {
        Romanizer::new(Mapsa::global())
    }

    pub fn mapsa(&self) -> &'m Mapsa {
        self.mapsa
    }

    pub fn romanize(&self, text: &str) -> String {
        let _span = debug_span!("romanize", char_count = text.chars().count()).entered();

        let mut buf = self.mapsa.unambiguous().translate(text);
        for table in self.mapsa.rules() {
            resolve(table, &mut buf, None);
        }
        buf
    }

    /// Same pipeline as [`Romanizer::romanize`], recording each rule's work.
    pub fn explain(&self, text: &str) -> ExplainResult {
        let _span = debug_span!("explain", char_count = text.chars().count()).entered();
        explain(self.mapsa, text)
    }
}

/// Romanize `text` with the global tables.
pub fn romanize(text: &str) -> String {
    Romanizer::global().romanize(text)
}
