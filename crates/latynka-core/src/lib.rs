//! Ukrainian Cyrillic to Latin ("Latynka") transliteration engine.
//!
//! Text first goes through the context-free [`unambiguous`] map, then through
//! the seven ambiguity [`rules`] in [`RULE_ORDER`]. The tables both stages run
//! with live in [`mapsa`].

pub mod explain;
pub mod mapsa;
pub mod romanizer;
pub mod rules;
pub mod unambiguous;
pub(crate) mod unicode;

#[cfg(test)]
mod tests;

pub use explain::{explain, ExplainResult, ExplainStage, Substitution};
pub use mapsa::{default_toml, parse_mapsa_toml, Mapsa, MapsaError};
pub use romanizer::{romanize, Romanizer};
pub use rules::{Rule, RuleEntry, RuleTable, RULE_ORDER};
pub use unambiguous::UnambiguousMap;
