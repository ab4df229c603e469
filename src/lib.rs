//! Public entry point for the Latynka transliteration engine.
//!
//! Re-exports the engine from `latynka-core` and adds process-level setup
//! (trace logging) that front ends call once at startup.

mod trace_init;

pub use latynka_core::{
    default_toml, explain, parse_mapsa_toml, romanize, ExplainResult, ExplainStage, Mapsa,
    MapsaError, Romanizer, Rule, RuleEntry, RuleTable, Substitution, UnambiguousMap, RULE_ORDER,
};
pub use trace_init::{init_tracing, tracing_available};

/// Install a custom table from TOML text. Must run before the first call to
/// [`romanize`] or [`Romanizer::global`].
pub fn init_custom_table(toml_content: String) -> Result<(), MapsaError> {
    Mapsa::init_custom(toml_content)
}
