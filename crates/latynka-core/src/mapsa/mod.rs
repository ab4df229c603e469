//! Transliteration tables: the unambiguous map plus one candidate table per
//! rule, following the same OnceLock pattern as the settings.
//!
//! - `Mapsa::init_custom(toml_content)` sets a custom table before the first `global()` call
//! - `Mapsa::global()` returns `&'static Mapsa` (lazy-init singleton)
//! - The default table is embedded via `include_str!("default_mapsa.toml")`

mod config;
mod table;

use std::sync::OnceLock;

pub use config::{parse_mapsa_toml, MapsaError};

use crate::rules::{Rule, RuleTable};
use crate::unambiguous::UnambiguousMap;
use table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Everything an engine needs to romanize: built only by [`parse_mapsa_toml`],
/// so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapsa {
    pub(crate) unambiguous: UnambiguousMap,
    /// One table per rule, in `RULE_ORDER`.
    pub(crate) rules: Vec<RuleTable>,
}

impl Mapsa {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MapsaError> {
        // Validate eagerly
        parse_mapsa_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MapsaError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Mapsa {
        static INSTANCE: OnceLock<Mapsa> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_mapsa_toml(toml_str).expect("mapsa TOML must be valid")
        })
    }

    pub fn unambiguous(&self) -> &UnambiguousMap {
        &self.unambiguous
    }

    pub fn rules(&self) -> &[RuleTable] {
        &self.rules
    }

    pub fn rule(&self, rule: Rule) -> &RuleTable {
        // Validation guarantees one table per rule.
        self.rules
            .iter()
            .find(|t| t.rule == rule)
            .unwrap_or_else(|| panic!("mapsa has no table for rule {rule}"))
    }
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RULE_ORDER;

    #[test]
    fn test_global_rules_follow_rule_order() {
        let order: Vec<Rule> = Mapsa::global().rules().iter().map(|t| t.rule()).collect();
        assert_eq!(order, RULE_ORDER);
    }

    #[test]
    fn test_global_is_default_table() {
        let parsed = parse_mapsa_toml(default_toml()).unwrap();
        assert_eq!(&parsed, Mapsa::global());
    }

    #[test]
    fn test_rule_lookup() {
        let t = Mapsa::global().rule(Rule::YOrI);
        let graphemes: Vec<&str> = t.entries().iter().map(|e| e.grapheme()).collect();
        assert_eq!(graphemes, ["й", "Й"]);
        assert_eq!(t.entries()[0].candidates(), ["y", "i", "'y"]);
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = Mapsa::init_custom("[unambiguous]\n".to_string()).unwrap_err();
        assert!(matches!(err, MapsaError::EmptyUnambiguous));
    }
}
