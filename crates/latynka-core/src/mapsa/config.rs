use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use super::Mapsa;
use crate::rules::{Rule, RuleEntry, RuleTable, RULE_ORDER};
use crate::unambiguous::UnambiguousMap;

#[derive(Deserialize)]
struct MapsaConfig {
    unambiguous: BTreeMap<String, String>,
    #[serde(default)]
    rules: BTreeMap<String, Vec<EntryConfig>>,
}

#[derive(Deserialize)]
struct EntryConfig {
    grapheme: String,
    candidates: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MapsaError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[unambiguous] table is empty")]
    EmptyUnambiguous,
    #[error("unambiguous key is not a single character: {0:?}")]
    NotSingleChar(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("unknown rule: {0}")]
    UnknownRule(String),
    #[error("missing rule: {0}")]
    MissingRule(&'static str),
    #[error("empty grapheme in rule {0}")]
    EmptyGrapheme(&'static str),
    #[error("duplicate grapheme {grapheme:?} in rule {rule}")]
    DuplicateGrapheme { rule: &'static str, grapheme: String },
    #[error("rule {rule}: {grapheme:?} needs {expected} candidates, found {found}")]
    Arity {
        rule: &'static str,
        grapheme: String,
        expected: usize,
        found: usize,
    },
    #[error("rule {rule}: a candidate for {grapheme:?} contains the grapheme itself")]
    SelfReplacing { rule: &'static str, grapheme: String },
    #[error("mapsa already initialized")]
    AlreadyInitialized,
}

/// Parse and validate TOML text into a [`Mapsa`].
pub fn parse_mapsa_toml(toml_str: &str) -> Result<Mapsa, MapsaError> {
    let config: MapsaConfig =
        toml::from_str(toml_str).map_err(|e| MapsaError::Parse(e.to_string()))?;

    let unambiguous = parse_unambiguous(config.unambiguous)?;

    let mut raw_rules = config.rules;
    if let Some(name) = raw_rules.keys().find(|n| Rule::from_name(n).is_none()) {
        return Err(MapsaError::UnknownRule(name.clone()));
    }
    let rules = RULE_ORDER
        .iter()
        .map(|&rule| {
            let raw = raw_rules
                .remove(rule.name())
                .ok_or(MapsaError::MissingRule(rule.name()))?;
            parse_rule(rule, raw)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Mapsa { unambiguous, rules })
}

fn parse_unambiguous(raw: BTreeMap<String, String>) -> Result<UnambiguousMap, MapsaError> {
    if raw.is_empty() {
        return Err(MapsaError::EmptyUnambiguous);
    }
    let mut table = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(MapsaError::NotSingleChar(key));
        };
        if value.is_empty() {
            return Err(MapsaError::EmptyValue(key));
        }
        table.insert(c, value);
    }
    Ok(UnambiguousMap::new(table))
}

fn parse_rule(rule: Rule, raw: Vec<EntryConfig>) -> Result<RuleTable, MapsaError> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut entries = Vec::with_capacity(raw.len());
    for EntryConfig {
        grapheme,
        candidates,
    } in raw
    {
        if grapheme.is_empty() {
            return Err(MapsaError::EmptyGrapheme(rule.name()));
        }
        if !seen.insert(grapheme.clone()) {
            return Err(MapsaError::DuplicateGrapheme {
                rule: rule.name(),
                grapheme,
            });
        }
        let expected = rule.arity(&grapheme);
        if candidates.len() != expected {
            return Err(MapsaError::Arity {
                rule: rule.name(),
                grapheme,
                expected,
                found: candidates.len(),
            });
        }
        // Catches only the literal case. A candidate can still rebuild its
        // grapheme together with neighbouring text; that is not checked.
        if candidates.iter().any(|c| c.contains(grapheme.as_str())) {
            return Err(MapsaError::SelfReplacing {
                rule: rule.name(),
                grapheme,
            });
        }
        entries.push(RuleEntry {
            grapheme,
            candidates,
        });
    }
    Ok(RuleTable { rule, entries })
}
