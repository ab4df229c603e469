use serde::Serialize;

use crate::mapsa::Mapsa;
use crate::rules::{resolve, RULE_ORDER};

/// Full diagnostic result for a single text.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub after_unambiguous: String,
    pub stages: Vec<ExplainStage>,
    pub output: String,
}

impl ExplainResult {
    /// Stages that replaced at least one grapheme.
    pub fn active_stages(&self) -> impl Iterator<Item = &ExplainStage> {
        self.stages.iter().filter(|s| !s.substitutions.is_empty())
    }
}

/// What one rule did to the working buffer.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainStage {
    pub rule: &'static str,
    pub substitutions: Vec<Substitution>,
    /// Buffer after the rule ran.
    pub buffer: String,
}

/// A single grapheme replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub grapheme: String,
    /// Char offset of the grapheme in the buffer at the time it was replaced.
    pub offset: usize,
    /// Index of the chosen candidate.
    pub choice: usize,
    pub replacement: String,
}

/// Run the full pipeline with `mapsa`, recording every substitution.
pub fn explain(mapsa: &Mapsa, text: &str) -> ExplainResult {
    let mut buf = mapsa.unambiguous().translate(text);
    let after_unambiguous = buf.clone();

    let mut stages = Vec::with_capacity(RULE_ORDER.len());
    for table in mapsa.rules() {
        let mut substitutions = Vec::new();
        resolve(table, &mut buf, Some(&mut substitutions));
        stages.push(ExplainStage {
            rule: table.rule().name(),
            substitutions,
            buffer: buf.clone(),
        });
    }

    ExplainResult {
        input: text.to_string(),
        after_unambiguous,
        stages,
        output: buf,
    }
}
