use tracing::debug;

use crate::explain::Substitution;

use super::RuleTable;

/// Run one rule to exhaustion over `buf`.
///
/// Graphemes are taken in table order. For each, the leftmost occurrence is
/// replaced until none remain, and the context is read from the buffer as it
/// stands at that moment, so earlier replacements are visible to later ones.
/// Returns the number of replacements made.
pub(crate) fn resolve(
    table: &RuleTable,
    buf: &mut String,
    mut log: Option<&mut Vec<Substitution>>,
) -> usize {
    let rule = table.rule;
    let mut replaced = 0;
    for entry in &table.entries {
        let grapheme = entry.grapheme.as_str();
        while let Some(at) = buf.find(grapheme) {
            let choice = rule.select(buf, at, grapheme);
            assert!(
                choice < entry.candidates.len(),
                "rule {rule} chose candidate {choice} for {grapheme:?}, which has {} candidates",
                entry.candidates.len()
            );
            let replacement = entry.candidates[choice].as_str();
            if let Some(log) = log.as_deref_mut() {
                log.push(Substitution {
                    grapheme: grapheme.to_string(),
                    offset: buf[..at].chars().count(),
                    choice,
                    replacement: replacement.to_string(),
                });
            }
            buf.replace_range(at..at + grapheme.len(), replacement);
            replaced += 1;
        }
    }
    debug!(rule = rule.name(), replaced);
    replaced
}
