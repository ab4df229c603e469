//! The seven ambiguity-resolution rules.
//!
//! Each rule owns a set of graphemes with several Latin renderings and picks
//! one per occurrence from the surrounding text. Rules run in [`RULE_ORDER`];
//! later rules read context produced (or left in place) by earlier ones.

mod context;
mod resolver;

use std::fmt;

pub(crate) use resolver::resolve;

use crate::unicode::is_all_upper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Doubled consonants and fixed bigraphs.
    Doubles,
    /// ж, ч, ш and the uppercase forms of щ, х.
    Sibilants,
    /// в: "v" before a vowel, "w" otherwise.
    VOrW,
    /// я, ї, є, ю.
    SmallVowels,
    /// Я, Ї, Є, Ю.
    CapitalVowels,
    /// й.
    YOrI,
    /// ь, deleted.
    Softener,
}

/// Order in which the rules run.
///
/// `Doubles` must consume doubled sibilants before `Sibilants` sees them,
/// the vowel rules must settle before `YOrI` inspects its left neighbour, and
/// `Softener` goes last because the vowel rules look for the soft sign.
pub const RULE_ORDER: [Rule; 7] = [
    Rule::Doubles,
    Rule::Sibilants,
    Rule::VOrW,
    Rule::SmallVowels,
    Rule::CapitalVowels,
    Rule::YOrI,
    Rule::Softener,
];

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Doubles => "doubles",
            Rule::Sibilants => "sibilants",
            Rule::VOrW => "v-or-w",
            Rule::SmallVowels => "small-vowels",
            Rule::CapitalVowels => "capital-vowels",
            Rule::YOrI => "y-or-i",
            Rule::Softener => "softener",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        RULE_ORDER.iter().copied().find(|rule| rule.name() == name)
    }

    /// Number of candidates the rule's context chooses among for `grapheme`.
    pub fn arity(self, grapheme: &str) -> usize {
        match self {
            Rule::Doubles | Rule::Softener => 1,
            Rule::Sibilants => {
                if is_all_upper(grapheme) {
                    2
                } else {
                    1
                }
            }
            Rule::VOrW | Rule::SmallVowels => 2,
            Rule::CapitalVowels | Rule::YOrI => 3,
        }
    }

    /// Candidate index for the occurrence of `grapheme` at byte offset `at`.
    pub(crate) fn select(self, buf: &str, at: usize, grapheme: &str) -> usize {
        match self {
            Rule::Doubles | Rule::Softener => 0,
            Rule::Sibilants => context::sibilant(buf),
            Rule::VOrW => context::v_or_w(buf, grapheme, at + grapheme.len()),
            Rule::SmallVowels => context::small_vowel(buf, at),
            Rule::CapitalVowels => context::capital_vowel(buf, at),
            Rule::YOrI => context::y_or_i(buf, at),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grapheme and its candidate renderings, in selection-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub(crate) grapheme: String,
    pub(crate) candidates: Vec<String>,
}

impl RuleEntry {
    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// A rule bound to its candidate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    pub(crate) rule: Rule,
    pub(crate) entries: Vec<RuleEntry>,
}

impl RuleTable {
    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }
}
