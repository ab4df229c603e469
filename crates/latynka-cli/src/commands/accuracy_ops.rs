use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use serde::{Deserialize, Serialize};

use latynka_engine::Romanizer;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(String),
}

pub fn parse_corpus(toml_str: &str) -> Result<AccuracyCorpus, CorpusError> {
    toml::from_str(toml_str).map_err(|e| CorpusError::Parse(e.to_string()))
}

pub fn load_corpus(path: &Path) -> Result<AccuracyCorpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&content)
}

/// Romanize every case (optionally only one category) and compare.
pub fn run_accuracy(
    romanizer: &Romanizer<'_>,
    corpus: &AccuracyCorpus,
    category: Option<&str>,
) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|case| category.map_or(true, |c| case.category == c))
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = romanizer.romanize(&case.input);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );
    let pass_rate = if pass + fail == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", pass as f64 * 100.0 / (pass + fail) as f64)
    };

    AccuracyReport {
        summary: AccuracySummary {
            total: results.len(),
            pass,
            fail,
            skip,
            pass_rate,
        },
        results,
    }
}

pub fn accuracy(corpus_file: &str, category: Option<&str>, verbose: bool, json: bool) {
    let corpus = die!(load_corpus(Path::new(corpus_file)), "Error: {}");
    let report = run_accuracy(&Romanizer::global(), &corpus, category);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&report),
            "Error serializing report: {}"
        );
        println!("{out}");
    } else {
        for r in &report.results {
            match r.status {
                AccuracyStatus::Fail => {
                    println!(
                        "FAIL [{}] {:?}: expected {:?}, got {:?}",
                        r.category, r.input, r.expected, r.actual
                    );
                }
                AccuracyStatus::Skip => {
                    let note = r.note.as_deref().unwrap_or("");
                    println!("SKIP [{}] {:?} {note}", r.category, r.input);
                }
                AccuracyStatus::Pass if verbose => {
                    println!("PASS [{}] {:?} -> {:?}", r.category, r.input, r.actual);
                }
                AccuracyStatus::Pass => {}
            }
        }
        let s = &report.summary;
        println!(
            "\n{} cases: {} pass, {} fail, {} skip ({})",
            s.total, s.pass, s.fail, s.skip, s.pass_rate
        );
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
