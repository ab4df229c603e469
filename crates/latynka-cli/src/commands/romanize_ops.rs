use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};

use latynka_engine::{ExplainResult, Romanizer};

/// Romanize `text`, the contents of `file`, or stdin, and print the result
/// as-is.
pub fn romanize_cmd(text: Option<&str>, file: Option<&str>) {
    let input = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => die!(fs::read_to_string(path), "Error reading {path}: {}"),
        (None, None) => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    };
    print!("{}", Romanizer::global().romanize(&input));
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = Romanizer::global().explain(text);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&result),
            "Error serializing explain result: {}"
        );
        println!("{out}");
    } else {
        print!("{}", render_explain(&result));
    }
}

/// Plain-text report: only rules that changed something are listed.
pub fn render_explain(result: &ExplainResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input:       {:?}", result.input);
    let _ = writeln!(out, "unambiguous: {:?}", result.after_unambiguous);
    for stage in result.active_stages() {
        let _ = writeln!(out, "{}:", stage.rule);
        for sub in &stage.substitutions {
            let _ = writeln!(
                out,
                "  {}@{} -> {:?} [{}]",
                sub.grapheme, sub.offset, sub.replacement, sub.choice
            );
        }
        let _ = writeln!(out, "  = {:?}", stage.buffer);
    }
    let _ = writeln!(out, "output:      {:?}", result.output);
    out
}
