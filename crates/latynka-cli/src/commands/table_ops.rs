use std::fs;

use latynka_engine::{default_toml, init_custom_table, parse_mapsa_toml, Mapsa};

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mapsa = die!(parse_mapsa_toml(&content), "Error: {}");
    println!("OK: {}", summarize(&mapsa));
}

/// Install the table in `file` as the global one; must run before any
/// romanization.
pub fn install_table(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(init_custom_table(content), "Error in table {file}: {}");
}

pub fn summarize(mapsa: &Mapsa) -> String {
    let rules: Vec<String> = mapsa
        .rules()
        .iter()
        .map(|t| format!("{}={}", t.rule(), t.entries().len()))
        .collect();
    format!(
        "{} unambiguous letters, rules: {}",
        mapsa.unambiguous().len(),
        rules.join(" ")
    )
}
