fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/mapsa/default_mapsa.toml",
        include_str!("src/mapsa/default_mapsa.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
