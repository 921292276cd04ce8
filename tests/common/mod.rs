// Shared test helpers for styled-markdown.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use styled_markdown::Theme;

/// Settings read from a fixture's optional `index.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureConfig {
    theme: Option<String>,
}

/// A fixture's input Markdown, expected plain text, and theme.
pub struct Fixture {
    pub markdown: String,
    pub expected_text: String,
    pub theme: Theme,
}

/// Load a test fixture's input Markdown, expected text, and theme.
///
/// Fixture directories contain `index.md`, `index.txt`, and optionally
/// `index.json` naming a theme preset.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let markdown = fs::read_to_string(base.join("index.md"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.md", name));
    let expected_text = fs::read_to_string(base.join("index.txt"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.txt", name));

    let config: FixtureConfig = match fs::read_to_string(base.join("index.json")) {
        Ok(json) => serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Bad fixture config {}/index.json: {e}", name)),
        Err(_) => FixtureConfig::default(),
    };
    let theme = match config.theme {
        Some(preset) => preset
            .parse::<Theme>()
            .unwrap_or_else(|e| panic!("fixture {}: {e}", name)),
        None => Theme::base(),
    };

    Fixture {
        markdown,
        expected_text,
        theme,
    }
}
