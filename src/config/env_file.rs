//! .env file parsing.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Matches a `KEY=value` line. The key must be the whole left-hand side,
/// optionally preceded by `export`.
static ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:export\s+)?([^\s=#]+)\s*=\s*(.*)$").expect("ASSIGNMENT_REGEX must compile")
});

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Inline comments: `KEY=value # note` or `KEY="value" # note`
/// - Whitespace around equals: `KEY = value`
/// - Exported: `export KEY=value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Keys are matched against the whole left-hand side of the line, so
/// `OTHER_API_KEY=x` never defines `API_KEY`. When a key appears more than
/// once, the last definition wins.
///
/// # Example
///
/// ```
/// use imagegen_preflight::config::EnvFileParser;
///
/// let content = r#"
/// # Image generation credentials
/// GOOGLE_AI_API_KEY="sk-real-123"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("GOOGLE_AI_API_KEY"), Some(&"sk-real-123".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse an env file content string into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Look up a single key in env file content.
    pub fn lookup(content: &str, key: &str) -> Option<String> {
        Self::parse(content).remove(key)
    }

    /// Parse a single line.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let caps = ASSIGNMENT_REGEX.captures(line)?;
        let key = caps.get(1)?.as_str().to_string();
        let value = caps.get(2).map_or("", |m| m.as_str()).trim();

        Some((key, Self::parse_value(value)))
    }

    /// Extract the value from the right-hand side of an assignment.
    ///
    /// A quoted value ends at its closing quote and anything after it is
    /// ignored. An unquoted value ends at the first `#` preceded by
    /// whitespace.
    fn parse_value(raw: &str) -> String {
        let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'');
        if let Some(quote) = quote {
            if let Some(end) = raw[1..].find(quote) {
                return raw[1..1 + end].to_string();
            }
        }

        Self::strip_inline_comment(raw).to_string()
    }

    /// Drop a trailing ` # comment` from an unquoted value.
    fn strip_inline_comment(value: &str) -> &str {
        let comment_start = value
            .char_indices()
            .find(|&(i, c)| c == '#' && value[..i].ends_with(char::is_whitespace))
            .map(|(i, _)| i);

        match comment_start {
            Some(i) => value[..i].trim_end(),
            None => value,
        }
    }

    /// Load and parse an env file from a path.
    ///
    /// The raw I/O error is returned untouched so callers can tell a missing
    /// file apart from one that exists but cannot be read.
    pub fn load(path: &Path) -> std::io::Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_simple_env_file() {
        let content = r#"
KEY1=value1
KEY2=value2
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("KEY1"), Some(&"value1".to_string()));
        assert_eq!(vars.get("KEY2"), Some(&"value2".to_string()));
    }

    #[test]
    fn skips_comments() {
        let content = r#"
# GOOGLE_AI_API_KEY=commented-out
KEY=value
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 1);
        assert!(!vars.contains_key("GOOGLE_AI_API_KEY"));
    }

    #[test]
    fn handles_quoted_values() {
        let content = r#"
DOUBLE="double quoted"
SINGLE='single quoted'
UNQUOTED=no quotes
LONE="
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("DOUBLE"), Some(&"double quoted".to_string()));
        assert_eq!(vars.get("SINGLE"), Some(&"single quoted".to_string()));
        assert_eq!(vars.get("UNQUOTED"), Some(&"no quotes".to_string()));
        assert_eq!(vars.get("LONE"), Some(&"\"".to_string()));
    }

    #[test]
    fn strips_inline_comment_from_unquoted_value() {
        let vars = EnvFileParser::parse("GOOGLE_AI_API_KEY=your_key_here  # get one at aistudio\n");

        assert_eq!(
            vars.get("GOOGLE_AI_API_KEY"),
            Some(&"your_key_here".to_string())
        );
    }

    #[test]
    fn ignores_text_after_closing_quote() {
        let content = "EMPTY=\"\" # fill me\nSINGLE='a # b' # note\n";

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
        assert_eq!(vars.get("SINGLE"), Some(&"a # b".to_string()));
    }

    #[test]
    fn keeps_hash_without_leading_whitespace() {
        let vars = EnvFileParser::parse("URL=https://example.com/#anchor");

        assert_eq!(
            vars.get("URL"),
            Some(&"https://example.com/#anchor".to_string())
        );
    }

    #[test]
    fn handles_empty_values() {
        let vars = EnvFileParser::parse("EMPTY=");

        assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
    }

    #[test]
    fn handles_values_with_equals() {
        let vars = EnvFileParser::parse("URL=https://example.com?foo=bar");

        assert_eq!(
            vars.get("URL"),
            Some(&"https://example.com?foo=bar".to_string())
        );
    }

    #[test]
    fn handles_whitespace_around_equals() {
        let vars = EnvFileParser::parse("KEY = value with spaces");

        assert_eq!(vars.get("KEY"), Some(&"value with spaces".to_string()));
    }

    #[test]
    fn handles_export_prefix() {
        let vars = EnvFileParser::parse("export GOOGLE_AI_API_KEY=abc");

        assert_eq!(vars.get("GOOGLE_AI_API_KEY"), Some(&"abc".to_string()));
    }

    #[test]
    fn handles_lines_without_equals() {
        let content = r#"
KEY1=value1
invalid line without equals
KEY2=value2
"#;

        let vars = EnvFileParser::parse(content);

        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn lookup_is_anchored_to_whole_key() {
        let content = "OTHER_GOOGLE_AI_API_KEY=x\nGOOGLE_AI_API_KEY_OLD=y\n";

        assert_eq!(EnvFileParser::lookup(content, "GOOGLE_AI_API_KEY"), None);
        assert_eq!(
            EnvFileParser::lookup(content, "OTHER_GOOGLE_AI_API_KEY"),
            Some("x".to_string())
        );
    }

    #[test]
    fn last_definition_wins() {
        let content = "GOOGLE_AI_API_KEY=first\nGOOGLE_AI_API_KEY=second\n";

        assert_eq!(
            EnvFileParser::lookup(content, "GOOGLE_AI_API_KEY"),
            Some("second".to_string())
        );
    }

    #[test]
    fn load_reports_not_found_kind_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = EnvFileParser::load(&temp.path().join(".env")).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "GOOGLE_AI_API_KEY=sk-real-123\n").unwrap();

        let vars = EnvFileParser::load(&path).unwrap();

        assert_eq!(
            vars.get("GOOGLE_AI_API_KEY"),
            Some(&"sk-real-123".to_string())
        );
    }

    #[test]
    fn load_does_not_treat_directory_as_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::create_dir(&path).unwrap();

        let err = EnvFileParser::load(&path).unwrap_err();

        assert_ne!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
