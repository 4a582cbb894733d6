//! Argument parsing primitives
//!
//! Stateless helpers every handler uses on its own token slice. Tokens
//! are classified by shape only:
//!
//! - `path` - positional (does not start with `--`)
//! - `--key=value` - keyed option (value may be empty)
//! - `--name` - flag
//!
//! Nothing is validated or coerced; tokens of an unexpected shape are
//! simply invisible to the helper looking for a different shape.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Prefix shared by keyed options and flags
pub const OPTION_PREFIX: &str = "--";

/// The token that requests help instead of execution
pub const HELP_FLAG: &str = "--help";

fn keyed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^--([^=]+)=(.*)$").expect("keyed option pattern is valid")
    })
}

/// True if the literal `--help` token appears anywhere in the list
pub fn wants_help<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|t| t.as_ref() == HELP_FLAG)
}

/// First token not starting with `--`, in list order
pub fn first_positional<S: AsRef<str>>(tokens: &[S]) -> Option<&str> {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .find(|t| !t.starts_with(OPTION_PREFIX))
}

/// Collect every `--key=value` token into a map.
///
/// The key is everything up to the first `=`. When a key repeats, the
/// later token wins.
pub fn parse_keyed<S: AsRef<str>>(tokens: &[S]) -> HashMap<String, String> {
    let re = keyed_pattern();
    let mut parsed = HashMap::new();

    for token in tokens {
        if let Some(caps) = re.captures(token.as_ref()) {
            parsed.insert(caps[1].to_string(), caps[2].to_string());
        }
    }

    parsed
}

/// Exact-match test of `--<name>` against every token.
///
/// `--name=x` does not count as the flag `name`.
pub fn has_flag<S: AsRef<str>>(tokens: &[S], name: &str) -> bool {
    let wanted = format!("{}{}", OPTION_PREFIX, name);
    tokens.iter().any(|t| t.as_ref() == wanted)
}

/// Look up a keyed option, falling back to `default`
pub fn option_value<'a>(
    keyed: &'a HashMap<String, String>,
    key: &str,
    default: &'a str,
) -> &'a str {
    keyed.get(key).map(String::as_str).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_help() {
        assert!(wants_help(&["path", "--help"]));
        assert!(!wants_help(&["path", "--helpful", "--help=1"]));
        assert!(!wants_help::<&str>(&[]));
    }

    #[test]
    fn test_first_positional() {
        assert_eq!(first_positional(&["--a=1", "path", "--b"]), Some("path"));
        assert_eq!(first_positional(&["--a=1", "--b"]), None);
        assert_eq!(first_positional(&["one", "two"]), Some("one"));
    }

    #[test]
    fn test_single_dash_is_positional() {
        assert_eq!(first_positional(&["--x", "-v"]), Some("-v"));
    }

    #[test]
    fn test_parse_keyed() {
        let parsed = parse_keyed(&["--a=1", "--b=2"]);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("a"), Some(&"1".to_string()));
        assert_eq!(parsed.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_parse_keyed_last_wins() {
        let parsed = parse_keyed(&["--a=1", "--a=2"]);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("a"), Some(&"2".to_string()));
    }

    #[test]
    fn test_parse_keyed_edge_shapes() {
        let parsed = parse_keyed(&["--empty=", "--url=a=b", "--flag", "--=x", "pos", "-k=v"]);
        assert_eq!(parsed.get("empty"), Some(&String::new()));
        assert_eq!(parsed.get("url"), Some(&"a=b".to_string()));
        assert!(!parsed.contains_key("flag"));
        assert!(!parsed.contains_key(""));
        assert!(!parsed.contains_key("-k"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_has_flag() {
        assert!(has_flag(&["--verbose"], "verbose"));
        assert!(!has_flag(&["--verbose=1"], "verbose"));
        assert!(!has_flag(&["--verboseX"], "verbose"));
        assert!(!has_flag(&["verbose"], "verbose"));
    }

    #[test]
    fn test_option_value() {
        let keyed = parse_keyed(&["--name=Ada"]);
        assert_eq!(option_value(&keyed, "name", "World"), "Ada");
        assert_eq!(option_value(&keyed, "greeting", "Hello"), "Hello");
    }
}
