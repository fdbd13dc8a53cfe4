//! Commit summary tokenizer
//!
//! A summary line is `<hash> <token>...`. Among the tokens after the hash,
//! the first `[name]` names the module and the first `:name:` is the marker.
//! The message is every token after the marker, or after the hash when there
//! is no marker.

use regex::Regex;
use std::sync::LazyLock;

static MODULE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\[\]]+)\]$").expect("Invalid regex"));

static MARKER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(?P<name>[^:\s]+):$").expect("Invalid regex"));

/// A `:name:` marker and where it sat in the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Shortcode without the colons
    pub name: String,
    /// Token index, the hash being token 0
    pub index: usize,
}

/// Structured view of one summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTokens {
    pub hash: String,
    pub module: Option<String>,
    pub marker: Option<Marker>,
    pub message: String,
    /// Ordinary words between the hash and the marker, left out of `message`
    pub dropped_words: usize,
}

impl CommitTokens {
    /// Marker shortcode, if any
    pub fn marker_name(&self) -> Option<&str> {
        self.marker.as_ref().map(|m| m.name.as_str())
    }
}

/// Split a summary line into its parts. Returns `None` for a blank line.
pub fn tokenize(line: &str) -> Option<CommitTokens> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (hash, rest) = tokens.split_first()?;

    let module = rest
        .iter()
        .find_map(|token| MODULE_TOKEN.captures(token))
        .map(|caps| caps["name"].to_string());

    let marker = rest.iter().enumerate().find_map(|(offset, token)| {
        MARKER_TOKEN.captures(token).map(|caps| Marker {
            name: caps["name"].to_string(),
            index: offset + 1,
        })
    });

    let split = marker.as_ref().map_or(1, |m| m.index + 1);
    let message = tokens[split..].join(" ");

    let dropped_words = match &marker {
        Some(m) => tokens[1..m.index]
            .iter()
            .filter(|token| !MODULE_TOKEN.is_match(token))
            .count(),
        None => 0,
    };

    Some(CommitTokens {
        hash: hash.to_string(),
        module,
        marker,
        message,
        dropped_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_and_message() {
        let tokens = tokenize("abc123 :sparkles: add feature").unwrap();
        assert_eq!(tokens.hash, "abc123");
        assert_eq!(tokens.module, None);
        assert_eq!(
            tokens.marker,
            Some(Marker {
                name: "sparkles".to_string(),
                index: 1
            })
        );
        assert_eq!(tokens.message, "add feature");
        assert_eq!(tokens.dropped_words, 0);
    }

    #[test]
    fn test_module_before_marker() {
        let tokens = tokenize("def456 [auth] :bug: fix login").unwrap();
        assert_eq!(tokens.module.as_deref(), Some("auth"));
        assert_eq!(tokens.marker_name(), Some("bug"));
        assert_eq!(tokens.message, "fix login");
        assert_eq!(tokens.dropped_words, 0);
    }

    #[test]
    fn test_module_case_preserved() {
        let tokens = tokenize("def456 [AuthService] :bug: fix").unwrap();
        assert_eq!(tokens.module.as_deref(), Some("AuthService"));
    }

    #[test]
    fn test_no_marker_keeps_everything_after_hash() {
        let tokens = tokenize("abc123 [ui] tweak   the  layout").unwrap();
        assert_eq!(tokens.marker, None);
        assert_eq!(tokens.module.as_deref(), Some("ui"));
        assert_eq!(tokens.message, "[ui] tweak the layout");
    }

    #[test]
    fn test_marker_in_last_position() {
        let tokens = tokenize("abc123 [ui] :bug:").unwrap();
        assert_eq!(tokens.marker_name(), Some("bug"));
        assert_eq!(tokens.message, "");
    }

    #[test]
    fn test_marker_mid_message_truncates() {
        let tokens = tokenize("abc123 fix the :bug: in parser").unwrap();
        assert_eq!(tokens.marker_name(), Some("bug"));
        assert_eq!(tokens.message, "in parser");
        assert_eq!(tokens.dropped_words, 2);
    }

    #[test]
    fn test_first_module_and_marker_win() {
        let tokens = tokenize("abc123 [a] [b] :recycle: :bug: move").unwrap();
        assert_eq!(tokens.module.as_deref(), Some("a"));
        assert_eq!(tokens.marker_name(), Some("recycle"));
        assert_eq!(tokens.message, ":bug: move");
    }

    #[test]
    fn test_hash_is_positional() {
        let tokens = tokenize(":bug: [core] plain text").unwrap();
        assert_eq!(tokens.hash, ":bug:");
        assert_eq!(tokens.marker, None);
        assert_eq!(tokens.module.as_deref(), Some("core"));
        assert_eq!(tokens.message, "[core] plain text");

        let tokens = tokenize("[core] :boom: redo api").unwrap();
        assert_eq!(tokens.hash, "[core]");
        assert_eq!(tokens.module, None);
        assert_eq!(tokens.marker_name(), Some("boom"));
    }

    #[test]
    fn test_degenerate_tokens_are_plain_words() {
        let tokens = tokenize("abc123 [] :: : [ ] done").unwrap();
        assert_eq!(tokens.module, None);
        assert_eq!(tokens.marker, None);
        assert_eq!(tokens.message, "[] :: : [ ] done");
    }

    #[test]
    fn test_hash_only() {
        let tokens = tokenize("abc123").unwrap();
        assert_eq!(tokens.hash, "abc123");
        assert_eq!(tokens.message, "");
    }

    #[test]
    fn test_blank_line() {
        assert!(tokenize("").is_none());
        assert!(tokenize("   \t").is_none());
    }
}
