//! Git types

use serde::{Deserialize, Serialize};

/// One `git log --oneline` summary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitLine {
    raw: String,
}

impl CommitLine {
    /// Create a new CommitLine
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The line exactly as git printed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Abbreviated commit hash (first token)
    pub fn hash(&self) -> Option<&str> {
        self.raw.split_whitespace().next()
    }

    /// Subject line without the hash
    pub fn subject(&self) -> &str {
        let trimmed = self.raw.trim_start();
        match trimmed.find(char::is_whitespace) {
            Some(pos) => trimmed[pos..].trim(),
            None => "",
        }
    }

    /// Check if the line carries nothing at all
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<&str> for CommitLine {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CommitLine {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for CommitLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_line_parts() {
        let line = CommitLine::new("abc1234 [auth] :bug: fix login");
        assert_eq!(line.hash(), Some("abc1234"));
        assert_eq!(line.subject(), "[auth] :bug: fix login");
        assert!(!line.is_blank());
    }

    #[test]
    fn test_hash_only_line() {
        let line = CommitLine::from("abc1234");
        assert_eq!(line.hash(), Some("abc1234"));
        assert_eq!(line.subject(), "");
    }

    #[test]
    fn test_blank_line() {
        let line = CommitLine::from("   ");
        assert!(line.is_blank());
        assert_eq!(line.hash(), None);
    }
}
