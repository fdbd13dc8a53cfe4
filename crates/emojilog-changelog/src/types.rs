//! Changelog types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Module used for commits without a `[module]` token
pub const PROJECT_MODULE: &str = "project";

/// Marker for version bumps and other bookkeeping commits, which are dropped
pub const SKIP_MARKER: &str = "bookmark";

/// Changelog category, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Added,
    Changed,
    Fixed,
    Misc,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [Self::Added, Self::Changed, Self::Fixed, Self::Misc];

    /// Map a marker shortcode (without colons) to its category
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("sparkles") | Some("boom") => Self::Added,
            Some("recycle") => Self::Changed,
            Some("bug") => Self::Fixed,
            _ => Self::Misc,
        }
    }

    /// Category title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Fixed => "Fixed",
            Self::Misc => "Misc",
        }
    }

    /// Shortcode shown next to the title in headings
    pub fn shortcode(&self) -> &'static str {
        match self {
            Self::Added => "sparkles",
            Self::Changed => "recycle",
            Self::Fixed => "bug",
            Self::Misc => "wrench",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}: {}", self.shortcode(), self.title())
    }
}

/// A commit that made it through parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Abbreviated commit hash
    pub hash: String,
    /// Module name, `project` when the commit names none
    pub module: String,
    /// Category derived from the marker
    pub category: Category,
    /// Message text after the marker
    pub message: String,
}

/// One rendered changelog line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub hash: String,
    pub message: String,
}

impl std::fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.hash, self.message)
    }
}

/// The category buckets of a single module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleChanges {
    buckets: BTreeMap<Category, Vec<ChangeEntry>>,
}

impl ModuleChanges {
    /// Create a module with every category bucket present and empty
    pub fn new() -> Self {
        Self {
            buckets: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Append an entry to a category, keeping arrival order
    pub fn push(&mut self, category: Category, entry: ChangeEntry) {
        self.buckets.entry(category).or_default().push(entry);
    }

    /// Entries in a category
    pub fn entries(&self, category: Category) -> &[ChangeEntry] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty categories in display order
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[ChangeEntry])> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.entries(category)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    /// Total number of entries across categories
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Check if no category has entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModuleChanges {
    fn default() -> Self {
        Self::new()
    }
}

/// Changes grouped by module, then category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    modules: BTreeMap<String, ModuleChanges>,
}

impl Changelog {
    /// Create a changelog holding only the empty `project` module
    pub fn new() -> Self {
        let mut modules = BTreeMap::new();
        modules.insert(PROJECT_MODULE.to_string(), ModuleChanges::new());
        Self { modules }
    }

    /// File a parsed commit under its module and category
    pub fn add(&mut self, commit: ParsedCommit) {
        let entry = ChangeEntry {
            hash: commit.hash,
            message: commit.message,
        };
        self.modules
            .entry(commit.module)
            .or_default()
            .push(commit.category, entry);
    }

    /// Get a module's changes
    pub fn module(&self, name: &str) -> Option<&ModuleChanges> {
        self.modules.get(name)
    }

    /// Modules in render order: `project` first, then the rest by name
    pub fn ordered_modules(&self) -> impl Iterator<Item = (&str, &ModuleChanges)> + '_ {
        let project = self
            .modules
            .get_key_value(PROJECT_MODULE)
            .map(|(name, changes)| (name.as_str(), changes));

        let rest = self
            .modules
            .iter()
            .filter(|(name, _)| name.as_str() != PROJECT_MODULE)
            .map(|(name, changes)| (name.as_str(), changes));

        project.into_iter().chain(rest)
    }

    /// Total number of entries across modules
    pub fn len(&self) -> usize {
        self.modules.values().map(ModuleChanges::len).sum()
    }

    /// Check if there are no entries at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Changelog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ParsedCommit> for Changelog {
    fn from_iter<I: IntoIterator<Item = ParsedCommit>>(iter: I) -> Self {
        let mut changelog = Self::new();
        for commit in iter {
            changelog.add(commit);
        }
        changelog
    }
}
