//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "emojilog.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "emojilog.yaml";

/// Output file written when nothing else is configured
pub const DEFAULT_CHANGELOG_FILE: &str = "Changelog.md";

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// The tag lookup starts from the parent so a tag on HEAD itself is skipped
pub const DEFAULT_DESCRIBE_FROM: &str = "HEAD^";

pub const DEFAULT_HEAD: &str = "HEAD";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".emojilog.toml",
        ".emojilog.yaml",
    ]
}
