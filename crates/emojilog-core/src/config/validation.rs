//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_git(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "file cannot be empty"));
    }
    Ok(())
}

fn validate_git(config: &Config) -> Result<()> {
    let fields = [
        ("git.program", &config.git.program),
        ("git.describe_from", &config.git.describe_from),
        ("git.head", &config.git.head),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(invalid(field, "value cannot be empty"));
        }
    }

    Ok(())
}

fn invalid(field: &str, message: &str) -> crate::error::EmojilogError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
