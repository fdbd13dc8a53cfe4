//! CLI definition and run handling

mod outcome;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{info, instrument};

use emojilog_changelog::ChangelogGenerator;
use emojilog_core::config::{load_config_or_default, Config, DEFAULT_CHANGELOG_FILE};
use emojilog_core::error::ChangelogError;
use emojilog_git::{CommitFetcher, SystemGit};

pub use outcome::RunOutcome;

/// Emojilog - write a Changelog.md from gitmoji commits since the last tag
#[derive(Debug, Parser)]
#[command(name = "emojilog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for --dry-run
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Output file (defaults to the configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the changelog instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown document
    #[default]
    Text,
    /// Grouped changelog as JSON
    Json,
}

impl Cli {
    /// Execute the run. Failures are reported, never returned.
    pub fn execute(&self) -> anyhow::Result<()> {
        self.run_in(&self.base_dir());
        Ok(())
    }

    /// Run against `base`: generate, report, then write or print the result
    pub fn run_in(&self, base: &Path) -> RunOutcome {
        let (outcome, output_path) = match self.load_config(base) {
            Ok(config) => {
                let file = self
                    .output
                    .clone()
                    .unwrap_or_else(|| config.changelog.file.clone());
                (self.generate(&config, base), resolve(base, &file))
            }
            Err(err) => (RunOutcome::failed(err), resolve(base, &self.fallback_output())),
        };

        self.report(&outcome);

        if self.dry_run {
            if let Err(err) = self.print(&outcome) {
                output::error(&format!("{:#}", err));
            }
            return outcome;
        }

        match write_changelog(&output_path, outcome.file_contents()) {
            Ok(()) => {
                if matches!(outcome, RunOutcome::Rendered { .. }) && !self.quiet {
                    output::success(&format!(
                        "Changelog written to {}",
                        output::path_style().apply_to(output_path.display())
                    ));
                }
            }
            Err(err) => output::error(&format!("{:#}", anyhow::Error::from(err))),
        }

        outcome
    }

    fn base_dir(&self) -> PathBuf {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match &self.directory {
            Some(dir) => cwd.join(dir),
            None => cwd,
        }
    }

    fn load_config(&self, base: &Path) -> anyhow::Result<Config> {
        if !base.is_dir() {
            anyhow::bail!("{} is not a directory", base.display());
        }

        let (config, path) =
            load_config_or_default(base).context("failed to load configuration")?;
        info!(config = ?path, "configuration ready");
        Ok(config)
    }

    fn fallback_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_FILE))
    }

    #[instrument(skip(self, config), fields(base = %base.display()))]
    fn generate(&self, config: &Config, base: &Path) -> RunOutcome {
        let runner = SystemGit::new()
            .with_program(&config.git.program)
            .in_dir(base);
        let commits = CommitFetcher::with_config(runner, &config.git).fetch();

        if commits.is_empty() {
            return RunOutcome::NothingToReport;
        }

        let generator = ChangelogGenerator::new();
        let changelog = generator.generate(&commits);
        let document = generator.format(&changelog);
        RunOutcome::Rendered {
            changelog,
            document,
        }
    }

    fn report(&self, outcome: &RunOutcome) {
        match outcome {
            RunOutcome::Rendered { .. } => {}
            RunOutcome::NothingToReport => {
                if !self.quiet {
                    output::warning("No commits found or error fetching commits.");
                }
            }
            RunOutcome::Failed { diagnostic } => {
                output::error(&format!("Unexpected error: {}", diagnostic));
            }
        }
    }

    fn print(&self, outcome: &RunOutcome) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome.changelog())?);
            }
            OutputFormat::Text => {
                print!("{}", outcome.file_contents());
            }
        }
        Ok(())
    }
}

/// Relative paths land in `base`; if `base` is unusable they stay relative to the process
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if base.is_dir() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Replace the changelog file with `contents` in a single write
fn write_changelog(path: &Path, contents: &str) -> Result<(), ChangelogError> {
    std::fs::write(path, contents).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "changelog written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["emojilog"]).unwrap();
        assert!(!cli.dry_run);
        assert!(cli.output.is_none());
        assert!(cli.directory.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.fallback_output(), PathBuf::from("Changelog.md"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "emojilog", "-C", "repo", "-o", "CHANGES.md", "--dry-run", "--format", "json", "-q",
        ])
        .unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("repo")));
        assert_eq!(cli.fallback_output(), PathBuf::from("CHANGES.md"));
        assert!(cli.dry_run);
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Changelog.md");
        std::fs::write(&path, "stale content from an earlier release\n").unwrap();

        write_changelog(&path, "# Project\n\n\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Project\n\n\n");

        write_changelog(&path, RunOutcome::NothingToReport.file_contents()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("Changelog.md");

        let err = write_changelog(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Changelog.md"));
    }

    #[test]
    fn test_unrunnable_git_reports_nothing() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q"]).unwrap();

        let mut config = Config::default();
        config.git.program = "emojilog-definitely-not-a-binary".to_string();

        let outcome = cli.generate(&config, temp.path());
        assert!(matches!(outcome, RunOutcome::NothingToReport));
        assert_eq!(outcome.file_contents(), "");
    }

    const STALE: &str = "# Project\n\n## :sparkles: Added\n- old123: from last release\n\n";

    fn read_changelog(dir: &Path) -> String {
        std::fs::read_to_string(dir.join("Changelog.md")).unwrap()
    }

    fn git_available() -> bool {
        std::process::Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|out| out.status.success())
    }

    fn commit_file(repo: &Repository, root: &Path, name: &str, message: &str) -> git2::Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        std::fs::write(root.join(name), message).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_broken_config_writes_empty_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("emojilog.toml"), "[changelog\nfile = ").unwrap();
        std::fs::write(temp.path().join("Changelog.md"), STALE).unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q"]).unwrap();

        let outcome = cli.run_in(temp.path());

        assert_eq!(read_changelog(temp.path()), "");
        match outcome {
            RunOutcome::Failed { diagnostic } => {
                assert!(diagnostic.starts_with("failed to load configuration: TOML parsing error: "));
                assert_eq!(diagnostic.matches("TOML parse error").count(), 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_directory_is_reported_not_raised() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q"]).unwrap();

        let outcome = cli.run_in(&temp.path().join("gone"));
        assert!(matches!(outcome, RunOutcome::Failed { .. }));
    }

    #[test]
    fn test_untagged_repository_writes_empty_file() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        commit_file(&repo, temp.path(), "a.txt", "Initial commit");
        commit_file(&repo, temp.path(), "b.txt", ":sparkles: add feature");
        std::fs::write(temp.path().join("Changelog.md"), STALE).unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q"]).unwrap();

        let outcome = cli.run_in(temp.path());

        assert!(matches!(outcome, RunOutcome::NothingToReport));
        assert_eq!(read_changelog(temp.path()), "");
    }

    #[test]
    fn test_tagged_repository_writes_document() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let initial = commit_file(&repo, temp.path(), "a.txt", "Initial commit");
        let initial = repo.find_commit(initial).unwrap();
        repo.tag_lightweight("v1.0.0", initial.as_object(), false)
            .unwrap();
        let feature = commit_file(&repo, temp.path(), "b.txt", ":sparkles: add feature");
        let fix = commit_file(&repo, temp.path(), "c.txt", "[auth] :bug: fix login");
        commit_file(&repo, temp.path(), "d.txt", ":bookmark: bump version");
        std::fs::write(temp.path().join("Changelog.md"), STALE).unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q"]).unwrap();

        let outcome = cli.run_in(temp.path());

        let written = read_changelog(temp.path());
        assert!(matches!(outcome, RunOutcome::Rendered { .. }));
        assert_eq!(written, outcome.file_contents());

        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "# Project");
        assert_eq!(lines[2], "## :sparkles: Added");
        assert_eq!(lines[5], "# Module: Auth");
        assert_eq!(lines[7], "## :bug: Fixed");
        assert_eq!(lines.len(), 10);

        let (hash, message) = lines[3].trim_start_matches("- ").split_once(": ").unwrap();
        assert!(feature.to_string().starts_with(hash));
        assert_eq!(message, "add feature");
        let (hash, message) = lines[8].trim_start_matches("- ").split_once(": ").unwrap();
        assert!(fix.to_string().starts_with(hash));
        assert_eq!(message, "fix login");
        assert!(!written.contains("bump version"));
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("emojilog.toml"), "[git]\nprogram = \"\"\n").unwrap();
        std::fs::write(temp.path().join("Changelog.md"), STALE).unwrap();
        let cli = Cli::try_parse_from(["emojilog", "-q", "--dry-run"]).unwrap();

        let outcome = cli.run_in(temp.path());

        assert!(matches!(outcome, RunOutcome::Failed { .. }));
        assert_eq!(read_changelog(temp.path()), STALE);
    }
}
