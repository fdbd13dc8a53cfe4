//! Git subprocess execution

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use emojilog_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Something that can run a git subcommand and hand back its stdout
pub trait GitRunner {
    /// Run git with `args`, returning trimmed stdout on success
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}

/// Runs the system git binary
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Use `git` from PATH in the current directory
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            workdir: None,
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run commands inside `path` instead of the current directory
    pub fn in_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.workdir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the process for `args`, with git's messages kept in English
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).env("LC_ALL", "C");
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    #[instrument(skip(self), fields(program = %self.program))]
    fn run(&self, args: &[&str]) -> Result<String> {
        let start = std::time::Instant::now();
        let command = self.command_line(args);

        let output = self.command(args).output().map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

        debug!(
            command = %command,
            duration_ms = start.elapsed().as_millis(),
            success = output.status.success(),
            "git command finished"
        );

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| GitError::InvalidOutput { command })?;
        Ok(stdout.trim().to_string())
    }
}
