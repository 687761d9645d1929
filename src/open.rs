//! Opening a file at a given line in the user's editor.
use crate::error::{Result, ScopeGrepError};
use crate::session::FileHandle;
use std::io;
use std::process::Command;

pub const DEFAULT_EDITOR: &str = "vi";

pub trait Opener {
    /// `line` is 1-based.
    fn open(&self, handle: &FileHandle, line: usize) -> Result<()>;
}

/// Runs a command template such as `code -g {path}:{line}`.
///
/// The template is split on whitespace before substitution, so a path
/// containing spaces stays a single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOpener {
    template: String,
}

impl CommandOpener {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// `$VISUAL`, then `$EDITOR`, then `vi`, invoked as `<editor> +{line} {path}`.
    pub fn from_env() -> Self {
        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::new(format!("{editor} +{{line}} {{path}}"))
    }

    pub fn command_line(&self, handle: &FileHandle, line: usize) -> Vec<String> {
        let path = handle.path().to_string_lossy();
        let line = line.to_string();
        self.template
            .split_whitespace()
            .map(|token| token.replace("{path}", &path).replace("{line}", &line))
            .collect()
    }
}

impl Opener for CommandOpener {
    fn open(&self, handle: &FileHandle, line: usize) -> Result<()> {
        let open_error = |source: io::Error| ScopeGrepError::Open {
            path: handle.path().to_path_buf(),
            line,
            source,
        };

        let args = self.command_line(handle, line);
        let (program, rest) = args
            .split_first()
            .ok_or_else(|| ScopeGrepError::Config("empty open command".to_string()))?;

        log::debug!("Opening {} at line {line}: {args:?}", handle.path().display());
        let status = Command::new(program).args(rest).status().map_err(open_error)?;
        if status.success() {
            Ok(())
        } else {
            Err(open_error(io::Error::other(format!("editor exited with {status}"))))
        }
    }
}
