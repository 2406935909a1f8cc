use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Version-control state of the current buffer.
///
/// `mode_line` uses the editor convention `<Backend>-<branch>` for a clean
/// tree and `<Backend>:<branch>` when there are uncommitted changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsStatus {
    pub mode_line: String,
    pub dirty: bool,
}

impl VcsStatus {
    pub fn new(mode_line: impl Into<String>, dirty: bool) -> Self {
        Self {
            mode_line: mode_line.into(),
            dirty,
        }
    }

    pub fn branch_label(&self) -> String {
        branch_label(&self.mode_line)
    }
}

/// Split on `:` and `-`, drop the backend token, rejoin the rest with `-`.
pub fn branch_label(mode_line: &str) -> String {
    mode_line
        .split([':', '-'])
        .skip(1)
        .collect::<Vec<_>>()
        .join("-")
}

/// Reads branch and dirtiness of a git work tree.
#[derive(Debug, Clone, Default)]
pub struct GitProvider;

impl GitProvider {
    pub fn new() -> Self {
        Self
    }

    /// `Ok(None)` when `path` is not inside a repository.
    pub fn status(&self, path: &Path) -> Result<Option<VcsStatus>> {
        let repo = match gix::discover(path) {
            Ok(repo) => repo,
            Err(_) => {
                debug!(path = %path.display(), "not in a git repository");
                return Ok(None);
            }
        };

        let branch = match repo.head_ref().context("Failed to read HEAD")? {
            Some(reference) => reference.name().shorten().to_string(),
            None => match repo.head_id() {
                Ok(id) => id.to_hex_with_len(7).to_string(),
                // unborn branch with no commits
                Err(_) => match repo.head_name().ok().flatten() {
                    Some(name) => name.shorten().to_string(),
                    None => return Ok(None),
                },
            },
        };

        let work_dir = repo.work_dir().unwrap_or(path);
        let dirty = self.is_dirty(work_dir);
        let separator = if dirty { ':' } else { '-' };

        debug!(branch = %branch, dirty, "git status");
        Ok(Some(VcsStatus::new(format!("Git{}{}", separator, branch), dirty)))
    }

    fn is_dirty(&self, work_dir: &Path) -> bool {
        match Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(work_dir)
            .output()
        {
            Ok(output) if output.status.success() => !output.stdout.iter().all(u8::is_ascii_whitespace),
            Ok(_) | Err(_) => {
                debug!("git status --porcelain failed, assuming clean");
                false
            }
        }
    }
}
