use crate::project::find_project;
use crate::vcs::{GitProvider, VcsStatus};
use std::path::Path;
use tracing::warn;

/// The buffer a status line is drawn for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferState {
    pub name: String,
    /// One-character modification code: `-` unmodified, `*` modified,
    /// `%` read-only.
    pub modified: String,
    pub major_mode: String,
}

impl BufferState {
    pub fn new(name: impl Into<String>, major_mode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modified: "-".to_string(),
            major_mode: major_mode.into(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, modified: bool, read_only: bool) -> Self {
        self.modified = modification_code(modified, read_only).to_string();
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.modified = code.into();
        self
    }
}

pub fn modification_code(modified: bool, read_only: bool) -> &'static str {
    if read_only {
        "%"
    } else if modified {
        "*"
    } else {
        "-"
    }
}

/// Everything a segment may read while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Whether the window being drawn has focus.
    pub active: bool,
    pub buffer: BufferState,
    pub vcs: Option<VcsStatus>,
    pub project: Option<String>,
}

impl RenderContext {
    pub fn new(buffer: BufferState, active: bool) -> Self {
        Self {
            active,
            buffer,
            vcs: None,
            project: None,
        }
    }

    #[must_use]
    pub fn with_vcs(mut self, vcs: VcsStatus) -> Self {
        self.vcs = Some(vcs);
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Fill version-control and project state from the file system.
    pub fn snapshot(buffer: BufferState, path: &Path, active: bool) -> Self {
        let vcs = GitProvider::new().status(path).unwrap_or_else(|err| {
            warn!("git status unavailable: {:#}", err);
            None
        });

        Self {
            active,
            buffer,
            vcs,
            project: find_project(path).map(|project| project.name),
        }
    }
}
