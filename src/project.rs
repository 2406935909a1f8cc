use std::path::{Path, PathBuf};

/// Files or directories whose presence marks a project root.
pub const ROOT_MARKERS: &[&str] = &[
    ".git",
    ".projectile",
    "Cargo.toml",
    "package.json",
    "go.mod",
    "pyproject.toml",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
}

/// Nearest ancestor of `path` (inclusive) holding a root marker.
pub fn find_project(path: &Path) -> Option<Project> {
    path.ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
        .and_then(|root| {
            let name = root.file_name()?.to_str()?.to_string();
            Some(Project {
                name,
                root: root.to_path_buf(),
            })
        })
}
