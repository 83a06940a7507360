use crate::config::Settings;
use std::path::{Path, PathBuf};

/// Every path vtes touches, derived from the project root and the tool root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_root: PathBuf,
    tool_root: PathBuf,
    manifest: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: impl Into<PathBuf>, settings: &Settings) -> Self {
        let project_root = project_root.into();
        ProjectLayout {
            tool_root: project_root.join(&settings.tool_dir),
            manifest: project_root.join(&settings.manifest),
            project_root,
        }
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }

    /// Base project metadata (`package.json` by default).
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn development_file(&self) -> PathBuf {
        self.tool_root.join("development.json")
    }

    pub fn production_file(&self) -> PathBuf {
        self.tool_root.join("production.json")
    }

    pub fn mode_file(&self) -> PathBuf {
        self.tool_root.join("config").join("config.yaml")
    }

    pub fn pending_commit_file(&self) -> PathBuf {
        self.tool_root.join("commit.json")
    }

    pub fn gitignore(&self) -> PathBuf {
        self.project_root.join(".gitignore")
    }
}
