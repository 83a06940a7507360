//! Config store - the on-disk state of a vtes project
//!
//! Owns the base project metadata, the per-environment version files, the
//! mode file and the pending commit record. Every read goes to disk; nothing
//! is cached between cycles.

pub mod layout;
pub mod mode;
pub mod records;

pub use layout::ProjectLayout;
pub use mode::{Mode, ModeConfig};
pub use records::PendingCommit;

use crate::error::{Result, VtesError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads and writes the vtes state files of one project.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    layout: ProjectLayout,
}

impl ConfigStore {
    pub fn new(layout: ProjectLayout) -> Self {
        ConfigStore { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Create the directories holding the mode file and the pending commit.
    pub fn ensure_layout(&self) -> Result<()> {
        for file in [self.layout.mode_file(), self.layout.pending_commit_file()] {
            if let Some(dir) = file.parent() {
                fs::create_dir_all(dir).map_err(|e| VtesError::config_write(dir, e))?;
            }
        }
        Ok(())
    }

    /// Parse the mode file. Never falls back to a default.
    pub fn load_mode_config(&self) -> Result<ModeConfig> {
        let path = self.layout.mode_file();
        let text = fs::read_to_string(&path).map_err(|e| read_failed(&path, e))?;
        serde_yaml::from_str(&text).map_err(|e| read_failed(&path, e))
    }

    pub fn load_pending_commit(&self) -> Result<PendingCommit> {
        let path = self.layout.pending_commit_file();
        let text = fs::read_to_string(&path).map_err(|e| read_failed(&path, e))?;
        serde_json::from_str(&text).map_err(|e| read_failed(&path, e))
    }

    /// Seed every missing state file; existing files are never touched.
    ///
    /// The environment version files are copies of the base metadata as it
    /// stands when they are first created. Returns the files that were
    /// written, so a second call returns an empty list.
    pub fn bootstrap_defaults(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();

        let manifest = self.layout.manifest();
        if !manifest.exists() {
            write_json(manifest, &records::default_manifest())?;
            created.push(manifest.to_path_buf());
        }

        let env_files = [self.layout.development_file(), self.layout.production_file()];
        if env_files.iter().any(|file| !file.exists()) {
            let base = read_json(manifest)?;
            for file in env_files {
                if !file.exists() {
                    write_json(&file, &base)?;
                    created.push(file);
                }
            }
        }

        let mode_file = self.layout.mode_file();
        if !mode_file.exists() {
            fs::write(&mode_file, mode::DEFAULT_MODE_FILE)
                .map_err(|e| VtesError::config_write(&mode_file, e))?;
            created.push(mode_file);
        }

        let pending = self.layout.pending_commit_file();
        if !pending.exists() {
            write_json(&pending, &PendingCommit::default())?;
            created.push(pending);
        }

        for file in &created {
            info!(path = %file.display(), "created default file");
        }
        Ok(created)
    }

    /// The version file a cycle bumps in `mode`.
    pub fn version_path(&self, mode: Mode) -> PathBuf {
        match mode {
            Mode::Development => self.layout.development_file(),
            Mode::Production => self.layout.production_file(),
        }
    }

    /// The `version` field of a JSON version file.
    pub fn read_version(&self, path: &Path) -> Result<String> {
        let json = read_json(path)?;
        json.get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| read_failed(path, "missing string field 'version'"))
    }

    /// Replace the `version` field of `path`, keeping every other field.
    pub fn write_version(&self, path: &Path, version: &str) -> Result<()> {
        let mut json = read_json(path)?;
        let object = json
            .as_object_mut()
            .ok_or_else(|| VtesError::config_write(path, "top-level value is not an object"))?;
        object.insert("version".to_string(), Value::String(version.to_string()));

        write_json(path, &json)?;
        info!(path = %path.display(), version, "updated version");
        Ok(())
    }

    pub fn reset_pending_commit(&self) -> Result<()> {
        let path = self.layout.pending_commit_file();
        write_json(&path, &PendingCommit::default())?;
        debug!(path = %path.display(), "cleared pending commit message");
        Ok(())
    }

    /// Version of the base metadata, or `None` when the project has none yet.
    pub fn project_version(&self) -> Result<Option<String>> {
        let manifest = self.layout.manifest();
        if !manifest.exists() {
            return Ok(None);
        }
        self.read_version(manifest).map(Some)
    }
}

fn read_failed(path: &Path, reason: impl ToString) -> VtesError {
    let err = VtesError::config_read(path, reason);
    debug!("{}", err);
    err
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    serde_json::from_str(&text).map_err(|e| read_failed(path, e))
}

/// Two-space pretty JSON with a trailing newline.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut text =
        serde_json::to_string_pretty(value).map_err(|e| VtesError::config_write(path, e))?;
    text.push('\n');
    fs::write(path, text).map_err(|e| VtesError::config_write(path, e))
}
