//! Release cycle orchestration
//!
//! One cycle reads the pending commit message, bumps the version file of the
//! configured mode according to the latest diff, commits everything with the
//! pending message, then clears the message and commits that too. The
//! version file is written before the first commit: if that commit fails the
//! bump stays in the working tree, uncommitted, for an operator to resolve.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::analyzer::VersionAnalyzer;
use crate::cli::watch::{self, Subscription};
use crate::domain::BumpKind;
use crate::error::VtesError;
use crate::git::Repository;
use crate::store::{ConfigStore, Mode};

/// Message of the commit that clears the pending commit record.
pub const RESET_COMMIT_MESSAGE: &str = "chore: reset commit.json after commit";

/// Where a cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Bootstrapping,
    AwaitingCommitMessage,
    DiffResolution,
    VersionComputation,
    Persisting,
    Committing,
    Resetting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Bootstrapping => "bootstrap",
            Stage::AwaitingCommitMessage => "reading commit message",
            Stage::DiffResolution => "reading git diff",
            Stage::VersionComputation => "computing version",
            Stage::Persisting => "writing version file",
            Stage::Committing => "committing",
            Stage::Resetting => "resetting commit message",
        };
        f.write_str(name)
    }
}

/// A cycle that aborted, tagged with the stage that failed.
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct CycleError {
    pub stage: Stage,
    #[source]
    pub source: VtesError,
}

/// What a completed cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The pending commit message was empty; nothing was touched.
    Skipped,
    Released(Release),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub mode: Mode,
    pub version_file: PathBuf,
    pub previous: String,
    pub next: String,
    pub bump: BumpKind,
    pub message: String,
}

/// Drives release cycles against one project.
pub struct Orchestrator<R: Repository> {
    store: ConfigStore,
    repo: R,
    analyzer: VersionAnalyzer,
    stage: Stage,
}

impl<R: Repository> Orchestrator<R> {
    pub fn new(store: ConfigStore, repo: R, analyzer: VersionAnalyzer) -> Self {
        Orchestrator {
            store,
            repo,
            analyzer,
            stage: Stage::Idle,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn enter(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, "stage");
        self.stage = stage;
    }

    fn fail(&self, source: VtesError) -> CycleError {
        CycleError {
            stage: self.stage,
            source,
        }
    }

    /// Create missing state files and the repository.
    ///
    /// Safe to repeat: existing files are left alone. A failed repository
    /// init is only a warning.
    pub fn bootstrap(&mut self) -> Result<Vec<PathBuf>, CycleError> {
        self.enter(Stage::Bootstrapping);

        self.store.ensure_layout().map_err(|e| self.fail(e))?;
        let created = self.store.bootstrap_defaults().map_err(|e| self.fail(e))?;

        if !self.repo.is_repository() {
            if let Err(e) = self.repo.initialize() {
                warn!("could not initialize git repository: {}", e);
            }
        }

        Ok(created)
    }

    /// Run one full cycle and return to `Idle`, whatever happens.
    ///
    /// Reporting a failure is left to the caller.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let result = self.cycle();
        if let Err(e) = &result {
            debug!(stage = %e.stage, "cycle aborted");
        }
        self.enter(Stage::Idle);
        result
    }

    fn cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        self.bootstrap()?;

        self.enter(Stage::AwaitingCommitMessage);
        let mode = self.store.load_mode_config().map_err(|e| self.fail(e))?.mode;
        let pending = self.store.load_pending_commit().map_err(|e| self.fail(e))?;
        if pending.is_empty() {
            info!("commit message is empty, nothing to do");
            return Ok(CycleOutcome::Skipped);
        }

        let version_file = self.store.version_path(mode);
        info!(mode = %mode, file = %version_file.display(), "selected version file");

        self.enter(Stage::DiffResolution);
        let diff = self.repo.compute_diff().map_err(|e| self.fail(e))?;
        debug!(lines = diff.len(), "resolved diff");

        self.enter(Stage::VersionComputation);
        let previous = self
            .store
            .read_version(&version_file)
            .map_err(|e| self.fail(e))?;
        let (bump, next) = self
            .analyzer
            .next_version(&previous, &diff)
            .map_err(|e| self.fail(e))?;
        info!(%bump, "{} -> {}", previous, next);

        self.enter(Stage::Persisting);
        self.store
            .write_version(&version_file, &next)
            .map_err(|e| self.fail(e))?;

        self.enter(Stage::Committing);
        let message = pending.commit_message;
        info!("committing with message: {}", message);
        self.repo.commit(&message).map_err(|e| self.fail(e))?;

        self.enter(Stage::Resetting);
        self.store.reset_pending_commit().map_err(|e| self.fail(e))?;
        self.repo
            .commit(RESET_COMMIT_MESSAGE)
            .map_err(|e| self.fail(e))?;

        Ok(CycleOutcome::Released(Release {
            mode,
            version_file,
            previous,
            next,
            bump,
            message,
        }))
    }

    /// Run one cycle per trigger until the channel closes.
    ///
    /// Failed cycles are logged and do not stop the loop. Returns the number
    /// of cycles run.
    pub fn serve(&mut self, triggers: Receiver<()>) -> usize {
        let mut cycles = 0;
        for () in triggers.iter() {
            info!("pending commit changed, running cycle");
            if let Err(e) = self.run_cycle() {
                error!("{}", e);
            }
            cycles += 1;
        }
        cycles
    }

    /// Bootstrap, then subscribe to changes of the pending commit file.
    ///
    /// Hand the receiver to [`Orchestrator::serve`]; dropping the
    /// subscription closes it.
    pub fn subscribe_pending(
        &mut self,
        interval: Duration,
    ) -> Result<(Subscription, Receiver<()>), CycleError> {
        let subscribed = self.bootstrap().and_then(|_| {
            let path = self.store.layout().pending_commit_file();
            info!(path = %path.display(), "watching for changes");
            watch::subscribe(path, interval).map_err(|e| self.fail(e))
        });
        self.enter(Stage::Idle);
        subscribed
    }

    /// Bootstrap, then run a cycle on every change of the pending commit file.
    ///
    /// Only returns if bootstrapping fails or the poller stops.
    pub fn watch(&mut self, interval: Duration) -> Result<usize, CycleError> {
        let (_subscription, triggers) = self.subscribe_pending(interval)?;
        Ok(self.serve(triggers))
    }
}
