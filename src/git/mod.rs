//! Git operations abstraction layer
//!
//! The [Repository] trait is everything vtes needs from version control:
//! probing for a repository, creating one, reading the most recent change
//! set and committing. Implementations:
//!
//! - [repository::Git2Repository]: the real thing, built on the `git2` crate
//! - [mock::MockRepository]: an in-memory stand-in for orchestrator tests
//!
//! The boolean checks never fail. Implementations that can say *why* a check
//! came back `false` expose that through `try_` methods of their own.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Name-status lines (`"M\tsrc/lib.rs"`) between the two most recent commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffRecord {
    lines: Vec<String>,
}

impl DiffRecord {
    pub fn new(lines: Vec<String>) -> Self {
        DiffRecord { lines }
    }

    /// Split raw `git diff --name-status` output, dropping blank lines.
    pub fn from_output(output: &str) -> Self {
        DiffRecord {
            lines: output
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Version-control operations used by the release cycle
///
/// ## Error Handling
///
/// `compute_diff` reports failures as [crate::error::VtesError::Diff] and
/// `commit` as [crate::error::VtesError::Commit], carrying the underlying
/// detail. A repository without history is not an error for `compute_diff`:
/// it yields an empty [DiffRecord].
pub trait Repository: Send + Sync {
    /// Whether the project root is inside a work tree. Never fails.
    fn is_repository(&self) -> bool;

    /// Create a repository at the project root.
    ///
    /// Callers treat this as best-effort and only warn on failure.
    fn initialize(&self) -> Result<()>;

    /// Whether at least one commit exists. Never fails.
    fn has_history(&self) -> bool;

    /// Name-status diff between HEAD's parent and HEAD.
    ///
    /// Empty when fewer than two commits exist.
    fn compute_diff(&self) -> Result<DiffRecord>;

    /// Stage every working-tree change and commit it with `message`.
    ///
    /// Fails when nothing is staged. Nothing is rolled back on failure.
    fn commit(&self, message: &str) -> Result<()>;
}
