use crate::error::{Result, VtesError};
use crate::git::DiffRecord;
use git2::{Delta, DiffDelta, ErrorCode, IndexAddOption, Repository as Git2Repo};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// [super::Repository] backed by libgit2.
///
/// Holds only the project root; the repository is re-opened on every call so
/// each cycle sees the current on-disk state.
#[derive(Debug, Clone)]
pub struct Git2Repository {
    root: PathBuf,
}

impl Git2Repository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Git2Repository { root: root.into() }
    }

    fn open(&self) -> std::result::Result<Git2Repo, git2::Error> {
        Git2Repo::discover(&self.root)
    }

    /// Like `is_repository`, but keeps the reason a lookup failed.
    pub fn try_is_repository(&self) -> Result<bool> {
        match self.open() {
            Ok(repo) => Ok(!repo.is_bare()),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `has_history`, but keeps the reason a lookup failed.
    pub fn try_has_history(&self) -> Result<bool> {
        let repo = self.open()?;
        let head = match repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(false)
            }
            Err(e) => return Err(e.into()),
        };
        head.peel_to_commit()?;
        Ok(true)
    }
}

impl super::Repository for Git2Repository {
    fn is_repository(&self) -> bool {
        self.try_is_repository().unwrap_or_else(|e| {
            debug!(root = %self.root.display(), "repository check failed: {}", e);
            false
        })
    }

    fn initialize(&self) -> Result<()> {
        Git2Repo::init(&self.root)?;
        info!(root = %self.root.display(), "initialized git repository");
        Ok(())
    }

    fn has_history(&self) -> bool {
        self.try_has_history().unwrap_or_else(|e| {
            debug!(root = %self.root.display(), "history check failed: {}", e);
            false
        })
    }

    fn compute_diff(&self) -> Result<DiffRecord> {
        if !self.has_history() {
            debug!("no commits yet, diff is empty");
            return Ok(DiffRecord::default());
        }

        let fail = |e: git2::Error| VtesError::diff(e.message().to_string());
        let repo = self.open().map_err(fail)?;
        let head = repo.head().and_then(|h| h.peel_to_commit()).map_err(fail)?;

        if head.parent_count() == 0 {
            debug!("only one commit, diff is empty");
            return Ok(DiffRecord::default());
        }

        let parent_tree = head.parent(0).and_then(|p| p.tree()).map_err(fail)?;
        let head_tree = head.tree().map_err(fail)?;
        let diff = repo
            .diff_tree_to_tree(Some(&parent_tree), Some(&head_tree), None)
            .map_err(fail)?;

        let lines = diff.deltas().map(|delta| name_status_line(&delta)).collect();
        Ok(DiffRecord::new(lines))
    }

    fn commit(&self, message: &str) -> Result<()> {
        let fail = |e: git2::Error| VtesError::commit(e.message().to_string());
        let repo = self.open().map_err(fail)?;

        let mut index = repo.index().map_err(fail)?;
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .map_err(fail)?;
        index.update_all(["*"], None).map_err(fail)?;
        index.write().map_err(fail)?;
        let tree_id = index.write_tree().map_err(fail)?;

        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit().map_err(fail)?),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
            Err(e) => return Err(fail(e)),
        };

        let unchanged = match &parent {
            Some(parent) => parent.tree_id() == tree_id,
            None => index.is_empty(),
        };
        if unchanged {
            warn!("nothing to commit for '{}'", message);
            return Err(VtesError::commit("nothing to commit, working tree clean"));
        }

        let tree = repo.find_tree(tree_id).map_err(fail)?;
        let signature = repo.signature().map_err(fail)?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .map_err(fail)?;

        info!(commit = %oid, "committed '{}'", message);
        Ok(())
    }
}

fn status_code(status: Delta) -> char {
    match status {
        Delta::Added => 'A',
        Delta::Deleted => 'D',
        Delta::Modified => 'M',
        Delta::Renamed => 'R',
        Delta::Copied => 'C',
        Delta::Typechange => 'T',
        Delta::Unmodified => ' ',
        Delta::Ignored => '!',
        Delta::Untracked => '?',
        Delta::Unreadable => 'X',
        Delta::Conflicted => 'U',
    }
}

fn name_status_line(delta: &DiffDelta<'_>) -> String {
    let path = delta
        .new_file()
        .path()
        .or_else(|| delta.old_file().path())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}\t{}", status_code(delta.status()), path)
}
