use crate::error::{Result, VtesError};
use crate::git::{DiffRecord, Repository};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    repository: AtomicBool,
    history: bool,
    diff: DiffRecord,
    diff_error: Option<String>,
    fail_init: bool,
    fail_commit_at: Option<usize>,
    init_calls: AtomicUsize,
    commits: Mutex<Vec<String>>,
}

impl MockRepository {
    /// An existing repository with history and an empty diff
    pub fn new() -> Self {
        MockRepository {
            repository: AtomicBool::new(true),
            history: true,
            diff: DiffRecord::default(),
            diff_error: None,
            fail_init: false,
            fail_commit_at: None,
            init_calls: AtomicUsize::new(0),
            commits: Mutex::new(Vec::new()),
        }
    }

    /// No repository yet; `initialize` creates one
    pub fn uninitialized() -> Self {
        let mock = MockRepository::new().with_history(false);
        mock.repository.store(false, Ordering::SeqCst);
        mock
    }

    pub fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }

    pub fn with_diff<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diff = DiffRecord::new(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_diff_error(mut self, detail: impl Into<String>) -> Self {
        self.diff_error = Some(detail.into());
        self
    }

    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make the `n`th commit call (0-based) fail
    pub fn with_failing_commit(mut self, n: usize) -> Self {
        self.fail_commit_at = Some(n);
        self
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    /// Messages of every successful commit, oldest first
    pub fn commits(&self) -> Vec<String> {
        self.commits.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn is_repository(&self) -> bool {
        self.repository.load(Ordering::SeqCst)
    }

    fn initialize(&self) -> Result<()> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_init {
            return Err(VtesError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            )));
        }
        self.repository.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn has_history(&self) -> bool {
        self.history
    }

    fn compute_diff(&self) -> Result<DiffRecord> {
        if !self.history {
            return Ok(DiffRecord::default());
        }
        match &self.diff_error {
            Some(detail) => Err(VtesError::diff(detail.clone())),
            None => Ok(self.diff.clone()),
        }
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut commits = self
            .commits
            .lock()
            .map_err(|_| VtesError::commit("mock state poisoned"))?;
        let attempt = commits.len();
        if self.fail_commit_at == Some(attempt) {
            return Err(VtesError::commit("error: pathspec did not match any files"));
        }
        commits.push(message.to_string());
        Ok(())
    }
}
