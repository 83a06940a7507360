//! Polling subscription on a single file
//!
//! A `notify` poll watcher scans the file's directory at a fixed interval,
//! comparing modification times and contents, and pushes one trigger per
//! change of the file onto an `mpsc` channel. The receiving side is the only
//! consumer, so triggers are handled one at a time and in order.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify::{Config, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::error::Result;

/// Handle to a running poller. Dropping it stops the poller.
pub struct Subscription {
    _watcher: PollWatcher,
}

impl Subscription {
    /// Stop polling. The channel closes once the poller thread has exited.
    pub fn cancel(self) {}
}

/// Watch `path` for changes, checking every `interval`.
///
/// The parent directory is watched rather than the file, so a file created
/// after subscribing is reported too. The channel closes when the
/// subscription is cancelled or dropped.
pub fn subscribe(
    path: impl Into<PathBuf>,
    interval: Duration,
) -> Result<(Subscription, Receiver<()>)> {
    let path = path.into();
    let file_name = path.file_name().map(|name| name.to_os_string());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.is_dir() {
        return Err(notify::Error::path_not_found().add_path(dir).into());
    }

    let (tx, rx) = mpsc::channel();
    let handler = move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if matches!(event.kind, EventKind::Access(_)) {
                return;
            }
            let ours = event
                .paths
                .iter()
                .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
            if ours {
                debug!(kind = ?event.kind, "change detected");
                // A closed channel means the consumer is gone.
                let _ = tx.send(());
            }
        }
        Err(e) => warn!("watch error: {}", e),
    };

    let config = Config::default()
        .with_poll_interval(interval)
        .with_compare_contents(true);
    let mut watcher = PollWatcher::new(handler, config)?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    debug!(dir = %dir.display(), file = %path.display(), "polling");

    Ok((Subscription { _watcher: watcher }, rx))
}
