//! Theme file watcher.
//! Reloads a theme TOML whenever it changes on disk.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use log::{debug, info, warn};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::SkinError;
use crate::theme::Theme;

/// Events arriving this close together are handled as one reload.
const SETTLE: Duration = Duration::from_millis(50);

/// Watch `path` and send every successfully re-parsed theme through `tx`.
///
/// Blocks the calling thread. Returns `Ok` once the receiving side hangs
/// up. Parse failures are logged and the previous theme stays in effect.
pub fn watch_theme(path: &Path, tx: Sender<Theme>) -> Result<(), SkinError> {
    // Editors often save by replacing the file, so watch the directory.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let Some(name) = path.file_name().map(|n| n.to_os_string()) else {
        return Err(SkinError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
        });
    };

    let (notify_tx, notify_rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
        Ok(event) => {
            let _ = notify_tx.send(event);
        }
        Err(e) => warn!("watch error: {e}"),
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!("Watching theme file {}", path.display());

    loop {
        match notify_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(event) => {
                if !touches(&event, &name) {
                    continue;
                }
                debug!("theme file event: {:?}", event.kind);
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        // Coalesce the burst of events a single save produces.
        while let Ok(event) = notify_rx.recv_timeout(SETTLE) {
            debug!("coalescing theme file event: {:?}", event.kind);
        }

        if !path.exists() {
            debug!("theme file {} is gone, waiting", path.display());
            continue;
        }
        match Theme::load(path) {
            Ok(theme) => {
                if tx.send(theme).is_err() {
                    return Ok(());
                }
            }
            Err(e) => warn!("{e}, keeping previous theme"),
        }
    }
}

/// Whether `event` is a write, create or rename of a file called `name`.
fn touches(event: &Event, name: &std::ffi::OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == Some(name))
}
