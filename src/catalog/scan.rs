use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ScanSettings;
use crate::error::CatalogError;

use super::tags::AudioFormat;

fn is_audio_file(path: &Path) -> bool {
    AudioFormat::from_path(path).is_some()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Every supported audio file under `root`, in walk order.
///
/// Entries are visited sorted by file name so repeated scans of the same
/// tree yield the same sequence. Unreadable entries below the root are
/// logged and skipped; an unreadable root is an error.
pub fn audio_files(root: &Path, settings: &ScanSettings) -> Result<Vec<PathBuf>, CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::RootNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if e.depth() == 0 {
                    return Err(CatalogError::RootNotFound(root.to_path_buf()));
                }
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_audio_file(path) {
            files.push(path.to_path_buf());
        } else {
            debug!("ignoring {}", path.display());
        }
    }

    Ok(files)
}
