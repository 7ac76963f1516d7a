use std::path::{Component, Path, PathBuf};

/// Lyric extensions, in the order they are looked up.
pub const LYRIC_EXTENSIONS: [&str; 2] = ["ttml", "lrc"];

/// Absolute, lexically normalized `path`: `.` is dropped and `..` folds into
/// its parent. Symlinks are left alone.
pub fn absolute_path(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut out = PathBuf::new();
    for c in abs.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// `path` relative to `base`, joined with `/` whatever the host separator.
///
/// Returns `None` when `path` does not live under `base`.
pub fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Public link for a project-relative path. Only spaces are escaped.
pub fn raw_url(base_url: &str, relative: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let rel = relative.trim_start_matches('/').replace(' ', "%20");
    format!("{base}/{rel}")
}

/// First existing `.ttml` / `.lrc` file sharing `audio`'s stem.
///
/// Candidates must be regular files (or symlinks to one); a directory named
/// `Song.ttml` is not a lyric sibling.
pub fn lyric_sibling(audio: &Path) -> Option<PathBuf> {
    LYRIC_EXTENSIONS
        .iter()
        .map(|ext| audio.with_extension(ext))
        .find(|candidate| candidate.is_file())
}
