use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::config::{CatalogSettings, ScanSettings};
use crate::error::CatalogError;

use super::links::{absolute_path, lyric_sibling, raw_url, relative_slash_path};
use super::model::{SongRecord, sort_records};
use super::scan::audio_files;
use super::tags::extract_metadata;

/// Walk the audio root and assemble the sorted records.
pub fn collect_records(
    catalog: &CatalogSettings,
    scan: &ScanSettings,
) -> Result<Vec<SongRecord>, CatalogError> {
    // Compare absolute forms so `.` / `..` in either setting cannot hide nesting.
    let project_root = absolute_path(&catalog.project_root);
    let audio_root = absolute_path(&catalog.audio_root());
    let files = audio_files(&audio_root, scan)?;
    debug!("found {} audio files under {}", files.len(), audio_root.display());

    let mut records = Vec::new();
    for file in files {
        let Some(tags) = extract_metadata(&file) else {
            continue;
        };

        // Files outside the project root are linked relative to the audio root.
        let link_base = if file.starts_with(&project_root) {
            project_root.as_path()
        } else {
            audio_root.as_path()
        };
        let link_path = |p: &Path| {
            relative_slash_path(p, link_base).map(|rel| raw_url(&catalog.base_url, &rel))
        };

        let dir = file
            .parent()
            .and_then(|d| relative_slash_path(d, link_base))
            .unwrap_or_default();
        let Some(audio_link) = link_path(&file) else {
            continue;
        };
        let lirik_link = lyric_sibling(&file).and_then(|lyric| link_path(&lyric));

        records.push(SongRecord::from_tags(tags, dir, audio_link, lirik_link));
    }

    sort_records(&mut records);
    Ok(records)
}

/// Pretty JSON for `records`, indented by `indent` spaces, without a trailing newline.
pub fn render_catalog(records: &[SongRecord], indent: usize) -> Result<Vec<u8>, CatalogError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Replace `path` with `contents`, creating parent directories first.
pub fn write_catalog(path: &Path, contents: &[u8]) -> Result<(), CatalogError> {
    let write_err = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Scan, render and write the catalog. Returns the number of songs written.
pub fn build_catalog(catalog: &CatalogSettings, scan: &ScanSettings) -> Result<usize, CatalogError> {
    let records = collect_records(catalog, scan)?;
    let output = catalog.output_path();
    let json = render_catalog(&records, catalog.indent)?;
    write_catalog(&output, &json)?;

    info!("wrote {} songs to {}", records.len(), output.display());
    Ok(records.len())
}
