use serde::Serialize;

/// Title/artist/album as read from a file's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongTags {
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// One entry of the written catalog. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Containing directory, relative to the project root, `/`-separated.
    pub path: String,
    pub audio_link: String,
    /// Empty when the file has no `.ttml`/`.lrc` sibling.
    pub lirik_link: String,
}

impl SongRecord {
    pub fn from_tags(tags: SongTags, path: String, audio_link: String, lirik_link: Option<String>) -> Self {
        Self {
            title: tags.title,
            artist: tags.artist,
            album: tags.album,
            path,
            audio_link,
            lirik_link: lirik_link.unwrap_or_default(),
        }
    }

    /// Catalog ordering: artist, then title, both case-insensitive.
    pub fn sort_key(&self) -> (String, String) {
        (self.artist.to_lowercase(), self.title.to_lowercase())
    }
}

/// Stable sort by [`SongRecord::sort_key`].
pub fn sort_records(records: &mut [SongRecord]) {
    records.sort_by_cached_key(SongRecord::sort_key);
}
