//! Tag extraction for the supported audio containers.
//!
//! The format is picked from the file extension. MPEG files are read through
//! their ID3v2 tag, with ID3v1 filling any field ID3v2 lacks; MP4 files
//! through the iTunes-style `ilst` atoms.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::id3::v1::Id3v1Tag;
use lofty::id3::v2::Id3v2Tag;
use lofty::mp4::{AtomData, AtomIdent, Ilst, Mp4File};
use lofty::mpeg::MpegFile;
use lofty::tag::Accessor;
use tracing::{debug, info, warn};

use crate::error::ExtractError;

use super::model::SongTags;

const TITLE_ATOM: [u8; 4] = *b"\xa9nam";
const ARTIST_ATOM: [u8; 4] = *b"\xa9ART";
const ALBUM_ATOM: [u8; 4] = *b"\xa9alb";

/// Audio containers the catalog understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// `.mp3`
    Mpeg,
    /// `.m4a`
    Mp4,
}

impl AudioFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mpeg),
            "m4a" => Some(Self::Mp4),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    fn read(self, path: &Path) -> Result<SongTags, ExtractError> {
        let mut reader = BufReader::new(File::open(path)?);
        // Only tags are needed; skip stream properties.
        let options = ParseOptions::new().read_properties(false);

        match self {
            Self::Mpeg => {
                let file = MpegFile::read_from(&mut reader, options)?;
                tags_from_id3(file.id3v2(), file.id3v1())
            }
            Self::Mp4 => {
                let file = Mp4File::read_from(&mut reader, options)?;
                let ilst = file.ilst().ok_or(ExtractError::NoTags)?;
                tags_from_ilst(ilst)
            }
        }
    }
}

/// Read title/artist/album from `path`, explaining any failure.
pub fn read_tags(path: &Path) -> Result<SongTags, ExtractError> {
    let format = AudioFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        ExtractError::Unsupported(ext)
    })?;
    format.read(path)
}

/// Tags for `path`, or `None` when the file cannot contribute a record.
///
/// Every failure is logged here and goes no further.
pub fn extract_metadata(path: &Path) -> Option<SongTags> {
    match read_tags(path) {
        Ok(tags) => Some(tags),
        Err(e @ ExtractError::Unsupported(_)) => {
            debug!("skipping {}: {e}", path.display());
            None
        }
        Err(e @ (ExtractError::NoTags | ExtractError::MissingField(_))) => {
            info!("skipping {}: {e}", path.display());
            None
        }
        Err(e) => {
            warn!("error processing {}: {e}", path.display());
            None
        }
    }
}

fn accessor_fields<T: Accessor>(tag: &T) -> [Option<String>; 3] {
    [tag.title(), tag.artist(), tag.album()].map(|v| v.map(Cow::into_owned))
}

/// ID3v2 wins per field; ID3v1 only fills fields ID3v2 does not carry.
fn tags_from_id3(v2: Option<&Id3v2Tag>, v1: Option<&Id3v1Tag>) -> Result<SongTags, ExtractError> {
    let [title, artist, album] = match (v2.map(accessor_fields), v1.map(accessor_fields)) {
        (None, None) => return Err(ExtractError::NoTags),
        (Some(fields), None) | (None, Some(fields)) => fields,
        (Some([t2, a2, al2]), Some([t1, a1, al1])) => [t2.or(t1), a2.or(a1), al2.or(al1)],
    };
    complete(title, artist, album)
}

fn tags_from_ilst(ilst: &Ilst) -> Result<SongTags, ExtractError> {
    complete(
        first_text(ilst, TITLE_ATOM),
        first_text(ilst, ARTIST_ATOM),
        first_text(ilst, ALBUM_ATOM),
    )
}

fn first_text(ilst: &Ilst, fourcc: [u8; 4]) -> Option<String> {
    ilst.get(&AtomIdent::Fourcc(fourcc))?
        .data()
        .find_map(|d| match d {
            AtomData::UTF8(s) | AtomData::UTF16(s) => Some(s.clone()),
            _ => None,
        })
}

fn complete(
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
) -> Result<SongTags, ExtractError> {
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());

    Ok(SongTags {
        title: present(title).ok_or(ExtractError::MissingField("title"))?,
        artist: present(artist).ok_or(ExtractError::MissingField("artist"))?,
        album: album.unwrap_or_default(),
    })
}
