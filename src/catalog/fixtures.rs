//! Synthetic audio files for tests.
//!
//! MP3: a hand-built ID3v2.3 tag, silent MPEG-1 Layer III frames and an
//! optional ID3v1 trailer. M4A: `ftyp` + `moov{mvhd, udta{meta{hdlr, ilst}}}`
//! + an empty `mdat`.

use std::fs;
use std::path::Path;

// MPEG-1 Layer III, 128 kbit/s, 44.1 kHz, no padding, stereo.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
// 144 * 128000 / 44100
const FRAME_LEN: usize = 417;

pub fn mpeg_frames(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * FRAME_LEN);
    for _ in 0..count {
        out.extend_from_slice(&FRAME_HEADER);
        out.resize(out.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    out
}

/// ID3v2.3 tag with ISO-8859-1 text frames. Values must be ASCII.
pub fn id3v2_tag(frames: &[(&[u8; 4], &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (id, text) in frames {
        let size = (text.len() + 1) as u32;
        body.extend_from_slice(*id);
        body.extend_from_slice(&size.to_be_bytes());
        body.extend_from_slice(&[0, 0]);
        body.push(0); // ISO-8859-1
        body.extend_from_slice(text.as_bytes());
    }

    let size = body.len() as u32;
    let mut tag = b"ID3\x03\x00\x00".to_vec();
    tag.extend_from_slice(&[
        ((size >> 21) & 0x7F) as u8,
        ((size >> 14) & 0x7F) as u8,
        ((size >> 7) & 0x7F) as u8,
        (size & 0x7F) as u8,
    ]);
    tag.extend(body);
    tag
}

pub fn write_mp3(path: &Path, title: Option<&str>, artist: Option<&str>, album: Option<&str>) {
    let mut frames: Vec<(&[u8; 4], &str)> = Vec::new();
    if let Some(t) = title {
        frames.push((b"TIT2", t));
    }
    if let Some(a) = artist {
        frames.push((b"TPE1", a));
    }
    if let Some(a) = album {
        frames.push((b"TALB", a));
    }

    let mut bytes = id3v2_tag(&frames);
    bytes.extend(mpeg_frames(8));
    fs::write(path, bytes).unwrap();
}

/// 128-byte ID3v1 trailer. Fields longer than 30 bytes are cut.
pub fn id3v1_trailer(title: &str, artist: &str, album: &str) -> Vec<u8> {
    let field = |text: &str| {
        let mut out = text.as_bytes().to_vec();
        out.resize(30, 0);
        out
    };

    let mut tag = b"TAG".to_vec();
    tag.extend(field(title));
    tag.extend(field(artist));
    tag.extend(field(album));
    tag.extend_from_slice(b"2024");
    tag.extend([0u8; 30]); // comment
    tag.push(255); // no genre
    tag
}

fn atom(ident: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = ((body.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(ident);
    out.extend_from_slice(body);
    out
}

fn full_atom(ident: &[u8; 4], body: &[u8]) -> Vec<u8> {
    // version 0, flags 0
    atom(ident, &[&[0u8; 4][..], body].concat())
}

fn ilst_item(ident: &[u8; 4], text: &str) -> Vec<u8> {
    // type indicator 1 = UTF-8, locale 0
    let mut data = vec![0, 0, 0, 1, 0, 0, 0, 0];
    data.extend_from_slice(text.as_bytes());
    atom(ident, &atom(b"data", &data))
}

fn m4a_bytes(items: Option<&[(&[u8; 4], &str)]>) -> Vec<u8> {
    let ftyp = atom(b"ftyp", b"M4A \0\0\0\0M4A mp42isom");

    // mvhd v0 body after version/flags is 96 bytes; contents are irrelevant here.
    let mut moov_body = full_atom(b"mvhd", &[0u8; 96]);
    if let Some(items) = items {
        let hdlr = full_atom(b"hdlr", b"\0\0\0\0mdirappl\0\0\0\0\0\0\0\0\0");
        let ilst_body: Vec<u8> = items
            .iter()
            .flat_map(|(ident, text)| ilst_item(ident, text))
            .collect();
        let meta = full_atom(b"meta", &[hdlr, atom(b"ilst", &ilst_body)].concat());
        moov_body.extend(atom(b"udta", &meta));
    }

    [ftyp, atom(b"moov", &moov_body), atom(b"mdat", &[])].concat()
}

pub fn write_m4a(path: &Path, title: Option<&str>, artist: Option<&str>, album: Option<&str>) {
    let mut items: Vec<(&[u8; 4], &str)> = Vec::new();
    if let Some(t) = title {
        items.push((b"\xa9nam", t));
    }
    if let Some(a) = artist {
        items.push((b"\xa9ART", a));
    }
    if let Some(a) = album {
        items.push((b"\xa9alb", a));
    }
    fs::write(path, m4a_bytes(Some(items.as_slice()))).unwrap();
}

/// A valid container whose `moov` has no `udta`, so no `ilst` either.
pub fn write_m4a_without_tags(path: &Path) {
    fs::write(path, m4a_bytes(None)).unwrap();
}
