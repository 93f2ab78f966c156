//! Metadata extraction module.
//!
//! Gathers the fields name templates draw from, in three phases:
//!
//! 1. **Embedded tags**: audio formats are probed for tags first
//! 2. **Filename patterns**: track/episode numbers, year, title
//! 3. **Directory names**: artist/album and show/season layouts
//!
//! Earlier phases win; later phases only fill fields still missing.
//! Extraction is opportunistic and never fails: a file nothing can be
//! read from simply yields an empty field map, and rendering reports
//! the concrete missing fields later.

use lofty::prelude::*;
use lofty::probe::Probe;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::media::MediaType;

/// Release junk stripped from titles.
const QUALITY_TOKENS: &[&str] = &[
    "4k", "2160p", "1080p", "720p", "480p", "uhd", "hdr", "bluray", "blu-ray", "bdrip", "brrip",
    "dvdrip", "hdtv", "web-dl", "webdl", "webrip", "hdrip", "hevc", "x265", "h265", "x264", "h264",
    "10bit", "8bit", "remux", "proper", "repack", "dts", "truehd", "atmos", "aac", "ac3", "flac",
    "mp3", "320kbps", "v0",
];

/// File stems that carry no title information of their own.
const GENERIC_STEMS: &[&str] = &[
    "movie", "film", "video", "sample", "media", "untitled", "output", "index",
];

/// Candidate fields gathered for one file.
///
/// Field names line up with the built-in registry; unset fields stay
/// out of the rendered metadata entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFields {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track: Option<u16>,
    pub disc: Option<u16>,
    pub year: Option<u16>,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub series: Option<String>,
    pub book: Option<u16>,
    pub season: Option<u16>,
    pub episode: Option<u16>,
    pub episode_title: Option<String>,
}

impl CandidateFields {
    /// Merge two candidates, `self` winning where both have a value.
    pub fn merge(self, fallback: CandidateFields) -> CandidateFields {
        CandidateFields {
            title: self.title.or(fallback.title),
            artist: self.artist.or(fallback.artist),
            album: self.album.or(fallback.album),
            track: self.track.or(fallback.track),
            disc: self.disc.or(fallback.disc),
            year: self.year.or(fallback.year),
            genre: self.genre.or(fallback.genre),
            author: self.author.or(fallback.author),
            series: self.series.or(fallback.series),
            book: self.book.or(fallback.book),
            season: self.season.or(fallback.season),
            episode: self.episode.or(fallback.episode),
            episode_title: self.episode_title.or(fallback.episode_title),
        }
    }

    /// Flatten into the renderer's field map.
    ///
    /// Numbers are written in decimal without padding, so "S01E03" in a
    /// filename becomes season "1" and episode "3".
    pub fn into_metadata(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        };
        put("title", self.title);
        put("artist", self.artist);
        put("album", self.album);
        put("track", self.track.map(|n| n.to_string()));
        put("disc", self.disc.map(|n| n.to_string()));
        put("year", self.year.map(|n| n.to_string()));
        put("genre", self.genre);
        put("author", self.author);
        put("series", self.series);
        put("book", self.book.map(|n| n.to_string()));
        put("season", self.season.map(|n| n.to_string()));
        put("episode", self.episode.map(|n| n.to_string()));
        put("episode_title", self.episode_title);
        map
    }
}

/// Extract all available metadata for a file.
pub fn extract(path: &Path, media_type: MediaType) -> BTreeMap<String, String> {
    let mut candidate = CandidateFields::default();
    if matches!(media_type, MediaType::Music | MediaType::Audiobook) {
        candidate = read_embedded_tags(path, media_type);
    }
    candidate.merge(extract_from_path(path, media_type)).into_metadata()
}

/// Read embedded tags from an audio file.
///
/// Unreadable or tagless files are not an error here; the caller falls
/// back to filename heuristics.
fn read_embedded_tags(path: &Path, media_type: MediaType) -> CandidateFields {
    let mut fields = CandidateFields::default();

    let tagged = match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::debug!("No readable tags in {}: {}", path.display(), e);
            return fields;
        }
    };
    let tag = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
        Some(tag) => tag,
        None => return fields,
    };

    fields.year = tag.year().and_then(|y| u16::try_from(y).ok());
    match media_type {
        MediaType::Audiobook => {
            // For audiobooks the album tag usually carries the book title
            // and the artist tag the author.
            fields.author = tag.artist().map(|s| s.to_string());
            fields.title = tag
                .album()
                .map(|s| s.to_string())
                .or_else(|| tag.title().map(|s| s.to_string()));
        }
        _ => {
            fields.title = tag.title().map(|s| s.to_string());
            fields.artist = tag.artist().map(|s| s.to_string());
            fields.album = tag.album().map(|s| s.to_string());
            fields.genre = tag.genre().map(|s| s.to_string());
            fields.track = tag.track().and_then(|t| u16::try_from(t).ok());
            fields.disc = tag.disk().and_then(|d| u16::try_from(d).ok());
        }
    }
    fields
}

/// Extract metadata from the file name and surrounding directories.
pub fn extract_from_path(path: &Path, media_type: MediaType) -> CandidateFields {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    match media_type {
        MediaType::Music => music_fields(stem, path),
        MediaType::Audiobook => audiobook_fields(stem, path),
        MediaType::Ebook => ebook_fields(stem),
        MediaType::Movie => movie_fields(stem, path),
        MediaType::TvShow => tvshow_fields(stem, path),
    }
}

fn music_fields(stem: &str, path: &Path) -> CandidateFields {
    let mut fields = CandidateFields::default();
    let (track, disc, rest) = split_track_prefix(stem);
    fields.track = track;
    fields.disc = disc;

    // "Artist - Title" in what remains of the stem
    if let Some((left, right)) = rest.split_once(" - ") {
        fields.artist = non_empty(clean_title(left));
        fields.title = non_empty(clean_title(right));
    } else {
        fields.title = non_empty(clean_title(rest));
    }

    // Artist/Album/file layout, with an optional disc directory between
    let mut album_dir = dir_name(path, 1);
    let mut artist_dir = dir_name(path, 2);
    if let Some(dir) = &album_dir {
        if let Some(disc_no) = disc_dir_number(dir) {
            fields.disc = fields.disc.or(Some(disc_no));
            album_dir = dir_name(path, 2);
            artist_dir = dir_name(path, 3);
        }
    }
    if let Some(dir) = album_dir {
        let (album, year) = title_and_year(&dir);
        fields.album = fields.album.or(album);
        fields.year = fields.year.or(year);
    }
    if let Some(dir) = artist_dir {
        fields.artist = fields.artist.or(non_empty(clean_title(&dir)));
    }
    fields
}

fn audiobook_fields(stem: &str, path: &Path) -> CandidateFields {
    let mut fields = CandidateFields::default();
    let (book, _, rest) = split_track_prefix(stem);
    fields.book = book;

    if let Some((left, right)) = rest.split_once(" - ") {
        fields.author = non_empty(clean_title(left));
        fields.title = non_empty(clean_title(right));
    } else {
        fields.title = non_empty(clean_title(rest));
    }

    // Author/Series/file layout
    if let Some(dir) = dir_name(path, 1) {
        let (series, year) = title_and_year(&dir);
        fields.series = series;
        fields.year = fields.year.or(year);
    }
    if let Some(dir) = dir_name(path, 2) {
        fields.author = fields.author.or(non_empty(clean_title(&dir)));
    }
    fields
}

fn ebook_fields(stem: &str) -> CandidateFields {
    let mut fields = CandidateFields::default();
    let (book, _, rest) = split_track_prefix(stem);
    fields.book = book;
    fields.year = extract_year(stem);

    if let Some((left, right)) = rest.split_once(" - ") {
        fields.author = non_empty(clean_title(left));
        fields.title = non_empty(clean_title(right));
    } else {
        fields.title = non_empty(clean_title(rest));
    }
    fields
}

fn movie_fields(stem: &str, path: &Path) -> CandidateFields {
    let mut fields = CandidateFields::default();
    let (title, year) = title_and_year(stem);
    fields.title = title.filter(|t| !GENERIC_STEMS.contains(&t.to_lowercase().as_str()));
    fields.year = year;

    // "Title (Year)" folder when the filename alone is not enough
    if fields.title.is_none() || fields.year.is_none() {
        if let Some(dir) = dir_name(path, 1) {
            let (title, year) = title_and_year(&dir);
            fields.title = fields.title.or(title);
            fields.year = fields.year.or(year);
        }
    }
    fields
}

fn tvshow_fields(stem: &str, path: &Path) -> CandidateFields {
    let mut fields = CandidateFields::default();
    fields.year = extract_year(stem);

    if let Some(marker) = find_episode_marker(stem) {
        fields.season = marker.season;
        fields.episode = Some(marker.episode);
        fields.title = non_empty(clean_title(&stem[..marker.start]));
        fields.episode_title = non_empty(clean_title(&stem[marker.end..]));
    } else {
        fields.title = non_empty(clean_title(stem));
    }

    // Show/Season 01/file or Show (2008)/file layouts
    if let Some(parent) = dir_name(path, 1) {
        if let Some(season_no) = season_dir_number(&parent) {
            fields.season = fields.season.or(Some(season_no));
            if fields.title.is_none() {
                if let Some(grand) = dir_name(path, 2) {
                    let (title, year) = title_and_year(&grand);
                    fields.title = title;
                    fields.year = fields.year.or(year);
                }
            }
        } else if fields.title.is_none() {
            let (title, year) = title_and_year(&parent);
            fields.title = title;
            fields.year = fields.year.or(year);
        }
    }
    fields
}

/// A season/episode marker found in a name.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeMarker {
    pub season: Option<u16>,
    pub episode: u16,
    /// Byte range of the marker in the searched string.
    pub start: usize,
    pub end: usize,
}

/// Find the first season/episode marker in a name.
///
/// Recognized formats:
/// - `S01E03`, `s1e3`, `S01.E03`
/// - `1x03`
/// - `E03`, `Ep03`, `Episode 3` (episode only)
pub fn find_episode_marker(name: &str) -> Option<EpisodeMarker> {
    if let Ok(re) = regex::Regex::new(r"(?i)\bs(\d{1,2})[\._\- ]?e(\d{1,3})\b") {
        if let Some(caps) = re.captures(name) {
            let whole = caps.get(0)?;
            return Some(EpisodeMarker {
                season: caps.get(1).and_then(|m| m.as_str().parse().ok()),
                episode: caps.get(2).and_then(|m| m.as_str().parse().ok())?,
                start: whole.start(),
                end: whole.end(),
            });
        }
    }

    if let Ok(re) = regex::Regex::new(r"(?i)\b(\d{1,2})x(\d{2,3})\b") {
        if let Some(caps) = re.captures(name) {
            let whole = caps.get(0)?;
            return Some(EpisodeMarker {
                season: caps.get(1).and_then(|m| m.as_str().parse().ok()),
                episode: caps.get(2).and_then(|m| m.as_str().parse().ok())?,
                start: whole.start(),
                end: whole.end(),
            });
        }
    }

    if let Ok(re) = regex::Regex::new(r"(?i)\b(?:episode|ep|e)[\s\.]?(\d{1,3})\b") {
        if let Some(caps) = re.captures(name) {
            let whole = caps.get(0)?;
            return Some(EpisodeMarker {
                season: None,
                episode: caps.get(1).and_then(|m| m.as_str().parse().ok())?,
                start: whole.start(),
                end: whole.end(),
            });
        }
    }

    None
}

/// Extract a release year that stands apart from the surrounding text,
/// e.g. "Title (2016)" or "Title.2016.1080p". The last such year wins.
pub fn extract_year(name: &str) -> Option<u16> {
    let sep = |c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_');
    let mut found = None;
    if let Ok(re) = regex::Regex::new(r"\d{4}") {
        for m in re.find_iter(name) {
            // Boundaries are checked without being consumed, so years
            // sharing one separator ("1917 2019") are both seen
            let ok_before = match name[..m.start()].chars().next_back() {
                None => true,
                Some(c) => sep(c) || c == '(' || c == '[',
            };
            let ok_after = match name[m.end()..].chars().next() {
                None => true,
                Some(c) => sep(c) || c == ')' || c == ']',
            };
            if !(ok_before && ok_after) {
                continue;
            }
            if let Ok(year) = m.as_str().parse::<u16>() {
                if (1900..=2100).contains(&year) {
                    found = Some(year);
                }
            }
        }
    }
    found
}

/// Split a leading track marker off a stem.
///
/// Recognized prefixes: "07 - Name", "07. Name", "07_Name" and the
/// disc-track form "1-03 Name". Returns (track, disc, rest).
fn split_track_prefix(stem: &str) -> (Option<u16>, Option<u16>, &str) {
    if let Ok(re) = regex::Regex::new(r"^(\d{1,2})[\-\.](\d{2})[\s\.\-_]+(\S.*)$") {
        if let Some(caps) = re.captures(stem) {
            let disc = caps.get(1).and_then(|m| m.as_str().parse().ok());
            let track = caps.get(2).and_then(|m| m.as_str().parse().ok());
            if let (Some(rest), Some(track)) = (caps.get(3), track) {
                return (Some(track), disc, &stem[rest.start()..]);
            }
        }
    }

    if let Ok(re) = regex::Regex::new(r"^(\d{1,3})[\s\.\-_]+(\S.*)$") {
        if let Some(caps) = re.captures(stem) {
            let track = caps.get(1).and_then(|m| m.as_str().parse().ok());
            if let (Some(rest), Some(track)) = (caps.get(2), track) {
                return (Some(track), None, &stem[rest.start()..]);
            }
        }
    }

    (None, None, stem)
}

/// Extract "Title" and year from a "Title (Year)"-like name.
fn title_and_year(name: &str) -> (Option<String>, Option<u16>) {
    let year = extract_year(name);
    let title_part = match year {
        Some(year) => name.split(&year.to_string()).next().unwrap_or(name),
        None => name,
    };
    (non_empty(clean_title(title_part)), year)
}

/// Remove release junk from a name fragment.
///
/// Drops bracketed tags, turns dotted names into spaced ones, and cuts
/// the fragment at the first quality token ("1080p", "x265", ...).
pub fn clean_title(raw: &str) -> String {
    let mut name = raw.to_string();
    if let Ok(re) = regex::Regex::new(r"\[[^\]]*\]") {
        name = re.replace_all(&name, " ").to_string();
    }
    if !name.contains(' ') {
        name = name.replace(['.', '_'], " ");
    }

    let mut words = Vec::new();
    for word in name.split_whitespace() {
        let token = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if QUALITY_TOKENS.contains(&token.as_str()) {
            break;
        }
        words.push(word);
    }

    words
        .join(" ")
        .trim_matches(|c: char| {
            c == '-' || c == '.' || c == '(' || c == ')' || c == '[' || c.is_whitespace()
        })
        .to_string()
}

/// Season number of a season directory ("Season 01", "S2").
pub fn season_dir_number(name: &str) -> Option<u16> {
    let name = name.trim();
    if let Ok(re) = regex::Regex::new(r"(?i)^season[\s\._]*(\d{1,2})$") {
        if let Some(caps) = re.captures(name) {
            return caps.get(1).and_then(|m| m.as_str().parse().ok());
        }
    }
    if let Ok(re) = regex::Regex::new(r"(?i)^s(\d{1,2})$") {
        if let Some(caps) = re.captures(name) {
            return caps.get(1).and_then(|m| m.as_str().parse().ok());
        }
    }
    None
}

/// Disc number of a disc directory ("CD1", "Disc 2").
fn disc_dir_number(name: &str) -> Option<u16> {
    if let Ok(re) = regex::Regex::new(r"(?i)^(?:cd|disc|disk)[\s\._-]*(\d{1,2})$") {
        if let Some(caps) = re.captures(name.trim()) {
            return caps.get(1).and_then(|m| m.as_str().parse().ok());
        }
    }
    None
}

/// Whether the file name or its directories carry episode markers.
///
/// Used to split video files between movies and TV shows.
pub fn has_episode_markers(path: &Path) -> bool {
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        if find_episode_marker(stem).is_some() {
            return true;
        }
    }
    (1..=2).any(|level| {
        dir_name(path, level)
            .map(|dir| season_dir_number(&dir).is_some())
            .unwrap_or(false)
    })
}

/// Name of the directory `levels_up` above the file, if any.
fn dir_name(path: &Path, levels_up: usize) -> Option<String> {
    let mut current = path.parent()?;
    for _ in 1..levels_up {
        current = current.parent()?;
    }
    current
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_variants() {
        assert_eq!(extract_year("Arrival (2016)"), Some(2016));
        assert_eq!(extract_year("Arrival.2016.1080p"), Some(2016));
        assert_eq!(extract_year("Arrival 2016"), Some(2016));
        assert_eq!(extract_year("Arrival"), None);
        // out of range
        assert_eq!(extract_year("Track (1234)"), None);
    }

    #[test]
    fn test_extract_year_prefers_last() {
        assert_eq!(extract_year("2001 A Space Odyssey (1968)"), Some(1968));
        // Two years sharing one separator are both seen
        assert_eq!(extract_year("1917 2019"), Some(2019));
    }

    #[test]
    fn test_year_needs_separators() {
        assert_eq!(extract_year("x20161"), None);
    }

    #[test]
    fn test_find_episode_marker_formats() {
        let marker = find_episode_marker("Foo.S01E03.Bar").unwrap();
        assert_eq!(marker.season, Some(1));
        assert_eq!(marker.episode, 3);

        let marker = find_episode_marker("Foo 1x03").unwrap();
        assert_eq!(marker.season, Some(1));
        assert_eq!(marker.episode, 3);

        let marker = find_episode_marker("Foo E05").unwrap();
        assert_eq!(marker.season, None);
        assert_eq!(marker.episode, 5);

        assert!(find_episode_marker("Arrival (2016)").is_none());
        assert!(find_episode_marker("1920x1080 test pattern").is_none());
    }

    #[test]
    fn test_marker_span_splits_title() {
        let stem = "Breaking.Bad.S02E07.Negro.y.Azul";
        let marker = find_episode_marker(stem).unwrap();
        assert_eq!(&stem[..marker.start], "Breaking.Bad.");
        assert_eq!(&stem[marker.end..], ".Negro.y.Azul");
    }

    #[test]
    fn test_split_track_prefix() {
        assert_eq!(split_track_prefix("07 - Karma Police"), (Some(7), None, "Karma Police"));
        assert_eq!(split_track_prefix("07. Karma Police"), (Some(7), None, "Karma Police"));
        assert_eq!(split_track_prefix("1-03 Paranoid Android"), (Some(3), Some(1), "Paranoid Android"));
        assert_eq!(split_track_prefix("Karma Police"), (None, None, "Karma Police"));
        // a year is not a track number
        assert_eq!(split_track_prefix("1999 - Prince"), (None, None, "1999 - Prince"));
    }

    #[test]
    fn test_clean_title_strips_release_junk() {
        assert_eq!(clean_title("The.Matrix.1080p.BluRay.x264"), "The Matrix");
        assert_eq!(clean_title("[Group] Some Show "), "Some Show");
        assert_eq!(clean_title("Plain Name"), "Plain Name");
        assert_eq!(clean_title("Dotted.Name.Here"), "Dotted Name Here");
    }

    #[test]
    fn test_season_dir_number() {
        assert_eq!(season_dir_number("Season 01"), Some(1));
        assert_eq!(season_dir_number("season2"), Some(2));
        assert_eq!(season_dir_number("S03"), Some(3));
        assert_eq!(season_dir_number("Specials"), None);
        assert_eq!(season_dir_number("Sound"), None);
    }

    #[test]
    fn test_music_fields_from_layout() {
        let path = Path::new("/lib/Radiohead/OK Computer (1997)/07 - Karma Police.flac");
        let fields = extract_from_path(path, MediaType::Music);
        assert_eq!(fields.track, Some(7));
        assert_eq!(fields.title.as_deref(), Some("Karma Police"));
        assert_eq!(fields.album.as_deref(), Some("OK Computer"));
        assert_eq!(fields.artist.as_deref(), Some("Radiohead"));
        assert_eq!(fields.year, Some(1997));
    }

    #[test]
    fn test_music_fields_disc_directory() {
        let path = Path::new("/lib/Artist/Album/CD2/03 - Song.mp3");
        let fields = extract_from_path(path, MediaType::Music);
        assert_eq!(fields.disc, Some(2));
        assert_eq!(fields.album.as_deref(), Some("Album"));
        assert_eq!(fields.artist.as_deref(), Some("Artist"));
    }

    #[test]
    fn test_movie_fields_from_stem() {
        let fields = extract_from_path(
            Path::new("/in/Arrival.2016.1080p.BluRay.x264.mkv"),
            MediaType::Movie,
        );
        assert_eq!(fields.title.as_deref(), Some("Arrival"));
        assert_eq!(fields.year, Some(2016));
    }

    #[test]
    fn test_movie_fields_fall_back_to_directory() {
        let fields = extract_from_path(
            Path::new("/in/Arrival (2016)/movie.mkv"),
            MediaType::Movie,
        );
        assert_eq!(fields.title.as_deref(), Some("Arrival"));
        assert_eq!(fields.year, Some(2016));
    }

    #[test]
    fn test_tvshow_fields_from_stem() {
        let fields = extract_from_path(
            Path::new("/in/Foo.S01E03.Pilot.720p.mkv"),
            MediaType::TvShow,
        );
        assert_eq!(fields.title.as_deref(), Some("Foo"));
        assert_eq!(fields.season, Some(1));
        assert_eq!(fields.episode, Some(3));
        assert_eq!(fields.episode_title.as_deref(), Some("Pilot"));
    }

    #[test]
    fn test_tvshow_fields_from_season_directory() {
        let fields = extract_from_path(
            Path::new("/in/Breaking Bad (2008)/Season 02/E07.mkv"),
            MediaType::TvShow,
        );
        assert_eq!(fields.title.as_deref(), Some("Breaking Bad"));
        assert_eq!(fields.season, Some(2));
        assert_eq!(fields.episode, Some(7));
        assert_eq!(fields.year, Some(2008));
    }

    #[test]
    fn test_audiobook_fields_from_layout() {
        let path = Path::new("/books/Frank Herbert/Dune (1965)/01 - Dune.m4b");
        let fields = extract_from_path(path, MediaType::Audiobook);
        assert_eq!(fields.title.as_deref(), Some("Dune"));
        assert_eq!(fields.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(fields.book, Some(1));
        assert_eq!(fields.year, Some(1965));
    }

    #[test]
    fn test_ebook_fields_author_dash_title() {
        let fields = extract_from_path(
            Path::new("/in/Frank Herbert - Dune.epub"),
            MediaType::Ebook,
        );
        assert_eq!(fields.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(fields.title.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_candidate_merge_prefers_self() {
        let tags = CandidateFields {
            title: Some("From Tags".to_string()),
            ..Default::default()
        };
        let name = CandidateFields {
            title: Some("From Name".to_string()),
            year: Some(2001),
            ..Default::default()
        };
        let merged = tags.merge(name);
        assert_eq!(merged.title.as_deref(), Some("From Tags"));
        assert_eq!(merged.year, Some(2001));
    }

    #[test]
    fn test_into_metadata_unpadded_numbers() {
        let fields = CandidateFields {
            season: Some(1),
            episode: Some(3),
            ..Default::default()
        };
        let map = fields.into_metadata();
        assert_eq!(map.get("season").map(String::as_str), Some("1"));
        assert_eq!(map.get("episode").map(String::as_str), Some("3"));
        assert!(!map.contains_key("title"));
    }

    #[test]
    fn test_has_episode_markers() {
        assert!(has_episode_markers(Path::new("/x/Foo.S01E03.mkv")));
        assert!(has_episode_markers(Path::new("/x/Show/Season 2/ep.mkv")));
        assert!(!has_episode_markers(Path::new("/x/Arrival (2016).mkv")));
    }
}
