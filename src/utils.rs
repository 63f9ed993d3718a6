use std::sync::LazyLock;

use regex::Regex;

use crate::types::Track;

/// Playback cap in seconds for each stage, stage 1 first.
pub const STAGE_DURATIONS: [u64; 6] = [1, 2, 4, 7, 11, 16];

pub const MAX_STAGE: u8 = STAGE_DURATIONS.len() as u8;

/// What to do with a playlist reference none of the patterns recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Reject it; the endpoint answers 400.
    #[default]
    Strict,
    /// Pass the raw input on and let Spotify decide.
    Lenient,
}

/// Extracts a playlist id from a pasted URL, URI or bare id.
///
/// Recognised forms, tried in order:
/// - `https://open.spotify.com/playlist/<id>?si=...`
/// - `spotify:playlist:<id>`
/// - `<id>`
///
/// Ids are ASCII alphanumeric. Surrounding whitespace is ignored.
pub fn extract_playlist_id(input: &str, mode: IdMode) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let found = PLAYLIST_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string());

    match (found, mode) {
        (Some(id), _) => Some(id),
        (None, IdMode::Lenient) => Some(input.to_string()),
        (None, IdMode::Strict) => None,
    }
}

/// Playlist URL, playlist URI, bare id.
static PLAYLIST_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"playlist/([a-zA-Z0-9]+)").unwrap(),
        Regex::new(r"playlist:([a-zA-Z0-9]+)").unwrap(),
        Regex::new(r"^([a-zA-Z0-9]+)$").unwrap(),
    ]
});

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Decides whether `guess` names `track`.
///
/// Case and surrounding whitespace are ignored. A guess is correct when it
/// equals the title, the artist string, or either "title artist" ordering, or
/// when it contains or is contained in the title or the artist string. An
/// empty guess is never correct.
pub fn is_correct_guess(guess: &str, track: &Track) -> bool {
    let guess = normalize(guess);
    if guess.is_empty() {
        return false;
    }

    let name = normalize(&track.name);
    let artist = normalize(&track.artist);

    if guess == name
        || guess == artist
        || guess == format!("{} {}", name, artist)
        || guess == format!("{} {}", artist, name)
    {
        return true;
    }

    [&name, &artist]
        .into_iter()
        .filter(|field| !field.is_empty())
        .any(|field| guess.contains(field.as_str()) || field.contains(guess.as_str()))
}

/// Points for a correct guess at `stage` (1-based): 600 at stage 1, one
/// hundred less per extra stage, never below 100.
pub fn stage_points(stage: u8) -> u32 {
    let penalty = 100 * u32::from(stage.saturating_sub(1));
    600u32.saturating_sub(penalty).max(100)
}

/// Playback cap for `stage` in seconds. Out-of-range stages are clamped.
pub fn stage_duration_secs(stage: u8) -> u64 {
    let idx = usize::from(stage.clamp(1, MAX_STAGE)) - 1;
    STAGE_DURATIONS[idx]
}
