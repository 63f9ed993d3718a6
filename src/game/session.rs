use std::time::Duration;

use crate::{
    error::{GameError, LoadError},
    types::{RoundTableRow, Track},
    utils::{self, MAX_STAGE},
};

/// Where a game currently stands.
///
/// `Answered` covers both a correct guess and a skip; `skipped` tells them
/// apart. A track can only be scored once: after a correct guess the player
/// may go back to `Playing` to hear more of it, but further guesses are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Loading,
    Playing { track: usize, stage: u8 },
    Answered { track: usize, stage: u8, skipped: bool },
    GameOver,
}

impl GameState {
    fn name(&self) -> &'static str {
        match self {
            GameState::NotStarted => "not started",
            GameState::Loading => "loading",
            GameState::Playing { .. } => "playing",
            GameState::Answered { .. } => "answered",
            GameState::GameOver => "game over",
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Guessed { stage: u8, points: u32 },
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { points: u32 },
    Incorrect,
    AlreadyAnswered,
}

/// In-memory state of one game: the loaded tracks, where the player is and
/// what they scored so far. Holds no I/O; [`super::GameController`] attaches
/// playback to it.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    playlist: Option<String>,
    tracks: Vec<Track>,
    results: Vec<Option<RoundResult>>,
    score: u32,
    message: String,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            state: GameState::NotStarted,
            playlist: None,
            tracks: Vec::new(),
            results: Vec::new(),
            score: 0,
            message: String::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn playlist(&self) -> Option<&str> {
        self.playlist.as_deref()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn results(&self) -> &[Option<RoundResult>] {
        &self.results
    }

    /// The track being played or just answered.
    pub fn current_track(&self) -> Option<&Track> {
        match self.state {
            GameState::Playing { track, .. } | GameState::Answered { track, .. } => {
                self.tracks.get(track)
            }
            _ => None,
        }
    }

    /// Playback cap of the current stage; `None` outside `Playing`.
    pub fn stage_cap(&self) -> Option<Duration> {
        match self.state {
            GameState::Playing { stage, .. } => {
                Some(Duration::from_secs(utils::stage_duration_secs(stage)))
            }
            _ => None,
        }
    }

    /// Begins loading `playlist`. Any previous game is discarded.
    pub fn start(&mut self, playlist: impl Into<String>) -> Result<(), GameError> {
        match self.state {
            GameState::NotStarted | GameState::GameOver => {
                *self = GameSession::new();
                self.playlist = Some(playlist.into());
                self.state = GameState::Loading;
                self.message = "Loading...".to_string();
                Ok(())
            }
            other => Err(invalid("start a new game", other)),
        }
    }

    /// Finishes loading with the server's answer.
    ///
    /// An empty track list goes back to `NotStarted` like a failure, with its
    /// own message.
    pub fn finish_loading(&mut self, result: Result<Vec<Track>, LoadError>) -> Result<(), GameError> {
        if self.state != GameState::Loading {
            return Err(invalid("finish loading", self.state));
        }

        match result {
            Ok(tracks) if !tracks.is_empty() => {
                self.results = vec![None; tracks.len()];
                self.tracks = tracks;
                self.state = GameState::Playing { track: 0, stage: 1 };
                self.message.clear();
            }
            Ok(_) => self.fail_loading(LoadError::Empty.to_string()),
            Err(e) => self.fail_loading(e.to_string()),
        }
        Ok(())
    }

    fn fail_loading(&mut self, message: String) {
        self.tracks.clear();
        self.results.clear();
        self.state = GameState::NotStarted;
        self.message = message;
    }

    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let GameState::Playing { track, stage } = self.state else {
            return Err(invalid("guess", self.state));
        };

        if self.results[track].is_some() {
            self.message = "Already answered. Move on to the next track.".to_string();
            return Ok(GuessOutcome::AlreadyAnswered);
        }

        if !utils::is_correct_guess(guess, &self.tracks[track]) {
            self.message = "❌ Try again!".to_string();
            return Ok(GuessOutcome::Incorrect);
        }

        let points = utils::stage_points(stage);
        self.score += points;
        self.results[track] = Some(RoundResult::Guessed { stage, points });
        self.state = GameState::Answered {
            track,
            stage,
            skipped: false,
        };
        self.message = format!("✅ Correct! +{} points", points);
        Ok(GuessOutcome::Correct { points })
    }

    /// Gives up on the current track. Score is unchanged.
    pub fn skip(&mut self) -> Result<(), GameError> {
        let GameState::Playing { track, stage } = self.state else {
            return Err(invalid("skip", self.state));
        };

        // Skipping while listening on after a correct guess keeps the points.
        let skipped = self.results[track].is_none();
        if skipped {
            self.results[track] = Some(RoundResult::Skipped);
            let t = &self.tracks[track];
            self.message = format!("Skipped. It was {} – {}", t.name, t.artist);
        }
        self.state = GameState::Answered {
            track,
            stage,
            skipped,
        };
        Ok(())
    }

    /// Moves to the next, longer stage of the current track.
    ///
    /// Returns `Ok(false)` without changing anything at the last stage or
    /// after a skip.
    pub fn advance_stage(&mut self) -> Result<bool, GameError> {
        match self.state {
            GameState::Playing { track, stage }
            | GameState::Answered {
                track,
                stage,
                skipped: false,
            } => {
                if stage >= MAX_STAGE {
                    return Ok(false);
                }
                self.state = GameState::Playing {
                    track,
                    stage: stage + 1,
                };
                Ok(true)
            }
            GameState::Answered { skipped: true, .. } => Ok(false),
            other => Err(invalid("advance the stage", other)),
        }
    }

    pub fn next_track(&mut self) -> Result<(), GameError> {
        let GameState::Answered { track, .. } = self.state else {
            return Err(invalid("go to the next track", self.state));
        };

        self.message.clear();
        if track + 1 < self.tracks.len() {
            self.state = GameState::Playing {
                track: track + 1,
                stage: 1,
            };
        } else {
            self.state = GameState::GameOver;
            self.message = format!("Game over! Final score: {}", self.score);
        }
        Ok(())
    }

    /// One row per track for the end-of-game table.
    pub fn summary(&self) -> Vec<RoundTableRow> {
        self.tracks
            .iter()
            .zip(&self.results)
            .enumerate()
            .map(|(idx, (track, result))| {
                let (result, points) = match result {
                    Some(RoundResult::Guessed { stage, points }) => {
                        (format!("stage {}", stage), *points)
                    }
                    Some(RoundResult::Skipped) => ("skipped".to_string(), 0),
                    None => ("-".to_string(), 0),
                };
                RoundTableRow {
                    number: idx + 1,
                    track: track.name.clone(),
                    artist: track.artist.clone(),
                    result,
                    points,
                }
            })
            .collect()
    }
}

fn invalid(action: &'static str, state: GameState) -> GameError {
    GameError::InvalidTransition {
        action,
        state: state.name(),
    }
}
