use std::time::Duration;

use guessify::{
    error::{GameError, LoadError},
    game::{GameSession, GameState, GuessOutcome, RoundResult},
    types::Track,
};

fn create_test_track(name: &str, artist: &str) -> Track {
    Track {
        name: name.to_string(),
        artist: artist.to_string(),
        preview_url: format!("https://p.scdn.co/mp3-preview/{}", name.to_lowercase()),
    }
}

fn started_session(tracks: Vec<Track>) -> GameSession {
    let mut session = GameSession::new();
    session.start("pl1").unwrap();
    session.finish_loading(Ok(tracks)).unwrap();
    session
}

fn two_tracks() -> Vec<Track> {
    vec![
        create_test_track("Yellow", "Coldplay"),
        create_test_track("Creep", "Radiohead"),
    ]
}

#[test]
fn test_start_and_load() {
    let mut session = GameSession::new();
    assert_eq!(session.state(), GameState::NotStarted);

    session.start("pl1").unwrap();
    assert_eq!(session.state(), GameState::Loading);
    assert_eq!(session.playlist(), Some("pl1"));

    session.finish_loading(Ok(two_tracks())).unwrap();
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 1 });
    assert_eq!(session.current_track().unwrap().name, "Yellow");
    assert_eq!(session.stage_cap(), Some(Duration::from_secs(1)));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_load_failure_returns_to_not_started() {
    let mut session = GameSession::new();
    session.start("pl1").unwrap();
    session
        .finish_loading(Err(LoadError::Server {
            status: 404,
            message: "Playlist not found.".to_string(),
        }))
        .unwrap();

    assert_eq!(session.state(), GameState::NotStarted);
    assert_eq!(session.message(), "Playlist not found.");
}

#[test]
fn test_empty_playlist_has_its_own_message() {
    let mut session = GameSession::new();
    session.start("pl1").unwrap();
    session.finish_loading(Ok(Vec::new())).unwrap();

    assert_eq!(session.state(), GameState::NotStarted);
    assert_eq!(session.message(), LoadError::Empty.to_string());
}

#[test]
fn test_correct_and_incorrect_guess() {
    let mut session = started_session(two_tracks());

    let outcome = session.submit_guess("purple").unwrap();
    assert_eq!(outcome, GuessOutcome::Incorrect);
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 1 });
    assert_eq!(session.message(), "❌ Try again!");

    let outcome = session.submit_guess("coldplay").unwrap();
    assert_eq!(outcome, GuessOutcome::Correct { points: 600 });
    assert_eq!(
        session.state(),
        GameState::Answered {
            track: 0,
            stage: 1,
            skipped: false
        }
    );
    assert_eq!(session.score(), 600);
    assert_eq!(session.stage_cap(), None);
}

#[test]
fn test_points_depend_on_stage() {
    let mut session = started_session(two_tracks());
    for _ in 0..3 {
        assert!(session.advance_stage().unwrap());
    }
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 4 });

    session.submit_guess("  YELLOW ").unwrap();
    assert_eq!(session.score(), 300);
    assert_eq!(
        session.results()[0],
        Some(RoundResult::Guessed {
            stage: 4,
            points: 300
        })
    );
}

#[test]
fn test_advance_stage_stops_at_six() {
    let mut session = started_session(two_tracks());
    for _ in 0..4 {
        session.advance_stage().unwrap();
    }
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 5 });
    assert_eq!(session.stage_cap(), Some(Duration::from_secs(11)));

    assert!(session.advance_stage().unwrap());
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 6 });
    assert_eq!(session.stage_cap(), Some(Duration::from_secs(16)));

    // No-op at the last stage
    assert!(!session.advance_stage().unwrap());
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 6 });
    assert_eq!(session.stage_cap(), Some(Duration::from_secs(16)));
}

#[test]
fn test_skip_keeps_score_and_blocks_advance() {
    let mut session = started_session(two_tracks());
    session.skip().unwrap();

    assert_eq!(
        session.state(),
        GameState::Answered {
            track: 0,
            stage: 1,
            skipped: true
        }
    );
    assert_eq!(session.score(), 0);
    assert_eq!(session.results()[0], Some(RoundResult::Skipped));
    assert!(session.message().contains("Yellow"));

    assert!(!session.advance_stage().unwrap());
    assert_eq!(
        session.state(),
        GameState::Answered {
            track: 0,
            stage: 1,
            skipped: true
        }
    );
}

#[test]
fn test_listening_on_after_answer_does_not_score_twice() {
    let mut session = started_session(two_tracks());
    session.submit_guess("yellow").unwrap();

    assert!(session.advance_stage().unwrap());
    assert_eq!(session.state(), GameState::Playing { track: 0, stage: 2 });

    let outcome = session.submit_guess("yellow").unwrap();
    assert_eq!(outcome, GuessOutcome::AlreadyAnswered);
    assert_eq!(session.score(), 600);

    session.skip().unwrap();
    assert_eq!(
        session.state(),
        GameState::Answered {
            track: 0,
            stage: 2,
            skipped: false
        }
    );
    assert_eq!(
        session.results()[0],
        Some(RoundResult::Guessed {
            stage: 1,
            points: 600
        })
    );
}

#[test]
fn test_next_track_until_game_over() {
    let mut session = started_session(two_tracks());

    session.submit_guess("coldplay").unwrap();
    session.next_track().unwrap();
    assert_eq!(session.state(), GameState::Playing { track: 1, stage: 1 });
    assert_eq!(session.current_track().unwrap().name, "Creep");

    session.advance_stage().unwrap();
    session.submit_guess("radiohead").unwrap();
    session.next_track().unwrap();

    assert_eq!(session.state(), GameState::GameOver);
    assert_eq!(session.score(), 1100);
    assert!(session.message().contains("1100"));

    let summary = session.summary();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[1].result, "stage 2");
    assert_eq!(summary[1].points, 500);
}

#[test]
fn test_invalid_transitions() {
    let mut session = GameSession::new();
    assert!(matches!(
        session.submit_guess("x"),
        Err(GameError::InvalidTransition { .. })
    ));
    assert!(session.next_track().is_err());
    assert!(session.advance_stage().is_err());
    assert!(session.skip().is_err());

    let mut session = started_session(two_tracks());
    // Playing: must answer or skip before moving on
    assert!(session.next_track().is_err());
    // Cannot restart mid-game
    assert!(session.start("other").is_err());
}

#[test]
fn test_restart_after_game_over_resets() {
    let mut session = started_session(vec![create_test_track("Yellow", "Coldplay")]);
    session.submit_guess("yellow").unwrap();
    session.next_track().unwrap();
    assert_eq!(session.state(), GameState::GameOver);

    session.start("pl2").unwrap();
    assert_eq!(session.state(), GameState::Loading);
    assert_eq!(session.score(), 0);
    assert!(session.tracks().is_empty());
    assert_eq!(session.playlist(), Some("pl2"));
}
