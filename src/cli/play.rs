use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use reqwest::Client;
use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    Res, config,
    game::{
        ClockPlayer, CommandPlayer, GameController, GameState, GuessOutcome, Player, TrackLoader,
    },
    info, success, utils, warning,
};

enum Input {
    Guess(String),
    More,
    Skip,
    Next,
    Replay,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    let input = match line {
        "" => return None,
        ":more" | ":m" | "+" => Input::More,
        ":skip" | ":s" => Input::Skip,
        ":next" | ":n" => Input::Next,
        ":replay" | ":r" => Input::Replay,
        ":help" | ":h" | "?" => Input::Help,
        ":quit" | ":q" => Input::Quit,
        guess => Input::Guess(guess.to_string()),
    };
    Some(input)
}

pub async fn play(playlist: String, server_url: Option<String>, shuffle: bool) -> Res<()> {
    let loader = TrackLoader::new(
        Client::new(),
        server_url.unwrap_or_else(config::server_url),
    );

    match config::player_command().and_then(|cmd| CommandPlayer::new(&cmd)) {
        Some(player) => run(GameController::new(player), &loader, &playlist, shuffle).await,
        None => {
            info!("GUESSIFY_PLAYER_CMD is not set, clips are timed without sound.");
            run(GameController::new(ClockPlayer::new()), &loader, &playlist, shuffle).await
        }
    }
}

async fn run<P: Player>(
    mut game: GameController<P>,
    loader: &TrackLoader,
    playlist: &str,
    shuffle: bool,
) -> Res<()> {
    game.start(playlist).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .map_err(|e| e.to_string())?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = loader.load(playlist).await.map(|mut tracks| {
        if shuffle {
            tracks.shuffle(&mut rand::rng());
        }
        tracks
    });
    pb.finish_and_clear();

    game.finish_loading(result).await?;
    if game.state() == GameState::NotStarted {
        warning!("{}", game.session().message());
        return Ok(());
    }

    success!("Loaded {} tracks.", game.session().tracks().len());
    print_help();
    announce(&game);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while game.state() != GameState::GameOver {
        tokio::select! {
            _ = game.clip_finished() => {
                if let GameState::Playing { stage, .. } = game.state() {
                    info!(
                        "Clip over ({}s). Type your guess, :more for a longer clip or :skip.",
                        utils::stage_duration_secs(stage)
                    );
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(input) = parse_input(&line) else { continue };
                if matches!(input, Input::Quit) {
                    break;
                }
                handle(&mut game, input).await;
            }
        }
    }

    game.shutdown().await;

    let session = game.session();
    if !session.tracks().is_empty() {
        println!("{}", Table::new(session.summary()));
    }
    success!("Final score: {}", session.score());
    Ok(())
}

async fn handle<P: Player>(game: &mut GameController<P>, input: Input) {
    let before = game.state();

    let result = match input {
        Input::Guess(guess) => game.submit_guess(&guess).await.map(|outcome| {
            match outcome {
                GuessOutcome::Correct { .. } => success!("{}", game.session().message()),
                GuessOutcome::Incorrect | GuessOutcome::AlreadyAnswered => {
                    warning!("{}", game.session().message())
                }
            }
        }),
        Input::More => game.advance_stage().await.map(|advanced| {
            if !advanced {
                warning!("No longer clip available for this track.");
            }
        }),
        Input::Skip => game.skip().await,
        Input::Next => game.next_track().await,
        Input::Replay => game.replay().await,
        Input::Help => {
            print_help();
            Ok(())
        }
        Input::Quit => Ok(()),
    };

    if let Err(e) = result {
        warning!("{}", e);
        return;
    }

    if game.state() != before {
        announce(game);
    }
}

fn announce<P: Player>(game: &GameController<P>) {
    let session = game.session();
    let total = session.tracks().len();

    match session.state() {
        GameState::Playing { track, stage } => info!(
            "Track {}/{} · stage {} · {}s clip · score {}",
            track + 1,
            total,
            stage,
            utils::stage_duration_secs(stage),
            session.score()
        ),
        GameState::Answered { skipped, .. } => {
            if skipped {
                warning!("{}", session.message());
            } else if let Some(track) = session.current_track() {
                info!("{} – {}", track.name, track.artist);
            }
            info!(":next for the next track, :more to keep listening.");
        }
        GameState::GameOver => success!("{}", session.message()),
        GameState::NotStarted | GameState::Loading => {}
    }
}

fn print_help() {
    info!("Type the title or the artist to guess.");
    info!(":more longer clip · :replay · :skip · :next · :quit");
}
