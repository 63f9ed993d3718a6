use std::sync::Arc;

use tokio::sync::Mutex;

use super::{
    player::Player,
    session::{GameSession, GameState, GuessOutcome},
    ticker::PlaybackTicker,
};
use crate::{
    error::{GameError, LoadError},
    types::Track,
};

/// A [`GameSession`] wired to a player.
///
/// Whenever an action changes the state, playback is resynchronised: the old
/// ticker is dropped, the player stopped, and if the new state is `Playing`
/// the track restarts from zero under a fresh ticker for the new stage cap.
pub struct GameController<P: Player> {
    session: GameSession,
    player: Arc<Mutex<P>>,
    ticker: Option<PlaybackTicker>,
}

impl<P: Player> GameController<P> {
    pub fn new(player: P) -> Self {
        GameController {
            session: GameSession::new(),
            player: Arc::new(Mutex::new(player)),
            ticker: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn player(&self) -> Arc<Mutex<P>> {
        Arc::clone(&self.player)
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    pub async fn start(&mut self, playlist: &str) -> Result<(), GameError> {
        let before = self.state();
        self.session.start(playlist)?;
        self.sync_playback(before).await;
        Ok(())
    }

    pub async fn finish_loading(
        &mut self,
        result: Result<Vec<Track>, LoadError>,
    ) -> Result<(), GameError> {
        let before = self.state();
        self.session.finish_loading(result)?;
        self.sync_playback(before).await;
        Ok(())
    }

    pub async fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let before = self.state();
        let outcome = self.session.submit_guess(guess)?;
        self.sync_playback(before).await;
        Ok(outcome)
    }

    pub async fn skip(&mut self) -> Result<(), GameError> {
        let before = self.state();
        self.session.skip()?;
        self.sync_playback(before).await;
        Ok(())
    }

    pub async fn advance_stage(&mut self) -> Result<bool, GameError> {
        let before = self.state();
        let advanced = self.session.advance_stage()?;
        self.sync_playback(before).await;
        Ok(advanced)
    }

    pub async fn next_track(&mut self) -> Result<(), GameError> {
        let before = self.state();
        self.session.next_track()?;
        self.sync_playback(before).await;
        Ok(())
    }

    /// Plays the current stage again from the start.
    pub async fn replay(&mut self) -> Result<(), GameError> {
        if !matches!(self.state(), GameState::Playing { .. }) {
            return Err(GameError::InvalidTransition {
                action: "replay",
                state: "not playing",
            });
        }
        self.restart_playback().await;
        Ok(())
    }

    /// Resolves when the current stage's clip has played to its cap, then
    /// releases the ticker. Pending forever while nothing plays.
    pub async fn clip_finished(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.finished().await;
                self.ticker = None;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Stops playback and cancels the ticker.
    pub async fn shutdown(&mut self) {
        self.ticker = None;
        self.player.lock().await.stop();
    }

    async fn sync_playback(&mut self, before: GameState) {
        if self.state() != before {
            self.restart_playback().await;
        }
    }

    async fn restart_playback(&mut self) {
        self.ticker = None;
        let mut player = self.player.lock().await;
        player.stop();

        if let (Some(cap), Some(track)) = (self.session.stage_cap(), self.session.current_track()) {
            player.start(&track.preview_url);
            drop(player);
            self.ticker = Some(PlaybackTicker::start(Arc::clone(&self.player), cap));
        }
    }
}
