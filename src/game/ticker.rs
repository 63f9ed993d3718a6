use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, watch},
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use super::player::Player;

/// How often the playback position is checked.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polls a player and stops it once it reaches the stage cap.
///
/// The polling task lives exactly as long as this value: dropping the ticker
/// aborts it, which is how every transition out of a playing stage cancels
/// the previous timer.
pub struct PlaybackTicker {
    handle: JoinHandle<()>,
    done: watch::Receiver<bool>,
}

impl PlaybackTicker {
    pub fn start<P: Player>(player: Arc<Mutex<P>>, cap: Duration) -> Self {
        Self::with_period(player, cap, POLL_INTERVAL)
    }

    pub fn with_period<P: Player>(player: Arc<Mutex<P>>, cap: Duration, period: Duration) -> Self {
        let (tx, done) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                let mut player = player.lock().await;
                if player.position() >= cap {
                    player.stop();
                    break;
                }
            }

            let _ = tx.send(true);
        });

        PlaybackTicker { handle, done }
    }

    /// True once the cap was reached and playback stopped.
    pub fn is_finished(&self) -> bool {
        *self.done.borrow()
    }

    /// Resolves when the cap is reached. Never resolves for an aborted ticker.
    pub async fn finished(&mut self) {
        let reached = self.done.wait_for(|done| *done).await.is_ok();
        if !reached {
            std::future::pending::<()>().await;
        }
    }
}

impl Drop for PlaybackTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
