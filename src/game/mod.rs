//! # Game Module
//!
//! The guessing game itself.
//!
//! Each track is played in up to six stages of 1, 2, 4, 7, 11 and 16
//! seconds. The player guesses the title or the artist at any point; the
//! earlier the stage, the more points (600 down to 100). A skipped track
//! scores nothing.
//!
//! ```text
//! NotStarted ──start──▶ Loading ──loaded──▶ Playing(0, 1)
//!     ▲                    │                  │  ▲
//!     └──────failed────────┘    guess/skip    │  │ more (stage + 1)
//!                                             ▼  │
//!                     GameOver ◀──next── Answered(t, s)
//!                                   └──next──▶ Playing(t + 1, 1)
//! ```
//!
//! - [`session`] - the pure state machine and scoring
//! - [`controller`] - the session plus a player and its playback ticker
//! - [`ticker`] - stops playback at the stage cap, cancelled on every transition
//! - [`player`] - silent clock player and external-command player
//! - [`loader`] - fetches track lists from a Guessify server

pub mod controller;
pub mod loader;
pub mod player;
pub mod session;
pub mod ticker;

pub use controller::GameController;
pub use loader::TrackLoader;
pub use player::{ClockPlayer, CommandPlayer, Player};
pub use session::{GameSession, GameState, GuessOutcome, RoundResult};
pub use ticker::PlaybackTicker;
