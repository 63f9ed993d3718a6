use std::{process::Stdio, time::Duration};

use tokio::{
    process::{Child, Command},
    time::Instant,
};

use crate::warning;

/// Audio output for previews.
///
/// Guessify never decodes audio itself: a player either drives an external
/// program or only keeps time.
pub trait Player: Send + 'static {
    /// Starts `preview_url` from the beginning, replacing whatever played.
    fn start(&mut self, preview_url: &str);

    /// Stops playback and rewinds to zero.
    fn stop(&mut self);

    /// Elapsed playback time; zero when stopped.
    fn position(&self) -> Duration;

    fn is_playing(&self) -> bool {
        self.position() > Duration::ZERO
    }
}

/// A silent player that only tracks time.
#[derive(Debug, Default)]
pub struct ClockPlayer {
    started_at: Option<Instant>,
}

impl ClockPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for ClockPlayer {
    fn start(&mut self, _preview_url: &str) {
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.started_at = None;
    }

    fn position(&self) -> Duration {
        self.started_at
            .map(|at| at.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }
}

/// Plays previews through an external command such as
/// `mpv --no-video --really-quiet`; the URL is appended as the last argument.
/// Stopping kills the process.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
    started_at: Option<Instant>,
}

impl CommandPlayer {
    /// Splits `command` on whitespace. Returns `None` for a blank command.
    pub fn new(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(CommandPlayer {
            program,
            args: parts.collect(),
            child: None,
            started_at: None,
        })
    }
}

impl Player for CommandPlayer {
    fn start(&mut self, preview_url: &str) {
        self.stop();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(preview_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                self.child = Some(child);
                self.started_at = Some(Instant::now());
            }
            Err(e) => warning!("Failed to start player '{}': {}", self.program, e),
        }
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.start_kill();
        }
        self.started_at = None;
    }

    fn position(&self) -> Duration {
        self.started_at
            .map(|at| at.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
