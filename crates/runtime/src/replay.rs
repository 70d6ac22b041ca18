//! Replay of a recorded game.
//!
//! The driver builds a second host from the session's seed and map with full
//! detail enabled, then feeds it the recorded decisions in order.
use wumpus_core::{HostFactory, HostOptions, MapRef, Verdict};

use crate::console::Console;
use crate::controller::TurnController;
use crate::decision::Recording;
use crate::error::Result;
use crate::session::{GameReport, Session, play};
use crate::transcript::Transcript;

pub const NOTHING_TO_REPLAY: &str = "Nothing to replay. Exiting.";
pub const REPLAYING: &str = "Replaying last game...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayReport {
    pub verdict: Verdict,
    pub transcript: Transcript,
    /// Recorded decisions the host never asked for.
    pub unread: usize,
}

impl ReplayReport {
    /// True when the replay observed exactly what the live game did.
    pub fn matches(&self, live: &Transcript) -> bool {
        self.transcript.digest() == live.digest()
    }
}

pub struct ReplayDriver<'a, F> {
    factory: &'a F,
    seed: u64,
    map: MapRef,
    pause: bool,
}

impl<'a, F: HostFactory> ReplayDriver<'a, F> {
    pub fn new(factory: &'a F, session: &Session) -> Self {
        Self {
            factory,
            seed: session.seed(),
            map: session.map().clone(),
            pause: true,
        }
    }

    /// Whether to wait for the player after every replayed decision.
    #[must_use]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Replays `recording`, consuming it.
    ///
    /// An empty recording prints a notice and returns `None` without creating
    /// a host.
    pub fn run<C: Console>(
        &self,
        recording: Recording,
        mut console: C,
    ) -> Result<Option<ReplayReport>> {
        if recording.is_empty() {
            console.write_line(NOTHING_TO_REPLAY)?;
            return Ok(None);
        }

        console.write_line(REPLAYING)?;
        tracing::info!(
            target: "wumpus::replay",
            seed = self.seed,
            map = %self.map,
            decisions = recording.len(),
            "replaying recorded game"
        );

        let mut host = self
            .factory
            .create(self.seed, &self.map, HostOptions::REVIEW)?;
        let mut controller = TurnController::replaying(console, recording.reader(), self.pause);
        let GameReport {
            verdict,
            transcript,
        } = play(&mut host, &mut controller)?;

        let unread = controller.unread();
        if unread > 0 {
            tracing::warn!(
                target: "wumpus::replay",
                unread,
                "game ended before every recorded decision was replayed"
            );
        }

        Ok(Some(ReplayReport {
            verdict,
            transcript,
            unread,
        }))
    }
}
