//! Live game sessions.
use wumpus_core::{
    Command, GameHost, HostFactory, HostOptions, MapRef, Outcome, TurnHandler, TurnState, Verdict,
};

use crate::console::Console;
use crate::controller::TurnController;
use crate::decision::Recording;
use crate::error::Result;
use crate::transcript::Transcript;

/// Values fixed when a session starts and reused verbatim for its replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    seed: u64,
    map: MapRef,
    replay_enabled: bool,
}

impl Session {
    pub fn new(seed: u64, map: MapRef) -> Self {
        Self {
            seed,
            map,
            replay_enabled: true,
        }
    }

    /// Whether the player is offered a replay once the game ends.
    #[must_use]
    pub fn with_replay(mut self, enabled: bool) -> Self {
        self.replay_enabled = enabled;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn map(&self) -> &MapRef {
        &self.map
    }

    pub fn replay_enabled(&self) -> bool {
        self.replay_enabled
    }

    /// Plays one live game, recording every accepted decision.
    pub fn play_live<F, C>(&self, factory: &F, console: C) -> Result<LiveReport>
    where
        F: HostFactory,
        C: Console,
    {
        tracing::info!(
            target: "wumpus::session",
            seed = self.seed,
            map = %self.map,
            "starting live game"
        );

        let mut host = factory.create(self.seed, &self.map, HostOptions::LIVE)?;
        let mut controller = TurnController::recording(console);
        let GameReport {
            verdict,
            transcript,
        } = play(&mut host, &mut controller)?;
        let recording = controller.into_recording().unwrap_or_default();

        tracing::info!(
            target: "wumpus::session",
            ?verdict,
            decisions = recording.len(),
            "live game finished"
        );

        Ok(LiveReport {
            verdict,
            recording,
            transcript,
        })
    }
}

/// Result of one game driven by [`play`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub verdict: Verdict,
    pub transcript: Transcript,
}

/// Result of a live game.
#[derive(Clone, Debug)]
pub struct LiveReport {
    pub verdict: Verdict,
    pub recording: Recording,
    pub transcript: Transcript,
}

/// Runs `host` to completion against `handler`, keeping a transcript.
pub fn play<G, H>(host: &mut G, handler: &mut H) -> std::result::Result<GameReport, H::Error>
where
    G: GameHost,
    H: TurnHandler,
{
    let mut observer = Observer {
        inner: handler,
        transcript: Transcript::new(),
    };
    let verdict = host.play(&mut observer)?;
    Ok(GameReport {
        verdict,
        transcript: observer.transcript,
    })
}

struct Observer<'a, H> {
    inner: &'a mut H,
    transcript: Transcript,
}

impl<H: TurnHandler> TurnHandler for Observer<'_, H> {
    type Error = H::Error;

    fn on_status(&mut self, state: &TurnState) -> std::result::Result<Option<Command>, H::Error> {
        self.inner.on_status(state)
    }

    fn on_outcome(
        &mut self,
        state: &TurnState,
        outcome: Outcome,
    ) -> std::result::Result<(), H::Error> {
        self.transcript.push(state, outcome);
        self.inner.on_outcome(state, outcome)
    }
}
