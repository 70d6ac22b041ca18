//! Whole-program flow: rules, live game, optional replay, final verdict.
use anyhow::Result;
use wumpus_core::{HostFactory, Verdict};
use wumpus_runtime::{Console, LiveReport, ReplayDriver, Session};

use client_bootstrap::SessionConfig;

use crate::rules::RULES;

pub const REVIEW_PROMPT: &str = "Review Game? (y or n) ";

pub struct CliApp {
    config: SessionConfig,
    print_transcript: bool,
}

impl CliApp {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            print_transcript: false,
        }
    }

    /// Print recorded decisions as JSON lines once the game ends.
    #[must_use]
    pub fn print_transcript(mut self, enabled: bool) -> Self {
        self.print_transcript = enabled;
        self
    }

    /// Plays one session on `console` and returns the live game's verdict.
    pub fn run<F, C>(&self, factory: &F, mut console: C) -> Result<Verdict>
    where
        F: HostFactory,
        C: Console,
    {
        console.write_line(RULES)?;

        let session = self.config.session();
        let live = session.play_live(factory, &mut console)?;

        if self.print_transcript {
            for decision in live.recording.decisions() {
                console.write_line(&serde_json::to_string(decision)?)?;
            }
        }

        if session.replay_enabled() {
            self.offer_replay(factory, &session, &live, &mut console)?;
        }

        console.write_line(&format!("Your seed that game was: {}", session.seed()))?;
        match live.verdict {
            Verdict::Won { score } => {
                console.write_line("HEE HEE HEE - The wumpus'll getcha next time!!")?;
                console.write_line(&format!("You got a score of {score}"))?;
            }
            Verdict::Lost => console.write_line("HA HA HA - You lose!")?,
        }

        Ok(live.verdict)
    }

    fn offer_replay<F, C>(
        &self,
        factory: &F,
        session: &Session,
        live: &LiveReport,
        console: &mut C,
    ) -> Result<()>
    where
        F: HostFactory,
        C: Console,
    {
        let Some(answer) = console.prompt(REVIEW_PROMPT)? else {
            tracing::debug!(target: "wumpus::cli", "input closed at review prompt");
            return Ok(());
        };

        if !matches!(answer.trim(), "y" | "Y") {
            console.write_line(&format!("Received {answer}. Exiting."))?;
            return Ok(());
        }

        let report = ReplayDriver::new(factory, session)
            .with_pause(self.config.replay_pause)
            .run(live.recording.clone(), &mut *console)?;

        let Some(report) = report else {
            return Ok(());
        };
        if !report.matches(&live.transcript) {
            tracing::warn!(
                target: "wumpus::cli",
                live = %live.transcript.digest(),
                replay = %report.transcript.digest(),
                "replay diverged from the live game"
            );
        }
        Ok(())
    }
}
