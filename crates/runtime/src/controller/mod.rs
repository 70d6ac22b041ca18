//! Turn controller: the front-end half of the host conversation.
//!
//! For each turn state the controller prints what the player perceives,
//! obtains one decision and hands the resulting command back to the driver.
//! In record mode decisions come from the console and are appended to a
//! [`DecisionLog`]; in replay mode they come from a [`DecisionReader`] and are
//! echoed as if typed. The controller holds no rule logic.
mod parse;
pub mod render;

pub use parse::{InputError, Selector, arrow_path, room, selector};

use wumpus_core::{Command, Outcome, TurnHandler, TurnState};

use crate::console::Console;
use crate::decision::{Decision, DecisionLog, DecisionReader, Recording};
use crate::error::{Result, RuntimeError};

pub const MOVE_OR_SHOOT: &str = "Move or Shoot? (m or s) ";
pub const WHERE_TO: &str = "Where to? ";
pub const AIM: &str = "You can shoot up to five rooms, separate rooms with a comma ";
pub const REPLAY_PAUSE: &str = "[REPLAY] Press Enter to continue...";

enum Mode {
    Record(DecisionLog),
    Replay {
        reader: DecisionReader,
        pause: bool,
    },
}

pub struct TurnController<C> {
    console: C,
    mode: Mode,
}

impl<C: Console> TurnController<C> {
    /// Live controller that records every accepted decision.
    pub fn recording(console: C) -> Self {
        Self {
            console,
            mode: Mode::Record(DecisionLog::new()),
        }
    }

    /// Replay controller fed from `reader`.
    ///
    /// With `pause` set, it waits for the player after echoing each decision.
    pub fn replaying(console: C, reader: DecisionReader, pause: bool) -> Self {
        Self {
            console,
            mode: Mode::Replay { reader, pause },
        }
    }

    /// Decisions recorded so far; zero for a replay controller.
    pub fn recorded(&self) -> usize {
        match &self.mode {
            Mode::Record(log) => log.len(),
            Mode::Replay { .. } => 0,
        }
    }

    /// Decisions not yet replayed; zero for a recording controller.
    pub fn unread(&self) -> usize {
        match &self.mode {
            Mode::Record(_) => 0,
            Mode::Replay { reader, .. } => reader.remaining(),
        }
    }

    /// Seals the recorded decisions. `None` for a replay controller.
    pub fn into_recording(self) -> Option<Recording> {
        match self.mode {
            Mode::Record(log) => Some(log.seal()),
            Mode::Replay { .. } => None,
        }
    }

    fn next_command(&mut self) -> Result<Option<Command>> {
        match &mut self.mode {
            Mode::Record(log) => read_live(&mut self.console, log),
            Mode::Replay { reader, pause } => {
                replay_next(&mut self.console, reader, *pause).map(Some)
            }
        }
    }
}

impl<C: Console> TurnHandler for TurnController<C> {
    type Error = RuntimeError;

    fn on_status(&mut self, state: &TurnState) -> Result<Option<Command>> {
        render::status(&mut self.console, state)?;
        self.next_command()
    }

    fn on_outcome(&mut self, _state: &TurnState, outcome: Outcome) -> Result<()> {
        tracing::debug!(
            target: "wumpus::controller",
            result = outcome.result().code(),
            snatched = outcome.snatched(),
            "outcome"
        );
        render::outcome(&mut self.console, outcome)?;
        Ok(())
    }
}

fn ask<C: Console>(console: &mut C, prompt: &'static str) -> Result<String> {
    console
        .prompt(prompt)?
        .ok_or(RuntimeError::InputClosed { awaiting: prompt.trim_end() })
}

/// Reads one decision from the player. Rejected input yields `None`.
fn read_live<C: Console>(console: &mut C, log: &mut DecisionLog) -> Result<Option<Command>> {
    let choice = ask(console, MOVE_OR_SHOOT)?;

    let parsed = match selector(&choice) {
        Ok(Selector::Move) => {
            let raw = ask(console, WHERE_TO)?;
            room(&raw).map(|target| Decision::typed(Command::Move(target), choice, raw))
        }
        Ok(Selector::Shoot) => {
            let raw = ask(console, AIM)?;
            arrow_path(&raw).map(|path| Decision::typed(Command::Shoot(path), choice, raw))
        }
        Err(error) => Err(error),
    };

    match parsed {
        Ok(decision) => {
            tracing::debug!(
                target: "wumpus::controller",
                index = log.len(),
                raw = %decision.raw,
                "decision recorded"
            );
            let command = decision.command.clone();
            log.record(decision);
            Ok(Some(command))
        }
        Err(error) => {
            tracing::debug!(target: "wumpus::controller", %error, "input rejected");
            console.write_line(&error.to_string())?;
            Ok(None)
        }
    }
}

/// Pulls the next recorded decision and echoes it as if it had been typed.
fn replay_next<C: Console>(
    console: &mut C,
    reader: &mut DecisionReader,
    pause: bool,
) -> Result<Command> {
    let decision = match reader.next_for_replay() {
        Ok(decision) => decision.clone(),
        Err(error) => {
            tracing::error!(
                target: "wumpus::controller",
                %error,
                "host requested more turns than were recorded"
            );
            return Err(error.into());
        }
    };

    let prompt = match decision.command {
        Command::Move(_) => WHERE_TO,
        Command::Shoot(_) => AIM,
    };
    console.write_line(&format!("{MOVE_OR_SHOOT} {}", decision.selector))?;
    console.write_line(&format!("{prompt} {}", decision.raw))?;

    if pause && console.prompt(REPLAY_PAUSE)?.is_none() {
        tracing::debug!(target: "wumpus::controller", "input closed during replay pause");
    }

    Ok(decision.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::decision::LogError;
    use wumpus_core::{ActionResult, RoomId, Senses};

    fn state() -> TurnState {
        TurnState {
            room: RoomId(0),
            exits: vec![RoomId(1), RoomId(4), RoomId(7)],
            entrances: vec![RoomId(1), RoomId(4), RoomId(7)],
            senses: Senses::empty(),
            detail: None,
        }
    }

    #[test]
    fn records_parsed_move() {
        let mut controller = TurnController::recording(ScriptedConsole::new(["m", "5"]));
        let command = controller.on_status(&state()).unwrap();
        assert_eq!(command, Some(Command::Move(RoomId(4))));
        assert_eq!(controller.recorded(), 1);

        let recording = controller.into_recording().unwrap();
        let decision = recording.decisions().next().unwrap();
        assert_eq!(decision.raw, "5");
    }

    #[test]
    fn rejected_selector_records_nothing() {
        let mut console = ScriptedConsole::new(["x"]);
        let mut controller = TurnController::recording(&mut console);
        assert_eq!(controller.on_status(&state()).unwrap(), None);
        assert_eq!(controller.recorded(), 0);
        drop(controller);
        assert!(console.printed("That's not an option in this game."));
    }

    #[test]
    fn rejected_room_records_nothing() {
        let mut console = ScriptedConsole::new(["m", "abc", "s", "3,,12"]);
        let mut controller = TurnController::recording(&mut console);
        assert_eq!(controller.on_status(&state()).unwrap(), None);
        assert_eq!(controller.on_status(&state()).unwrap(), None);
        assert_eq!(controller.recorded(), 0);
        drop(controller);
        assert!(console.printed("Invalid input room value: abc. Try again."));
        assert!(console.printed("Invalid input room list: 3,,12. Try again."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut controller = TurnController::recording(ScriptedConsole::default());
        let error = controller.on_status(&state()).unwrap_err();
        assert!(matches!(error, RuntimeError::InputClosed { .. }));
    }

    #[test]
    fn replay_echoes_recorded_answers() {
        let mut log = DecisionLog::new();
        log.record(Decision::new(Command::Move(RoomId(4)), "5"));
        let mut console = ScriptedConsole::default();
        let mut controller =
            TurnController::replaying(&mut console, log.seal().reader(), true);

        assert_eq!(
            controller.on_status(&state()).unwrap(),
            Some(Command::Move(RoomId(4)))
        );
        assert_eq!(controller.unread(), 0);
        drop(controller);

        assert!(console.printed("Move or Shoot? (m or s)  m"));
        assert!(console.printed("Where to?  5"));
        assert_eq!(console.count(REPLAY_PAUSE), 1);
    }

    #[test]
    fn replay_echoes_selector_as_typed() {
        let mut controller = TurnController::recording(ScriptedConsole::new(["M", "5"]));
        controller.on_status(&state()).unwrap();
        let recording = controller.into_recording().unwrap();
        assert_eq!(recording.decisions().next().unwrap().selector, "M");

        let mut console = ScriptedConsole::default();
        let mut replay = TurnController::replaying(&mut console, recording.reader(), false);
        replay.on_status(&state()).unwrap();
        drop(replay);
        assert!(console.printed("Move or Shoot? (m or s)  M"));
    }

    #[test]
    fn replay_without_pause_never_prompts() {
        let mut log = DecisionLog::new();
        log.record(Decision::new(Command::Move(RoomId(1)), "2"));
        let mut console = ScriptedConsole::default();
        let mut controller =
            TurnController::replaying(&mut console, log.seal().reader(), false);
        controller.on_status(&state()).unwrap();
        drop(controller);
        assert!(!console.printed(REPLAY_PAUSE));
    }

    #[test]
    fn replay_past_the_end_fails() {
        let reader = DecisionLog::new().seal().reader();
        let mut controller = TurnController::replaying(ScriptedConsole::default(), reader, false);
        let error = controller.on_status(&state()).unwrap_err();
        assert!(matches!(
            error,
            RuntimeError::Log(LogError::Exhausted { consumed: 0 })
        ));
    }

    #[test]
    fn outcome_is_rendered() {
        let mut console = ScriptedConsole::default();
        let mut controller = TurnController::recording(&mut console);
        controller
            .on_outcome(&state(), Outcome::Shot(ActionResult::WumpusKilled))
            .unwrap();
        drop(controller);
        assert!(console.printed("AHA! You got the wumpus!"));
    }
}
