mod common;

use std::cell::Cell;

use common::{ScriptedFactory, answers};
use wumpus_content::MapCatalog;
use wumpus_core::{
    ActionResult, ArrowPath, Command, GameConfig, HostError, HostOptions, MapRef, RoomId, Verdict,
    WumpusHost,
};
use wumpus_runtime::{
    Decision, DecisionLog, LogError, ReplayDriver, RuntimeError, ScriptedConsole, Session,
};

fn one_arrow_host(
    seed: u64,
    map: &MapRef,
    options: HostOptions,
) -> Result<WumpusHost, HostError> {
    let cave = MapCatalog::load(map).ok_or_else(|| HostError::UnknownMap { map: map.clone() })?;
    WumpusHost::with_config(seed, cave, options, GameConfig::default().with_arrows(1))
}

#[test]
fn live_game_replays_identically() {
    let session = Session::new(921, MapCatalog::default_ref());
    // Every script ends the game: the single arrow is always decisive.
    let mut live_console = ScriptedConsole::new(["m", "5", "m", "12", "s", "3,4,5"]);
    let live = session
        .play_live(&one_arrow_host, &mut live_console)
        .expect("live game");

    assert_eq!(live.recording.len(), 3);
    assert_eq!(live.transcript.len(), 3);
    let results: Vec<_> = live
        .transcript
        .entries()
        .iter()
        .map(|entry| entry.result)
        .collect();
    assert_eq!(
        results,
        [
            ActionResult::NotAnExit,
            ActionResult::NotAnExit,
            ActionResult::ShotSelf
        ]
    );
    assert_eq!(live.verdict, Verdict::Lost);

    let mut replay_console = ScriptedConsole::default();
    let replay = ReplayDriver::new(&one_arrow_host, &session)
        .run(live.recording.clone(), &mut replay_console)
        .expect("replay")
        .expect("recording was not empty");

    assert_eq!(replay.verdict, live.verdict);
    assert_eq!(replay.transcript, live.transcript);
    assert!(replay.matches(&live.transcript));
    assert_eq!(replay.unread, 0);

    assert!(replay_console.printed("Replaying last game..."));
    assert_eq!(
        replay_console.count("Move or Shoot? (m or s) "),
        live.recording.len()
    );
    // Review hosts show the hidden state on every turn.
    assert!(replay_console.printed("[Hazards] Wumpus:"));
    assert!(!live_console.printed("[Hazards]"));
}

#[test]
fn malformed_input_is_neither_recorded_nor_dispatched() {
    let factory = ScriptedFactory::new(2);
    let session = Session::new(7, MapRef::new("scripted"));
    let console = ScriptedConsole::new([
        "x", "m", "abc", "s", "3,,12", "m", "0", "m", "5", "s", "3,7,12",
    ]);

    let live = session.play_live(&factory, console).unwrap();

    let shot = ArrowPath::new([RoomId(2), RoomId(6), RoomId(11)]).unwrap();
    let expected = vec![Command::Move(RoomId(4)), Command::Shoot(shot)];
    assert_eq!(factory.take_received(), expected);

    let recorded: Vec<_> = live
        .recording
        .decisions()
        .map(|decision| decision.command.clone())
        .collect();
    assert_eq!(recorded, expected);
    let raw: Vec<_> = live
        .recording
        .decisions()
        .map(|decision| decision.raw.as_str())
        .collect();
    assert_eq!(raw, ["5", "3,7,12"]);
}

#[test]
fn replay_uses_review_options_and_same_commands() {
    let factory = ScriptedFactory::new(3);
    let session = Session::new(1, MapRef::new("scripted"));
    let commands = [
        Command::Move(RoomId(1)),
        Command::Shoot(ArrowPath::new([RoomId(4)]).unwrap()),
        Command::Move(RoomId(7)),
    ];
    let inputs: Vec<String> = commands.iter().flat_map(answers).collect();

    let live = session
        .play_live(&factory, ScriptedConsole::new(inputs))
        .unwrap();
    assert_eq!(factory.take_received(), commands);

    let report = ReplayDriver::new(&factory, &session)
        .with_pause(false)
        .run(live.recording, ScriptedConsole::default())
        .unwrap()
        .unwrap();

    assert_eq!(factory.take_received(), commands);
    assert_eq!(
        *factory.created.borrow(),
        [HostOptions::LIVE, HostOptions::REVIEW]
    );
    assert!(report.matches(&live.transcript));
}

#[test]
fn empty_recording_builds_no_host() {
    let created = Cell::new(0);
    let factory = |seed: u64, map: &MapRef, options: HostOptions| {
        created.set(created.get() + 1);
        one_arrow_host(seed, map, options)
    };
    let session = Session::new(921, MapCatalog::default_ref());
    let mut console = ScriptedConsole::default();

    let report = ReplayDriver::new(&factory, &session)
        .run(DecisionLog::new().seal(), &mut console)
        .unwrap();

    assert!(report.is_none());
    assert_eq!(created.get(), 0);
    assert_eq!(console.output(), ["Nothing to replay. Exiting."]);
}

#[test]
fn replay_fails_when_host_outlasts_recording() {
    let factory = ScriptedFactory::new(3);
    let session = Session::new(1, MapRef::new("scripted"));
    let mut log = DecisionLog::new();
    log.record(Decision::new(Command::Move(RoomId(1)), "2"));

    let error = ReplayDriver::new(&factory, &session)
        .with_pause(false)
        .run(log.seal(), ScriptedConsole::default())
        .unwrap_err();

    assert!(matches!(
        error,
        RuntimeError::Log(LogError::Exhausted { consumed: 1 })
    ));
}

#[test]
fn unknown_map_fails_before_any_prompt() {
    let session = Session::new(921, MapRef::new("nowhere"));
    let mut console = ScriptedConsole::new(["m", "2"]);

    let error = session
        .play_live(&one_arrow_host, &mut console)
        .unwrap_err();

    assert!(matches!(
        error,
        RuntimeError::Host(HostError::UnknownMap { .. })
    ));
    assert!(console.output().is_empty());
}

#[test]
fn closed_input_aborts_live_game() {
    let factory = ScriptedFactory::new(5);
    let session = Session::new(1, MapRef::new("scripted"));
    let error = session
        .play_live(&factory, ScriptedConsole::new(["m", "2"]))
        .unwrap_err();
    assert!(matches!(error, RuntimeError::InputClosed { .. }));
}
