//! Shared fixtures for runtime integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use wumpus_core::{
    ActionResult, ArrowPath, Command, GameHost, HostError, HostOptions, HostStep, MapRef,
    MoveOutcome, RoomId, Senses, TurnState, Verdict,
};

/// Host that plays a fixed number of turns and remembers every command.
///
/// It applies no rules: moves always continue and shots always miss.
pub struct ScriptedHost {
    turns: usize,
    received: Rc<RefCell<Vec<Command>>>,
}

impl ScriptedHost {
    pub fn new(turns: usize, received: Rc<RefCell<Vec<Command>>>) -> Self {
        Self { turns, received }
    }

    fn dispatched(&self) -> usize {
        self.received.borrow().len()
    }
}

impl GameHost for ScriptedHost {
    fn next_turn(&mut self) -> HostStep {
        let dispatched = self.dispatched();
        if dispatched >= self.turns {
            return HostStep::Finished(Verdict::Lost);
        }
        HostStep::Turn(TurnState {
            room: RoomId(dispatched as u16 % 20),
            exits: vec![RoomId(1), RoomId(4), RoomId(7)],
            entrances: vec![RoomId(1), RoomId(4), RoomId(7)],
            senses: Senses::empty(),
            detail: None,
        })
    }

    fn move_to(&mut self, room: RoomId) -> MoveOutcome {
        self.received.borrow_mut().push(Command::Move(room));
        MoveOutcome::new(ActionResult::Continue, false)
    }

    fn shoot(&mut self, path: &ArrowPath) -> ActionResult {
        self.received.borrow_mut().push(Command::Shoot(path.clone()));
        ActionResult::WumpusMissed
    }
}

/// Factory building fresh [`ScriptedHost`]s that all report into one list.
pub struct ScriptedFactory {
    pub turns: usize,
    pub received: Rc<RefCell<Vec<Command>>>,
    pub created: RefCell<Vec<HostOptions>>,
}

impl ScriptedFactory {
    pub fn new(turns: usize) -> Self {
        Self {
            turns,
            received: Rc::default(),
            created: RefCell::default(),
        }
    }

    /// Takes the commands received so far, leaving the list empty.
    pub fn take_received(&self) -> Vec<Command> {
        self.received.borrow_mut().drain(..).collect()
    }
}

impl wumpus_core::HostFactory for ScriptedFactory {
    type Host = ScriptedHost;

    fn create(
        &self,
        _seed: u64,
        _map: &MapRef,
        options: HostOptions,
    ) -> Result<ScriptedHost, HostError> {
        self.created.borrow_mut().push(options);
        Ok(ScriptedHost::new(self.turns, Rc::clone(&self.received)))
    }
}

/// Console answers that produce `command`.
pub fn answers(command: &Command) -> [String; 2] {
    match command {
        Command::Move(room) => ["m".to_owned(), room.to_string()],
        Command::Shoot(path) => {
            let rooms: Vec<String> = path.rooms().iter().map(RoomId::to_string).collect();
            ["s".to_owned(), rooms.join(",")]
        }
    }
}
