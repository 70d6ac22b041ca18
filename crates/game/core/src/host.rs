//! The Game Host contract.
//!
//! A host owns the world and all of its rules. The front-end talks to it as a
//! request/response exchange: it asks for the next step, receives either a
//! [`TurnState`] or a final [`Verdict`], and answers a turn state with at most
//! one [`Command`]. The host never calls back into the front-end while it is
//! in the middle of applying a command.
use crate::action::{ActionResult, ArrowPath, Command, MoveOutcome, Outcome};
use crate::engine::HostError;
use crate::env::MapRef;
use crate::state::{HostStep, RoomId, TurnState, Verdict};

/// Construction flags that change what a host exposes, never how it plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostOptions {
    /// Attach [`crate::TurnDetail`] to every turn state.
    pub render_detail: bool,
    /// Include hazard positions in the turn detail.
    pub reveal_hazards: bool,
}

impl HostOptions {
    /// Options for a normal game: nothing beyond what the player perceives.
    pub const LIVE: Self = Self {
        render_detail: false,
        reveal_hazards: false,
    };

    /// Options for reviewing a recorded game: everything visible.
    pub const REVIEW: Self = Self {
        render_detail: true,
        reveal_hazards: true,
    };
}

/// World simulation driven one turn at a time.
pub trait GameHost {
    /// Reports the current turn, or the verdict once the game is over.
    ///
    /// Calling this repeatedly without dispatching a command returns the same
    /// turn state; a turn only advances through [`GameHost::move_to`] or
    /// [`GameHost::shoot`].
    fn next_turn(&mut self) -> HostStep;

    /// Moves the player into `room`.
    fn move_to(&mut self, room: RoomId) -> MoveOutcome;

    /// Fires an arrow along `path`.
    fn shoot(&mut self, path: &ArrowPath) -> ActionResult;

    /// Routes a parsed command to the matching action.
    fn dispatch(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Move(room) => Outcome::Moved(self.move_to(*room)),
            Command::Shoot(path) => Outcome::Shot(self.shoot(path)),
        }
    }

    /// Runs the game to completion, asking `handler` for one command per turn.
    ///
    /// A turn for which the handler returns no command is not consumed; the
    /// host emits the same turn state again.
    fn play<H>(&mut self, handler: &mut H) -> Result<Verdict, H::Error>
    where
        Self: Sized,
        H: TurnHandler,
    {
        loop {
            match self.next_turn() {
                HostStep::Finished(verdict) => return Ok(verdict),
                HostStep::Turn(state) => {
                    if let Some(command) = handler.on_status(&state)? {
                        let outcome = self.dispatch(&command);
                        handler.on_outcome(&state, outcome)?;
                    }
                }
            }
        }
    }
}

/// Front-end side of [`GameHost::play`].
pub trait TurnHandler {
    type Error;

    /// Presents the turn and returns the command to apply, if any.
    fn on_status(&mut self, state: &TurnState) -> Result<Option<Command>, Self::Error>;

    /// Presents the host's answer to the command returned for `state`.
    fn on_outcome(&mut self, state: &TurnState, outcome: Outcome) -> Result<(), Self::Error>;
}

/// Builds hosts from the values a session fixes at creation.
///
/// Replays call the factory a second time with the same seed and map, so
/// implementations must be deterministic in those inputs.
pub trait HostFactory {
    type Host: GameHost;

    fn create(
        &self,
        seed: u64,
        map: &MapRef,
        options: HostOptions,
    ) -> Result<Self::Host, HostError>;
}

impl<F, H> HostFactory for F
where
    F: Fn(u64, &MapRef, HostOptions) -> Result<H, HostError>,
    H: GameHost,
{
    type Host = H;

    fn create(&self, seed: u64, map: &MapRef, options: HostOptions) -> Result<H, HostError> {
        self(seed, map, options)
    }
}
