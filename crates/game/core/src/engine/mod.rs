//! Reference Game Host implementing the classic Hunt the Wumpus rules.
//!
//! [`WumpusHost`] is the authoritative owner of the world: player position,
//! hazards, the wumpus, arrows and the seeded random source. Every random
//! draw flows through a single [`GameRng`], so two hosts built from the same
//! seed and map that receive the same commands produce the same turns and
//! results.

mod arrow;
mod errors;
mod hazards;

pub use errors::HostError;

use crate::action::{ActionResult, ArrowPath, MoveOutcome};
use crate::config::GameConfig;
use crate::env::{CaveMap, GameRng, RollStream};
use crate::host::{GameHost, HostOptions};
use crate::state::{HazardReveal, HostStep, RoomId, Senses, TurnDetail, TurnState, Verdict};

use arrow::Flight;

/// Classic wumpus world on an arbitrary cave map.
#[derive(Clone, Debug)]
pub struct WumpusHost {
    map: CaveMap,
    config: GameConfig,
    options: HostOptions,
    rng: GameRng,
    player: RoomId,
    wumpus: RoomId,
    pits: Vec<RoomId>,
    bats: Vec<RoomId>,
    arrows: u8,
    moves: u32,
    turn: u32,
    verdict: Option<Verdict>,
}

impl WumpusHost {
    /// Creates a host with the default [`GameConfig`].
    pub fn new(seed: u64, map: CaveMap, options: HostOptions) -> Result<Self, HostError> {
        Self::with_config(seed, map, options, GameConfig::default())
    }

    pub fn with_config(
        seed: u64,
        map: CaveMap,
        options: HostOptions,
        config: GameConfig,
    ) -> Result<Self, HostError> {
        let required = config.rooms_required();
        if map.room_count() < required {
            return Err(HostError::MapTooSmall {
                rooms: map.room_count(),
                required,
            });
        }

        let mut rng = GameRng::new(seed);
        let layout = hazards::place(&map, &config, &mut rng);

        tracing::debug!(
            target: "wumpus::host",
            seed,
            map = map.name(),
            player = %layout.player,
            "hazards placed"
        );

        Ok(Self {
            arrows: config.arrows,
            map,
            config,
            options,
            rng,
            player: layout.player,
            wumpus: layout.wumpus,
            pits: layout.pits,
            bats: layout.bats,
            moves: 0,
            turn: 1,
            verdict: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn map(&self) -> &CaveMap {
        &self.map
    }

    pub fn player_room(&self) -> RoomId {
        self.player
    }

    pub fn arrows(&self) -> u8 {
        self.arrows
    }

    /// Verdict of a finished game, `None` while it is still running.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    fn senses(&self) -> Senses {
        let mut senses = Senses::empty();
        for room in self.map.exits(self.player) {
            if self.pits.contains(room) {
                senses |= Senses::DRAFT;
            }
            if self.bats.contains(room) {
                senses |= Senses::BATS;
            }
            if *room == self.wumpus {
                senses |= Senses::WUMPUS;
            }
        }
        senses
    }

    fn moves_left(&self) -> u32 {
        self.config.move_budget.saturating_sub(self.moves)
    }

    fn turn_state(&self) -> TurnState {
        let detail = self.options.render_detail.then(|| TurnDetail {
            turn: self.turn,
            arrows: self.arrows,
            moves_left: self.moves_left(),
            hazards: self.options.reveal_hazards.then(|| HazardReveal {
                wumpus: self.wumpus,
                pits: self.pits.clone(),
                bats: self.bats.clone(),
            }),
        });

        TurnState {
            room: self.player,
            exits: self.map.exits(self.player).to_vec(),
            entrances: self.map.entrances(self.player).to_vec(),
            senses: self.senses(),
            detail,
        }
    }

    fn score(&self) -> u32 {
        GameConfig::WIN_BASE_SCORE
            + GameConfig::SCORE_PER_ARROW * u32::from(self.arrows)
            + self.moves_left()
    }

    fn finish(&mut self, won: bool) {
        let verdict = if won {
            Verdict::Won {
                score: self.score(),
            }
        } else {
            Verdict::Lost
        };
        tracing::debug!(target: "wumpus::host", ?verdict, turn = self.turn, "game finished");
        self.verdict = Some(verdict);
    }

    fn ignore_after_finish(&self, action: &'static str) -> bool {
        if self.verdict.is_some() {
            tracing::warn!(target: "wumpus::host", action, "command received after the game ended");
            return true;
        }
        false
    }

    /// Drops a snatched player in a random room without bats.
    fn bat_drop(&mut self) -> RoomId {
        let landing: Vec<RoomId> = self
            .map
            .rooms()
            .filter(|room| !self.bats.contains(room))
            .collect();
        self.rng
            .pick(RollStream::Bats, &landing)
            .unwrap_or(self.player)
    }

    /// Wakes the wumpus; it wanders to an adjacent room most of the time.
    fn wake_wumpus(&mut self) {
        if !self
            .rng
            .percent(RollStream::Wumpus, self.config.wumpus_move_percent)
        {
            return;
        }
        if let Some(room) = self.rng.pick(RollStream::Wumpus, self.map.exits(self.wumpus)) {
            self.wumpus = room;
        }
    }
}

impl GameHost for WumpusHost {
    fn next_turn(&mut self) -> HostStep {
        match self.verdict {
            Some(verdict) => HostStep::Finished(verdict),
            None => HostStep::Turn(self.turn_state()),
        }
    }

    fn move_to(&mut self, room: RoomId) -> MoveOutcome {
        if self.ignore_after_finish("move") {
            return MoveOutcome::new(ActionResult::Continue, false);
        }

        self.turn += 1;
        if !self.map.is_exit(self.player, room) {
            return MoveOutcome::new(ActionResult::NotAnExit, false);
        }

        self.moves += 1;
        self.player = room;

        let snatched = self.bats.contains(&self.player);
        if snatched {
            self.player = self.bat_drop();
        }

        let result = if self.player == self.wumpus {
            self.finish(false);
            ActionResult::MetWumpus
        } else if self.pits.contains(&self.player) {
            self.finish(false);
            ActionResult::FellInPit
        } else if self.moves >= self.config.move_budget {
            self.finish(false);
            ActionResult::Exhausted
        } else {
            ActionResult::Continue
        };

        tracing::debug!(
            target: "wumpus::host",
            room = %self.player,
            result = result.code(),
            snatched,
            "move resolved"
        );
        MoveOutcome::new(result, snatched)
    }

    fn shoot(&mut self, path: &ArrowPath) -> ActionResult {
        if self.ignore_after_finish("shoot") {
            return ActionResult::Continue;
        }

        self.turn += 1;
        if arrow::doubles_back(path) {
            return ActionResult::TooCrooked;
        }

        self.arrows = self.arrows.saturating_sub(1);
        let flight = arrow::fly(&self.map, path, self.player, self.wumpus, &mut self.rng);

        let result = match flight {
            Flight::HitWumpus => {
                self.finish(true);
                ActionResult::WumpusKilled
            }
            Flight::HitPlayer => {
                self.finish(false);
                ActionResult::ShotSelf
            }
            Flight::Missed => {
                self.wake_wumpus();
                if self.wumpus == self.player {
                    self.finish(false);
                    ActionResult::KilledByGroggyWumpus
                } else if self.arrows == 0 {
                    self.finish(false);
                    ActionResult::OutOfArrows
                } else {
                    ActionResult::WumpusMissed
                }
            }
        };

        tracing::debug!(
            target: "wumpus::host",
            rooms = path.len(),
            arrows = self.arrows,
            result = result.code(),
            "arrow resolved"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dodecahedron() -> CaveMap {
        CaveMap::from_display_table(
            "standard",
            &[
                &[2, 5, 8],
                &[1, 3, 10],
                &[2, 4, 12],
                &[3, 5, 14],
                &[1, 4, 6],
                &[5, 7, 15],
                &[6, 8, 17],
                &[1, 7, 9],
                &[8, 10, 18],
                &[2, 9, 11],
                &[10, 12, 19],
                &[3, 11, 13],
                &[12, 14, 20],
                &[4, 13, 15],
                &[6, 14, 16],
                &[15, 17, 20],
                &[7, 16, 18],
                &[9, 17, 19],
                &[11, 18, 20],
                &[13, 16, 19],
            ],
        )
        .unwrap()
    }

    fn host(seed: u64) -> WumpusHost {
        WumpusHost::new(seed, dodecahedron(), HostOptions::LIVE).unwrap()
    }

    /// Places everything by hand so rule tests do not depend on a seed.
    fn staged(player: u16, wumpus: u16, pits: &[u16], bats: &[u16]) -> WumpusHost {
        let mut host = host(1);
        host.player = RoomId(player);
        host.wumpus = RoomId(wumpus);
        host.pits = pits.iter().copied().map(RoomId).collect();
        host.bats = bats.iter().copied().map(RoomId).collect();
        host
    }

    fn path(rooms: &[u16]) -> ArrowPath {
        ArrowPath::new(rooms.iter().copied().map(RoomId)).unwrap()
    }

    fn turn(host: &mut WumpusHost) -> TurnState {
        match host.next_turn() {
            HostStep::Turn(state) => state,
            HostStep::Finished(verdict) => panic!("game already over: {verdict:?}"),
        }
    }

    #[test]
    fn rejects_maps_too_small_for_hazards() {
        let map = CaveMap::from_display_table("tiny", &[&[2], &[1]]).unwrap();
        assert_eq!(
            WumpusHost::new(1, map, HostOptions::LIVE).unwrap_err(),
            HostError::MapTooSmall {
                rooms: 2,
                required: 6
            }
        );
    }

    #[test]
    fn turn_state_lists_exits_and_senses() {
        // Room 1 leads to 2, 5 and 8.
        let mut host = staged(0, 4, &[1], &[7]);
        let state = turn(&mut host);
        assert_eq!(state.room, RoomId(0));
        assert_eq!(state.exits, vec![RoomId(1), RoomId(4), RoomId(7)]);
        assert_eq!(state.senses, Senses::DRAFT | Senses::BATS | Senses::WUMPUS);
        assert!(state.detail.is_none());
    }

    #[test]
    fn next_turn_is_stable_without_commands() {
        let mut host = host(921);
        let first = turn(&mut host);
        let second = turn(&mut host);
        assert_eq!(first, second);
    }

    #[test]
    fn bonk_on_non_exit() {
        let mut host = staged(0, 19, &[18], &[17]);
        let outcome = host.move_to(RoomId(10));
        assert_eq!(outcome, MoveOutcome::new(ActionResult::NotAnExit, false));
        assert_eq!(host.player_room(), RoomId(0));
        assert_eq!(host.verdict(), None);
    }

    #[test]
    fn walking_into_hazards_ends_the_game() {
        let mut host = staged(0, 1, &[4], &[17]);
        assert_eq!(host.move_to(RoomId(1)).result, ActionResult::MetWumpus);
        assert_eq!(host.next_turn(), HostStep::Finished(Verdict::Lost));

        let mut host = staged(0, 19, &[4], &[17]);
        assert_eq!(host.move_to(RoomId(4)).result, ActionResult::FellInPit);
        assert_eq!(host.verdict(), Some(Verdict::Lost));
    }

    #[test]
    fn bats_relocate_the_player() {
        let mut host = staged(0, 19, &[18], &[1, 2]);
        let outcome = host.move_to(RoomId(1));
        assert!(outcome.snatched);
        assert!(!host.bats.contains(&host.player_room()));
    }

    #[test]
    fn exhaustion_after_move_budget() {
        let mut host = staged(0, 19, &[18], &[17]);
        host.config = GameConfig::default().with_move_budget(2);
        assert_eq!(host.move_to(RoomId(1)).result, ActionResult::Continue);
        assert_eq!(host.move_to(RoomId(0)).result, ActionResult::Exhausted);
        assert_eq!(host.verdict(), Some(Verdict::Lost));
    }

    #[test]
    fn crooked_path_spends_no_arrow() {
        let mut host = staged(0, 19, &[18], &[17]);
        assert_eq!(host.shoot(&path(&[1, 0, 1])), ActionResult::TooCrooked);
        assert_eq!(host.arrows(), GameConfig::DEFAULT_ARROWS);
    }

    #[test]
    fn killing_the_wumpus_wins_with_score() {
        let mut host = staged(0, 2, &[18], &[17]);
        assert_eq!(host.shoot(&path(&[1, 2])), ActionResult::WumpusKilled);
        let expected = GameConfig::WIN_BASE_SCORE
            + GameConfig::SCORE_PER_ARROW * 4
            + GameConfig::DEFAULT_MOVE_BUDGET;
        assert_eq!(host.verdict(), Some(Verdict::Won { score: expected }));
    }

    #[test]
    fn arrow_back_into_own_room() {
        let mut host = staged(0, 19, &[18], &[17]);
        assert_eq!(host.shoot(&path(&[1, 0])), ActionResult::ShotSelf);
        assert_eq!(host.verdict(), Some(Verdict::Lost));
    }

    #[test]
    fn last_arrow_miss_loses() {
        let mut host = staged(0, 19, &[18], &[17]);
        host.arrows = 1;
        // The wumpus sits far away on room 20, so waking it cannot reach room 1.
        assert_eq!(host.shoot(&path(&[1])), ActionResult::OutOfArrows);
        assert_eq!(host.verdict(), Some(Verdict::Lost));
    }

    #[test]
    fn commands_after_the_end_are_ignored() {
        let mut host = staged(0, 1, &[18], &[17]);
        host.move_to(RoomId(1));
        let arrows = host.arrows();
        assert_eq!(host.shoot(&path(&[4])), ActionResult::Continue);
        assert_eq!(host.arrows(), arrows);
    }

    #[test]
    fn review_options_expose_detail() {
        let mut host = WumpusHost::new(921, dodecahedron(), HostOptions::REVIEW).unwrap();
        let state = turn(&mut host);
        let detail = state.detail.expect("review hosts render detail");
        assert_eq!(detail.turn, 1);
        assert_eq!(detail.arrows, GameConfig::DEFAULT_ARROWS);
        let hazards = detail.hazards.expect("review hosts reveal hazards");
        assert_eq!(hazards.pits.len(), GameConfig::DEFAULT_PITS);
        assert_eq!(hazards.bats.len(), GameConfig::DEFAULT_BAT_COLONIES);
    }

    #[test]
    fn same_seed_same_game() {
        let commands = [RoomId(1), RoomId(4), RoomId(7), RoomId(9)];
        let run = |seed| {
            let mut host = host(seed);
            let mut trace = Vec::new();
            for &room in &commands {
                let HostStep::Turn(state) = host.next_turn() else {
                    break;
                };
                let target = if state.exits.contains(&room) {
                    room
                } else {
                    state.exits[0]
                };
                trace.push((state.room, state.senses, host.move_to(target)));
            }
            trace
        };
        assert_eq!(run(921), run(921));
    }
}
