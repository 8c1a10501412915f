//! Game state and the phase/turn state machine.
//!
//! A game moves through three phases:
//! - `PlacingStones`: players take turns putting one stone each on an empty
//!   cell until everyone has placed their quota.
//! - `Moving`: on each turn the current player may step ONE stone up to
//!   [`STEPS_PER_TURN`] times, then must place a wall next to that stone,
//!   which ends the turn. A wall without any step is allowed.
//! - `Over`: walls have separated every player's territory. Nothing more can
//!   happen.
//!
//! Every command checks the transition table in `Game::guard` and its own
//! preconditions before touching the board, so a rejected command never leaves
//! a partial write behind.

use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::board::{Board, Point, PlayerId, Stone, StoneId, Wall};
use crate::config::{ConfigError, GameConfig};
use crate::constants::STEPS_PER_TURN;
use crate::error::GameError;
use crate::region::Region;
use crate::result::GameResult;

/// Coarse stage of the game. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    PlacingStones,
    Moving,
    Over,
}

/// Progress within the current player's moving turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnStage {
    /// Nothing done yet this turn.
    AwaitingAction,
    /// This stone has stepped; only it may step again or take the wall.
    Stepped(StoneId),
}

/// A mutating command as seen by the transition table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Command {
    PlaceStone { x: usize, y: usize },
    Step { stone: StoneId, x: usize, y: usize },
    Wall { stone: StoneId, wall: Wall },
}

/// A single game of WallGo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) current_player: PlayerId,
    pub(crate) remaining_steps: usize,
    pub(crate) stage: TurnStage,
    pub(crate) result: Option<GameResult>,
}

impl Game {
    /// Start a new game in the stone placing phase with player 0 to act.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.board_size, config.players),
            phase: Phase::PlacingStones,
            current_player: 0,
            remaining_steps: STEPS_PER_TURN,
            stage: TurnStage::AwaitingAction,
            result: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Steps the current player may still take before placing a wall.
    pub fn remaining_steps(&self) -> usize {
        self.remaining_steps
    }

    pub fn turn_stage(&self) -> TurnStage {
        self.stage
    }

    pub fn stones(&self, player: PlayerId) -> &[Stone] {
        self.board.stones(player)
    }

    pub fn stone(&self, id: StoneId) -> Option<&Stone> {
        self.board.stone(id)
    }

    /// Final outcome, once the game is over.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// The transition table: which commands the current phase and turn stage
    /// accept. Command specific checks (reachability, wall candidates) are
    /// layered on top by the commands themselves.
    pub(crate) fn guard(&self, command: Command) -> Result<(), GameError> {
        match (self.phase, command) {
            (Phase::Over, _) => Err(GameError::GameOver),

            (Phase::PlacingStones, Command::PlaceStone { x, y }) => {
                if self.board.is_empty(x, y) {
                    Ok(())
                } else {
                    Err(GameError::InvalidPlacement { x, y })
                }
            }
            (Phase::Moving, Command::PlaceStone { x, y }) => {
                Err(GameError::InvalidPlacement { x, y })
            }

            (Phase::PlacingStones, Command::Step { stone, x, y }) => {
                Err(GameError::IllegalMove { stone, x, y })
            }
            (Phase::Moving, Command::Step { stone, x, y }) => {
                if self.remaining_steps == 0 || self.locked_out(stone) {
                    Err(GameError::IllegalMove { stone, x, y })
                } else {
                    Ok(())
                }
            }

            (phase, Command::Wall { stone, wall }) => {
                if stone.player != self.current_player {
                    Err(GameError::WrongTurn {
                        player: stone.player,
                        current: self.current_player,
                    })
                } else if phase != Phase::Moving || self.locked_out(stone) {
                    Err(GameError::IllegalWall { stone, wall })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// True if another stone already stepped this turn.
    fn locked_out(&self, stone: StoneId) -> bool {
        matches!(self.stage, TurnStage::Stepped(moved) if moved != stone)
    }

    /// Whether `place_stone(x, y)` would succeed.
    pub fn can_place_stone(&self, x: usize, y: usize) -> bool {
        self.guard(Command::PlaceStone { x, y }).is_ok()
    }

    /// Place a stone for the current player and pass the turn.
    ///
    /// Moves the game into the moving phase once every player has placed all
    /// of their stones.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `InvalidPlacement` outside the placing phase, off the board, or on an
    ///   occupied cell
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn place_stone(&mut self, x: usize, y: usize) -> Result<StoneId, GameError> {
        self.guard(Command::PlaceStone { x, y })?;

        let id = self.board.add_stone(self.current_player, (x, y));
        debug!(stone = %id, "placed stone");

        if self.all_stones_placed() {
            self.phase = Phase::Moving;
            debug!("all stones placed, entering moving phase");
        }
        self.start_next_player();
        Ok(id)
    }

    fn all_stones_placed(&self) -> bool {
        self.board
            .all_stones()
            .iter()
            .all(|stones| stones.len() == self.config.stones_per_player)
    }

    /// Hand the turn to the next player with a fresh step budget.
    pub(crate) fn start_next_player(&mut self) {
        self.current_player = (self.current_player + 1) % self.config.players;
        self.remaining_steps = STEPS_PER_TURN;
        self.stage = TurnStage::AwaitingAction;
    }

    /// A player can take a turn if some stone of theirs has a free wall slot
    /// next to it.
    pub fn has_legal_turn(&self, player: PlayerId) -> bool {
        self.board
            .stones(player)
            .iter()
            .any(|stone| !self.board.placable_walls(stone).is_empty())
    }

    /// Pass over players whose stones are all sealed in.
    ///
    /// Only called while the game is still open; an open game always has
    /// someone who can act, so this stops within one round.
    pub(crate) fn skip_stuck_players(&mut self) {
        for _ in 0..self.config.players {
            if self.has_legal_turn(self.current_player) {
                return;
            }
            debug!(player = self.current_player, "no legal turn, skipping");
            self.start_next_player();
        }
    }

    /// Cells one step away from `position` (see
    /// [`Board::reachable_in_one_step`]).
    pub fn reachable_positions_in_one_step(&self, position: Point) -> Vec<Point> {
        self.board.reachable_in_one_step(position)
    }

    /// Territory reachable by `player`'s stones.
    pub fn reachable_region_for_player(&self, player: PlayerId) -> Region {
        self.board.reachable_region(player)
    }

    /// Speculative termination check; does not change the game.
    pub fn check_for_game_completion(&self) -> Option<GameResult> {
        self.board.check_for_game_completion()
    }

    /// Record the end of the game.
    pub(crate) fn finish(&mut self, result: GameResult) {
        info!(winners = ?result.winners(), sizes = ?result.sizes(), "game over");
        self.phase = Phase::Over;
        self.result = Some(result);
    }
}
