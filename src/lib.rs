//! WallGo: rules engine for a wall-building territory game.
//!
//! Players take turns placing stones on an NxN board, then take turns moving
//! a stone up to two cells and raising a permanent wall next to it. The game
//! ends when walls have cut the board into separate territories, one per
//! player; the largest territory wins.
//!
//! ## Modules
//!
//! - [`config`] - Board size, player count, stones per player
//! - [`constants`] - Defaults and turn limits
//! - [`board`] - Stones, walls, and the grids that hold them
//! - [`game`] - Game state and the phase/turn state machine
//! - [`movement`] - One-step reachability and stone moves
//! - [`walls`] - Wall candidates and wall placement
//! - [`region`] - Flood fill of each player's territory
//! - [`result`] - Game completion and winners
//! - [`error`] - Rule violations
//! - [`playout`] - Random self-play
//! - [`protocol`] - Text command protocol
//!
//! ## Example
//!
//! ```
//! use wallgo::board::StoneId;
//! use wallgo::config::GameConfig;
//! use wallgo::game::{Game, Phase};
//!
//! let mut game = Game::new(GameConfig::default())?;
//!
//! // Two players, two stones each
//! for (x, y) in [(1, 1), (5, 5), (1, 5), (5, 1)] {
//!     game.place_stone(x, y)?;
//! }
//! assert_eq!(game.phase(), Phase::Moving);
//!
//! // Player 0 steps a stone, then walls it
//! let stone = StoneId::new(0, 0);
//! let walls = game.move_stone(stone, 2, 1)?;
//! let outcome = game.place_wall_for_stone(stone, walls[0])?;
//! assert!(outcome.is_none());
//! assert_eq!(game.current_player(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod movement;
pub mod playout;
pub mod protocol;
pub mod region;
pub mod result;
pub mod walls;
