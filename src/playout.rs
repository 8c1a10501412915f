//! Random self-play.
//!
//! Drives a game to the end through the public command API, choosing
//! uniformly among legal actions. Used for demos and for exercising the rules
//! engine; there is no evaluation or search here.

use anyhow::{Result, bail};
use fastrand::Rng;
use tracing::{debug, instrument};

use crate::board::{Stone, StoneId};
use crate::config::GameConfig;
use crate::game::{Game, Phase};
use crate::result::GameResult;

/// Play a whole game with random legal actions.
///
/// The same `config` and `seed` always produce the same game.
#[instrument]
pub fn play_random_game(config: GameConfig, seed: u64) -> Result<(Game, GameResult)> {
    let mut game = Game::new(config)?;
    let mut rng = Rng::with_seed(seed);

    while game.phase() == Phase::PlacingStones {
        random_placement(&mut game, &mut rng)?;
    }

    // Every turn fills one wall slot, and a board with every slot filled is
    // always complete.
    let max_turns = 2 * config.board_size * (config.board_size + 1) + 1;
    for turn in 0..max_turns {
        if let Some(result) = random_turn(&mut game, &mut rng)? {
            debug!(turn, %result, "playout finished");
            return Ok((game, result));
        }
    }
    bail!("playout did not finish within {max_turns} turns")
}

/// Put the current player's next stone on a random empty cell.
pub fn random_placement(game: &mut Game, rng: &mut Rng) -> Result<StoneId> {
    let board = game.board();
    let size = board.size();
    let empty: Vec<(usize, usize)> = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| board.is_empty(x, y))
        .collect();
    if empty.is_empty() {
        bail!("no empty cell left for player {}", game.current_player());
    }
    let (x, y) = empty[rng.usize(..empty.len())];
    Ok(game.place_stone(x, y)?)
}

/// Play one moving-phase turn for the current player: pick a stone, take
/// zero to two random steps, then place a random wall next to it.
pub fn random_turn(game: &mut Game, rng: &mut Rng) -> Result<Option<GameResult>> {
    let player = game.current_player();
    let candidates: Vec<StoneId> = game
        .stones(player)
        .iter()
        .filter(|s| !game.board().placable_walls(s).is_empty())
        .map(Stone::id)
        .collect();
    if candidates.is_empty() {
        bail!("player {player} has no legal turn");
    }
    let stone = candidates[rng.usize(..candidates.len())];

    let steps = rng.usize(..=game.remaining_steps());
    for _ in 0..steps {
        let Some(from) = game.stone(stone).map(|s| s.position) else {
            break;
        };
        let options = game.reachable_positions_in_one_step(from);
        if options.is_empty() {
            break;
        }
        let (x, y) = options[rng.usize(..options.len())];
        game.move_stone(stone, x, y)?;
    }

    let walls = game.placable_walls_for_stone(stone);
    if walls.is_empty() {
        bail!("stone {stone} has nowhere to put a wall");
    }
    let wall = walls[rng.usize(..walls.len())];
    Ok(game.place_wall_for_stone(stone, wall)?)
}
