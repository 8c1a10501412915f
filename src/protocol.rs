//! Line-oriented text protocol for driving a game.
//!
//! The format follows the Go Text Protocol: each request is an optional
//! numeric id, a command name, and whitespace separated arguments. Successful
//! responses start with `=`, failures with `?`, and every response ends with a
//! blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize <n>` - Start a fresh game on an NxN board
//! - `clear_board` - Start a fresh game with the current settings
//! - `place <x> <y>` - Place a stone for the current player
//! - `move <player> <index> <x> <y>` - Step a stone; lists the walls it may place
//! - `wall <player> <index> <h|v> <x> <y>` - Place a wall, ending the turn
//! - `reachable <x> <y>` - Cells one step away from a cell
//! - `walls <player> <index>` - Walls that may go next to a stone
//! - `showboard` - Render the board
//! - `status` - Phase, current player, and remaining steps
//! - `score` - Check whether the game is decided, without changing it
//!
//! ## Example
//!
//! ```
//! use wallgo::config::GameConfig;
//! use wallgo::protocol::ProtocolEngine;
//!
//! let mut engine = ProtocolEngine::new(GameConfig::default()).unwrap();
//! let mut out = Vec::new();
//! engine.run("1 place 0 0\n2 status\n".as_bytes(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("=1 0.0"));
//! assert!(text.contains("=2 phase PlacingStones player 1 steps 2"));
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, warn};

use crate::board::{Orientation, Point, StoneId, Wall};
use crate::config::GameConfig;
use crate::game::Game;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "known_command",
    "list_commands",
    "move",
    "name",
    "place",
    "protocol_version",
    "quit",
    "reachable",
    "score",
    "showboard",
    "status",
    "version",
    "wall",
    "walls",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    /// Settings used for fresh games
    config: GameConfig,
    /// Game in progress
    game: Game,
}

impl ProtocolEngine {
    /// Create an engine with a fresh game.
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = Game::new(config).context("invalid game settings")?;
        Ok(Self { config, game })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (prefix, message) = match self.execute(&command, args) {
                Ok(message) => ('=', message),
                Err(err) => {
                    warn!(%command, "command failed: {err:#}");
                    ('?', format!("{err:#}"))
                }
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute one command and return its response payload.
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        debug!(command, ?args, "execute");
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("1".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let name = args.first().ok_or_else(|| anyhow!("missing argument"))?;
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let board_size: usize = parse_arg(args, 0, "size")?;
                let config = GameConfig {
                    board_size,
                    ..self.config
                };
                self.game = Game::new(config).context("unacceptable size")?;
                self.config = config;
                Ok(String::new())
            }

            "clear_board" => {
                self.game = Game::new(self.config)?;
                Ok(String::new())
            }

            "place" => {
                let (x, y) = parse_point(args, 0)?;
                let id = self.game.place_stone(x, y)?;
                Ok(id.to_string())
            }

            "move" => {
                let stone = parse_stone(args, 0)?;
                let (x, y) = parse_point(args, 2)?;
                let walls = self.game.move_stone(stone, x, y)?;
                Ok(format_list(&walls))
            }

            "wall" => {
                let stone = parse_stone(args, 0)?;
                let orientation = parse_orientation(args, 2)?;
                let (x, y) = parse_point(args, 3)?;
                let wall = Wall::new(stone.player, orientation, x, y);
                match self.game.place_wall_for_stone(stone, wall)? {
                    Some(result) => Ok(format!("game over: {result}")),
                    None => Ok(String::new()),
                }
            }

            "reachable" => {
                let pt = parse_point(args, 0)?;
                let cells: Vec<String> = self
                    .game
                    .reachable_positions_in_one_step(pt)
                    .into_iter()
                    .map(|(x, y)| format!("{x} {y}"))
                    .collect();
                Ok(cells.join(", "))
            }

            "walls" => {
                let stone = parse_stone(args, 0)?;
                Ok(format_list(&self.game.placable_walls_for_stone(stone)))
            }

            "showboard" => Ok(format!("\n{}", self.game.board())),

            "status" => Ok(format!(
                "phase {} player {} steps {}",
                self.game.phase(),
                self.game.current_player(),
                self.game.remaining_steps()
            )),

            "score" => Ok(match self.game.check_for_game_completion() {
                Some(result) => result.to_string(),
                None => "open".to_string(),
            }),

            _ => bail!("unknown command: {command}"),
        }
    }
}

fn format_list(walls: &[Wall]) -> String {
    walls
        .iter()
        .map(Wall::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_arg<T: FromStr>(args: &[&str], i: usize, name: &str) -> Result<T> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("missing argument <{name}>"))?;
    raw.parse()
        .map_err(|_| anyhow!("invalid <{name}>: {raw}"))
}

fn parse_point(args: &[&str], i: usize) -> Result<Point> {
    Ok((parse_arg(args, i, "x")?, parse_arg(args, i + 1, "y")?))
}

fn parse_stone(args: &[&str], i: usize) -> Result<StoneId> {
    Ok(StoneId::new(
        parse_arg(args, i, "player")?,
        parse_arg(args, i + 1, "index")?,
    ))
}

fn parse_orientation(args: &[&str], i: usize) -> Result<Orientation> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("missing argument <h|v>"))?;
    match raw.to_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        _ => bail!("invalid orientation: {raw}"),
    }
}
