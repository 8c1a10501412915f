//! Game configuration.

use derive_more::{Display, Error};

use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS, DEFAULT_STONES_PER_PLAYER, MAX_BOARD_SIZE, MIN_PLAYERS,
};

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Board size (NxN).
    pub board_size: usize,
    /// Number of players taking turns.
    pub players: usize,
    /// Stones each player places before moving starts.
    pub stones_per_player: usize,
}

/// Reasons a [`GameConfig`] cannot start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board size is zero.
    #[display("board size must be at least 1")]
    EmptyBoard,
    /// Board size above [`MAX_BOARD_SIZE`].
    #[display("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    /// Fewer than two players.
    #[display("need at least two players (got {players})")]
    TooFewPlayers { players: usize },
    /// Zero stones per player.
    #[display("each player needs at least one stone")]
    NoStones,
    /// Not enough cells for every stone.
    #[display("{stones} stones do not fit on {cells} cells")]
    BoardTooSmall { stones: usize, cells: usize },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: DEFAULT_PLAYERS,
            stones_per_player: DEFAULT_STONES_PER_PLAYER,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, players: usize, stones_per_player: usize) -> Self {
        Self {
            board_size,
            players,
            stones_per_player,
        }
    }

    /// Check that a game with this configuration can be played to the end
    /// of the placement phase.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers {
                players: self.players,
            });
        }
        if self.stones_per_player == 0 {
            return Err(ConfigError::NoStones);
        }
        let cells = self.board_size * self.board_size;
        let stones = self.total_stones();
        if stones > cells {
            return Err(ConfigError::BoardTooSmall { stones, cells });
        }
        Ok(())
    }

    /// Total stones on the board once placement finishes, saturating on
    /// overflow.
    pub fn total_stones(&self) -> usize {
        self.players.saturating_mul(self.stones_per_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.players, 2);
        assert_eq!(config.stones_per_player, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_configs() {
        assert_eq!(
            GameConfig::new(0, 2, 1).validate(),
            Err(ConfigError::EmptyBoard)
        );
        assert_eq!(
            GameConfig::new(5, 1, 1).validate(),
            Err(ConfigError::TooFewPlayers { players: 1 })
        );
        assert_eq!(GameConfig::new(5, 2, 0).validate(), Err(ConfigError::NoStones));
    }

    #[test]
    fn test_rejects_overfull_board() {
        assert_eq!(
            GameConfig::new(2, 3, 2).validate(),
            Err(ConfigError::BoardTooSmall { stones: 6, cells: 4 })
        );
        // Exactly full is fine
        assert!(GameConfig::new(2, 2, 2).validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_board() {
        assert_eq!(
            GameConfig::new(MAX_BOARD_SIZE + 1, 2, 1).validate(),
            Err(ConfigError::BoardTooLarge {
                size: MAX_BOARD_SIZE + 1,
                max: MAX_BOARD_SIZE
            })
        );
        // Large enough that size * size would overflow
        assert!(matches!(
            GameConfig::new(1usize << 33, 2, 1).validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));
        assert!(GameConfig::new(MAX_BOARD_SIZE, 2, 1).validate().is_ok());
    }

    #[test]
    fn test_total_stones_saturates() {
        assert_eq!(GameConfig::new(5, 3, 2).total_stones(), 6);
        assert_eq!(GameConfig::new(5, usize::MAX, 2).total_stones(), usize::MAX);
        assert!(matches!(
            GameConfig::new(5, usize::MAX, 2).validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = GameConfig::new(1, 2, 1).validate().unwrap_err();
        assert_eq!(err.to_string(), "2 stones do not fit on 1 cells");
    }
}
