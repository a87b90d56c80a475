//! Game construction knobs.

/// Value of the tile that wins the game.
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Number of tiles placed on the empty board before the first move.
pub const DEFAULT_OPENING_TILES: usize = 2;

/// Configurable knobs for a new game. Defaults match the classic rules.
///
/// - `seed`: seed for the spawn RNG; `None` draws one from OS entropy.
/// - `opening_tiles`: tiles spawned before the first move.
/// - `win_tile`: reaching a tile of at least this value sets the won flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub opening_tiles: usize,
    pub win_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opening_tiles: DEFAULT_OPENING_TILES,
            win_tile: DEFAULT_WIN_TILE,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opening_tiles(mut self, count: usize) -> Self {
        self.opening_tiles = count;
        self
    }

    pub fn with_win_tile(mut self, value: u32) -> Self {
        self.win_tile = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.opening_tiles, 2);
        assert_eq!(cfg.win_tile, 2048);
    }

    #[test]
    fn setters_chain() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_opening_tiles(0)
            .with_win_tile(64);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.opening_tiles, 0);
        assert_eq!(cfg.win_tile, 64);
    }
}
