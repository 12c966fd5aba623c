use crate::Coords;

/// Playfield geometry and pacing. Components receive this by reference at
/// construction instead of reading module-level constants, so tests can run
/// on smaller grids.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Playfield width in pixels, a multiple of `cell_size`.
    pub screen_width: i32,
    /// Playfield height in pixels, a multiple of `cell_size`.
    pub screen_height: i32,
    /// Edge length of one grid cell, in pixels.
    pub cell_size: i32,
    /// Game updates per second.
    pub ticks_per_second: u32,
    /// When set, a self-collision resets the game on the spot instead of
    /// latching into the game-over screen until the next key press.
    pub restart_on_collision: bool,
}

impl GameConfig {
    /// Number of cells along the horizontal axis.
    pub fn grid_width(&self) -> i32 {
        self.screen_width / self.cell_size
    }

    /// Number of cells along the vertical axis.
    pub fn grid_height(&self) -> i32 {
        self.screen_height / self.cell_size
    }

    /// The cell at the exact center of the screen, where the snake spawns.
    pub fn center(&self) -> Coords {
        (self.screen_width / 2, self.screen_height / 2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 520,
            screen_height: 520,
            cell_size: 20,
            ticks_per_second: 12,
            restart_on_collision: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_a_26_by_26_grid() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 26);
        assert_eq!(config.grid_height(), 26);
        assert_eq!(config.center(), (260, 260));
    }
}
