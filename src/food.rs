use crate::config::GameConfig;
use crate::Coords;

use rand::Rng;

/// A single piece of food somewhere on the grid.
pub struct Food {
    position: Coords,
}

impl Food {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut food = Food { position: (0, 0) };
        food.relocate(config, rng);
        food
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    /// Picks a cell uniformly at random over the whole grid. The snake's
    /// body is not consulted, so food can land underneath it.
    pub fn relocate(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.position = (
            rng.gen_range(0..config.grid_width()) * config.cell_size,
            rng.gen_range(0..config.grid_height()) * config.cell_size,
        );
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Coords) {
        self.position = position;
    }
}
