use rand::Rng;

use crate::Coords;
use crate::grid::Grid;

pub struct Food {
    position: Coords,
}

impl Food {
    pub fn new(grid: &Grid, rng: &mut impl Rng) -> Self {
        let mut food = Food::at((0, 0));
        food.relocate(grid, rng);
        food
    }

    pub fn at(position: Coords) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    /// Picks a cell uniformly at random, each axis independently. Cells
    /// under the snake's body are not excluded, so food can spawn beneath
    /// the snake; that matches the game rules, not an oversight.
    pub fn relocate(&mut self, grid: &Grid, rng: &mut impl Rng) {
        let cell = grid.cell_size();
        self.position = (
            rng.gen_range(0..grid.columns()) * cell,
            rng.gen_range(0..grid.rows()) * cell,
        );
    }
}
