use crate::{Coords, PixelInt};

/// The play field: a fixed pixel rectangle subdivided into square cells.
/// Cells are addressed by the pixel coordinates of their top-left corner.
#[derive(Copy, Clone)]
pub struct Grid {
    cell_size: PixelInt,
    width: PixelInt,
    height: PixelInt,
}

impl Grid {
    /// `width` and `height` must be exact multiples of `cell_size`.
    pub fn new(width: PixelInt, height: PixelInt, cell_size: PixelInt) -> Self {
        debug_assert!(cell_size > 0 && width % cell_size == 0 && height % cell_size == 0);
        Grid { cell_size, width, height }
    }

    pub fn cell_size(&self) -> PixelInt {
        self.cell_size
    }

    pub fn columns(&self) -> PixelInt {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> PixelInt {
        self.height / self.cell_size
    }

    pub fn in_bounds(&self, pos: Coords) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    /// Starting cell for the snake, cell-aligned for the reference
    /// 800x600/20 configuration.
    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }
}
