use crate::basic::Cell;
use ggez::graphics::Rect;
use std::fmt::{self, Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GridError {
    ZeroCellSize,
    /// The window is too small to hold a single playable cell
    /// inside the padding
    TooSmall { cols: i32, rows: i32, padding: i32 },
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroCellSize => write!(f, "cell size must be positive"),
            GridError::TooSmall { cols, rows, padding } => write!(
                f,
                "{}x{} grid cannot fit padding {} (need at least {} cells per side)",
                cols,
                rows,
                padding,
                Grid::min_len(*padding),
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// The playing field, a toroidal area inside a border of `padding` cells
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub padding: i32,
    /// Side length of a cell in pixels
    pub cell_size: i32,
}

impl Grid {
    /// Fewest cells per side for a padding: food is sampled from
    /// `[padding, len - padding - 1)`, which must hold at least two
    /// values so that the starting cell is never the only candidate
    pub const fn min_len(padding: i32) -> i32 {
        2 * padding + 3
    }

    pub fn new(width: i32, height: i32, cell_size: i32, padding: i32) -> Result<Self, GridError> {
        if cell_size <= 0 {
            return Err(GridError::ZeroCellSize);
        }
        let cols = width / cell_size;
        let rows = height / cell_size;
        let min = Self::min_len(padding);
        if cols < min || rows < min || padding < 0 {
            return Err(GridError::TooSmall { cols, rows, padding });
        }
        Ok(Self { cols, rows, padding, cell_size })
    }

    pub fn to_pixel(&self, cell: Cell) -> Rect {
        let size = self.cell_size as f32;
        Rect::new(cell.x as f32 * size, cell.y as f32 * size, size, size)
    }

    /// Teleport a cell that has left the interior to the opposite edge
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: Self::wrap_axis(cell.x, self.cols, self.padding),
            y: Self::wrap_axis(cell.y, self.rows, self.padding),
        }
    }

    fn wrap_axis(v: i32, len: i32, padding: i32) -> i32 {
        if v < padding {
            len - padding - 1
        } else if v >= len - padding {
            padding
        } else {
            v
        }
    }

    pub fn interior_contains(&self, cell: Cell) -> bool {
        (self.padding..self.cols - self.padding).contains(&cell.x)
            && (self.padding..self.rows - self.padding).contains(&cell.y)
    }
}
