use crate::basic::Dir;

/// A position on the grid, measured in cells rather than pixels
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Add, Sub, AddAssign, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell in the given direction, no wrapping
    pub fn step(self, dir: Dir) -> Self {
        self + dir.offset()
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[test]
fn test_step() {
    use Dir::*;
    let c = Cell::new(5, 5);
    for (dir, expect) in [
        (Up, Cell::new(5, 4)),
        (Down, Cell::new(5, 6)),
        (Left, Cell::new(4, 5)),
        (Right, Cell::new(6, 5)),
    ] {
        assert_eq!(c.step(dir), expect, "{:?}", dir);
    }
}
