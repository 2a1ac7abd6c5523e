pub use cell::Cell;
pub use dir::{Axis, Dir};
pub use grid::{Grid, GridError};
pub use point::Point;

mod cell;
mod dir;
mod grid;
mod point;
