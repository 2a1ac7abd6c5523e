use std::ops::Neg;

use crate::basic::Cell;
use Dir::*;

// one bit per direction so that opposite pairs can be tested with a union
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up = 0b0001,
    Down = 0b0010,
    Left = 0b0100,
    Right = 0b1000,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Vertical,   // |
    Horizontal, // -
}

impl Axis {
    /// Union of the bits of both directions on this axis
    pub const fn mask(self) -> u8 {
        match self {
            Axis::Vertical => Up as u8 | Down as u8,
            Axis::Horizontal => Left as u8 | Right as u8,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    pub fn axis(self) -> Axis {
        match self {
            Up | Down => Axis::Vertical,
            Left | Right => Axis::Horizontal,
        }
    }

    /// Unit step in grid space, y grows downwards
    pub fn offset(self) -> Cell {
        match self {
            Up => Cell::new(0, -1),
            Down => Cell::new(0, 1),
            Left => Cell::new(-1, 0),
            Right => Cell::new(1, 0),
        }
    }

    /// The heading after `requested` has been asked for while moving in
    /// `self`. Requests on the current axis (same direction or reversal)
    /// are ignored.
    pub fn turn(self, requested: Self) -> Self {
        let union = self as u8 | requested as u8;
        if union & self.axis().mask() == union {
            self
        } else {
            requested
        }
    }
}

#[cfg(test)]
const ALL: [Dir; 4] = [Up, Down, Left, Right];

#[test]
fn test_turn_same_is_noop() {
    for d in ALL {
        assert_eq!(d.turn(d), d);
    }
}

#[test]
fn test_turn_reverse_is_rejected() {
    for d in ALL {
        assert_eq!(d.turn(-d), d, "{:?} reversed", d);
    }
}

#[test]
fn test_turn_perpendicular_is_accepted() {
    for from in ALL {
        for to in ALL.into_iter().filter(|to| to.axis() != from.axis()) {
            assert_eq!(from.turn(to), to, "{:?} => {:?}", from, to);
        }
    }
}

#[test]
fn test_latest_request_wins() {
    // two requests between ticks, the second is judged against the first
    let dir = Right.turn(Up).turn(Left);
    assert_eq!(dir, Left);
    let dir = Right.turn(Up).turn(Down);
    assert_eq!(dir, Up);
}
