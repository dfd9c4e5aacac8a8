use std::fmt;

/// one of the four orthogonal neighbor slots of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// canonical enumeration order, also the slot order of a cell's neighbor array
    pub const ALL: [Direction; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Bottom => 2,
            Self::Right => 3,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `Top` decreases `y`, `Bottom` increases it
    pub const fn offset(self, direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::new(self.x, self.y - 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Bottom => Self::new(self.x, self.y + 1),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }

    /// wide enough for any pair of `i32` positions
    pub fn squared_distance(self, other: Self) -> u128 {
        let dx = u128::from(self.x.abs_diff(other.x));
        let dy = u128::from(self.y.abs_diff(other.y));
        dx * dx + dy * dy
    }

    pub fn manhattan_distance(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
