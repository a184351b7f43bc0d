use std::ops::Index;

/// Neighbour directions in bit order, most significant first.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// One of the four orthogonal neighbours of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Cell above.
    North,
    /// Cell to the right.
    East,
    /// Cell below.
    South,
    /// Cell to the left.
    West,
}

impl Direction {
    /// Position of this direction in `[N, E, S, W]`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Value this direction contributes to a tile index when it matches.
    #[must_use]
    pub fn weight(self) -> u8 {
        1 << (3 - self.index())
    }

    /// Single letter used in bit-order and quick-reference lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }

    /// Full name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

/// Which neighbours share the centre cell's terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbours {
    same: [bool; 4], // [N, E, S, W]
}

impl Neighbours {
    /// Builds from explicit same-terrain flags.
    #[must_use]
    pub fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Self {
            same: [north, east, south, west],
        }
    }

    /// Compares each of `[N, E, S, W]` against the centre terrain.
    #[must_use]
    pub fn from_terrain<T: PartialEq>(centre: &T, around: [&T; 4]) -> Self {
        Self {
            same: around.map(|terrain| terrain == centre),
        }
    }

    /// Whether the neighbour in `dir` has the same terrain.
    #[must_use]
    pub fn matches(self, dir: Direction) -> bool {
        self.same[dir.index()]
    }
}

impl Index<Direction> for Neighbours {
    type Output = bool;
    fn index(&self, dir: Direction) -> &Self::Output {
        &self.same[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_follow_nesw_order() {
        let weights: Vec<u8> = ALL_DIRECTIONS.iter().map(|d| d.weight()).collect();
        assert_eq!(weights, vec![8, 4, 2, 1]);
    }

    #[test]
    fn test_from_terrain() {
        let n = Neighbours::from_terrain(&'B', [&'B', &'W', &'W', &'B']);
        assert!(n.matches(Direction::North));
        assert!(!n.matches(Direction::East));
        assert!(!n[Direction::South]);
        assert!(n[Direction::West]);
        assert_eq!(n, Neighbours::new(true, false, false, true));
    }
}
