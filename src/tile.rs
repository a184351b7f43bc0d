use anyhow::{Result, bail};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::neighbours::{ALL_DIRECTIONS, Direction, Neighbours};

/// Number of distinct tiles in the scheme.
pub const NUM_TILES: usize = 16;

/// Tiles per row of the reference grid.
pub const GRID_COLUMNS: usize = 4;

const PATTERN_SAME: char = '1';
const PATTERN_DIFFERENT: char = '0';

/// Index of a marching squares tile, the value of its `NESW` bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileIndex(u8);

impl TileIndex {
    /// Wraps a raw index, rejecting values outside `0..=15`.
    pub fn new(index: u8) -> Result<Self> {
        if usize::from(index) >= NUM_TILES {
            bail!("Tile index {index} out of range 0..={}", NUM_TILES - 1);
        }
        Ok(Self(index))
    }

    /// All indices in ascending order.
    pub fn all() -> impl Iterator<Item = TileIndex> {
        (0..NUM_TILES as u8).map(TileIndex)
    }

    /// Raw index value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Four character bit pattern, North first.
    #[must_use]
    pub fn pattern(self) -> String {
        ALL_DIRECTIONS
            .iter()
            .map(|dir| {
                if self.0 & dir.weight() != 0 {
                    PATTERN_SAME
                } else {
                    PATTERN_DIFFERENT
                }
            })
            .collect()
    }

    /// The neighbour configuration this index encodes.
    #[must_use]
    pub fn neighbours(self) -> Neighbours {
        let [n, e, s, w] = ALL_DIRECTIONS.map(|dir| self.0 & dir.weight() != 0);
        Neighbours::new(n, e, s, w)
    }
}

impl From<Neighbours> for TileIndex {
    fn from(neighbours: Neighbours) -> Self {
        let index = ALL_DIRECTIONS
            .into_iter()
            .filter(|&dir| neighbours.matches(dir))
            .map(Direction::weight)
            .sum();
        TileIndex(index)
    }
}

impl From<TileIndex> for usize {
    fn from(index: TileIndex) -> Self {
        usize::from(index.0)
    }
}

impl Display for TileIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Forward so width specifiers like `{:2}` apply.
        Display::fmt(&self.0, f)
    }
}

impl FromStr for TileIndex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.chars().count() != ALL_DIRECTIONS.len() {
            bail!("Bit pattern must have exactly 4 digits: {s:?}");
        }
        let mut index = 0;
        for (c, dir) in s.chars().zip(ALL_DIRECTIONS) {
            match c {
                PATTERN_SAME => index |= dir.weight(),
                PATTERN_DIFFERENT => {}
                _ => bail!("Invalid bit pattern digit {c:?} in {s:?}"),
            }
        }
        Ok(TileIndex(index))
    }
}
