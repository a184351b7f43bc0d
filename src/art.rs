use anyhow::{Result, bail};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Height and width of every tile drawing.
pub const ART_SIZE: usize = 7;

const GLYPH_SOLID: char = '█';
const GLYPH_TRANSITION: char = '░';
const GLYPH_OTHER: char = '·';

/// Characters used to draw tile art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    /// Terrain the tile belongs to.
    pub solid: char,
    /// Blend between the two terrains.
    pub transition: char,
    /// Neighbouring terrain.
    pub other: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            solid: GLYPH_SOLID,
            transition: GLYPH_TRANSITION,
            other: GLYPH_OTHER,
        }
    }
}

impl Glyphs {
    /// Fails if two roles share a character.
    pub fn validate(&self) -> Result<()> {
        if self.solid == self.transition
            || self.solid == self.other
            || self.transition == self.other
        {
            bail!(
                "Glyphs must be distinct: solid={:?} transition={:?} other={:?}",
                self.solid,
                self.transition,
                self.other
            );
        }
        Ok(())
    }

    fn remap(&self, c: char) -> char {
        match c {
            GLYPH_SOLID => self.solid,
            GLYPH_TRANSITION => self.transition,
            GLYPH_OTHER => self.other,
            _ => c,
        }
    }
}

/// A 7x7 drawing of one tile, stored in the default glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TileArt {
    cells: Array2<char>,
}

impl TileArt {
    /// Parses seven rows of seven default glyphs.
    pub fn from_rows(rows: &[&str; ART_SIZE]) -> Result<Self> {
        let mut cells = Array2::from_elem((ART_SIZE, ART_SIZE), GLYPH_OTHER);
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != ART_SIZE {
                bail!("Art row {y} has {} glyphs, expected {ART_SIZE}", chars.len());
            }
            for (x, c) in chars.into_iter().enumerate() {
                if ![GLYPH_SOLID, GLYPH_TRANSITION, GLYPH_OTHER].contains(&c) {
                    bail!("Unknown glyph {c:?} in art row {y}");
                }
                cells[(y, x)] = c;
            }
        }
        Ok(Self { cells })
    }

    /// Renders one line of the drawing with the given glyphs.
    pub fn line(&self, y: usize, glyphs: &Glyphs) -> String {
        debug_assert!(y < ART_SIZE, "Art line {y} out of bounds");
        self.cells.row(y).iter().map(|&c| glyphs.remap(c)).collect()
    }
}

// █ = solid terrain, ░ = transition, · = other terrain
pub(crate) const TILE_ART: [[&str; ART_SIZE]; 16] = [
    // 0000 island
    [
        "·······", "··░░░··", "·░███░·", "·░███░·", "·░███░·", "··░░░··", "·······",
    ],
    // 0001 west edge
    [
        "··░░░··", "··███░·", "█████░·", "█████░·", "█████░·", "··███░·", "··░░░··",
    ],
    // 0010 south edge
    [
        "·······", "··░░░··", "·░███░·", "·░███░·", "·░███░·", "··███··", "··███··",
    ],
    // 0011
    [
        "··░░░··", "··███░·", "█████░·", "█████░·", "█████░·", "███████", "███████",
    ],
    // 0100
    [
        "··░░░··", "·░███··", "·░█████", "·░█████", "·░█████", "·░███··", "··░░░··",
    ],
    // 0101
    [
        "··░░░··", "·░███··", "███████", "███████", "███████", "··███░·", "··░░░··",
    ],
    // 0110
    [
        "··░░░··", "·░███··", "·░█████", "·░█████", "·░█████", "·██████", "·██████",
    ],
    // 0111
    [
        "··░░░··", "·░███··", "███████", "███████", "███████", "███████", "███████",
    ],
    // 1000
    [
        "███████", "███████", "·░███░·", "·░███░·", "·░███░·", "··░░░··", "·······",
    ],
    // 1001
    [
        "███████", "███████", "█████░·", "█████░·", "█████░·", "··███░·", "··░░░··",
    ],
    // 1010
    [
        "███████", "███████", "·░███░·", "·░███░·", "·░███░·", "··███··", "··███··",
    ],
    // 1011
    [
        "███████", "███████", "█████░·", "█████░·", "█████░·", "███████", "███████",
    ],
    // 1100
    [
        "███████", "███████", "·░█████", "·░█████", "·░█████", "·░███··", "··░░░··",
    ],
    // 1101
    [
        "███████", "███████", "███████", "███████", "███████", "··███░·", "··░░░··",
    ],
    // 1110
    [
        "███████", "███████", "·░█████", "·░█████", "·░█████", "·██████", "·██████",
    ],
    // 1111 solid
    [
        "███████", "███████", "███████", "███████", "███████", "███████", "███████",
    ],
];
