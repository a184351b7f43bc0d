use anyhow::{Context, Result, bail};
use std::{collections::HashSet, slice::Chunks};

use crate::{
    TileIndex,
    art::{TILE_ART, TileArt},
    tile::{GRID_COLUMNS, NUM_TILES},
};

const TILE_NAMES: [&str; NUM_TILES] = [
    "Island",
    "W-edge",
    "S-edge",
    "SW-corner",
    "E-edge",
    "H-strip",
    "SE-corner",
    "U-North",
    "N-edge",
    "NW-corner",
    "V-strip",
    "U-East",
    "NE-corner",
    "U-South",
    "U-West",
    "Solid",
];

/// Everything the chart knows about one tile.
#[derive(Debug, Clone)]
pub struct TileEntry {
    index: TileIndex,
    pattern: String,
    name: &'static str,
    art: TileArt,
}

impl TileEntry {
    /// Index of the tile, the value of its bit pattern.
    pub fn index(&self) -> TileIndex {
        self.index
    }

    /// `NESW` bit pattern, e.g. `"1001"`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Conventional name, e.g. `"NW-corner"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 7x7 drawing of the tile.
    pub fn art(&self) -> &TileArt {
        &self.art
    }
}

/// The 16 marching squares tiles, ordered by index.
#[derive(Debug, Clone)]
pub struct Tileset {
    entries: Vec<TileEntry>,
}

impl Tileset {
    /// Builds the standard tileset from the static tables and checks that each
    /// index has exactly one pattern, name and drawing.
    pub fn standard() -> Result<Self> {
        let entries = TileIndex::all()
            .zip(TILE_NAMES.iter().zip(TILE_ART.iter()))
            .map(|(index, (&name, rows))| {
                let art = TileArt::from_rows(rows)
                    .with_context(|| format!("Invalid art for tile {index} ({name})"))?;
                Ok(TileEntry {
                    index,
                    pattern: index.pattern(),
                    name,
                    art,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let tileset = Self { entries };
        tileset.check()?;
        Ok(tileset)
    }

    fn check(&self) -> Result<()> {
        if self.entries.len() != NUM_TILES {
            bail!(
                "Tileset has {} entries, expected {NUM_TILES}",
                self.entries.len()
            );
        }
        let mut patterns = HashSet::with_capacity(NUM_TILES);
        let mut names = HashSet::with_capacity(NUM_TILES);
        for (n, entry) in self.entries.iter().enumerate() {
            if usize::from(entry.index) != n {
                bail!("Tile {} stored at position {n}", entry.index);
            }
            if !patterns.insert(entry.pattern.as_str()) {
                bail!("Duplicate bit pattern {}", entry.pattern);
            }
            if !names.insert(entry.name) {
                bail!("Duplicate tile name {}", entry.name);
            }
        }
        Ok(())
    }

    /// All entries, ordered by index.
    pub fn entries(&self) -> &[TileEntry] {
        &self.entries
    }

    /// Entry for `index`.
    pub fn get(&self, index: TileIndex) -> &TileEntry {
        &self.entries[usize::from(index)]
    }

    /// Rows of the 4x4 reference grid, top to bottom.
    pub fn grid_rows(&self) -> Chunks<'_, TileEntry> {
        self.entries.chunks(GRID_COLUMNS)
    }
}
