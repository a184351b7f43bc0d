//! # `MarchingSquaresReference`
//!
//! `MarchingSquaresReference` prints a reference chart of the 16 marching squares
//! autotiles, keyed by the `NESW` neighbour bit pattern.

// #![deny(warnings)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod art;
mod chart;
mod config;
mod neighbours;
mod tile;
mod tileset;

pub use art::{ART_SIZE, Glyphs, TileArt};
pub use chart::Chart;
pub use config::{ChartConfig, DEFAULT_RULE_WIDTH, MAX_RULE_WIDTH, Section};
pub use neighbours::{ALL_DIRECTIONS, Direction, Neighbours};
pub use tile::{GRID_COLUMNS, NUM_TILES, TileIndex};
pub use tileset::{TileEntry, Tileset};
