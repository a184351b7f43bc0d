use anyhow::{Context, Result};
use std::{
    fmt::{Display, Formatter},
    io::Write,
};
use tracing::debug;

use crate::{
    ChartConfig, Neighbours, Section, TileIndex, Tileset,
    art::ART_SIZE,
    neighbours::{ALL_DIRECTIONS, Direction},
};

const TITLE: &str = "MARCHING SQUARES - 16 TILE REFERENCE";
const RULE_CHAR: char = '=';
const DIAGRAM_INDENT: &str = "    ";

const QUICK_REFERENCE: [&str; 5] = [
    "  Corners: 3(SW), 6(SE), 9(NW), 12(NE)",
    "  Edges: 1(W), 2(S), 4(E), 8(N)",
    "  Strips: 5(Horizontal), 10(Vertical)",
    "  U-shapes: 7(↑), 11(→), 13(↓), 14(←)",
    "  Special: 0(Island), 15(Solid)",
];

const EXAMPLE_TITLE: &str = "EXAMPLE: Beach Peninsula";

const EXAMPLE_LAYOUT: [&str; 5] = [
    "W W W W W",
    "W B B B W",
    "W B B W W",
    "W B W W W",
    "W W W W W",
];

const EXAMPLE_INDICES: [&str; 5] = [
    "· · · · ·",
    "· 7 5 7 ·",
    "·11 6 · ·",
    "· 1 · · ·",
    "· · · · ·",
];

// (tile, what it shows)
const EXAMPLE_TILES: [(u8, &str); 5] = [
    (7, "Beach solid on S,E,W; fades to water on N"),
    (
        5,
        "Beach solid on E,W; fades to water on N,S (horizontal strip)",
    ),
    (11, "Beach solid on N,S,W; fades to water on E (U-shape)"),
    (6, "Beach solid on S,E; fades to water on N,W (SE corner)"),
    (1, "Beach solid on W; fades to water on N,E,S"),
];

const GUIDE_TITLE: &str = "HOW TO CALCULATE TILE INDEX";

const GUIDE_INTRO: &str = "
Given a tile and its 4 neighbors:

         [N]
          ↑
    [W] ←[T]→ [E]
          ↓
         [S]

For each neighbor:
  - If neighbor is SAME terrain as [T]: bit = 1
  - If neighbor is DIFFERENT terrain: bit = 0
";

const GUIDE_EXAMPLE_HEADING: &str =
    "Example: Tile with beach to North and West, water to East and South";

/// Terrain used in the worked examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terrain {
    Beach,
    Water,
}

impl Display for Terrain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Terrain::Beach => write!(f, "Beach"),
            Terrain::Water => write!(f, "Water"),
        }
    }
}

// Beach centre; neighbours in [N, E, S, W].
const GUIDE_CENTRE: Terrain = Terrain::Beach;
const GUIDE_NEIGHBOURS: [Terrain; 4] = [
    Terrain::Beach,
    Terrain::Water,
    Terrain::Water,
    Terrain::Beach,
];

/// Prints the marching squares reference chart.
pub struct Chart {
    tileset: Tileset,
    config: ChartConfig,
}

impl Chart {
    /// Chart over the standard tileset.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tileset: Tileset::standard()?,
            config,
        })
    }

    /// Writes every configured section in order.
    pub fn write_all(&self, w: &mut impl Write) -> Result<()> {
        for &section in &self.config.sections {
            self.write_section(section, w)?;
        }
        w.flush().context("Failed to flush chart output")
    }

    /// Renders the configured sections into a string.
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_all(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Writes a single section.
    pub fn write_section(&self, section: Section, w: &mut impl Write) -> Result<()> {
        debug!("Writing {section:?} section");
        let result = match section {
            Section::Grid => self.write_grid(w),
            Section::Example => self.write_example(w),
            Section::Guide => self.write_calculation_guide(w),
            Section::Footer => self.write_footer(w),
        };
        result.with_context(|| format!("Failed to write {section:?} section"))
    }

    fn rule(&self) -> String {
        RULE_CHAR.to_string().repeat(self.config.rule_width)
    }

    fn write_banner(&self, w: &mut impl Write, title: &str) -> Result<()> {
        let rule = self.rule();
        writeln!(w)?;
        writeln!(w, "{rule}")?;
        writeln!(w, "{title}")?;
        writeln!(w, "{rule}")?;
        Ok(())
    }

    fn write_closing_rule(&self, w: &mut impl Write) -> Result<()> {
        writeln!(w, "{}", self.rule())?;
        writeln!(w)?;
        Ok(())
    }

    /// The 4x4 grid of tiles, each captioned with index, pattern and name.
    pub fn write_grid(&self, w: &mut impl Write) -> Result<()> {
        let glyphs = &self.config.glyphs;
        self.write_banner(w, TITLE)?;
        writeln!(
            w,
            "\nLegend: {} = Solid terrain  {} = Transition  {} = Other terrain",
            glyphs.solid, glyphs.transition, glyphs.other
        )?;
        let bit_order = ALL_DIRECTIONS.map(Direction::label).join(" ");
        writeln!(w, "\nBit pattern: {bit_order} (1=same, 0=different)\n")?;

        for entries in self.tileset.grid_rows() {
            for entry in entries {
                write!(
                    w,
                    " [{:2}] {} {:<11}  ",
                    entry.index(),
                    entry.pattern(),
                    entry.name()
                )?;
            }
            writeln!(w, "\n")?;

            for line in 0..ART_SIZE {
                for entry in entries {
                    write!(w, " {}   ", entry.art().line(line, glyphs))?;
                }
                writeln!(w)?;
            }
            writeln!(w)?;
        }

        writeln!(w, "{}", self.rule())?;
        writeln!(w, "\nQuick Reference:")?;
        for line in QUICK_REFERENCE {
            writeln!(w, "{line}")?;
        }
        self.write_closing_rule(w)
    }

    /// The beach peninsula walkthrough.
    pub fn write_example(&self, w: &mut impl Write) -> Result<()> {
        self.write_banner(w, EXAMPLE_TITLE)?;
        writeln!(w, "\nLayout (B=Beach, W=Water):")?;
        write_diagram(w, &EXAMPLE_LAYOUT)?;
        writeln!(w, "Tile indices used:")?;
        write_diagram(w, &EXAMPLE_INDICES)?;

        writeln!(w, "\nWhat each tile shows:")?;
        for (index, description) in EXAMPLE_TILES {
            let index = TileIndex::new(index)?;
            writeln!(
                w,
                "  {:<5}= {} = {description}",
                format!("[{index}]"),
                index.pattern()
            )?;
        }
        self.write_closing_rule(w)
    }

    /// The neighbour bit convention with one worked example.
    pub fn write_calculation_guide(&self, w: &mut impl Write) -> Result<()> {
        self.write_banner(w, GUIDE_TITLE)?;
        writeln!(w, "{GUIDE_INTRO}")?;
        let bit_order = ALL_DIRECTIONS.map(Direction::label).join(" ");
        writeln!(w, "Combine bits: {bit_order} (4-bit binary number)\n")?;

        writeln!(w, "{GUIDE_EXAMPLE_HEADING}")?;
        let neighbours = Neighbours::from_terrain(&GUIDE_CENTRE, GUIDE_NEIGHBOURS.each_ref());
        for dir in ALL_DIRECTIONS {
            let same = neighbours[dir];
            writeln!(
                w,
                "  {:<5} = {} = {}  → {}",
                dir.name(),
                GUIDE_NEIGHBOURS[dir.index()],
                if same { "SAME" } else { "DIFF" },
                u8::from(same)
            )?;
        }

        let index = TileIndex::from(neighbours);
        let terms = ALL_DIRECTIONS
            .map(|dir| {
                if neighbours[dir] {
                    dir.weight().to_string()
                } else {
                    "0".to_string()
                }
            })
            .join(" + ");
        let name = self.tileset.get(index).name().replace('-', " ");
        writeln!(w)?;
        writeln!(w, "  Binary: {}", index.pattern())?;
        writeln!(w, "  Decimal: {terms} = {index}")?;
        writeln!(w)?;
        writeln!(w, "  Tile index = {index} ({name})")?;
        writeln!(w)?;
        self.write_closing_rule(w)
    }

    /// Hint for saving the chart to a file.
    pub fn write_footer(&self, w: &mut impl Write) -> Result<()> {
        writeln!(w, "\nSave this output to a text file for reference:")?;
        writeln!(
            w,
            "  {} > marching_squares_tiles.txt",
            env!("CARGO_PKG_NAME")
        )?;
        writeln!(w)?;
        Ok(())
    }
}

// Indented block with a blank line above and an indented blank line below.
fn write_diagram(w: &mut impl Write, lines: &[&str]) -> Result<()> {
    writeln!(w)?;
    for line in lines {
        writeln!(w, "{DIAGRAM_INDENT}{line}")?;
    }
    writeln!(w, "{DIAGRAM_INDENT}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Chart {
        Chart::new(ChartConfig::default()).unwrap()
    }

    fn section(section: Section) -> String {
        let mut buffer = Vec::new();
        chart().write_section(section, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_example_tiles_match_descriptions() {
        // Each description names the sides whose bit is set.
        for (index, description) in EXAMPLE_TILES {
            let neighbours = TileIndex::new(index).unwrap().neighbours();
            let solid = description
                .trim_start_matches("Beach solid on ")
                .split(';')
                .next()
                .unwrap();
            for dir in ALL_DIRECTIONS {
                let listed = solid.split(',').any(|side| side == dir.label());
                assert_eq!(listed, neighbours[dir], "tile {index} side {dir:?}");
            }
        }
    }

    #[test]
    fn test_guide_worked_example() {
        let guide = section(Section::Guide);
        assert!(guide.contains("  North = Beach = SAME  → 1\n"));
        assert!(guide.contains("  East  = Water = DIFF  → 0\n"));
        assert!(guide.contains("  Binary: 1001\n"));
        assert!(guide.contains("  Decimal: 8 + 0 + 0 + 1 = 9\n"));
        assert!(guide.contains("  Tile index = 9 (NW corner)\n"));
    }

    #[test]
    fn test_footer_names_binary() {
        assert_eq!(
            section(Section::Footer),
            "\nSave this output to a text file for reference:\n  \
             marching-squares-reference > marching_squares_tiles.txt\n\n"
        );
    }

    #[test]
    fn test_rule_width_follows_config() {
        let config = ChartConfig {
            rule_width: 10,
            ..ChartConfig::default()
        };
        let chart = Chart::new(config).unwrap();
        let mut buffer = Vec::new();
        chart.write_example(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("\n==========\nEXAMPLE: Beach Peninsula\n==========\n"));
    }
}
