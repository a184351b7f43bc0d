use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::art::Glyphs;

/// Width of the `=` banner lines.
pub const DEFAULT_RULE_WIDTH: usize = 80;

/// Widest banner a config may ask for.
pub const MAX_RULE_WIDTH: usize = 1024;

/// Parts of the chart, in the order they are normally printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// The 4x4 tile grid and quick reference.
    Grid,
    /// The beach peninsula walkthrough.
    Example,
    /// How to calculate a tile index.
    Guide,
    /// Closing hint about saving the output.
    Footer,
}

impl Section {
    /// Every section, in default order.
    pub const ALL: [Section; 4] = [
        Section::Grid,
        Section::Example,
        Section::Guide,
        Section::Footer,
    ];
}

/// Chart rendering options. The default reproduces the standard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Width of the `=` banner lines, `1..=MAX_RULE_WIDTH`.
    pub rule_width: usize,
    /// Sections to print, in order.
    pub sections: Vec<Section>,
    /// Characters used for tile art and the legend.
    pub glyphs: Glyphs,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            rule_width: DEFAULT_RULE_WIDTH,
            sections: Section::ALL.to_vec(),
            glyphs: Glyphs::default(),
        }
    }
}

impl ChartConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(data).context("Failed to parse chart config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading chart config from {}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&data).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Writes the config as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        std::fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Checks field ranges and glyph uniqueness.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_RULE_WIDTH).contains(&self.rule_width) {
            bail!(
                "rule_width must be between 1 and {MAX_RULE_WIDTH}, got {}",
                self.rule_width
            );
        }
        if self.sections.is_empty() {
            bail!("sections must list at least one section");
        }
        self.glyphs.validate().context("Invalid glyphs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ChartConfig::from_yaml("{}").unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ChartConfig::from_yaml(
            "rule_width: 40\nsections: [guide, grid]\nglyphs:\n  solid: '#'\n",
        )
        .unwrap();
        assert_eq!(config.rule_width, 40);
        assert_eq!(config.sections, vec![Section::Guide, Section::Grid]);
        assert_eq!(config.glyphs.solid, '#');
        assert_eq!(config.glyphs.other, Glyphs::default().other);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(ChartConfig::from_yaml("rule_width: 0").is_err());
        assert!(ChartConfig::from_yaml("rule_width: 1025").is_err());
        assert!(ChartConfig::from_yaml("rule_width: 18446744073709551615").is_err());
        assert!(ChartConfig::from_yaml("sections: []").is_err());
        assert!(ChartConfig::from_yaml("sections: [legend]").is_err());
        assert!(ChartConfig::from_yaml("colour: red").is_err());
        assert!(ChartConfig::from_yaml("glyphs: {solid: '·'}").is_err());
    }

    #[test]
    fn test_rule_width_bounds_are_inclusive() {
        assert!(ChartConfig::from_yaml("rule_width: 1").is_ok());
        assert!(ChartConfig::from_yaml(&format!("rule_width: {MAX_RULE_WIDTH}")).is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "marching_squares_config_{}.yaml",
            std::process::id()
        ));
        let config = ChartConfig {
            rule_width: 60,
            sections: vec![Section::Example],
            glyphs: Glyphs::default(),
        };
        config.save(&path).unwrap();
        let loaded = ChartConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
