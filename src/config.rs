use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::district::Tables;
use crate::geom::{Bounds, Canvas};

/// Built-in reference data: Sri Lanka's 25 districts.
const BUILTIN: &str = include_str!("../data/districts.toml");

/// Everything the pipeline needs besides the GeoJSON input.
///
/// Loaded from TOML. The reference tables sit at the top level of the
/// document (`[names]`, `[provinces]`, `[demographics]`, `featured`, `[[tiers]]`)
/// next to the `[canvas]` and optional `[bounds]` sections. Without `[bounds]`
/// the extent is measured from the input features.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: Canvas,
    pub bounds: Option<Bounds>,
    #[serde(flatten)]
    pub tables: Tables,
}

impl Config {
    /// The configuration shipped with the crate.
    pub fn builtin() -> Result<Self> {
        BUILTIN.parse().context("[config] Built-in district data is invalid")
    }

    /// Read a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        text.parse()
            .with_context(|| format!("[config] Failed to load {}", path.display()))
    }

    /// Check canvas, bounds and tables for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let Canvas { width, height, padding, tolerance, .. } = self.canvas;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            bail!("[config] canvas must have a positive size, got {width}x{height}");
        }
        if !(padding.is_finite() && padding >= 0.0 && 2.0 * padding < width && 2.0 * padding < height) {
            bail!("[config] padding {padding} does not fit a {width}x{height} canvas");
        }
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            bail!("[config] simplify tolerance must be a non-negative number, got {tolerance}");
        }
        if let Some(bounds) = &self.bounds {
            if !bounds.is_valid() { bail!("[config] degenerate bounds {bounds:?}") }
        }
        self.tables.validate()
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("[config] Invalid TOML")?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_districts() {
        let config = Config::builtin().unwrap();
        assert_eq!(config.tables.names.len(), 25);
        assert_eq!(config.tables.provinces.len(), 25);
        assert_eq!(config.tables.demographics.len(), 25);
        assert_eq!(config.tables.tiers.len(), 3);
        assert!(config.bounds.is_some());

        let colombo = config.tables.resolve("Kŏḷamba").unwrap();
        assert_eq!(colombo.id, "colombo");
        assert_eq!(colombo.province, "Western");
        assert_eq!(colombo.tags, config.tables.tiers[0].tags);
    }

    #[test]
    fn builtin_tiers_nest() {
        let tiers = Config::builtin().unwrap().tables.tiers;
        let (metro, popular, baseline) = (&tiers[0].tags, &tiers[1].tags, &tiers[2].tags);
        assert!(popular.iter().all(|tag| metro.contains(tag)));
        assert!(baseline.iter().all(|tag| popular.contains(tag)));
        assert!(metro.len() > popular.len() && popular.len() > baseline.len());
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.canvas, Canvas::default());
        assert!(config.bounds.is_none());
        assert!(config.tables.names.is_empty());
    }

    #[test]
    fn parses_sections() {
        let config: Config = r#"
            featured = ["galle"]

            [canvas]
            width = 300.0
            height = 400.0
            padding = 10.0
            simplify = false

            [bounds]
            min_lon = 79.5
            max_lon = 82.0
            min_lat = 5.9
            max_lat = 9.9

            [names."Gālla"]
            id = "galle"
            name = "Galle"

            [provinces]
            galle = "Southern"

            [demographics.galle]
            population = 1063334
            area = 1652.0

            [[tiers]]
            tier = "baseline"
            tags = ["cleaning"]
        "#.parse().unwrap();

        assert_eq!(config.canvas.width, 300.0);
        assert_eq!(config.canvas.tolerance, Canvas::default().tolerance);
        assert_eq!(config.canvas.simplify_tolerance(), None);
        assert_eq!(config.bounds, Some(Bounds::new(79.5, 82.0, 5.9, 9.9)));

        let galle = config.tables.resolve("Gālla").unwrap();
        assert_eq!(galle.population, 1_063_334);
        assert!(galle.is_featured);
        assert_eq!(galle.tags, ["cleaning"]);
    }

    #[test]
    fn rejects_bad_canvas_and_bounds() {
        assert!("[canvas]\nwidth = 30.0\nheight = 30.0\npadding = 20.0".parse::<Config>().is_err());
        assert!("[canvas]\ntolerance = -1.0".parse::<Config>().is_err());
        assert!("[bounds]\nmin_lon = 82.0\nmax_lon = 79.5\nmin_lat = 5.9\nmax_lat = 9.9".parse::<Config>().is_err());
    }
}
