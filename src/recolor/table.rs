//! Recolor configuration and remap tables.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RegenError, Result};

use super::colour::Colour;

/// Recolor configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecolorConfig {
    /// Directory holding one sub-directory per colour variant.
    pub base_dir: PathBuf,

    /// Variant whose sprites are the source images.
    pub base: String,

    /// Variants to derive.
    pub variants: Vec<String>,

    /// Base colour to replacement colour per variant.
    pub remap: BTreeMap<Colour, BTreeMap<String, Colour>>,
}

/// Colour substitutions for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMap {
    pub name: String,
    pub colours: HashMap<Colour, Colour>,
}

impl RecolorConfig {
    /// Load a config file. `base_dir` resolves against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RegenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read recolor config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let Some(parent) = path.parent() {
            config.base_dir = parent.join(&config.base_dir);
        }
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RegenError::Parse {
            message: format!("Invalid recolor config: {}", e),
            help: Some("Expected `base_dir`, `base`, `variants` and `remap` keys".to_string()),
        })
    }

    /// Directory of the source sprites.
    pub fn source_dir(&self) -> PathBuf {
        self.base_dir.join(&self.base)
    }

    /// Validate and build one substitution map per variant, in config order.
    ///
    /// Every remap entry must name every variant and nothing else.
    pub fn variant_maps(&self) -> Result<Vec<VariantMap>> {
        if self.variants.is_empty() {
            return Err(RegenError::Parse {
                message: "Recolor config lists no variants".to_string(),
                help: None,
            });
        }

        if self.variants.contains(&self.base) {
            return Err(RegenError::Parse {
                message: format!("Variant '{}' is also the base", self.base),
                help: Some("The base sprites would be overwritten".to_string()),
            });
        }

        for (from, targets) in &self.remap {
            for variant in &self.variants {
                if !targets.contains_key(variant) {
                    return Err(RegenError::Parse {
                        message: format!("Remap entry {} has no colour for '{}'", from, variant),
                        help: Some("Every remap entry must list every variant".to_string()),
                    });
                }
            }
            if let Some(extra) = targets.keys().find(|k| !self.variants.contains(*k)) {
                return Err(RegenError::Parse {
                    message: format!("Remap entry {} names unknown variant '{}'", from, extra),
                    help: Some(format!("Known variants: {}", self.variants.join(", "))),
                });
            }
        }

        Ok(self
            .variants
            .iter()
            .map(|variant| VariantMap {
                name: variant.clone(),
                colours: self
                    .remap
                    .iter()
                    .map(|(from, targets)| (*from, targets[variant]))
                    .collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKERS: &str = r##"
base_dir: ../assets/sprites/workers
base: blue
variants: [green, red, yellow]
remap:
  "#116ec9": { green: "#293900", red: "#3a0000", yellow: "#3a3a00" }
  "1b81e6": { green: "#293900", red: "#3a0000", yellow: "#3a3a00" }
"##;

    #[test]
    fn test_parse_config() {
        let config = RecolorConfig::parse(WORKERS).unwrap();

        assert_eq!(config.base, "blue");
        assert_eq!(config.variants, vec!["green", "red", "yellow"]);
        assert_eq!(config.remap.len(), 2);
        assert_eq!(
            config.source_dir(),
            PathBuf::from("../assets/sprites/workers/blue")
        );
    }

    #[test]
    fn test_variant_maps() {
        let config = RecolorConfig::parse(WORKERS).unwrap();
        let maps = config.variant_maps().unwrap();

        assert_eq!(maps.len(), 3);
        assert_eq!(maps[1].name, "red");
        assert_eq!(
            maps[1].colours[&Colour::rgb(0x11, 0x6e, 0xc9)],
            Colour::rgb(0x3a, 0, 0)
        );
        assert_eq!(
            maps[0].colours[&Colour::rgb(0x1b, 0x81, 0xe6)],
            Colour::rgb(0x29, 0x39, 0)
        );
    }

    #[test]
    fn test_missing_variant_colour() {
        let config = RecolorConfig::parse(
            r##"
base_dir: .
base: blue
variants: [green, red]
remap:
  "#116ec9": { green: "#293900" }
"##,
        )
        .unwrap();
        assert!(matches!(config.variant_maps(), Err(RegenError::Parse { .. })));
    }

    #[test]
    fn test_unknown_variant_colour() {
        let config = RecolorConfig::parse(
            r##"
base_dir: .
base: blue
variants: [green]
remap:
  "#116ec9": { green: "#293900", purple: "#ff00ff" }
"##,
        )
        .unwrap();
        assert!(config.variant_maps().is_err());
    }

    #[test]
    fn test_base_as_variant_rejected() {
        let config = RecolorConfig::parse(
            "base_dir: .\nbase: blue\nvariants: [blue]\nremap: {}\n",
        )
        .unwrap();
        assert!(config.variant_maps().is_err());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let result = RecolorConfig::parse(
            "base_dir: .\nbase: blue\nvariants: [red]\nremap:\n  \"#zz\": { red: \"#000\" }\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recolor.yaml");
        std::fs::write(&path, "base_dir: sprites\nbase: blue\nvariants: [red]\nremap: {}\n").unwrap();

        let config = RecolorConfig::load(&path).unwrap();
        assert_eq!(config.base_dir, dir.path().join("sprites"));
    }
}
