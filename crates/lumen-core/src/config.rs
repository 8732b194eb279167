//! Page-level configuration.
//!
//! Defaults show both scenes without the debug panel. The host can override
//! them through the query string, e.g. `?debug=1&seed=7&terrain=0`.

use crate::constants::{DEFAULT_HEIGHTMAP_SEED, KNOT_FRAME_THRESHOLD, TERRAIN_FRAME_THRESHOLD};
use crate::scene::SceneKind;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub knot: bool,
    pub terrain: bool,
    pub debug_panel: bool,
    pub knot_threshold: u32,
    pub terrain_threshold: u32,
    pub heightmap_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            knot: true,
            terrain: true,
            debug_panel: false,
            knot_threshold: KNOT_FRAME_THRESHOLD,
            terrain_threshold: TERRAIN_FRAME_THRESHOLD,
            heightmap_seed: DEFAULT_HEIGHTMAP_SEED,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("query parameter `{key}` expects a flag (0/1/true/false), got `{value}`")]
    BadFlag { key: String, value: String },
    #[error("query parameter `{key}` expects a positive integer, got `{value}`")]
    BadNumber { key: String, value: String },
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "" | "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::BadFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr + PartialOrd + Default>(
    key: &str,
    value: &str,
) -> Result<T, ConfigError> {
    value
        .parse::<T>()
        .ok()
        .filter(|n| *n > T::default())
        .ok_or_else(|| ConfigError::BadNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

impl SceneConfig {
    /// Apply `key=value` pairs from a query string (with or without the
    /// leading `?`). Unknown keys are ignored so the page can carry its own.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "debug" => cfg.debug_panel = parse_flag(key, value)?,
                "knot" => cfg.knot = parse_flag(key, value)?,
                "terrain" => cfg.terrain = parse_flag(key, value)?,
                "seed" => cfg.heightmap_seed = parse_number(key, value)?,
                "knot_threshold" => cfg.knot_threshold = parse_number(key, value)?,
                "terrain_threshold" => cfg.terrain_threshold = parse_number(key, value)?,
                _ => log::debug!("[config] ignoring query key `{key}`"),
            }
        }
        Ok(cfg)
    }

    pub fn enabled_scenes(&self) -> impl Iterator<Item = SceneKind> + '_ {
        [(SceneKind::Knot, self.knot), (SceneKind::Terrain, self.terrain)]
            .into_iter()
            .filter_map(|(kind, on)| on.then_some(kind))
    }

    pub fn threshold(&self, kind: SceneKind) -> u32 {
        match kind {
            SceneKind::Knot => self.knot_threshold,
            SceneKind::Terrain => self.terrain_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default() {
        assert_eq!(SceneConfig::from_query(""), Ok(SceneConfig::default()));
        assert_eq!(SceneConfig::from_query("?"), Ok(SceneConfig::default()));
    }

    #[test]
    fn flags_and_numbers() {
        let cfg = SceneConfig::from_query("?debug&terrain=0&seed=7&utm_source=x").unwrap();
        assert!(cfg.debug_panel);
        assert!(!cfg.terrain);
        assert_eq!(cfg.heightmap_seed, 7);
        assert_eq!(cfg.enabled_scenes().collect::<Vec<_>>(), vec![SceneKind::Knot]);
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            SceneConfig::from_query("debug=maybe"),
            Err(ConfigError::BadFlag { .. })
        ));
        assert!(matches!(
            SceneConfig::from_query("knot_threshold=0"),
            Err(ConfigError::BadNumber { .. })
        ));
    }
}
