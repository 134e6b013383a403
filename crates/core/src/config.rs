//! Viewer configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::TILE_SIZE;

/// Default screen pixels per terminal dot (half a character cell).
pub const DEFAULT_PX_PER_DOT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub maps_dir: PathBuf,
    pub tile_size: f64,
    pub px_per_dot: f64,
    /// `None` means the platform default chosen by the binary.
    pub log_dir: Option<PathBuf>,
    pub log_disabled: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            maps_dir: PathBuf::from("maps"),
            tile_size: TILE_SIZE,
            px_per_dot: DEFAULT_PX_PER_DOT,
            log_dir: None,
            log_disabled: false,
        }
    }
}

impl ViewerConfig {
    /// Read `WARGAME_*` variables. Missing or invalid values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let positive = |key: &str, fallback: f64| {
            non_empty(key)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(fallback)
        };

        Self {
            maps_dir: non_empty("WARGAME_MAPS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.maps_dir),
            tile_size: positive("WARGAME_TILE_SIZE", defaults.tile_size),
            px_per_dot: positive("WARGAME_PX_PER_DOT", defaults.px_per_dot),
            log_dir: non_empty("WARGAME_LOG_DIR").map(PathBuf::from),
            log_disabled: non_empty("WARGAME_LOG_DISABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(ViewerConfig::from_lookup(|_| None), ViewerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = ViewerConfig::from_lookup(lookup(&[
            ("WARGAME_MAPS_DIR", "/tmp/maps"),
            ("WARGAME_TILE_SIZE", "32"),
            ("WARGAME_PX_PER_DOT", "4.5"),
            ("WARGAME_LOG_DIR", " /var/log/wg "),
            ("WARGAME_LOG_DISABLED", "TRUE"),
        ]));
        assert_eq!(cfg.maps_dir, PathBuf::from("/tmp/maps"));
        assert_eq!(cfg.tile_size, 32.0);
        assert_eq!(cfg.px_per_dot, 4.5);
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/wg")));
        assert!(cfg.log_disabled);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let cfg = ViewerConfig::from_lookup(lookup(&[
            ("WARGAME_TILE_SIZE", "-3"),
            ("WARGAME_PX_PER_DOT", "abc"),
        ]));
        assert_eq!(cfg.tile_size, TILE_SIZE);
        assert_eq!(cfg.px_per_dot, DEFAULT_PX_PER_DOT);
    }

    #[test]
    fn from_env_does_not_panic() {
        let _ = ViewerConfig::from_env();
    }
}
