//! Startup configuration read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `MEMORY_MASTER_SEED` | Fixed RNG seed | derived from the clock |
//! | `MEMORY_MASTER_SOUND` | `0`, `false`, `off` or `no` mutes the bell | on |
//! | `MEMORY_MASTER_LOG_DIR` | Directory for `memory-master.log` | system temp dir |

use std::path::PathBuf;

pub const SEED_VAR: &str = "MEMORY_MASTER_SEED";
pub const SOUND_VAR: &str = "MEMORY_MASTER_SOUND";
pub const LOG_DIR_VAR: &str = "MEMORY_MASTER_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means seed from the clock.
    pub seed: Option<u32>,
    pub sound: bool,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sound: true,
            log_dir: std::env::temp_dir(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let sound = lookup(SOUND_VAR)
            .map(|v| {
                !matches!(
                    v.trim().to_lowercase().as_str(),
                    "0" | "false" | "off" | "no"
                )
            })
            .unwrap_or(defaults.sound);

        let log_dir = lookup(LOG_DIR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            seed,
            sound,
            log_dir,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
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
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.sound);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn parses_seed_and_sound() {
        let cfg = AppConfig::from_lookup(lookup(&[(SEED_VAR, " 42 "), (SOUND_VAR, "off")]));
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.sound);
        assert_eq!(cfg.resolve_seed(), 42);
    }

    #[test]
    fn bad_seed_is_ignored() {
        let cfg = AppConfig::from_lookup(lookup(&[(SEED_VAR, "lots")]));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn sound_stays_on_for_other_values() {
        for v in ["1", "true", "yes", "ON"] {
            let cfg = AppConfig::from_lookup(lookup(&[(SOUND_VAR, v)]));
            assert!(cfg.sound, "{v}");
        }
        for v in ["0", "FALSE", "Off", "no"] {
            let cfg = AppConfig::from_lookup(lookup(&[(SOUND_VAR, v)]));
            assert!(!cfg.sound, "{v}");
        }
    }

    #[test]
    fn log_dir_override() {
        let cfg = AppConfig::from_lookup(lookup(&[(LOG_DIR_VAR, "/var/log/mm")]));
        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/mm"));

        let blank = AppConfig::from_lookup(lookup(&[(LOG_DIR_VAR, "  ")]));
        assert_eq!(blank.log_dir, std::env::temp_dir());
    }
}
