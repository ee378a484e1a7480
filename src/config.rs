//! Runner configuration loaded from TOML.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/interactables.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Fixed simulation rate.
    pub tick_rate_hz: u32,
    /// Stop after this many ticks even if the script is still running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Maximum pointer picking distance in world units.
    pub hit_test_range: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 20,
            max_ticks: None,
            screen_width: 1280,
            screen_height: 720,
            log_filter: "warn".to_string(),
            hit_test_range: interactables_interaction::DEFAULT_HIT_RANGE,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        let cfg = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<RunnerConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    RunnerConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                RunnerConfig::default()
            }
        };
        cfg.sanitized()
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }

    fn sanitized(mut self) -> Self {
        let defaults = RunnerConfig::default();
        if self.tick_rate_hz == 0 {
            warn!("tick_rate_hz must be positive; using {}", defaults.tick_rate_hz);
            self.tick_rate_hz = defaults.tick_rate_hz;
        }
        if !self.hit_test_range.is_finite() || self.hit_test_range <= 0.0 {
            warn!(
                "hit_test_range {} is invalid; using {}",
                self.hit_test_range, defaults.hit_test_range
            );
            self.hit_test_range = defaults.hit_test_range;
        }
        self.screen_width = self.screen_width.max(1);
        self.screen_height = self.screen_height.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(stem: &str) -> std::path::PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("interactables_{stem}_{timestamp}.toml"))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = RunnerConfig::load_from_path(Path::new("does/not/exist.toml"));
        assert_eq!(cfg, RunnerConfig::default());
        assert_eq!(cfg.hit_test_range, 100.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "tick_rate_hz = 50\nmax_ticks = 12\n").unwrap();

        let cfg = RunnerConfig::load_from_path(&path);
        assert_eq!(cfg.tick_rate_hz, 50);
        assert_eq!(cfg.max_ticks, Some(12));
        assert_eq!(cfg.screen_width, 1280);
        assert!((cfg.tick_seconds() - 0.02).abs() < 1e-6);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_values_are_replaced() {
        let path = temp_path("invalid");
        fs::write(&path, "tick_rate_hz = 0\nhit_test_range = -3.0\n").unwrap();

        let cfg = RunnerConfig::load_from_path(&path);
        assert_eq!(cfg.tick_rate_hz, 20);
        assert_eq!(cfg.hit_test_range, 100.0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("saved");
        let cfg = RunnerConfig {
            log_filter: "interactables=debug".into(),
            ..RunnerConfig::default()
        };
        cfg.save_to_path(&path).unwrap();
        assert_eq!(RunnerConfig::load_from_path(&path), cfg);
        fs::remove_file(&path).ok();
    }
}
