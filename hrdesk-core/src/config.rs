use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HrError, Result};
use crate::filter::MatchPolicy;
use crate::login::{LoginSimulator, MockOutcome};
use crate::view::ViewMode;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "HRDESK_CONFIG";

/// Configuration for hrdesk, read from ~/.hrdesk/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrConfig {
    pub search: SearchConfig,
    pub clock: ClockConfig,
    pub login: LoginConfig,
    pub fixtures: FixturesConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trim the query before matching (legacy behavior keeps whitespace)
    pub trim_query: bool,
    /// View mode each list screen starts in
    pub default_view: ViewMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub delay_ms: u64,
    pub outcome: MockOutcome,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            outcome: MockOutcome::Succeed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON fixture file; the built-in data set is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Manager whose team the manager dashboard shows
    pub manager: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            manager: "David Wilson".to_string(),
        }
    }
}

impl HrConfig {
    /// Default config file path: ~/.hrdesk/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hrdesk/config.toml")
    }

    /// Resolve which file to read: explicit path, then $HRDESK_CONFIG, then default
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(Self::default_path)
    }

    /// Load config; a missing file yields defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from exactly `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|source| HrError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.expand_variables();
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| HrError::config(format!("failed to serialize config: {e}")))?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.clock.tick_ms == 0 {
            return Err(HrError::config("clock.tick_ms must be greater than zero"));
        }
        if self.dashboard.manager.trim().is_empty() {
            return Err(HrError::config("dashboard.manager must not be empty"));
        }
        Ok(())
    }

    /// Expand ${HOME} in the fixtures path
    fn expand_variables(&mut self) {
        if let Some(ref path) = self.fixtures.path {
            let home = env::var("HOME").unwrap_or_default();
            let expanded = path.display().to_string().replace("${HOME}", &home);
            self.fixtures.path = Some(PathBuf::from(expanded));
        }
    }

    pub fn match_policy(&self) -> MatchPolicy {
        if self.search.trim_query {
            MatchPolicy::Trimmed
        } else {
            MatchPolicy::Literal
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.clock.tick_ms)
    }

    pub fn login_simulator(&self) -> LoginSimulator {
        LoginSimulator::new(Duration::from_millis(self.login.delay_ms), self.login.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = HrConfig::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(cfg, HrConfig::default());
        assert_eq!(cfg.tick(), Duration::from_secs(1));
        assert_eq!(cfg.match_policy(), MatchPolicy::Literal);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[search]\ntrim_query = true\ndefault_view = \"table\"\n\n[login]\noutcome = \"reject\"\n",
        )
        .unwrap();

        let cfg = HrConfig::load(Some(&path)).unwrap();
        assert!(cfg.search.trim_query);
        assert_eq!(cfg.search.default_view, ViewMode::Table);
        assert_eq!(cfg.login.outcome, MockOutcome::Reject);
        assert_eq!(cfg.login.delay_ms, 2000);
        assert_eq!(cfg.dashboard.manager, "David Wilson");
    }

    #[test]
    fn test_zero_tick_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[clock]\ntick_ms = 0\n").unwrap();
        assert!(matches!(
            HrConfig::load(Some(&path)),
            Err(HrError::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search\n").unwrap();
        assert!(matches!(HrConfig::load(Some(&path)), Err(HrError::Toml { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut cfg = HrConfig::default();
        cfg.dashboard.manager = "Sarah Johnson".into();
        cfg.save(&path).unwrap();
        assert_eq!(HrConfig::load_from(&path).unwrap(), cfg);
    }
}
