//! Dashboard settings.
//!
//! Defaults reproduce the stock dashboard; a `kosis-dash.json` in the working
//! directory overrides any subset of them.

use crate::charts::{MonthLabels, Selection};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_FILE: &str = "kosis-dash.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub title: String,
    pub month_labels: MonthLabels,
    /// Preferred selection on first render; fitted to the dataset at startup.
    pub initial: Selection,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("kosis_data.csv"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8050)),
            title: "경제활동인구조사 (월별 통계)".to_string(),
            month_labels: MonthLabels::Korean,
            initial: Selection::new("T90", "0", "0", ["2021", "2020"]),
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("no {} found, using default settings", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("settings loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.bind_addr.port(), 8050);
        assert_eq!(config.initial.years, vec!["2021", "2020"]);
    }

    #[test]
    fn partial_file_overrides_fields() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{ "bind_addr": "0.0.0.0:9000", "month_labels": "english",
                 "initial": {{ "item": "T80", "sex": "1", "age": "0" }} }}"#
        )
        .unwrap();

        let config = DashboardConfig::load(tmp.path()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.month_labels, MonthLabels::English);
        assert_eq!(config.initial, Selection::new("T80", "1", "0", Vec::<String>::new()));
        assert_eq!(config.data_path, PathBuf::from("kosis_data.csv"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{{ not json").unwrap();
        let err = DashboardConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
