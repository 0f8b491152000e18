//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::{ConfigSource, DispatcherConfig, LoadedConfig};

/// File name looked up next to the dispatcher when no path is given.
pub const ADJACENT_CONFIG: &str = "restart.yaml";

/// Production implementation of `ConfigStore` that reads YAML from disk.
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
    base_dir: PathBuf,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>, base_dir: &Path) -> Self {
        Self {
            explicit,
            base_dir: base_dir.to_path_buf(),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<LoadedConfig> {
        if let Some(path) = &self.explicit {
            return Ok(LoadedConfig {
                config: read(path)?,
                source: ConfigSource::Explicit(path.clone()),
            });
        }

        let adjacent = self.base_dir.join(ADJACENT_CONFIG);
        if adjacent.exists() {
            return Ok(LoadedConfig {
                config: read(&adjacent)?,
                source: ConfigSource::Adjacent(adjacent),
            });
        }

        Ok(LoadedConfig {
            config: DispatcherConfig::default(),
            source: ConfigSource::Defaults,
        })
    }
}

fn read(path: &Path) -> Result<DispatcherConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}
