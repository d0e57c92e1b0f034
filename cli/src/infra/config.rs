//! Infrastructure implementation of the `ConfigStore` port.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::application::ports::ConfigStore;
use crate::domain::{AgentOsConfig, ConfigurationError};

/// Reads `config.yml` from disk once per instance.
///
/// The first successful load (including "file absent") is cached; later
/// calls never touch the disk again. Failed loads are not cached.
pub struct YamlConfigStore {
    path: PathBuf,
    cache: OnceCell<Option<AgentOsConfig>>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    fn read(&self) -> Result<Option<AgentOsConfig>, ConfigurationError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no base configuration");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigurationError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        AgentOsConfig::from_yaml(&content, &self.path).map(Some)
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Option<AgentOsConfig>, ConfigurationError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached.clone());
        }
        let loaded = self.read()?;
        Ok(self.cache.get_or_init(|| loaded).clone())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
