use log::{debug, info};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::BackendError;
use crate::model::config::BackendConfig;

/// A clipboard helper resolved to an executable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    pub name: String,
    pub path: PathBuf,
}

/// Resolves the first available backend from an ordered candidate list.
#[derive(Debug, Clone)]
pub struct BackendLocator {
    candidates: Vec<String>,
}

impl BackendLocator {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.candidates.clone())
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Search the process `PATH`.
    pub fn locate(&self) -> Result<Backend, BackendError> {
        self.first_match(|name| which::which(name))
    }

    /// Search an explicit path list, resolving relative candidates against `cwd`.
    pub fn locate_in<P: AsRef<OsStr>>(
        &self,
        search_path: Option<P>,
        cwd: &Path,
    ) -> Result<Backend, BackendError> {
        let search_path: Option<&OsStr> = search_path.as_ref().map(|p| p.as_ref());
        self.first_match(|name| which::which_in(name, search_path, cwd))
    }

    fn first_match<F>(&self, resolve: F) -> Result<Backend, BackendError>
    where
        F: Fn(&str) -> which::Result<PathBuf>,
    {
        for name in &self.candidates {
            match resolve(name) {
                Ok(path) => {
                    info!("Using clipboard backend {}", path.display());
                    return Ok(Backend {
                        name: name.clone(),
                        path,
                    });
                }
                Err(e) => debug!("Backend candidate '{}' not usable: {}", name, e),
            }
        }

        Err(BackendError::NotFound {
            candidates: self.candidates.clone(),
        })
    }
}

impl Default for BackendLocator {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}
