use std::path::{Path, PathBuf};

/// Runtime configuration shared by all services.
///
/// The daemon fills this from command-line flags and hands it to storage
/// initialization; nothing here is read from the environment directly.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the flat-file tables (one CSV per entity).
    pub data_dir: PathBuf,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(data_dir: impl Into<PathBuf>, listen: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            listen: listen.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
