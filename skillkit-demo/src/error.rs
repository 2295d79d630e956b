use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file not found: {}", .0.display())]
    MissingConfig(PathBuf),

    #[error(transparent)]
    Widget(#[from] skillkit::Error),
}
