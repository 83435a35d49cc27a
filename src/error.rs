use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that end the wrapper with exit status 1.
#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to execute {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}
