use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("not enough arguments")]
    MissingFiles,
    #[error("unrecognised option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` expects a value")]
    MissingValue(&'static str),
    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),
    #[error("{}: cannot tell the encoding, pass --from", .0.display())]
    UndetectedEncoding(PathBuf),
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
