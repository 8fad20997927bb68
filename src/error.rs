use std::path::PathBuf;

use simple_error::SimpleError;
use thiserror::Error;

///Failures of the components around the index. The index itself has no
///failure modes: lookups of unknown words and deletions of absent words are
///ordinary outcomes.
#[derive(Debug,Error)]
pub enum Error {
    #[error("unable to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] SimpleError),

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
