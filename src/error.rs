use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read `{}`. `{source}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("log has no line {0}")]
    MissingLine(usize),
    #[error("line {0} of the log has no position field")]
    MissingField(usize),
    #[error("invalid position `{text}` on line {line}. `{source}`")]
    InvalidNumber {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("first position sample is zero, cannot estimate power and drag")]
    ZeroFirstSample,
    #[error("failed to write output. `{0}`")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
