use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
    #[error("unknown style preset `{0}` (expected `default` or `compact`)")]
    UnknownPreset(String),
    #[error("unknown leader position `{0}`")]
    UnknownPosition(String),
    #[error("`automatic` is a request value; the default position must be concrete")]
    AutomaticDefault,
    #[error("unknown platform `{0}` (expected `desktop`, `android` or `ios`)")]
    UnknownPlatform(String),
    #[error("expected two numbers for {what}, got `{input}`")]
    InvalidPair { what: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, Error>;
