//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Walk(walkdir::Error),
    /// Filename does not decode into `id.gender.age.industry.sign.ext`.
    MalformedFilename(String),
    /// Content is still not well-formed after sanitization.
    Parse(String),
    Config(String),
    /// Any error that happened while processing a given input file.
    File {
        path: PathBuf,
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the path of the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Error::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Errors that `--skip-errors` is allowed to swallow.
    /// IO failures are never recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::MalformedFilename(_) | Error::Parse(_) => true,
            Error::File { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Walk(e) => write!(f, "error walking corpus: {}", e),
            Error::MalformedFilename(name) => write!(f, "malformed filename: {:?}", name),
            Error::Parse(msg) => write!(f, "parse error: {}", msg),
            Error::Config(msg) => write!(f, "invalid configuration: {}", msg),
            Error::File { path, source } => write!(f, "{:?}: {}", path, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Walk(e) => Some(e),
            Error::File { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Error {
        Error::Walk(e)
    }
}
