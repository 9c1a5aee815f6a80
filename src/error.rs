use std::io;
use thiserror::Error;

/// Custom error type for the snapshot renamer
#[derive(Error, Debug)]
pub enum Error {
    /// IO operations errors (listing, rename, copy)
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Kind of the underlying filesystem error
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Io(err) => err.kind(),
        }
    }
}

/// Result type alias for renamer operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_io_message() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(err.to_string(), "no such file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
