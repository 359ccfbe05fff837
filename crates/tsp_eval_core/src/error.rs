use thiserror::Error as ThisError;
use tsplib::TsplibError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Structurally malformed file: bad count line, missing records, non-numeric token.
    #[error("format error: {0}")]
    Format(String),
    /// Well-formed data that does not fit together, e.g. a tour sized for another instance.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<TsplibError> for Error {
    fn from(value: TsplibError) -> Self {
        match value {
            TsplibError::Io(err) => Self::Io(err),
            TsplibError::Format(message) => Self::Format(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use tsplib::TsplibError;

    use super::Error;

    #[test]
    fn tsplib_errors_keep_their_category() {
        let err: Error = TsplibError::format("Missing NODE_COORD_SECTION").into();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "format error: Missing NODE_COORD_SECTION");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = TsplibError::Io(io).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn constructors_prefix_category() {
        assert_eq!(
            Error::validation("tour has 2 entries").to_string(),
            "validation error: tour has 2 entries"
        );
        assert_eq!(Error::invalid_input("x").to_string(), "invalid input: x");
    }
}
