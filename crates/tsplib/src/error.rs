use thiserror::Error;

#[derive(Debug, Error)]
pub enum TsplibError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("format error: {0}")]
    Format(String),
}

pub type TsplibResult<T> = std::result::Result<T, TsplibError>;

impl TsplibError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}
