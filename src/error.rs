use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no mode given, expected --pack or --unpack")]
    InvalidMode,

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    #[error("malformed payload header: {0}")]
    Header(#[from] bincode::Error),

    /// A byte had no entry in the code table built from its own input.
    #[error("byte {0:#04x} has no code in the table")]
    UnknownSymbol(u8),
}

impl Error {
    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        Error::CorruptStream(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
