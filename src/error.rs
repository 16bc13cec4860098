use crate::{config, fetch, parse};

/// Everything building a plan can fail with.
///
/// `Parse` means the provider changed its markup, `Request` means it could not be reached
/// or answered with something that is not a plan page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] parse::Error),
    #[error("Request error: {0}")]
    Request(#[from] fetch::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub const fn is_structure(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
