use std::fmt::Display;

/// Where in the document a part element sits, both indices 0-based in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub meal: usize,
    pub part: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "meal cell {}, part {}", self.meal, self.part)
    }
}

/// The markup does not follow the layout the provider is known to use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unexpected structure: meal cell {meal} has no part elements")]
    NoParts { meal: usize },
    #[error("Unexpected structure: {0} has no content")]
    MissingTitle(Position),
    #[error("Unexpected structure: {0} does not start with a text node")]
    TitleNotText(Position),
    #[error("Unexpected structure: {0} has an empty title")]
    EmptyTitle(Position),
}

pub type Result<T> = std::result::Result<T, Error>;
