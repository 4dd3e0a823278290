use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Content generation was requested before the holder finished parsing.
    NotParsed,
    /// Existing content uses a filter that can't be decoded for appending.
    UnsupportedFilter(String),
    Io,
}

impl Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::NotParsed => write!(f, "object holder is not parsed"),
            ContentError::UnsupportedFilter(filter) => write!(f, "unsupported content filter `{}`", filter),
            ContentError::Io => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(_: std::io::Error) -> Self {
        ContentError::Io
    }
}
