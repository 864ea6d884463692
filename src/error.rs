pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the strict [`Mpan::parse`](crate::Mpan::parse) /
/// [`Mpan::check`](crate::Mpan::check) path. The boolean helpers swallow
/// both kinds into a plain `false`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input matches neither the 13 digit nor the 21 character layout.
    #[error("{0:?} doesn't look like an MPAN")]
    Parse(String),

    /// The input parsed, but a subsection or the check digit failed.
    #[error("MPAN failed validity check: {0}")]
    Validation(String),
}

impl Error {
    /// The offending input, verbatim.
    pub fn raw(&self) -> &str {
        match self {
            Error::Parse(raw) => raw,
            Error::Validation(raw) => raw,
        }
    }
}
