//! Conversion errors and their user-facing messages.

use thiserror::Error;

/// Why an input could not be converted into a mirror URL.
///
/// The `Display` form of each variant is the single message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Input was empty or whitespace only.
    #[error("Please use a valid GitHub URL")]
    EmptyInput,
    /// Input could not be parsed as a URL, even after adding `https://`.
    #[error("Please enter a valid URL")]
    MalformedUrl(#[source] url::ParseError),
    /// Input parsed as a URL but is neither `github.com/owner/repo` nor `owner.github.io/repo`.
    #[error("Invalid GitHub URL format. Please use github.com/owner/repo or owner.github.io/repo")]
    UnrecognizedShape,
}

impl NormalizeError {
    /// Stable short code for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizeError::EmptyInput => "empty_input",
            NormalizeError::MalformedUrl(_) => "malformed_url",
            NormalizeError::UnrecognizedShape => "unrecognized_shape",
        }
    }
}
