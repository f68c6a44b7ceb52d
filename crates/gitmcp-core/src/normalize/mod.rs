//! GitHub URL normalization.
//!
//! Turns free-form input such as `github.com/owner/repo` or
//! `owner.github.io/repo` into the matching mirror URL. Pure and synchronous;
//! opening the result is left to the caller.

mod request;
mod shape;
mod target;

pub use request::ParsedRequest;
pub use shape::RepoRef;
pub use target::TargetUrl;

use crate::error::NormalizeError;
use crate::mode::Mode;

/// Mirror host used when none is configured.
pub const DEFAULT_MIRROR_HOST: &str = "gitmcp.9mirrors.xyz";

/// Converts GitHub URLs into URLs on a fixed mirror host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNormalizer {
    mirror_host: String,
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIRROR_HOST)
    }
}

impl UrlNormalizer {
    pub fn new(mirror_host: impl Into<String>) -> Self {
        Self {
            mirror_host: mirror_host.into(),
        }
    }

    pub fn mirror_host(&self) -> &str {
        &self.mirror_host
    }

    /// Normalizes `input` and builds the mirror URL for `mode`.
    ///
    /// # Examples
    ///
    /// - `github.com/owner/repo` (mcp) → `https://<mirror>/owner/repo`
    /// - `owner.github.io/repo` (chat) → `https://<mirror>/owner/repo/chat`
    pub fn normalize(&self, input: &str, mode: Mode) -> Result<TargetUrl, NormalizeError> {
        let request = ParsedRequest::parse(input)?;
        let repo = RepoRef::from_request(&request)?;
        Ok(TargetUrl::build(&self.mirror_host, &repo, mode))
    }
}

/// Normalizes `input` against [`DEFAULT_MIRROR_HOST`].
pub fn normalize(input: &str, mode: Mode) -> Result<TargetUrl, NormalizeError> {
    UrlNormalizer::default().normalize(input, mode)
}
