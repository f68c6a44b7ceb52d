//! Recognition of the two supported GitHub URL shapes.

use super::ParsedRequest;
use crate::error::NormalizeError;

const GITHUB_HOST: &str = "github.com";
const PAGES_SUFFIX: &str = ".github.io";

/// Repository owner and name extracted from a recognized URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Matches `github.com/<owner>/<repo>[/...]` or `<owner>.github.io/<repo>[/...]`.
    pub fn from_request(req: &ParsedRequest) -> Result<Self, NormalizeError> {
        let (owner, repo) = if req.hostname == GITHUB_HOST {
            match req.path_segments.as_slice() {
                [owner, repo, ..] => (owner.as_str(), repo.as_str()),
                _ => return Err(NormalizeError::UnrecognizedShape),
            }
        } else if let Some(owner) = req.hostname.strip_suffix(PAGES_SUFFIX) {
            let repo = req.path_segments.first().map_or("", String::as_str);
            (owner, repo)
        } else {
            return Err(NormalizeError::UnrecognizedShape);
        };

        if owner.is_empty() || repo.is_empty() {
            return Err(NormalizeError::UnrecognizedShape);
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}
