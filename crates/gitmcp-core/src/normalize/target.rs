use super::RepoRef;
use crate::mode::Mode;
use std::fmt;

/// Mirror URL for a repository, e.g. `https://gitmcp.9mirrors.xyz/owner/repo/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn build(mirror_host: &str, repo: &RepoRef, mode: Mode) -> Self {
        Self(format!(
            "https://{}/{}/{}{}",
            mirror_host,
            repo.owner,
            repo.repo,
            mode.suffix()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
