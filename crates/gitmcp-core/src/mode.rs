use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which mirror endpoint to target: the MCP server itself or its chat page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Mcp,
    Chat,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Mcp => "mcp",
            Mode::Chat => "chat",
        }
    }

    /// Path suffix appended after `/<owner>/<repo>`.
    pub fn suffix(self) -> &'static str {
        match self {
            Mode::Mcp => "",
            Mode::Chat => "/chat",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected 'mcp' or 'chat')")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mcp" => Ok(Mode::Mcp),
            "chat" => Ok(Mode::Chat),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
