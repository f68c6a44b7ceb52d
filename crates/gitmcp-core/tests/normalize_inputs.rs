//! Public-API checks over the kinds of input people paste into the converter.

use gitmcp_core::{normalize, Mode, NormalizeError, UrlNormalizer};

const MIRROR: &str = "https://gitmcp.9mirrors.xyz";

fn ok(input: &str, mode: Mode) -> String {
    normalize(input, mode)
        .unwrap_or_else(|e| panic!("{input:?} should convert: {e}"))
        .into_string()
}

#[test]
fn github_repo_variants_convert_to_same_target() {
    let expected = format!("{MIRROR}/langchain-ai/langgraph");
    for input in [
        "github.com/langchain-ai/langgraph",
        "https://github.com/langchain-ai/langgraph",
        "http://github.com/langchain-ai/langgraph",
        "HTTPS://GITHUB.COM/langchain-ai/langgraph",
        "  github.com/langchain-ai/langgraph/  ",
        "https://github.com/langchain-ai/langgraph/tree/main/docs",
        "https://github.com/langchain-ai/langgraph?tab=readme-ov-file#readme",
    ] {
        assert_eq!(ok(input, Mode::Mcp), expected, "{input:?}");
    }
}

#[test]
fn chat_mode_appends_suffix() {
    assert_eq!(
        ok("github.com/idosal/git-mcp", Mode::Chat),
        format!("{MIRROR}/idosal/git-mcp/chat")
    );
    assert_eq!(
        ok("https://idosal.github.io/git-mcp/", Mode::Chat),
        format!("{MIRROR}/idosal/git-mcp/chat")
    );
}

#[test]
fn pages_site_uses_subdomain_as_owner() {
    assert_eq!(
        ok("langchain-ai.github.io/langgraph/concepts/", Mode::Mcp),
        format!("{MIRROR}/langchain-ai/langgraph")
    );
}

#[test]
fn repo_name_kept_verbatim() {
    assert_eq!(
        ok("github.com/owner/repo.git", Mode::Mcp),
        format!("{MIRROR}/owner/repo.git")
    );
    assert_eq!(
        ok("github.com/Owner/Repo", Mode::Mcp),
        format!("{MIRROR}/Owner/Repo")
    );
}

#[test]
fn empty_and_blank_inputs() {
    assert_eq!(normalize("", Mode::Mcp), Err(NormalizeError::EmptyInput));
    assert_eq!(normalize("   ", Mode::Chat), Err(NormalizeError::EmptyInput));
}

#[test]
fn unparseable_inputs_are_malformed() {
    for input in ["not a url", "https://", "http://[::1"] {
        assert!(
            matches!(normalize(input, Mode::Mcp), Err(NormalizeError::MalformedUrl(_))),
            "{input:?}"
        );
    }
}

#[test]
fn unsupported_shapes() {
    for input in [
        "github.com",
        "github.com/owner",
        "https://gitlab.com/owner/repo",
        "owner.github.io",
        "github.io/repo",
        "gist.github.com/owner/abc123",
        "gitmcp.9mirrors.xyz/owner/repo",
    ] {
        assert_eq!(
            normalize(input, Mode::Mcp),
            Err(NormalizeError::UnrecognizedShape),
            "{input:?}"
        );
    }
}

#[test]
fn error_message_is_what_the_user_sees() {
    let err = normalize("example.com/a/b", Mode::Mcp).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid GitHub URL format. Please use github.com/owner/repo or owner.github.io/repo"
    );
}

#[test]
fn configured_mirror_host() {
    let normalizer = UrlNormalizer::new("gitmcp.io");
    assert_eq!(
        normalizer
            .normalize("owner.github.io/repo", Mode::Mcp)
            .unwrap()
            .as_str(),
        "https://gitmcp.io/owner/repo"
    );
}
