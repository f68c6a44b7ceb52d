pub mod config;
pub mod error;
pub mod logging;
pub mod mode;
pub mod normalize;

pub use error::NormalizeError;
pub use mode::Mode;
pub use normalize::{normalize, ParsedRequest, RepoRef, TargetUrl, UrlNormalizer};
