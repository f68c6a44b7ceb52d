//! CLI command handlers. Each command is in its own file.

mod batch;
mod completions;
mod config;
mod convert;
mod example;
mod man;

pub use batch::run_batch;
pub use completions::run_completions;
pub use config::run_config;
pub use convert::run_convert;
pub use example::run_example;
pub use man::run_man;
