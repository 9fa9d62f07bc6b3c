//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command lives in its own submodule.

pub mod generate;

pub use generate::{emit_ideas, execute_generate, write_ideas, GenerateOptions};
