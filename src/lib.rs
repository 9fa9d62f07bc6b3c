#![forbid(unsafe_code)]

//! @acp:module "NebulaForge Library"
//! @acp:summary "Seeded generator of human-readable side-project ideas"
//! @acp:domain generator
//! @acp:layer api
//! @acp:stability stable
//!
//! # NebulaForge
//!
//! Spin up new solo project directions with a human-friendly story.
//!
//! ## Features
//!
//! - **Reproducible**: the same seed replays the same ideas
//! - **Focus**: restrict the tech stack to one category (`web2`, `web3`, `tool`, `ai`, `bot`)
//! - **Action plans**: expand an idea into three next steps
//! - **JSON Output**: machine-readable rendering for scripting
//!
//! ## Example
//!
//! ```rust
//! use nebulaforge::{describe_detailed, IdeaGenerator};
//!
//! fn main() -> nebulaforge::Result<()> {
//!     let mut generator = IdeaGenerator::new(Some(42));
//!     let idea = generator.generate(Some("bot"))?;
//!     println!("{}", describe_detailed(&idea));
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod idea;
pub mod render;
pub mod selector;
pub mod vocab;

// Re-exports
pub use config::Config;
pub use error::{ForgeError, Result};
pub use generator::IdeaGenerator;
pub use idea::ProjectIdea;
pub use render::{describe, describe_detailed, make_action_plan, render_entry, OutputFormat};
pub use selector::Selector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
