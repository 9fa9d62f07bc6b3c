//! @acp:module "Project Idea"
//! @acp:summary "The record produced by one generation call"
//! @acp:domain generator
//! @acp:layer types

use serde::{Deserialize, Serialize};

/// One generated project idea. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub name: String,
    /// Up to 3 distinct entries from a single stack category
    pub stack: Vec<String>,
    pub domain: String,
    pub perspective: String,
    pub discipline: String,
    pub story: String,
    pub next_action: String,
    pub motivation: String,
}

impl ProjectIdea {
    /// Lead technology of the stack, or an empty string for an empty stack
    pub fn lead_stack(&self) -> &str {
        self.stack.first().map(String::as_str).unwrap_or("")
    }
}
