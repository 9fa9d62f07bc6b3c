//! @acp:module "Vocabulary"
//! @acp:summary "Static word tables the generator draws from"
//! @acp:domain generator
//! @acp:layer data
//!
//! Table order matters: the selector indexes into these slices, so reordering
//! an entry changes what a given seed produces.

pub static DOMAINS: &[&str] = &[
    "personal productivity",
    "decentralized finance",
    "content tooling",
    "AI-assisted learning",
    "research tooling",
    "experimental art",
    "community automation",
];

/// Stack categories as `(key, palette)` pairs
pub static STACKS: &[(&str, &[&str])] = &[
    ("web2", &["FastAPI", "Tailwind", "PostgreSQL", "GitHub Actions"]),
    ("web3", &["Foundry", "ethers.js", "The Graph", "IPFS"]),
    ("tool", &["Python CLI", "Click", "SQLite", "pydantic"]),
    ("ai", &["LangChain", "OpenAI", "gradio", "Redis"]),
    ("bot", &["Node.js", "Discord.py", "Cloud Functions", "Supabase"]),
];

pub static PERSPECTIVES: &[&str] = &[
    "automatic journaling",
    "small-batch automation",
    "human-in-the-loop tutoring",
    "narrative-building for developers",
    "exploratory data-collecting",
];

pub static DISCIPLINES: &[&str] = &["tooling", "spike", "utility", "automation", "experiment"];

pub static PROJECT_ADJECTIVES: &[&str] = &[
    "Quiet",
    "Curated",
    "Fragmented",
    "Polished",
    "Nebulous",
    "Orbiting",
    "Sonic",
];

pub static ACTIONS: &[&str] = &[
    "Sketch a lightweight UI mock",
    "Wire a data flow in a notebook",
    "Draft an API outline",
    "Record what went well this sprint",
    "Define the acceptance criteria",
];

pub static MOTIVATIONS: &[&str] = &[
    "bring clarity to a messy side project backlog",
    "turn a restless idea into one deliberate demo",
    "practice writing deeply human commit notes",
    "prove that a tiny tool can unlock a fresh habit",
    "balance new stack experiments with the busy week ahead",
];

/// All stack category keys, in table order
pub fn stack_keys() -> Vec<&'static str> {
    STACKS.iter().map(|(key, _)| *key).collect()
}

/// Palette for a stack category, if the key is known
pub fn palette(key: &str) -> Option<&'static [&'static str]> {
    STACKS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, palette)| *palette)
}

pub fn is_stack_key(key: &str) -> bool {
    palette(key).is_some()
}
