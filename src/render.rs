//! @acp:module "Idea Renderer"
//! @acp:summary "Text and JSON rendering for generated ideas"
//! @acp:domain cli
//! @acp:layer output

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};
use crate::idea::ProjectIdea;

/// Output format for generated ideas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ForgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ForgeError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ForgeError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Multi-line summary of an idea, without a trailing newline
pub fn describe(idea: &ProjectIdea) -> String {
    format!(
        "Name: {}\nDomain: {}\nDiscipline: {}\nPerspective: {}\nStack: {}\nStory: {}\nNext action: {}\nMotivation: {}",
        idea.name,
        idea.domain,
        idea.discipline,
        idea.perspective,
        idea.stack.join(", "),
        idea.story,
        idea.next_action,
        idea.motivation,
    )
}

/// Summary followed by the action plan
pub fn describe_detailed(idea: &ProjectIdea) -> String {
    format!("{}\n\nAction plan:\n{}", describe(idea), make_action_plan(idea))
}

fn action_plan_lines(idea: &ProjectIdea) -> [String; 3] {
    [
        format!("- Sketch a {} prototype to prove the story", idea.lead_stack()),
        format!("- Run a quick sanity check around {} needs", idea.domain),
        format!("- Capture why this matters: {}", idea.motivation),
    ]
}

/// Three bullet lines quoting the lead stack entry, domain and motivation
pub fn make_action_plan(idea: &ProjectIdea) -> String {
    action_plan_lines(idea).join("\n")
}

/// `Idea {index}` header, underline, then the (detailed) description
pub fn render_entry(index: usize, idea: &ProjectIdea, detail: bool) -> String {
    let header = format!("Idea {}", index);
    let underline = "-".repeat(header.chars().count());
    let body = if detail {
        describe_detailed(idea)
    } else {
        describe(idea)
    };
    format!("{}\n{}\n{}", header, underline, body)
}

/// Render a batch of ideas as pretty-printed JSON
pub fn render_json(ideas: &[ProjectIdea], detail: bool) -> Result<String> {
    #[derive(Serialize)]
    struct JsonIdea<'a> {
        index: usize,
        #[serde(flatten)]
        idea: &'a ProjectIdea,
        #[serde(skip_serializing_if = "Option::is_none")]
        action_plan: Option<Vec<String>>,
    }

    let output: Vec<JsonIdea<'_>> = ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| JsonIdea {
            index: i + 1,
            idea,
            action_plan: detail.then(|| action_plan_lines(idea).to_vec()),
        })
        .collect();

    serde_json::to_string_pretty(&output).map_err(Into::into)
}
