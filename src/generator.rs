//! @acp:module "Idea Generator"
//! @acp:summary "Assembles ProjectIdea records from the vocabulary tables"
//! @acp:domain generator
//! @acp:layer logic
//!
//! Draw order within `generate`:
//! 1. Stack (category, then shuffled palette)
//! 2. Domain, perspective, discipline, motivation, next action
//! 3. Name (adjective, discipline suffix, number)
//!
//! The order is part of the reproducibility contract for a seed.

use crate::error::{ForgeError, Result};
use crate::idea::ProjectIdea;
use crate::selector::Selector;
use crate::vocab;

/// Stack entries kept per idea
pub const STACK_SIZE: usize = 3;

/// Exclusive upper bound of the number appended to idea names
pub const NAME_NUMBER_BOUND: u32 = 9999;

/// Seeded project idea generator
#[derive(Debug, Clone)]
pub struct IdeaGenerator {
    selector: Selector,
}

impl IdeaGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            selector: Selector::new(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.selector.seed()
    }

    /// Generate one idea, restricting the stack to `focus` when it names a category
    pub fn generate(&mut self, focus: Option<&str>) -> Result<ProjectIdea> {
        let stack = self.pick_stack(focus)?;
        let domain = self.pick_domain()?;
        let perspective = self.pick_perspective()?;
        let discipline = self.pick_discipline()?;
        let motivation = self.pick_motivation()?;
        let lead = stack
            .first()
            .ok_or(ForgeError::EmptySelection("stack palette"))?;
        let story = format!(
            "Build a {} companion for {}, incrementally delivering {} helpers with {} and friends {}.",
            perspective, domain, discipline, lead, motivation
        );
        let next_action = self.pick_next_action()?;
        let name = self.make_name()?;

        tracing::debug!("Generated idea '{}' with stack [{}]", name, stack.join(", "));

        Ok(ProjectIdea {
            name,
            stack,
            domain: domain.to_string(),
            perspective: perspective.to_string(),
            discipline: discipline.to_string(),
            story,
            next_action: next_action.to_string(),
            motivation: motivation.to_string(),
        })
    }

    /// Pick a category (the focus, if known) and keep a shuffled prefix of its palette
    pub fn pick_stack(&mut self, focus: Option<&str>) -> Result<Vec<String>> {
        let keys: Vec<&str> = match focus {
            Some(f) if vocab::is_stack_key(f) => vec![f],
            Some(f) => {
                // Unknown focus falls back to every category
                tracing::warn!("Unknown stack focus: {}", f);
                vocab::stack_keys()
            }
            None => vocab::stack_keys(),
        };

        let chosen = *self.selector.choose(&keys, "stack category")?;
        let palette = vocab::palette(chosen).ok_or(ForgeError::EmptySelection("stack palette"))?;
        tracing::debug!("Stack category: {}", chosen);

        Ok(self
            .selector
            .shuffled_prefix(palette, STACK_SIZE)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn pick_domain(&mut self) -> Result<&'static str> {
        self.selector.choose(vocab::DOMAINS, "domain").copied()
    }

    pub fn pick_perspective(&mut self) -> Result<&'static str> {
        self.selector.choose(vocab::PERSPECTIVES, "perspective").copied()
    }

    pub fn pick_discipline(&mut self) -> Result<&'static str> {
        self.selector.choose(vocab::DISCIPLINES, "discipline").copied()
    }

    pub fn pick_next_action(&mut self) -> Result<&'static str> {
        self.selector.choose(vocab::ACTIONS, "action").copied()
    }

    pub fn pick_motivation(&mut self) -> Result<&'static str> {
        self.selector.choose(vocab::MOTIVATIONS, "motivation").copied()
    }

    /// `"{Adjective} {Discipline} {n}"` with `n` in `[0, 9999)`
    pub fn make_name(&mut self) -> Result<String> {
        let adjective = self.selector.choose(vocab::PROJECT_ADJECTIVES, "adjective")?;
        let suffix = capitalize(self.pick_discipline()?);
        let number = self.selector.below(NAME_NUMBER_BOUND);
        Ok(format!("{} {} {}", adjective, suffix, number))
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tooling"), "Tooling");
        assert_eq!(capitalize("sPIKE"), "Spike");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_make_name_shape() {
        let mut generator = IdeaGenerator::new(Some(5));
        for _ in 0..25 {
            let name = generator.make_name().unwrap();
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected name: {}", name);
            assert!(vocab::PROJECT_ADJECTIVES.contains(&parts[0]));
            assert!(vocab::DISCIPLINES
                .iter()
                .any(|d| capitalize(d) == parts[1]));
            let number: u32 = parts[2].parse().unwrap();
            assert!(number < NAME_NUMBER_BOUND);
        }
    }

    #[test]
    fn test_pick_stack_with_focus() {
        let mut generator = IdeaGenerator::new(Some(11));
        let palette = vocab::palette("web3").unwrap();
        for _ in 0..20 {
            let stack = generator.pick_stack(Some("web3")).unwrap();
            assert_eq!(stack.len(), STACK_SIZE);
            assert!(stack.iter().all(|s| palette.contains(&s.as_str())));
        }
    }

    #[test]
    fn test_story_interpolates_fields() {
        let mut generator = IdeaGenerator::new(Some(2024));
        let idea = generator.generate(None).unwrap();
        assert_eq!(
            idea.story,
            format!(
                "Build a {} companion for {}, incrementally delivering {} helpers with {} and friends {}.",
                idea.perspective, idea.domain, idea.discipline, idea.stack[0], idea.motivation
            )
        );
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(IdeaGenerator::new(Some(9)).seed(), Some(9));
        assert_eq!(IdeaGenerator::new(None).seed(), None);
    }
}
