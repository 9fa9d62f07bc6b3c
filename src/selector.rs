//! @acp:module "Seeded Selector"
//! @acp:summary "Reproducible random choices over static tables"
//! @acp:domain generator
//! @acp:layer logic
//!
//! Two selectors built from the same seed return identical results for the
//! same ordered sequence of calls. Without a seed the stream comes from the OS.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::error::{ForgeError, Result};

/// Pseudo-random stream with discrete selection helpers
#[derive(Debug, Clone)]
pub struct Selector {
    rng: StdRng,
    seed: Option<u64>,
}

impl Selector {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng, seed }
    }

    /// Seed this selector was built from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Choose one element uniformly. `table` names the source in the error.
    pub fn choose<'a, T>(&mut self, items: &'a [T], table: &'static str) -> Result<&'a T> {
        items
            .choose(&mut self.rng)
            .ok_or(ForgeError::EmptySelection(table))
    }

    /// Shuffle a copy of `items` and keep the first `k` entries
    pub fn shuffled_prefix<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        let mut copy = items.to_vec();
        copy.shuffle(&mut self.rng);
        copy.truncate(k);
        copy
    }

    /// Uniform integer in `[0, bound)`; a zero bound yields 0
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let table = ["a", "b", "c", "d", "e", "f"];
        let mut first = Selector::new(Some(7));
        let mut second = Selector::new(Some(7));

        for _ in 0..20 {
            assert_eq!(
                first.choose(&table, "letters").unwrap(),
                second.choose(&table, "letters").unwrap()
            );
        }
        assert_eq!(
            first.shuffled_prefix(&table, 3),
            second.shuffled_prefix(&table, 3)
        );
        assert_eq!(first.below(9999), second.below(9999));
    }

    #[test]
    fn test_choose_empty_fails() {
        let mut selector = Selector::new(Some(1));
        let empty: [&str; 0] = [];
        let err = selector.choose(&empty, "domain").unwrap_err();
        assert!(matches!(err, ForgeError::EmptySelection("domain")));
    }

    #[test]
    fn test_shuffled_prefix_is_distinct_subset() {
        let table = ["w", "x", "y", "z"];
        let mut selector = Selector::new(Some(3));
        for _ in 0..50 {
            let picked = selector.shuffled_prefix(&table, 3);
            assert_eq!(picked.len(), 3);
            for item in &picked {
                assert!(table.contains(item));
                assert_eq!(picked.iter().filter(|p| *p == item).count(), 1);
            }
        }
    }

    #[test]
    fn test_shuffled_prefix_shorter_than_k() {
        let mut selector = Selector::new(Some(3));
        assert_eq!(selector.shuffled_prefix(&["only"], 3), vec!["only"]);
    }

    #[test]
    fn test_below_bounds() {
        let mut selector = Selector::new(None);
        assert_eq!(selector.below(0), 0);
        for _ in 0..200 {
            assert!(selector.below(9999) < 9999);
        }
        assert_eq!(selector.seed(), None);
    }
}
