//! # Train/Test Splitting

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::errors::{TCResult, TagchipperError};

/// The default fraction of sentences assigned to the test partition.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Two disjoint partitions of sentence indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Training sentence indices, ascending.
    pub train: Vec<usize>,

    /// Test sentence indices, ascending.
    pub test: Vec<usize>,
}

impl TrainTestSplit {
    /// Randomly assign each of `count` sentences to train or test.
    ///
    /// ## Arguments
    /// * `count` - the number of sentences.
    /// * `test_fraction` - the probability of a sentence landing in test; in ``[0, 1]``.
    /// * `seed` - the rng seed; equal seeds give equal splits.
    pub fn random(
        count: usize,
        test_fraction: f64,
        seed: u64,
    ) -> TCResult<Self> {
        if !(0.0..=1.0).contains(&test_fraction) {
            return Err(TagchipperError::InvalidOption(format!(
                "test fraction must be in [0, 1]: {test_fraction}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut split = Self {
            train: Vec::with_capacity(count),
            test: Vec::with_capacity((count as f64 * test_fraction) as usize + 1),
        };
        for idx in 0..count {
            if rng.random_bool(test_fraction) {
                split.test.push(idx);
            } else {
                split.train.push(idx);
            }
        }
        Ok(split)
    }

    /// Select the training items from `items`.
    pub fn train_items<'a, T>(
        &self,
        items: &'a [T],
    ) -> Vec<&'a T> {
        self.train.iter().map(|&i| &items[i]).collect()
    }

    /// Select the test items from `items`.
    pub fn test_items<'a, T>(
        &self,
        items: &'a [T],
    ) -> Vec<&'a T> {
        self.test.iter().map(|&i| &items[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_disjoint_and_complete() {
        let split = TrainTestSplit::random(1000, DEFAULT_TEST_FRACTION, 7).unwrap();

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort();
        assert_eq!(all, (0..1000).collect::<Vec<_>>());

        // Loose bounds; the expected test size is 200.
        assert!(split.test.len() > 100 && split.test.len() < 300);
    }

    #[test]
    fn test_split_is_seeded() {
        let a = TrainTestSplit::random(200, 0.5, 42).unwrap();
        let b = TrainTestSplit::random(200, 0.5, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_extremes() {
        let split = TrainTestSplit::random(10, 0.0, 1).unwrap();
        assert_eq!(split.train.len(), 10);
        assert!(split.test.is_empty());

        let split = TrainTestSplit::random(10, 1.0, 1).unwrap();
        assert_eq!(split.test.len(), 10);

        assert!(TrainTestSplit::random(10, 1.5, 1).is_err());
        assert!(TrainTestSplit::random(10, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_select_items() {
        let items = ["a", "b", "c"];
        let split = TrainTestSplit {
            train: vec![0, 2],
            test: vec![1],
        };
        assert_eq!(split.train_items(&items), vec![&"a", &"c"]);
        assert_eq!(split.test_items(&items), vec![&"b"]);
    }
}
