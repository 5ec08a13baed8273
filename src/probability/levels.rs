//! Skill level distributions
//!
//! A freshly drawn level is categorical over {1, 2, 3}. The level-sum tables
//! shown next to the statistics are derived from it analytically: the
//! default table convolves three independent draws, and the premium table
//! renormalises that result over sums at or above the premium minimum.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Serialize;

use crate::error::SkillChangeError;
use crate::skills::{MAX_LEVEL, MIN_LEVEL, SLOT_COUNT};

/// Smallest and largest possible sum of three levels
pub const MIN_LEVEL_SUM: u8 = MIN_LEVEL * SLOT_COUNT as u8;
pub const MAX_LEVEL_SUM: u8 = MAX_LEVEL * SLOT_COUNT as u8;

const LEVEL_COUNT: usize = (MAX_LEVEL - MIN_LEVEL + 1) as usize;
const SUM_COUNT: usize = (MAX_LEVEL_SUM - MIN_LEVEL_SUM + 1) as usize;

/// Categorical distribution over skill levels 1..=3
#[derive(Debug, Clone)]
pub struct LevelDistribution {
    weights: [f64; LEVEL_COUNT],
    index: WeightedIndex<f64>,
}

impl LevelDistribution {
    pub fn new(weights: [f64; LEVEL_COUNT]) -> Result<Self, SkillChangeError> {
        let index = WeightedIndex::new(weights)
            .map_err(|e| SkillChangeError::InvalidWeights(format!("level weights: {}", e)))?;
        Ok(Self { weights, index })
    }

    /// Draw a level
    pub fn sample(&self, rng: &mut impl Rng) -> u8 {
        MIN_LEVEL + self.index.sample(rng) as u8
    }

    /// Normalised probability of a level, 0 outside 1..=3
    pub fn probability(&self, level: u8) -> f64 {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return 0.0;
        }
        let total: f64 = self.weights.iter().sum();
        self.weights[(level - MIN_LEVEL) as usize] / total
    }

    pub fn weights(&self) -> [f64; LEVEL_COUNT] {
        self.weights
    }
}

/// Probability of each level sum 3..=9 across the three slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelSumDistribution {
    probabilities: [f64; SUM_COUNT],
}

impl LevelSumDistribution {
    /// Exact distribution of the sum of three independent level draws
    pub fn from_levels(levels: &LevelDistribution) -> Self {
        // Distribution of a partial sum, indexed from 0
        let mut partial = vec![1.0];
        for _ in 0..SLOT_COUNT {
            let mut next = vec![0.0; partial.len() + LEVEL_COUNT - 1];
            for (offset, p) in partial.iter().enumerate() {
                for step in 0..LEVEL_COUNT {
                    next[offset + step] += p * levels.probability(MIN_LEVEL + step as u8);
                }
            }
            partial = next;
        }

        let mut probabilities = [0.0; SUM_COUNT];
        probabilities.copy_from_slice(&partial[..SUM_COUNT]);
        Self { probabilities }
    }

    /// Distribution conditioned on the sum being at least `min_sum`
    pub fn conditioned_at_least(&self, min_sum: u8) -> Self {
        let kept: f64 = self
            .iter()
            .filter(|(sum, _)| *sum >= min_sum)
            .map(|(_, p)| p)
            .sum();

        let mut probabilities = [0.0; SUM_COUNT];
        if kept > 0.0 {
            for (sum, p) in self.iter() {
                if sum >= min_sum {
                    probabilities[(sum - MIN_LEVEL_SUM) as usize] = p / kept;
                }
            }
        }
        Self { probabilities }
    }

    /// Probability of a given sum, 0 outside 3..=9
    pub fn probability(&self, sum: u8) -> f64 {
        if !(MIN_LEVEL_SUM..=MAX_LEVEL_SUM).contains(&sum) {
            return 0.0;
        }
        self.probabilities[(sum - MIN_LEVEL_SUM) as usize]
    }

    /// (sum, probability) pairs in ascending sum order
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (MIN_LEVEL_SUM + i as u8, *p))
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}
