//! Weighted draws without replacement over a skill pool

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::SkillChangeError;
use crate::skills::SkillKey;

/// A shrinking pool of candidate skills.
///
/// Drawing removes the drawn entry, so filling several slots from one pool
/// never yields the same (name, tier) pair twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPool {
    entries: Vec<SkillKey>,
}

impl SkillPool {
    pub fn new(entries: Vec<SkillKey>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &SkillKey) -> bool {
        self.entries.contains(key)
    }

    pub fn entries(&self) -> &[SkillKey] {
        &self.entries
    }

    /// Remove an entry if present, returning whether it was there
    pub fn remove(&mut self, key: &SkillKey) -> bool {
        match self.entries.iter().position(|k| k == key) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every listed entry that is present
    pub fn exclude<'a>(&mut self, keys: impl IntoIterator<Item = &'a SkillKey>) {
        for key in keys {
            self.remove(key);
        }
    }

    /// Draw one entry, every candidate carrying the same weight, and remove it
    pub fn draw(&mut self, weight: f64, rng: &mut impl Rng) -> Result<SkillKey, SkillChangeError> {
        self.draw_weighted(|_| weight, rng)
    }

    /// Draw one entry with probability proportional to `weigh`, and remove it
    pub fn draw_weighted<F>(&mut self, weigh: F, rng: &mut impl Rng) -> Result<SkillKey, SkillChangeError>
    where
        F: Fn(&SkillKey) -> f64,
    {
        if self.entries.is_empty() {
            return Err(SkillChangeError::EmptyDrawPool);
        }
        let index = WeightedIndex::new(self.entries.iter().map(weigh))
            .map_err(|e| SkillChangeError::InvalidWeights(e.to_string()))?;
        let idx = index.sample(rng);
        Ok(self.entries.remove(idx))
    }

    /// Uniformly pick one entry, leaving the pool unchanged
    pub fn pick(&self, rng: &mut impl Rng) -> Result<SkillKey, SkillChangeError> {
        if self.entries.is_empty() {
            return Err(SkillChangeError::EmptyDrawPool);
        }
        Ok(self.entries[rng.gen_range(0..self.entries.len())].clone())
    }
}
