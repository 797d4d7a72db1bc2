//! Recommendation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of similar users to consider.
pub const DEFAULT_K: usize = 10;

/// Default number of recommendations to return.
pub const DEFAULT_TOP_N: usize = 10;

/// Whether the target user takes part in its own neighbourhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfSimilarity {
    /// The target competes for a top-k slot like any other user. Its
    /// self-similarity is usually maximal, which biases the mean towards
    /// its own ratings.
    #[default]
    Include,
    /// The target is removed before selection; `k` may then be at most
    /// `users - 1`.
    Exclude,
}

/// Size parameters of a recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendParams {
    /// Number of similar users to aggregate.
    pub k: usize,
    /// Maximum number of items to return.
    pub top_n: usize,
    /// Self-similarity policy.
    pub self_similarity: SelfSimilarity,
}

impl RecommendParams {
    /// Creates parameters with the default self-similarity policy.
    #[must_use]
    pub fn new(k: usize, top_n: usize) -> Self {
        Self {
            k,
            top_n,
            self_similarity: SelfSimilarity::default(),
        }
    }

    /// Sets the self-similarity policy.
    #[must_use]
    pub fn with_self_similarity(mut self, policy: SelfSimilarity) -> Self {
        self.self_similarity = policy;
        self
    }

    /// Checks `1 <= k <= candidates`.
    ///
    /// `k` is rejected rather than clamped so a caller asking for more
    /// neighbours than exist finds out.
    pub fn validate(&self, candidates: usize) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter("k must be at least 1".to_string()));
        }
        if self.k > candidates {
            return Err(Error::InvalidParameter(format!(
                "k = {} exceeds the {} candidate users",
                self.k, candidates
            )));
        }
        Ok(())
    }
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self::new(DEFAULT_K, DEFAULT_TOP_N)
    }
}
