//! Atomically published model snapshots.
//!
//! A [`ModelSnapshot`] bundles a dataset with the similarity matrix computed
//! from it. Snapshots are immutable: a rebuild produces a new one and swaps
//! it in whole. Readers holding the previous `Arc` keep a consistent pair
//! until they drop it, and never block a publisher.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::config::DataConfig;
use crate::data::Dataset;
use crate::error::Result;
use crate::facade::Recommender;
use crate::matrix::SimilarityMatrix;
use crate::similarity::cosine_similarity_matrix;

/// Immutable dataset + aligned similarity matrix.
#[derive(Debug)]
pub struct ModelSnapshot {
    version: u64,
    dataset: Dataset,
    similarity: SimilarityMatrix,
}

impl ModelSnapshot {
    /// Computes the similarity matrix for `dataset` and wraps both.
    pub fn build(version: u64, dataset: Dataset) -> Result<Self> {
        let similarity = cosine_similarity_matrix(&dataset.matrix)?;
        Ok(Self {
            version,
            dataset,
            similarity,
        })
    }

    /// Monotonic version, starting at 1.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The similarity matrix, aligned to `dataset().matrix`.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Façade over this snapshot.
    #[must_use]
    pub fn recommender(&self) -> Recommender<'_> {
        Recommender::new(&self.dataset, &self.similarity)
    }
}

/// Holder of the current snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    current: ArcSwap<ModelSnapshot>,
    publish_lock: Mutex<()>,
}

impl SnapshotStore {
    /// Builds the first snapshot (version 1) from `dataset`.
    pub fn new(dataset: Dataset) -> Result<Self> {
        let snapshot = ModelSnapshot::build(1, dataset)?;
        tracing::info!(version = 1, "Published model snapshot");
        Ok(Self {
            current: ArcSwap::from_pointee(snapshot),
            publish_lock: Mutex::new(()),
        })
    }

    /// Loads the configured files and builds the first snapshot.
    pub fn open(data: &DataConfig) -> Result<Self> {
        Self::new(load(data)?)
    }

    /// The current snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<ModelSnapshot> {
        self.current.load_full()
    }

    /// Version of the current snapshot.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.load().version
    }

    /// Builds a snapshot from `dataset` and makes it current.
    ///
    /// The similarity matrix is computed before the swap, so readers only
    /// ever see complete snapshots. Publishers are serialized; readers are
    /// never blocked. Returns the new version.
    pub fn publish(&self, dataset: Dataset) -> Result<u64> {
        let _guard = self.publish_lock.lock();
        let version = self.version() + 1;
        let snapshot = ModelSnapshot::build(version, dataset)?;
        self.current.store(Arc::new(snapshot));
        tracing::info!(version, "Published model snapshot");
        Ok(version)
    }

    /// Reloads the configured files and publishes the result.
    ///
    /// On error the current snapshot stays in place.
    pub fn reload(&self, data: &DataConfig) -> Result<u64> {
        self.publish(load(data)?)
    }
}

fn load(data: &DataConfig) -> Result<Dataset> {
    Dataset::from_paths(&data.ratings_path, &data.titles_path)
}
