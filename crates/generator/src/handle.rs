use crate::error::GeneratorError;
use crate::generate::{GeneratorSettings, generate_with};
use core_types::Dataset;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::Deref;
use std::sync::Arc;

/// A read-only, cheaply clonable handle to a dataset generated once at startup.
///
/// The controller calls `initialize` during its startup routine and passes
/// clones to every query. Each clone shares the same immutable `Dataset`, so
/// concurrent filters read it without any locking.
#[derive(Debug, Clone)]
pub struct DatasetHandle {
    seed: u64,
    dataset: Arc<Dataset>,
}

impl DatasetHandle {
    /// Runs the single generation step for `seed`.
    ///
    /// Calling this again with the same seed and settings yields an equal
    /// dataset and has no other effect.
    pub fn initialize(seed: u64, settings: &GeneratorSettings) -> Result<Self, GeneratorError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dataset = generate_with(settings, &mut rng)?;

        tracing::info!(
            seed,
            records = dataset.len(),
            start = %settings.start_date,
            end = %settings.end_date,
            "Sales dataset generated."
        );

        Ok(Self {
            seed,
            dataset: Arc::new(dataset),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The shared pointer itself, for consumers that outlive the handle.
    pub fn shared(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }
}

impl Deref for DatasetHandle {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.dataset
    }
}
