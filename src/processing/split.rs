/*! Partition assignment

Each author is put in the training, validation or test partition by a single
uniform draw in `[0, 1)`:

- `r < training` → training
- `training <= r < training + validation` → validation
- otherwise → test

The generator is seeded once and owned by the [PartitionAssigner], which has to be
called exactly once per author, in corpus walk order, for the assignment to be reproducible.
!*/
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;

/// Dataset partition an author ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partition {
    Training,
    Validation,
    Test,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Training, Partition::Validation, Partition::Test];

    /// Directory name of the partition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Training => "training_ds",
            Partition::Validation => "validation_ds",
            Partition::Test => "test_ds",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split ratios. The test ratio is whatever remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splits {
    training: f64,
    validation: f64,
}

impl Splits {
    pub fn new(training: f64, validation: f64) -> Result<Self, Error> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(training) || !in_unit(validation) || training + validation > 1.0 {
            return Err(Error::Config(format!(
                "invalid splits: training={} validation={} (each in [0, 1], sum at most 1)",
                training, validation
            )));
        }
        Ok(Self {
            training,
            validation,
        })
    }

    /// Map a draw in `[0, 1)` to its partition.
    pub fn partition_of(&self, r: f64) -> Partition {
        if r < self.training {
            Partition::Training
        } else if r < self.training + self.validation {
            Partition::Validation
        } else {
            Partition::Test
        }
    }
}

impl Default for Splits {
    /// 80% training, 10% validation, 10% test.
    fn default() -> Self {
        Self {
            training: 0.8,
            validation: 0.1,
        }
    }
}

/// Draws partitions from an explicitly owned generator.
pub struct PartitionAssigner<R: Rng> {
    rng: R,
    splits: Splits,
}

impl PartitionAssigner<StdRng> {
    /// Assigner backed by a [StdRng] seeded with `seed`.
    pub fn seeded(seed: u64, splits: Splits) -> Self {
        Self::new(StdRng::seed_from_u64(seed), splits)
    }
}

impl<R: Rng> PartitionAssigner<R> {
    pub fn new(rng: R, splits: Splits) -> Self {
        Self { rng, splits }
    }

    /// Advance the generator once and return the partition for the current author.
    pub fn assign(&mut self) -> Partition {
        let r: f64 = self.rng.gen();
        self.splits.partition_of(r)
    }
}
