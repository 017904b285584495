use std::fmt;

use thiserror::Error;

mod hash_table;
mod hasher;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid capacity {capacity}, a table needs at least one bucket")]
    InvalidCapacity { capacity: usize },
    #[error("Key not found: {key:?}")]
    KeyNotFound { key: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown hash strategy {0:?}, expected one of: general, bitshift, sum, prod")]
pub struct UnknownStrategy(pub String);

/// Chain-length statistics of a table, computed over every bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    pub capacity: usize,
    pub keys: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl fmt::Display for ChainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buckets: {} keys: {} min: {} max: {} avg: {:.3} stddev: {:.3}",
            self.capacity, self.keys, self.min, self.max, self.mean, self.std_dev
        )
    }
}

pub use hash_table::ChainedHashTable;
pub use hasher::{
    BitShiftHasher, GeneralStringHasher, HashStrategy, ProdHasher, Strategy, SumHasher,
};
