//! Fixed-capacity, separate-chaining hash table that counts string keys.
//!
//! The bucket index of every key comes from a pluggable [`HashStrategy`],
//! so the same input can be loaded into tables with different strategies and
//! their chain-length statistics compared.
//!
//! ```
//! use collections::{ChainedHashTable, GeneralStringHasher, TableError};
//!
//! let hasher = GeneralStringHasher;
//! let mut table = ChainedHashTable::new(5, &hasher).unwrap();
//!
//! table.insert("a");
//! table.insert("b");
//! table.insert("a");
//! assert_eq!(table.find("a"), Ok(2));
//!
//! table.remove("a");
//! assert!(matches!(table.find("a"), Err(TableError::KeyNotFound { .. })));
//! assert_eq!(table.find("b"), Ok(1));
//! ```
mod macros;

pub mod hashmap;
pub mod linked_list;

pub use hashmap::{
    BitShiftHasher, ChainStats, ChainedHashTable, GeneralStringHasher, HashStrategy, ProdHasher,
    Strategy, SumHasher, TableError, UnknownStrategy,
};
pub use linked_list::Count;
