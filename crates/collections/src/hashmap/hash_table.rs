use std::fmt;

use log::{debug, trace};

use super::{ChainStats, HashStrategy, TableError};
use crate::linked_list::{Chain, Count};

/// A fixed-capacity hash table counting occurrences of string keys.
///
/// Collisions are resolved by separate chaining: every bucket holds a
/// [`Chain`], and the bucket of a key is whatever the borrowed
/// [`HashStrategy`] says it is. The table never grows, so long chains are
/// expected with a poor strategy, which is what the chain statistics are for.
pub struct ChainedHashTable<'h, H: HashStrategy + ?Sized> {
    buckets: Vec<Chain>,
    hasher: &'h H,
    items: usize,
}

impl<'h, H: HashStrategy + ?Sized> ChainedHashTable<'h, H> {
    /// Creates a table with `capacity` empty buckets, hashing with `hasher`
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCapacity`] if `capacity` is 0
    pub fn new(capacity: usize, hasher: &'h H) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }

        debug!(target: "hash_table", "new table with {capacity} buckets");
        Ok(Self {
            buckets: (0..capacity).map(|_| Chain::new()).collect(),
            hasher,
            items: 0,
        })
    }

    /// Returns the number of buckets, fixed at construction
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of distinct keys in the table
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    pub fn hasher(&self) -> &'h H {
        self.hasher
    }

    /// Sum of the counts of every key
    pub fn total_count(&self) -> Count {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Counts one more occurrence of `key`.
    ///
    /// A key seen for the first time is appended to the end of its bucket's
    /// chain with a count of 1. Returns the count of `key` after the call.
    pub fn insert(&mut self, key: &str) -> Count {
        let i = self.idx(key);
        let bucket = &mut self.buckets[i];
        let before = bucket.len();
        let count = bucket.increment_or_push(key);
        if bucket.len() != before {
            trace!(target: "hash_table", "new key {key:?} in bucket {i}");
            self.items += 1;
        }
        count
    }

    /// Returns the count of `key`
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] if the key was never inserted or got removed
    pub fn find(&self, key: &str) -> Result<Count, TableError> {
        self.buckets[self.idx(key)]
            .get(key)
            .map(|node| node.count())
            .ok_or_else(|| not_found(key))
    }

    /// Returns a mutable reference to the count of `key`.
    ///
    /// Unlike [`insert`](Self::insert) this never creates an entry.
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] if `key` is not in the table
    pub fn count_mut(&mut self, key: &str) -> Result<&mut Count, TableError> {
        let i = self.idx(key);
        self.buckets[i]
            .get_mut(key)
            .map(|node| &mut node.count)
            .ok_or_else(|| not_found(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.buckets[self.idx(key)].contains_key(key)
    }

    /// Removes `key` and returns the count it had.
    ///
    /// Removing a key that is not in the table does nothing and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<Count> {
        let i = self.idx(key);
        let node = self.buckets[i].remove(key)?;
        trace!(target: "hash_table", "removed {key:?} from bucket {i}");
        self.items -= 1;
        Some(node.count())
    }

    /// Number of keys chained in bucket `bucket`
    ///
    /// # Panics
    ///
    /// If `bucket >= self.capacity()`
    pub fn chain_length(&self, bucket: usize) -> usize {
        self.buckets[bucket].len()
    }

    /// Length of every chain, in bucket order
    pub fn chain_lengths(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.buckets.iter().map(Chain::len)
    }

    pub fn min_chain_length(&self) -> usize {
        self.chain_lengths().min().unwrap_or(0)
    }

    pub fn max_chain_length(&self) -> usize {
        self.chain_lengths().max().unwrap_or(0)
    }

    /// Mean chain length, which is also the load factor of the table
    pub fn avg_chain_length(&self) -> f64 {
        self.items as f64 / self.capacity() as f64
    }

    /// Population standard deviation of the chain lengths
    pub fn std_dev_chain(&self) -> f64 {
        let mean = self.avg_chain_length();
        let variance = self
            .chain_lengths()
            .map(|len| {
                let d = len as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.capacity() as f64;
        variance.sqrt()
    }

    /// All chain statistics at once
    pub fn stats(&self) -> ChainStats {
        ChainStats {
            capacity: self.capacity(),
            keys: self.len(),
            min: self.min_chain_length(),
            max: self.max_chain_length(),
            mean: self.avg_chain_length(),
            std_dev: self.std_dev_chain(),
        }
    }

    /// Renders every bucket on its own line, see the `Display` impl
    pub fn dump(&self) -> String {
        self.to_string()
    }

    // [adapters]

    /// Iterates over `(key, count)` pairs, bucket by bucket and in chain order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> + '_ {
        self.buckets
            .iter()
            .flat_map(Chain::iter)
            .map(|node| (node.key(), node.count()))
    }

    // [private]

    fn idx(&self, key: &str) -> usize {
        let i = self.hasher.hash(key, self.capacity());
        debug_assert!(
            i < self.capacity(),
            "hash strategy returned {i} for {} buckets",
            self.capacity()
        );
        i
    }
}

fn not_found(key: &str) -> TableError {
    TableError::KeyNotFound {
        key: key.to_string(),
    }
}

impl<H: HashStrategy + ?Sized> Clone for ChainedHashTable<'_, H> {
    /// Copies every chain node by node; the strategy stays shared
    fn clone(&self) -> Self {
        debug!(target: "hash_table", "copying table with {} keys", self.items);
        Self {
            buckets: self.buckets.clone(),
            hasher: self.hasher,
            items: self.items,
        }
    }
}

impl<H: HashStrategy + ?Sized> fmt::Display for ChainedHashTable<'_, H> {
    /// One line per bucket: `[i] |` followed by ` -> key(count)` for every node
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "[{i}] |")?;
            for node in chain {
                write!(f, " -> {node}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<H: HashStrategy + ?Sized> fmt::Debug for ChainedHashTable<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &self.buckets)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
