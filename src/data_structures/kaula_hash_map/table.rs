// Copyright (c) 2025 Kaula Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Kaula separate-chaining hash map.

use std::fmt;

use tracing::debug;

use crate::data_structures::kaula_hash_map::chain::Chain;
use crate::data_structures::kaula_hash_map::error::{KaulaHashMapError, Result};
use crate::data_structures::kaula_hash_map::hash::KeyHasher;

/// A hash map from string keys to values that resolves collisions by chaining.
///
/// The bucket for a key is `hasher.hash_key(key) % capacity`. The table
/// never grows on its own; callers decide when to [`resize_table`].
///
/// # Type Parameters
///
/// * `V` - The value type.
/// * `H` - The injected hash function, see [`KeyHasher`].
///
/// [`resize_table`]: KaulaHashMap::resize_table
#[derive(Debug)]
pub struct KaulaHashMap<V, H> {
    /// One chain per bucket, `buckets.len() == capacity`
    buckets: Vec<Chain<V>>,

    /// Number of buckets
    capacity: usize,

    /// Caller supplied hash function
    hasher: H,

    /// Total number of live keys across all chains
    size: usize,
}

/// Computes the bucket a key falls into for the given capacity.
fn bucket_index<H: KeyHasher>(hasher: &H, key: &str, capacity: usize) -> usize {
    // The remainder is below `capacity`, so narrowing back to usize is lossless
    (hasher.hash_key(key) % capacity as u64) as usize
}

/// Allocates `capacity` empty chains.
fn allocate_buckets<V>(capacity: usize) -> Vec<Chain<V>> {
    std::iter::repeat_with(Chain::new).take(capacity).collect()
}

impl<V, H: KeyHasher> KaulaHashMap<V, H> {
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of buckets, must be greater than zero.
    /// * `hasher` - Function used to place keys into buckets.
    ///
    /// # Returns
    ///
    /// * `Ok(KaulaHashMap)` - An empty table.
    /// * `Err(KaulaHashMapError::InvalidArgument)` - If `capacity` is zero.
    pub fn new(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(KaulaHashMapError::zero_capacity("new"));
        }
        Ok(Self {
            buckets: allocate_buckets(capacity),
            capacity,
            hasher,
            size: 0,
        })
    }

    /// Returns the number of keys stored in the table.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the table stores no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the injected hash function.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    fn index_of(&self, key: &str) -> usize {
        bucket_index(&self.hasher, key, self.capacity)
    }

    /// Associates `value` with `key`.
    ///
    /// An existing value is overwritten in place and the size is unchanged.
    /// Otherwise a new entry is linked at the front of the key's chain.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let index = self.index_of(&key);
        let chain = &mut self.buckets[index];
        match chain.find_mut(&key) {
            Some(entry) => *entry.value_mut() = value,
            None => {
                chain.add_front(key, value);
                self.size += 1;
            }
        }
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.index_of(key)]
            .find(key)
            .map(|entry| entry.value())
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.index_of(key);
        self.buckets[index]
            .find_mut(key)
            .map(|entry| entry.value_mut())
    }

    /// Removes `key` from the table.
    ///
    /// # Returns
    ///
    /// `true` if the key was present and has been removed, `false` otherwise.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.index_of(key);
        let removed = self.buckets[index].remove(key);
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns `true` if `key` is stored in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        debug!(capacity = self.capacity, removed = self.size, "Cleared table");
        self.size = 0;
    }

    /// Returns the number of buckets whose chain is empty.
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Returns the load factor, `len / capacity`.
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Rebuilds the table with `new_capacity` buckets.
    ///
    /// Every entry is rehashed with the same hash function and moved into a
    /// freshly allocated bucket array. The size is unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The table now has `new_capacity` buckets.
    /// * `Err(KaulaHashMapError::InvalidArgument)` - If `new_capacity` is
    ///   zero. The table is left untouched.
    pub fn resize_table(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(KaulaHashMapError::zero_capacity("resize_table"));
        }

        let mut buckets = allocate_buckets(new_capacity);
        for chain in self.buckets.drain(..) {
            for (key, value) in chain {
                let index = bucket_index(&self.hasher, &key, new_capacity);
                buckets[index].add_front(key, value);
            }
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity,
            size = self.size,
            "Resized table"
        );
        self.buckets = buckets;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<V, H> KaulaHashMap<V, H> {
    /// Returns an iterator over all `(key, value)` pairs.
    ///
    /// Entries are visited bucket by bucket, and within a bucket from the
    /// most recently inserted key. No other ordering is guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl<V: fmt::Display, H> fmt::Display for KaulaHashMap<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {chain}")?;
        }
        Ok(())
    }
}
