// Copyright (c) 2025 Kaula Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Singly-linked chain used as a single bucket of the Kaula hash map.
//!
//! Each chain exclusively owns its head entry and every entry owns the next
//! one, so there are no back-references. The chain never deduplicates on
//! insertion: the owning table checks for an existing key first.

use std::fmt;

/// A key-value entry stored in a [`Chain`].
#[derive(Debug)]
pub struct Entry<V> {
    key: String,
    value: V,
    next: Option<Box<Entry<V>>>,
}

impl<V> Entry<V> {
    /// Returns the key of this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a reference to the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the stored value.
    ///
    /// Writes through this reference are visible to later lookups.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

/// A singly-linked list of entries belonging to one bucket.
///
/// # Type Parameters
///
/// * `V` - The type of the values stored in the chain.
#[derive(Debug)]
pub struct Chain<V> {
    /// First entry, `None` for an empty chain
    head: Option<Box<Entry<V>>>,

    /// Number of entries currently linked
    len: usize,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<V> Chain<V> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain holds no entries.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links a new entry in front of the current head.
    ///
    /// The caller must ensure `key` is not already present.
    pub fn add_front(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Box::new(Entry { key, value, next }));
        self.len += 1;
    }

    /// Finds the entry stored under `key`.
    pub fn find(&self, key: &str) -> Option<&Entry<V>> {
        self.iter().find(|entry| entry.key == key)
    }

    /// Finds the entry stored under `key` for in-place mutation.
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the entry stored under `key`.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the key was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.head.take() {
            None => return false,
            Some(mut head) if head.key == key => {
                self.head = head.next.take();
                self.len -= 1;
                return true;
            }
            Some(head) => self.head = Some(head),
        }

        // Trailing cursor: `prev` always points at the entry before the candidate
        let mut prev = match self.head.as_deref_mut() {
            Some(entry) => entry,
            None => return false,
        };
        loop {
            let matched = match prev.next.as_deref() {
                None => return false,
                Some(candidate) => candidate.key == key,
            };
            if matched {
                if let Some(mut removed) = prev.next.take() {
                    prev.next = removed.next.take();
                }
                self.len -= 1;
                return true;
            }
            prev = match prev.next.as_deref_mut() {
                Some(entry) => entry,
                None => return false,
            };
        }
    }

    /// Unlinks every entry, leaving an empty chain.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut entry) = cursor {
            cursor = entry.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator over the entries, head first.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowing iterator over the entries of a [`Chain`].
#[derive(Debug)]
pub struct Iter<'a, V> {
    next: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a Entry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator that moves `(key, value)` pairs out of a [`Chain`].
#[derive(Debug)]
pub struct IntoIter<V> {
    next: Option<Box<Entry<V>>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut entry = self.next.take()?;
        self.next = entry.next.take();
        let Entry { key, value, .. } = *entry;
        Some((key, value))
    }
}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        let mut cursor = self.next.take();
        while let Some(mut entry) = cursor {
            cursor = entry.next.take();
        }
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.len = 0;
        IntoIter {
            next: self.head.take(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, entry) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({}, {})", entry.key, entry.value)?;
        }
        write!(f, "]")
    }
}
