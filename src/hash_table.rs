//! HashTable: separately-chained string→i32 map with arena-linked chains.

use crate::config::{ConfigError, TableConfig, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};
use crate::hash::slot_index;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use slotmap::{DefaultKey, SlotMap};
use std::io;

#[derive(Debug)]
struct Entry {
    key: Box<str>,
    value: i32,
    next: Option<DefaultKey>,
}

impl Entry {
    fn new(key: &str, value: i32) -> Self {
        Self {
            key: key.into(),
            value,
            next: None,
        }
    }
}

/// A hash table from string keys to `i32` values.
///
/// Each slot holds the head of a chain; entries are stored in an arena and
/// linked by arena key, so growth relinks entries without moving or copying
/// their keys.
pub struct HashTable {
    slots: Vec<Option<DefaultKey>>, // chain heads, len == capacity
    entries: SlotMap<DefaultKey, Entry>,
    max_load_factor: f64,
}

impl HashTable {
    /// Empty table with 33 slots and a 0.75 load threshold.
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR)
    }

    /// Empty table with `capacity` slots. Zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(capacity.max(1), DEFAULT_MAX_LOAD_FACTOR)
    }

    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.initial_capacity, config.max_load_factor))
    }

    fn build(capacity: usize, max_load_factor: f64) -> Self {
        tracing::trace!(capacity, max_load_factor, "created hash table");
        Self {
            slots: vec![None; capacity],
            entries: SlotMap::with_key(),
            max_load_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    fn over_threshold(&self, len: usize, capacity: usize) -> bool {
        len as f64 > capacity as f64 * self.max_load_factor
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let mut cur = self.slots[slot_index(key, self.capacity())];
        while let Some(k) = cur {
            let entry = &self.entries[k];
            if &*entry.key == key {
                return Some(k);
            }
            cur = entry.next;
        }
        None
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.find(key).map(|k| self.entries[k].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Insert or update `key`. Returns the previous value on update.
    ///
    /// The load check runs before the lookup, so a table sitting at the
    /// threshold doubles even when `key` is already present.
    pub fn set(&mut self, key: &str, value: i32) -> Option<i32> {
        if self.over_threshold(self.len() + 1, self.capacity()) {
            self.grow();
        }

        let index = slot_index(key, self.capacity());
        let Some(mut cur) = self.slots[index] else {
            let k = self.entries.insert(Entry::new(key, value));
            self.slots[index] = Some(k);
            return None;
        };

        // Walk to the matching entry or the tail.
        loop {
            let entry = &mut self.entries[cur];
            if &*entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
            match entry.next {
                Some(next) => cur = next,
                None => break,
            }
        }

        let k = self.entries.insert(Entry::new(key, value));
        self.entries[cur].next = Some(k);
        None
    }

    /// Unlink `key` from its chain and return its value.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let index = slot_index(key, self.capacity());
        let head = self.slots[index]?;

        if &*self.entries[head].key == key {
            self.slots[index] = self.entries[head].next;
            return self.entries.remove(head).map(|e| e.value);
        }

        let mut prev = head;
        while let Some(cur) = self.entries[prev].next {
            if &*self.entries[cur].key == key {
                self.entries[prev].next = self.entries[cur].next;
                return self.entries.remove(cur).map(|e| e.value);
            }
            prev = cur;
        }
        None
    }

    /// Remove `key`, reporting whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.fill(None);
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity().saturating_mul(2);
        if new_capacity > self.capacity() {
            self.resize(new_capacity);
        }
    }

    /// Grow by doubling until `additional` more keys fit without another
    /// resize.
    pub fn reserve(&mut self, additional: usize) {
        let target = self.len().saturating_add(additional);
        let mut new_capacity = self.capacity();
        while self.over_threshold(target, new_capacity) {
            let next = new_capacity.saturating_mul(2);
            if next == new_capacity {
                break;
            }
            new_capacity = next;
        }
        if new_capacity != self.capacity() {
            self.resize(new_capacity);
        }
    }

    /// Rebuild the slot array with `new_capacity` slots (minimum one).
    ///
    /// Old slots are visited in index order and each chain front to back;
    /// every entry is appended to the tail of its new chain, so relative
    /// order among keys that still share a slot is preserved.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        let old_capacity = self.capacity();
        let old_slots = mem::replace(&mut self.slots, vec![None; new_capacity]);
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_capacity];

        for head in old_slots {
            let mut cur = head;
            while let Some(k) = cur {
                let entry = &mut self.entries[k];
                cur = entry.next.take();
                let index = slot_index(&entry.key, new_capacity);
                match tails[index] {
                    Some(tail) => self.entries[tail].next = Some(k),
                    None => self.slots[index] = Some(k),
                }
                tails[index] = Some(k);
            }
        }

        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.len(),
            "resized hash table"
        );
    }

    /// Live bindings in slot order, then chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            entries: &self.entries,
            cur: None,
            remaining: self.len(),
        }
    }

    /// Text rendering of every binding, one `[key] : <value>` line each.
    pub fn dump(&self) -> Dump<'_> {
        Dump { table: self }
    }

    pub fn dump_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        for (key, value) in self.iter() {
            writeln!(out, "[{}] : <{}>", key, value)?;
        }
        Ok(())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: AsRef<str>> Extend<(K, i32)> for HashTable {
    fn extend<I: IntoIterator<Item = (K, i32)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>> FromIterator<(K, i32)> for HashTable {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over `(key, value)` pairs of a `HashTable`.
pub struct Iter<'a> {
    slots: core::slice::Iter<'a, Option<DefaultKey>>,
    entries: &'a SlotMap<DefaultKey, Entry>,
    cur: Option<DefaultKey>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        loop {
            if let Some(k) = self.cur {
                let entry = &entries[k];
                self.cur = entry.next;
                self.remaining -= 1;
                return Some((&*entry.key, entry.value));
            }
            self.cur = *self.slots.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// `Display` adapter returned by `HashTable::dump`.
pub struct Dump<'a> {
    table: &'a HashTable,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.table.iter() {
            writeln!(f, "[{}] : <{}>", key, value)?;
        }
        Ok(())
    }
}
