//! fnv-chain-table: a separately-chained hash table from string keys to
//! `i32` values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable map whose slot placement is reproducible
//!   from the key bytes alone, so tables can be inspected and compared
//!   slot by slot.
//! - Pieces:
//!   - `hash`: 32-bit FNV-shaped byte mix (`hash_key`); slot index is
//!     `hash % capacity`.
//!   - `config`: `TableConfig` (initial capacity, max load factor) and
//!     `ConfigError`.
//!   - `HashTable`: slot array of chain heads plus an entry arena.
//!
//! Layout
//! - Entries live in a `SlotMap`; a slot stores the arena key of its chain
//!   head and every entry stores the arena key of its successor. Chains are
//!   therefore singly linked without owning pointers, and dropping the
//!   table frees every entry iteratively regardless of chain length.
//! - New keys are appended at the tail of their chain; insertion order
//!   within a slot is preserved across deletes and resizes.
//!
//! Growth
//! - `set` checks `len + 1 > capacity * max_load_factor` before looking the
//!   key up and doubles the slot array when it trips. Default capacity is
//!   33 with a 0.75 threshold.
//! - Resizing walks old slots in index order and relinks each entry onto
//!   the tail of its new chain. No hash is cached per entry; the slot is
//!   recomputed from the key.
//!
//! Absence and failure
//! - Lookups return `Option<i32>`; every `i32` is a valid value.
//! - A successful delete always decrements `len`, including when the
//!   deleted key was alone in its slot.
//! - Allocation failure aborts via the global allocator; there is no
//!   partially built table to recover.
//!
//! Notes and non-goals
//! - Single-threaded API: mutation takes `&mut self`. Share behind a mutex
//!   if needed.
//! - Iteration order is slot order then chain order, nothing more.
//! - Values are `i32` only.

mod config;
pub mod hash;
mod hash_table;
mod hash_table_proptest;

// Public surface
pub use config::{ConfigError, TableConfig, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};
pub use hash_table::{Dump, HashTable, Iter};
