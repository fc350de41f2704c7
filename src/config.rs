//! Table construction parameters.

use thiserror::Error;

/// Slot count of a table built with `HashTable::new`. Odd and not a power
/// of two so strided keys spread across slots.
pub const DEFAULT_CAPACITY: usize = 33;

/// Growth threshold as `len / capacity`.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    #[error("max load factor must be finite and positive, got {0}")]
    InvalidLoadFactor(f64),
}

/// Parameters for `HashTable::with_config`.
///
/// ```
/// use fnv_chain_table::{HashTable, TableConfig};
///
/// let cfg = TableConfig::new().initial_capacity(8).max_load_factor(1.5);
/// let table = HashTable::with_config(cfg).unwrap();
/// assert_eq!(table.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub(crate) initial_capacity: usize,
    pub(crate) max_load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Load factors above 1.0 are allowed; chains simply get longer before
    /// the table doubles.
    pub fn max_load_factor(mut self, lf: f64) -> Self {
        self.max_load_factor = lf;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(ConfigError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_table() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.initial_capacity, 33);
        assert_eq!(cfg.max_load_factor, 0.75);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = TableConfig::new().initial_capacity(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn bad_load_factors_rejected() {
        for lf in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = TableConfig::new().max_load_factor(lf);
            match cfg.validate() {
                Err(ConfigError::InvalidLoadFactor(_)) => {}
                other => panic!("unexpected result for {lf}: {:?}", other),
            }
        }
    }

    #[test]
    fn error_messages_render() {
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "initial capacity must be at least 1"
        );
        assert_eq!(
            ConfigError::InvalidLoadFactor(-2.0).to_string(),
            "max load factor must be finite and positive, got -2"
        );
    }
}
