//! Fixed-capacity table of adapter names.

use serde::{Serialize, Serializer};

use super::AdapterName;

/// Maximum number of adapters one enumeration can return.
///
/// Matches `UMAD_MAX_DEVICES` from libibumad.
pub const MAX_DEVICES: usize = 32;

/// Ordered, fixed-capacity sequence of adapter names.
///
/// Entries keep the order the subsystem produced them in. The table never
/// holds more than [`capacity`](Self::capacity) names; pushes beyond that
/// are refused rather than growing the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    names: heapless::Vec<AdapterName, MAX_DEVICES>,
    capacity: usize,
}

impl NameTable {
    /// Create a table with the platform maximum capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_DEVICES)
    }

    /// Create a table holding at most `capacity` names.
    ///
    /// The capacity is clamped to `1..=MAX_DEVICES`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: heapless::Vec::new(),
            capacity: capacity.clamp(1, MAX_DEVICES),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= self.capacity
    }

    /// Append a name, handing it back if the table is full.
    pub fn push(&mut self, name: AdapterName) -> std::result::Result<(), AdapterName> {
        if self.is_full() {
            return Err(name);
        }
        self.names.push(name)
    }

    /// Remove all names, keeping the capacity.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn get(&self, index: usize) -> Option<&AdapterName> {
        self.names.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdapterName> {
        self.names.iter()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a NameTable {
    type Item = &'a AdapterName;
    type IntoIter = std::slice::Iter<'a, AdapterName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for NameTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
