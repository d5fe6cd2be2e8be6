//! Explicit symbolic-parameter namespace.
//!
//! Embeddings never invent parameter names on their own. A caller owns a
//! [`ParameterTable`], hands it to the builder, and the builder allocates the
//! exact number of slots it needs as a named vector. Names are unique within
//! a table, so two programs built against one table never alias a parameter.

use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::feature::FeatureVector;

/// One allocated parameter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSlot {
    /// Fully qualified slot name, e.g. `x[3]`.
    pub name: String,
    /// Name of the owning vector.
    pub vector: String,
    /// Position within the owning vector.
    pub index: usize,
}

/// Ordered registry of allocated parameter slots.
#[derive(Debug, Clone, Default)]
pub struct ParameterTable {
    slots: Vec<ParameterSlot>,
    /// Vector name -> (first slot, length).
    vectors: FxHashMap<String, (usize, usize)>,
}

impl ParameterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `len` slots under `name` and return them as a symbolic vector.
    pub fn allocate_vector(&mut self, name: &str, len: usize) -> IrResult<FeatureVector> {
        if !is_identifier(name) {
            return Err(IrError::InvalidVectorName(name.to_string()));
        }
        if self.vectors.contains_key(name) {
            return Err(IrError::DuplicateParameter(name.to_string()));
        }
        let vector = FeatureVector::symbolic(name, len);
        self.vectors
            .insert(name.to_string(), (self.slots.len(), len));
        self.slots
            .extend((0..len).map(|index| ParameterSlot {
                name: vector.entry_name(index),
                vector: name.to_string(),
                index,
            }));
        Ok(vector)
    }

    /// Total number of allocated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in allocation order.
    pub fn slots(&self) -> &[ParameterSlot] {
        &self.slots
    }

    /// Check if a vector with this name exists.
    pub fn contains_vector(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }

    /// Slots belonging to one vector.
    pub fn vector_slots(&self, name: &str) -> Option<&[ParameterSlot]> {
        self.vectors
            .get(name)
            .map(|&(start, len)| &self.slots[start..start + len])
    }

    /// Global position of a slot by its qualified name.
    pub fn position(&self, slot_name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == slot_name)
    }
}

/// Check that `name` is an ASCII identifier: a letter or `_`, then letters,
/// digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
