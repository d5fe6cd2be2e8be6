//! Input feature vectors.

use serde::{Deserialize, Serialize};

/// One entry of a feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureEntry {
    /// A named slot bound only at execution time.
    Symbol(String),
    /// A concrete value.
    Value(f64),
}

impl FeatureEntry {
    /// The numeric value, if this entry is concrete.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureEntry::Value(v) => Some(*v),
            FeatureEntry::Symbol(_) => None,
        }
    }
}

/// A named, ordered sequence of feature entries.
///
/// Entry `i` is tied to input coordinate `i`; the order never changes once the
/// vector is declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    name: String,
    entries: Vec<FeatureEntry>,
}

impl FeatureVector {
    /// Create a fully numeric vector.
    pub fn from_values(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            entries: values.into_iter().map(FeatureEntry::Value).collect(),
        }
    }

    /// Create a symbolic vector with slots `name[0..len]`.
    pub fn symbolic(name: impl Into<String>, len: usize) -> Self {
        let name = name.into();
        let entries = (0..len)
            .map(|i| FeatureEntry::Symbol(format!("{name}[{i}]")))
            .collect();
        Self { name, entries }
    }

    /// Create a vector from explicit entries.
    pub fn from_entries(name: impl Into<String>, entries: Vec<FeatureEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Name of the vector.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&FeatureEntry> {
        self.entries.get(index)
    }

    /// Numeric value at `index`, if present and concrete.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.entries.get(index).and_then(FeatureEntry::as_f64)
    }

    /// All values, if every entry is concrete.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.entries.iter().map(FeatureEntry::as_f64).collect()
    }

    /// Check if any entry is symbolic.
    pub fn is_symbolic(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, FeatureEntry::Symbol(_)))
    }

    /// Display name of entry `index`: the slot name for symbols, the value
    /// otherwise.
    pub fn entry_name(&self, index: usize) -> String {
        match self.entries.get(index) {
            Some(FeatureEntry::Symbol(name)) => name.clone(),
            Some(FeatureEntry::Value(v)) => format!("{v}"),
            None => format!("{}[{index}]", self.name),
        }
    }
}
