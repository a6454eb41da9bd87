//! The process-portable typed list.

use serde::{Deserialize, Serialize};

/// One slot of a [`ListValue`].
///
/// Every occupied slot carries exactly one type tag. A slot that was never
/// written holds [`Null`](Self::Null), which is also what an out-of-range
/// read yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListEntry {
    /// Absent or explicitly null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A double-precision float.
    Double(f64),
    /// A string.
    String(String),
    /// A nested list.
    List(ListValue),
}

/// An ordered, indexable, resizable sequence of tagged slots.
///
/// This is the argument container carried inside a process message. Reads
/// beyond the current size are [`ListEntry::Null`]; writes beyond the current
/// size grow the list, null-filling any gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListValue {
    slots: Vec<ListEntry>,
}

impl ListValue {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A list of `len` slots, all null.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![ListEntry::Null; len],
        }
    }

    /// Current number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the list has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the slot at `index`. Out-of-range reads are null.
    #[must_use]
    pub fn get(&self, index: usize) -> &ListEntry {
        self.slots.get(index).unwrap_or(&ListEntry::Null)
    }

    /// Write the slot at `index`, growing the list if needed.
    pub fn set(&mut self, index: usize, entry: ListEntry) {
        if index >= self.slots.len() {
            self.slots.resize(index.wrapping_add(1), ListEntry::Null);
        }
        self.slots[index] = entry;
    }
}
