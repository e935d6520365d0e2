//! Sparse (PATCH-like) updates.
//!
//! An incoming entity is merged onto the stored one field by field: a field
//! holding its type's zero value (empty string, `None` date, `0`, empty list)
//! keeps the stored value, anything else replaces it. A consequence is that a
//! scalar field can never be cleared through an update.

use crate::models::{Performer, Work};

/// "Was this field left unset?" for the field types used by the catalog.
pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Keep `existing` unless `incoming` carries a non-zero value.
pub fn keep_or_replace<T: ZeroValue>(existing: T, incoming: T) -> T {
    if incoming.is_zero() {
        existing
    } else {
        incoming
    }
}

/// Apply a partially populated entity onto a stored one.
///
/// The stored entity's identity always wins; ids in the incoming value are
/// ignored.
pub trait PartialMerge: Sized {
    fn merge_from(self, incoming: Self) -> Self;
}

impl PartialMerge for Performer {
    fn merge_from(self, incoming: Self) -> Self {
        Performer {
            id: self.id,
            name: keep_or_replace(self.name, incoming.name),
            gender: keep_or_replace(self.gender, incoming.gender),
            birth_date: keep_or_replace(self.birth_date, incoming.birth_date),
        }
    }
}

impl PartialMerge for Work {
    /// The performer list is replaced wholesale when a non-empty one is
    /// supplied, never merged element-wise.
    fn merge_from(self, incoming: Self) -> Self {
        Work {
            id: self.id,
            title: keep_or_replace(self.title, incoming.title),
            description: keep_or_replace(self.description, incoming.description),
            release_date: keep_or_replace(self.release_date, incoming.release_date),
            rating: keep_or_replace(self.rating, incoming.rating),
            performers: keep_or_replace(self.performers, incoming.performers),
        }
    }
}
