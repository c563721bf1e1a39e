//! Domain entities for Term Ordering

use super::value_objects::TermId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything a listing can contain.
///
/// The reorder engine only needs the term id; every other attribute of the
/// record passes through untouched. Records without an id are valid and sort
/// as unranked.
pub trait TermRecord {
    fn term_id(&self) -> Option<TermId>;
}

impl TermRecord for TermId {
    fn term_id(&self) -> Option<TermId> {
        Some(*self)
    }
}

impl<T: TermRecord> TermRecord for &T {
    fn term_id(&self) -> Option<TermId> {
        (**self).term_id()
    }
}

/// A taxonomy term as the host lists it.
///
/// Only the id and name are typed. Every other host field (`slug`,
/// `taxonomy`, `parent`, `count`, ...) is kept in `attributes` and written
/// back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Host identifier; absent for synthetic or partial rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_id: Option<TermId>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining host fields
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Term {
    pub fn new(term_id: u64, name: impl Into<String>) -> Self {
        Self {
            term_id: Some(TermId(term_id)),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// A row without an identifier.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self {
            term_id: None,
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Display name, empty when the host sent none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

impl TermRecord for Term {
    fn term_id(&self) -> Option<TermId> {
        self.term_id
    }
}
