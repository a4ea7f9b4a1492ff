//! Attribute bags carried by vertices and edges.
//!
//! Attributes are open string-keyed maps of tagged values. Matching only
//! ever compares values for equality, so `Float` compares by bit pattern
//! and the whole enum stays `Eq` and `Hash`.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single attribute value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttrValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
}

/// An attribute bag: string keys to tagged values.
pub type AttrMap = AHashMap<String, AttrValue>;

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Int(a), AttrValue::Int(b)) => a == b,
            (AttrValue::Float(a), AttrValue::Float(b)) => a.to_bits() == b.to_bits(),
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            (AttrValue::Str(a), AttrValue::Str(b)) => a == b,
            (AttrValue::Bytes(a), AttrValue::Bytes(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AttrValue {}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            AttrValue::Int(v) => v.hash(state),
            AttrValue::Float(v) => v.to_bits().hash(state),
            AttrValue::Bool(v) => v.hash(state),
            AttrValue::Str(v) => v.hash(state),
            AttrValue::Bytes(v) => v.hash(state),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<Vec<u8>> for AttrValue {
    fn from(v: Vec<u8>) -> Self {
        AttrValue::Bytes(v)
    }
}

/// Builds an attribute bag from key/value pairs.
pub fn attr_map<K, I>(entries: I) -> AttrMap
where
    K: Into<String>,
    I: IntoIterator<Item = (K, AttrValue)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

static EMPTY_ATTRS: OnceLock<AttrMap> = OnceLock::new();

/// The shared empty bag, used wherever a vertex or edge carries no attributes.
pub fn empty_attrs() -> &'static AttrMap {
    EMPTY_ATTRS.get_or_init(AttrMap::new)
}
