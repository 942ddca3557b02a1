//! Record identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a record, either by integer or by string.
///
/// Equality is strict: `ItemId::Int(1)` and `ItemId::Str("1")` are
/// different ids. On the wire it is untagged, so a JSON number becomes
/// [`ItemId::Int`] and a JSON string becomes [`ItemId::Str`].
///
/// Numeric ids must be integers that fit in an `i64`. JSON numbers with a
/// fractional part or exponent (`1.0`, `1e3`) and integers above
/// `i64::MAX` are rejected when decoding; pass such ids as strings.
///
/// # Example
/// ```
/// use treeindex::ItemId;
///
/// assert_eq!(ItemId::from(7), ItemId::Int(7));
/// assert_ne!(ItemId::from(7), ItemId::from("7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl ItemId {
    /// Integer value, if this is an integer id.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemId::Int(v) => Some(*v),
            ItemId::Str(_) => None,
        }
    }

    /// String value, if this is a string id.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemId::Int(_) => None,
            ItemId::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(v) => write!(f, "{}", v),
            ItemId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(v: i64) -> Self {
        ItemId::Int(v)
    }
}

impl From<i32> for ItemId {
    fn from(v: i32) -> Self {
        ItemId::Int(i64::from(v))
    }
}

impl From<u32> for ItemId {
    fn from(v: u32) -> Self {
        ItemId::Int(i64::from(v))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}
