//! Record - the input/output shape of the index.
//!
//! A [`Record`] is what callers hand in and what every query hands back:
//! an id, a parent reference and an optional type tag. The type tag is
//! tri-state so that "no `type` field" and `"type": null` survive a trip
//! through the index unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{ItemId, ROOT_SENTINEL};

/// Reference from a record to its parent.
///
/// The string `"root"` is reserved: it always decodes to [`ParentRef::Root`],
/// never to an item reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentRef {
    /// The record is the tree root.
    Root,
    /// The record hangs below the item with this id.
    Item(ItemId),
}

impl ParentRef {
    /// True if this references `id` (never true for [`ParentRef::Root`]).
    #[inline]
    pub fn matches(&self, id: &ItemId) -> bool {
        matches!(self, ParentRef::Item(parent) if parent == id)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self, ParentRef::Root)
    }
}

impl From<ItemId> for ParentRef {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Str(s) if s == ROOT_SENTINEL => ParentRef::Root,
            other => ParentRef::Item(other),
        }
    }
}

macro_rules! parent_ref_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParentRef {
                fn from(id: $ty) -> Self {
                    ParentRef::from(ItemId::from(id))
                }
            }
        )*
    };
}

parent_ref_from!(i64, i32, u32, &str, String);

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentRef::Root => f.write_str(ROOT_SENTINEL),
            ParentRef::Item(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for ParentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParentRef::Root => serializer.serialize_str(ROOT_SENTINEL),
            ParentRef::Item(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ItemId::deserialize(deserializer).map(ParentRef::from)
    }
}

/// Optional type tag of a record.
///
/// `Absent` and `Null` are distinct: an absent tag is omitted on output,
/// a null tag is written back as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ItemType {
    #[default]
    Absent,
    Null,
    Value(String),
}

impl ItemType {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, ItemType::Absent)
    }

    /// Tag value if one is set.
    #[inline]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ItemType::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemType::Value(v) => serializer.serialize_str(v),
            ItemType::Absent | ItemType::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ItemType {
    // A missing field never reaches here; `#[serde(default)]` makes it Absent.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(v) => ItemType::Value(v),
            None => ItemType::Null,
        })
    }
}

/// One flat, parent-referencing record.
///
/// # Example
/// ```
/// use treeindex::{ParentRef, Record};
///
/// let root = Record::new(1, ParentRef::Root);
/// let leaf = Record::new(7, 4).with_null_type();
///
/// assert!(root.is_root());
/// assert_eq!(
///     serde_json::to_string(&leaf).unwrap(),
///     r#"{"id":7,"parent":4,"type":null}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: ItemId,
    pub parent: ParentRef,
    #[serde(rename = "type", default, skip_serializing_if = "ItemType::is_absent")]
    pub item_type: ItemType,
}

impl Record {
    /// Create a record with no type tag.
    pub fn new(id: impl Into<ItemId>, parent: impl Into<ParentRef>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            item_type: ItemType::Absent,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = ItemType::Value(item_type.into());
        self
    }

    pub fn with_null_type(mut self) -> Self {
        self.item_type = ItemType::Null;
        self
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_root()
    }
}
