//! Serde support for navigation trees
//!
//! Leaves encode as bare strings and categories as
//! `{"type": "category", "label": ..., "items": [...]}`. Decoding goes through
//! the validator, so a `NavigationTree` obtained from any serde format upholds
//! the same invariants as one returned by [`crate::validate`].

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Category, NavigationNode, NavigationTree};
use crate::validate::CATEGORY_TYPE;

impl Serialize for NavigationNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavigationNode::Leaf(id) => serializer.serialize_str(id),
            NavigationNode::Category(category) => category.serialize(serializer),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", CATEGORY_TYPE)?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("items", &self.items)?;
        map.end()
    }
}

impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NavigationTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        crate::validate(&raw).map_err(de::Error::custom)
    }
}
