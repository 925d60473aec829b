//! Ordered key/value tag set.
//!
//! [`KeyValueTags`] is backed by a `BTreeMap`, so every enumeration (keys,
//! chunks, conversions) walks tags in ascending key order. Generated code
//! relies on that to issue the same sequence of batched calls for the same
//! input every time.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::TagsError;

/// Key prefix reserved for tags owned by AWS rather than the user.
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";

/// A single key/value tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A set of tags keyed by tag key. Later insertions of the same key win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueTags {
    tags: BTreeMap<String, String>,
}

impl KeyValueTags {
    /// Build a tag set from any supported input shape.
    ///
    /// See [`crate::normalize`] for the accepted shapes.
    pub fn new(tags: impl Into<KeyValueTags>) -> Self {
        tags.into()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    /// Insert a tag, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.tags.insert(key.into(), value.into())
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Tags present in `self` whose keys are absent from `other`.
    pub fn removed(&self, other: &KeyValueTags) -> KeyValueTags {
        self.tags
            .iter()
            .filter(|(k, _)| !other.tags.contains_key(*k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Tags in `other` that are new to `self` or carry a different value.
    pub fn updated(&self, other: &KeyValueTags) -> KeyValueTags {
        other
            .tags
            .iter()
            .filter(|(k, v)| self.tags.get(*k) != Some(*v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Split into consecutive sets of at most `size` tags, in key order.
    ///
    /// An empty set yields no chunks.
    pub fn chunks(&self, size: usize) -> Result<Vec<KeyValueTags>, TagsError> {
        if size == 0 {
            return Err(TagsError::InvalidChunkSize { size });
        }

        let pairs: Vec<(&String, &String)> = self.tags.iter().collect();
        let chunks = pairs
            .chunks(size)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|(k, v)| ((*k).clone(), (*v).clone()))
                    .collect()
            })
            .collect();

        Ok(chunks)
    }

    /// Drop tags whose key starts with the reserved `aws:` prefix.
    pub fn ignore_aws(&self) -> KeyValueTags {
        self.ignore_prefixes(&[AWS_TAG_KEY_PREFIX])
    }

    /// Drop tags whose key starts with any of `prefixes`.
    pub fn ignore_prefixes(&self, prefixes: &[&str]) -> KeyValueTags {
        self.tags
            .iter()
            .filter(|(k, _)| !prefixes.iter().any(|p| k.starts_with(p)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Tag keys in key order.
    pub fn keys(&self) -> Vec<String> {
        self.tags.keys().cloned().collect()
    }

    /// Plain map view for APIs that take a generic string map.
    pub fn map(&self) -> HashMap<String, String> {
        self.tags
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Tags as a list of [`Tag`] values in key order.
    pub fn to_tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|(k, v)| Tag::new(k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = KeyValueTags::default();
        for (k, v) in iter {
            tags.insert(k, v);
        }
        tags
    }
}

impl FromIterator<Tag> for KeyValueTags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().map(|tag| (tag.key, tag.value)).collect()
    }
}

impl IntoIterator for KeyValueTags {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyValueTags {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
