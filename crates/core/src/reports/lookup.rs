//! Identifier indexes for foreign-key joins.

use std::collections::HashMap;
use std::hash::Hash;

/// Builds a map from key to the first element carrying that key.
///
/// Later duplicates are ignored, so lookups match a first-match scan.
pub fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(key(item)).or_insert(item);
    }
    index
}

/// Groups elements by key, keeping input order within each group.
pub fn group_by<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<&T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<&T>> = HashMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}
