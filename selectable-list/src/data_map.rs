//! Ordered id → data map.

use indexmap::IndexMap;

/// Maps item ids to their data, keeping insertion order.
///
/// Keys are unique: inserting an id that is already present is refused and
/// leaves the existing value in place.
#[derive(Debug, Clone)]
pub struct DataMap<T> {
    values: IndexMap<String, T>,
}

impl<T> Default for DataMap<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<T> DataMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.values.get(id)
    }

    /// Insert a new entry at the end. Returns false if the id already exists.
    pub fn insert(&mut self, id: impl Into<String>, value: T) -> bool {
        let id = id.into();
        if self.values.contains_key(&id) {
            return false;
        }
        self.values.insert(id, value);
        true
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.values.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }
}
