//! Insertion-ordered mapping from field name to shared field declaration.

use std::collections::HashMap;
use std::ops::Index;
use std::sync::Arc;

use super::Field;

/// Ordered `name -> Arc<Field>` mapping.
///
/// Re-inserting an existing name replaces the declaration but keeps the
/// position of the first insertion.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: Vec<(String, Arc<Field>)>,
    positions: HashMap<String, usize>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field under `name`, returning the declaration it replaced.
    pub fn insert(&mut self, name: impl Into<String>, field: Arc<Field>) -> Option<Arc<Field>> {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, field)),
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, field));
                None
            }
        }
    }

    /// Remove `name`; later entries move up one position.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Field>> {
        let pos = self.positions.remove(name)?;
        let (_, field) = self.entries.remove(pos);
        for later in self.positions.values_mut().filter(|p| **p > pos) {
            *later -= 1;
        }
        Some(field)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Field>> {
        self.positions.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Field>)> {
        self.entries.iter().map(|(name, field)| (name.as_str(), field))
    }
}

impl Index<&str> for FieldMap {
    type Output = Arc<Field>;

    fn index(&self, name: &str) -> &Self::Output {
        self.get(name)
            .unwrap_or_else(|| panic!("no field named {:?}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Scope;

    fn field(name: &str) -> Arc<Field> {
        Arc::new(Field::integer(name, Scope::Settings))
    }

    #[test]
    fn keeps_insertion_order() {
        let mut map = FieldMap::new();
        map.insert("b", field("b"));
        map.insert("a", field("a"));
        map.insert("c", field("c"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut map = FieldMap::new();
        let first = field("a");
        let second = field("a");
        map.insert("a", first.clone());
        map.insert("b", field("b"));
        let replaced = map.insert("a", second.clone()).unwrap();

        assert!(Arc::ptr_eq(&replaced, &first));
        assert!(Arc::ptr_eq(&map["a"], &second));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut map = FieldMap::new();
        for name in ["a", "b", "c"] {
            map.insert(name, field(name));
        }
        assert!(map.remove("a").is_some());
        assert!(map.remove("a").is_none());
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(map["c"].name(), "c");
        map.insert("a", field("a"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn missing_name_is_none() {
        let map = FieldMap::new();
        assert!(map.is_empty());
        assert!(map.get("missing").is_none());
        assert!(!map.contains_key("missing"));
    }

    #[test]
    #[should_panic(expected = "no field named")]
    fn index_panics_on_missing_name() {
        let map = FieldMap::new();
        let _ = &map["missing"];
    }
}
