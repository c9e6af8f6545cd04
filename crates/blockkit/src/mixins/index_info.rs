//! Index information hook.
//!
//! External search indexes ask each block for an [`IndexDictionary`] describing
//! how it should be represented. The default contributes nothing.

use serde_json::{Map, Value};

/// Mapping a block contributes to an external index.
pub type IndexDictionary = Map<String, Value>;

pub trait IndexInfo {
    /// Index representation of this block. Returns a fresh, empty mapping unless
    /// overridden.
    fn index_dictionary(&self) -> IndexDictionary {
        IndexDictionary::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_data::DictFieldData;
    use crate::mixins::scoped_storage::ScopedStorage;
    use crate::test_utils::ToyClasses;
    use serde_json::json;

    struct IndexInfoTester;

    impl IndexInfo for IndexInfoTester {}

    struct Searchable {
        storage: ScopedStorage<DictFieldData>,
    }

    impl IndexInfo for Searchable {
        fn index_dictionary(&self) -> IndexDictionary {
            let mut dict = IndexDictionary::new();
            dict.insert("content".to_string(), Value::Object(self.storage.values()));
            dict.insert("content_type".to_string(), json!("Tester"));
            dict
        }
    }

    #[test]
    fn default_is_empty_mapping() {
        let info = IndexInfoTester.index_dictionary();
        assert!(info.is_empty());
    }

    #[test]
    fn default_returns_fresh_mapping() {
        let tester = IndexInfoTester;
        let mut first = tester.index_dictionary();
        first.insert("leak".to_string(), json!(true));
        assert!(tester.index_dictionary().is_empty());
    }

    #[test]
    fn override_contributes_field_values() {
        let toys = ToyClasses::new();
        let storage = ScopedStorage::new(&toys.storage_tester, DictFieldData::new()).unwrap();
        storage.set("field_a", json!(4)).unwrap();
        let block = Searchable { storage };

        let info = block.index_dictionary();
        assert_eq!(info["content"], json!({"field_a": 4, "field_b": null}));
        assert_eq!(info["content_type"], json!("Tester"));
    }
}
