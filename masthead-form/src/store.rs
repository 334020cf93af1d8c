//! Tag store interface and the in-memory implementation.

use std::collections::HashMap;

use masthead_core::types::ModuleName;

use crate::error::FormError;

/// Read access to the external tagging service.
///
/// Answers are the ordered tag strings recorded for a
/// (module, item, type) key. An unknown key is an empty answer, not an
/// error; real store failures surface as [`FormError::Store`].
pub trait TagStore {
    fn get(
        &self,
        module: &ModuleName,
        item: &str,
        kind: Option<&str>,
    ) -> Result<Vec<String>, FormError>;
}

/// In-memory [`TagStore`] keyed by (module, item, type).
#[derive(Debug, Clone, Default)]
pub struct MemoryTagStore {
    entries: HashMap<(String, String, Option<String>), Vec<String>>,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the ordered tags for a key, replacing any previous answer.
    pub fn insert(
        &mut self,
        module: &ModuleName,
        item: &str,
        kind: Option<&str>,
        tags: Vec<String>,
    ) {
        self.entries.insert(
            (module.0.clone(), item.to_owned(), kind.map(str::to_owned)),
            tags,
        );
    }
}

impl TagStore for MemoryTagStore {
    fn get(
        &self,
        module: &ModuleName,
        item: &str,
        kind: Option<&str>,
    ) -> Result<Vec<String>, FormError> {
        Ok(self
            .entries
            .get(&(module.0.clone(), item.to_owned(), kind.map(str::to_owned)))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_empty_answer() {
        let store = MemoryTagStore::new();
        let tags = store
            .get(&ModuleName::from("blog"), "42", None)
            .expect("get");
        assert!(tags.is_empty());
    }

    #[test]
    fn insert_and_get_preserve_order() {
        let mut store = MemoryTagStore::new();
        let blog = ModuleName::from("blog");
        store.insert(
            &blog,
            "42",
            None,
            vec!["rust".to_owned(), "web".to_owned(), "cms".to_owned()],
        );
        let tags = store.get(&blog, "42", None).expect("get");
        assert_eq!(tags, vec!["rust", "web", "cms"]);
    }

    #[test]
    fn kind_is_part_of_the_key() {
        let mut store = MemoryTagStore::new();
        let blog = ModuleName::from("blog");
        store.insert(&blog, "42", Some("draft"), vec!["wip".to_owned()]);
        assert!(store.get(&blog, "42", None).expect("get").is_empty());
        assert_eq!(
            store.get(&blog, "42", Some("draft")).expect("get"),
            vec!["wip"]
        );
    }
}
