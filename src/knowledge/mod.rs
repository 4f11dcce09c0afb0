//! Knowledge Store: the fixed table of documentation topics.
//!
//! The built-in table is constructed once, the first time it is touched, and is
//! never mutated afterwards. Iteration always follows definition order, which
//! the retrieval engine relies on for tie-breaking.

mod builtin;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::error::{Error, Result};

/// Static definition of a topic, as written in the compiled-in table.
#[derive(Debug, Clone, Copy)]
pub struct RecordDef {
    pub key: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub keywords: &'static [&'static str],
}

/// One topic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeRecord {
    /// Unique, stable identifier.
    pub key: String,
    pub title: String,
    /// Pre-rendered answer body; may embed simple markup.
    pub content: String,
    pub keywords: Vec<String>,
}

impl KnowledgeRecord {
    pub fn new<I, S>(key: &str, title: &str, content: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&RecordDef> for KnowledgeRecord {
    fn from(def: &RecordDef) -> Self {
        Self::new(def.key, def.title, def.content, def.keywords.iter().copied())
    }
}

static BUILTIN: LazyLock<Arc<KnowledgeStore>> = LazyLock::new(|| {
    let records: Vec<KnowledgeRecord> = builtin::BUILTIN_RECORDS.iter().map(Into::into).collect();
    let index = records
        .iter()
        .enumerate()
        .map(|(pos, record)| (record.key.clone(), pos))
        .collect();
    debug!(records = records.len(), "built-in knowledge table loaded");
    Arc::new(KnowledgeStore { records, index })
});

/// Immutable, ordered collection of [`KnowledgeRecord`]s.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    records: Vec<KnowledgeRecord>,
    index: HashMap<String, usize>,
}

impl KnowledgeStore {
    /// Build a store from records in the given order.
    ///
    /// Fails with [`Error::DuplicateKey`] if two records share a key.
    pub fn new(records: Vec<KnowledgeRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.key.clone(), pos).is_some() {
                return Err(Error::DuplicateKey(record.key.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// The compiled-in documentation table.
    pub fn builtin() -> Arc<KnowledgeStore> {
        Arc::clone(&BUILTIN)
    }

    /// All records in definition order.
    pub fn lookup_all(&self) -> &[KnowledgeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeRecord> {
        self.records.iter()
    }

    pub fn get(&self, key: &str) -> Option<&KnowledgeRecord> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a KnowledgeStore {
    type Item = &'a KnowledgeRecord;
    type IntoIter = std::slice::Iter<'a, KnowledgeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
