use std::convert::Infallible;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};

/// Field-name to value mapping a store matches records against.
pub type Filter = Map<String, Value>;

/// External collection that can answer "does any record match this filter".
///
/// Implementations must answer without materializing full records. Their
/// errors are handed back to the caller untouched.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of the entity stored here, used in error reports.
    fn model_name(&self) -> &str {
        "Model"
    }

    /// Whether at least one record matches every entry of `filter`.
    async fn exists(&self, filter: &Filter) -> Result<bool, Self::Error>;
}

/// In-process store of JSON records.
///
/// A record matches a filter when it holds every filter key with an equal
/// value. Extra keys on the record are ignored.
#[derive(Debug)]
pub struct MemoryStore {
    model: String,
    records: Mutex<Vec<Filter>>,
}

impl MemoryStore {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, record: Filter) {
        self.records.lock().push(record);
    }

    /// Insert a record with a single field, e.g. an already issued code.
    pub fn insert_field(&self, field: &str, value: impl Into<Value>) {
        let mut record = Filter::new();
        record.insert(field.to_string(), value.into());
        self.insert(record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn contains(&self, filter: &Filter) -> bool {
        self.records
            .lock()
            .iter()
            .any(|record| record_matches(record, filter))
    }
}

fn record_matches(record: &Filter, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(key, value)| record.get(key) == Some(value))
}

#[async_trait]
impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn exists(&self, filter: &Filter) -> Result<bool, Self::Error> {
        Ok(self.contains(filter))
    }
}
