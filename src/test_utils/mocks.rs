//! Mock implementations for testing.

use crate::error::PersistenceError;
use crate::model::AggregatedEnergyRecord;
use crate::store::EnergyStore;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, to_document, Bson, Document};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory [`EnergyStore`] that records every write, for exercising the
/// reconcile logic without a running MongoDB.
pub struct InMemoryStore {
    documents: Mutex<Vec<Document>>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    fail: bool,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            inserts: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// A store pre-seeded with one document.
    pub fn with_document(document: Document) -> Self {
        let store = Self::new();
        store.documents.lock().unwrap().push(document);
        store
    }

    /// A store whose every operation fails with a driver error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn check_fail(&self) -> Result<(), PersistenceError> {
        if self.fail {
            return Err(PersistenceError::Client(mongodb::error::Error::custom(
                "injected store failure",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EnergyStore for InMemoryStore {
    async fn find_by_date(&self, date: &str) -> Result<Option<Document>, PersistenceError> {
        self.check_fail()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|doc| doc.get_str("date").map(|d| d == date).unwrap_or(false))
            .cloned())
    }

    async fn insert(&self, record: &AggregatedEnergyRecord) -> Result<(), PersistenceError> {
        self.check_fail()?;
        let mut document = to_document(record)?;
        document.insert("_id", ObjectId::new());
        self.documents.lock().unwrap().push(document);
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update(
        &self,
        id: &Bson,
        record: &AggregatedEnergyRecord,
    ) -> Result<(), PersistenceError> {
        self.check_fail()?;
        let fields = to_document(record)?;
        let mut documents = self.documents.lock().unwrap();
        if let Some(document) = documents.iter_mut().find(|doc| doc.get("_id") == Some(id)) {
            for (key, value) in fields {
                document.insert(key, value);
            }
            self.updates.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
