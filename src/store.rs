use crate::config::MongoConfig;
use crate::error::PersistenceError;
use crate::model::AggregatedEnergyRecord;
use async_trait::async_trait;
use mongodb::bson::{doc, to_document, Bson, Document};
use mongodb::{Client, Collection};

/// Persistence boundary for aggregated day records.
///
/// One document per calendar day, keyed logically by `date`. The pipeline
/// performs at most one lookup and one write per run and never deletes.
#[async_trait]
pub trait EnergyStore: Send + Sync {
    /// Looks up the stored document for a calendar day, if any.
    async fn find_by_date(&self, date: &str) -> Result<Option<Document>, PersistenceError>;

    /// Inserts a freshly computed record as a new document.
    async fn insert(&self, record: &AggregatedEnergyRecord) -> Result<(), PersistenceError>;

    /// Overwrites the fields of the document with the given identity.
    async fn update(
        &self,
        id: &Bson,
        record: &AggregatedEnergyRecord,
    ) -> Result<(), PersistenceError>;
}

/// MongoDB-backed store.
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(config: MongoConfig) -> Result<Self, PersistenceError> {
        let client = Client::with_uri_str(&config.url).await?;
        let collection = client
            .database(&config.database)
            .collection(&config.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl EnergyStore for MongoStore {
    async fn find_by_date(&self, date: &str) -> Result<Option<Document>, PersistenceError> {
        Ok(self.collection.find_one(doc! { "date": date }).await?)
    }

    async fn insert(&self, record: &AggregatedEnergyRecord) -> Result<(), PersistenceError> {
        self.collection.insert_one(to_document(record)?).await?;
        Ok(())
    }

    async fn update(
        &self,
        id: &Bson,
        record: &AggregatedEnergyRecord,
    ) -> Result<(), PersistenceError> {
        self.collection
            .update_one(
                doc! { "_id": id.clone() },
                doc! { "$set": to_document(record)? },
            )
            .await?;
        Ok(())
    }
}
