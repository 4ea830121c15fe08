use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::FindOptions,
    Client, Collection, Database,
};
use serde::Serialize;

use super::SeedStore;
use crate::error::{SeedError, SeedResult};

pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub fn new(client: Client, database_name: &str) -> Self {
        let db = client.database(database_name);
        MongoStore { client, db }
    }

    /// Releases the connection pool. Call once the run is over, whatever its outcome.
    pub async fn close(self) {
        self.client.shutdown().await;
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection::<T>(name)
    }
}

fn object_id(collection: &str, id: &Bson) -> SeedResult<ObjectId> {
    id.as_object_id().ok_or_else(|| SeedError::MissingId {
        collection: collection.to_string(),
    })
}

#[async_trait]
impl SeedStore for MongoStore {
    async fn clear(&self, collection: &str) -> SeedResult<u64> {
        let result = self
            .collection::<Document>(collection)
            .delete_many(doc! {}, None)
            .await?;
        log::debug!("Deleted {} documents from {}", result.deleted_count, collection);
        Ok(result.deleted_count)
    }

    async fn insert_one<T>(&self, collection: &str, document: &T) -> SeedResult<ObjectId>
    where
        T: Serialize + Send + Sync,
    {
        let result = self.collection::<T>(collection).insert_one(document, None).await?;
        object_id(collection, &result.inserted_id)
    }

    async fn insert_many<T>(&self, collection: &str, documents: &[T]) -> SeedResult<Vec<ObjectId>>
    where
        T: Serialize + Send + Sync,
    {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .collection::<T>(collection)
            .insert_many(documents, None)
            .await?;

        // The driver keys ids by position in the batch.
        let mut indexed: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        indexed.sort_by_key(|(index, _)| *index);
        indexed
            .iter()
            .map(|(_, id)| object_id(collection, id))
            .collect()
    }

    async fn ids(&self, collection: &str) -> SeedResult<Vec<ObjectId>> {
        let options = FindOptions::builder().projection(doc! { "_id": 1 }).build();
        let cursor = self
            .collection::<Document>(collection)
            .find(doc! {}, options)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .iter()
            .map(|document| {
                document.get_object_id("_id").map_err(|_| SeedError::MissingId {
                    collection: collection.to_string(),
                })
            })
            .collect()
    }
}
