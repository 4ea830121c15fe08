use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use super::SeedStore;
use crate::error::SeedResult;

/// Collections held in process, for exercising the seeder without a server.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    failing: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later insert into `collection` fail like a rejected write.
    pub fn fail_inserts_into(&self, collection: &str) {
        self.failing.lock().unwrap().insert(collection.to_string());
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.documents(collection).len()
    }

    fn store<T: Serialize>(&self, collection: &str, documents: &[T]) -> SeedResult<Vec<ObjectId>> {
        if self.failing.lock().unwrap().contains(collection) {
            let rejected = io::Error::new(io::ErrorKind::ConnectionReset, format!("insert into {collection} rejected"));
            return Err(mongodb::error::Error::from(rejected).into());
        }

        let mut encoded = Vec::with_capacity(documents.len());
        let mut ids = Vec::with_capacity(documents.len());
        for document in documents {
            let mut doc = bson::to_document(document)?;
            let id = match doc.get_object_id("_id") {
                Ok(id) => id,
                Err(_) => {
                    let id = ObjectId::new();
                    doc.insert("_id", id);
                    id
                }
            };
            ids.push(id);
            encoded.push(doc);
        }

        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .extend(encoded);
        Ok(ids)
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn clear(&self, collection: &str) -> SeedResult<u64> {
        let removed = self
            .collections
            .lock()
            .unwrap()
            .remove(collection)
            .map_or(0, |docs| docs.len());
        Ok(removed as u64)
    }

    async fn insert_one<T>(&self, collection: &str, document: &T) -> SeedResult<ObjectId>
    where
        T: Serialize + Send + Sync,
    {
        let ids = self.store(collection, std::slice::from_ref(document))?;
        Ok(ids[0])
    }

    async fn insert_many<T>(&self, collection: &str, documents: &[T]) -> SeedResult<Vec<ObjectId>>
    where
        T: Serialize + Send + Sync,
    {
        self.store(collection, documents)
    }

    async fn ids(&self, collection: &str) -> SeedResult<Vec<ObjectId>> {
        Ok(self
            .documents(collection)
            .iter()
            .filter_map(|doc| doc.get_object_id("_id").ok())
            .collect())
    }
}
