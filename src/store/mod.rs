pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::SeedResult;

pub const USERS: &str = "users";
pub const VENDORS: &str = "vendors";
pub const PRODUCTS: &str = "products";

/// Write access to the document store the seeder populates.
///
/// Identifiers are assigned by the store on insertion and handed back in
/// insertion order.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Deletes every document in `collection`, returning how many were removed.
    async fn clear(&self, collection: &str) -> SeedResult<u64>;

    async fn insert_one<T>(&self, collection: &str, document: &T) -> SeedResult<ObjectId>
    where
        T: Serialize + Send + Sync;

    async fn insert_many<T>(&self, collection: &str, documents: &[T]) -> SeedResult<Vec<ObjectId>>
    where
        T: Serialize + Send + Sync;

    /// Lists the `_id` of every document currently in `collection`.
    async fn ids(&self, collection: &str) -> SeedResult<Vec<ObjectId>>;
}
