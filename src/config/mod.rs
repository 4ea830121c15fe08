use mongodb::Client;
use std::env;

use crate::error::SeedResult;
use crate::store::mongo::MongoStore;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "ecommerce";

#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub mongodb_uri: String,
    pub database_name: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        SeedConfig {
            mongodb_uri: non_empty("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            database_name: non_empty("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

pub async fn connect(config: &SeedConfig) -> SeedResult<MongoStore> {
    log::info!("Connecting to MongoDB database: {}", config.database_name);

    let client = Client::with_uri_str(&config.mongodb_uri).await?;

    // The driver connects lazily; fail here rather than halfway through the clear phase.
    let names = client.list_database_names(None, None).await?;
    log::info!("Successfully connected to MongoDB. Available databases: {:?}", names);

    Ok(MongoStore::new(client, &config.database_name))
}
