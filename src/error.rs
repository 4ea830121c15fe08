use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("generated document is invalid: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("insert into '{collection}' returned no ObjectId")]
    MissingId { collection: String },
}

pub type SeedResult<T> = Result<T, SeedError>;
