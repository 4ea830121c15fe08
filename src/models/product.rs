use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::Category;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1))]
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: f64,
    #[validate(range(min = 0, max = 100))]
    pub discount: i32,
    pub top_category: Category,
    pub sub_category: String,
    #[validate(length(min = 1))]
    pub colors: Vec<String>,
    #[validate(length(min = 1))]
    pub sizes: Vec<String>,
    #[validate(range(min = 0))]
    pub stock: i32,
    pub vendor: ObjectId,
    #[validate(range(min = 0.0, max = 5.0))]
    pub average_rating: f64,
    pub total_reviews: i32,
    pub is_approved: bool,
    pub is_active: bool,
    pub is_new: bool,
    pub is_featured: bool,
    #[validate(length(min = 1))]
    pub images: Vec<String>,
    #[validate(url)]
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
