pub mod product;
pub mod user;
pub mod vendor;

use chrono::Utc;
use mongodb::bson::DateTime;

pub fn now() -> DateTime {
    DateTime::from_millis(Utc::now().timestamp_millis())
}
