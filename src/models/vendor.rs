use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::Category;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    #[validate(length(min = 1))]
    pub shop_name: String,
    #[validate(length(min = 1))]
    pub business_name: String,
    pub business_type: String,
    pub business_category: Category,
    pub business_description: String,
    #[validate(range(min = 1900, max = 2100))]
    pub established_year: i32,
    pub contact_person: String,
    pub phone_number: String,
    pub alternate_phone: String,
    #[validate(email)]
    pub email: String,
    pub business_address: PostalAddress,
    pub pickup_address: PostalAddress,
    pub bank_details: BankDetails,
    pub tax_details: TaxDetails,
    pub documents: VendorDocuments,
    pub status: VendorStatus,
    pub is_active: bool,
    pub is_verified: bool,
    pub total_products: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub ifsc_code: String,
    pub branch_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaxDetails {
    pub gst_number: String,
    pub pan_number: String,
    pub ntn_number: String,
}

/// Review state of each uploaded verification document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorDocuments {
    pub business_license: DocumentStatus,
    pub tax_certificate: DocumentStatus,
    pub identity_proof: DocumentStatus,
    pub address_proof: DocumentStatus,
}

impl VendorDocuments {
    pub fn all_pending() -> Self {
        VendorDocuments {
            business_license: DocumentStatus::Pending,
            tax_certificate: DocumentStatus::Pending,
            identity_proof: DocumentStatus::Pending,
            address_proof: DocumentStatus::Pending,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Approved,
}
