use fake::{
    faker::{
        address::en::{BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode},
        company::en::CompanyName,
        lorem::en::Paragraph,
        phone_number::en::PhoneNumber,
    },
    Fake,
};
use mongodb::bson::oid::ObjectId;
use rand::{seq::IndexedRandom, Rng};
use validator::Validate;

use super::users::{build_account, SharedPassword, UniqueEmails};
use crate::{
    catalog::Category,
    error::SeedResult,
    models::{
        now,
        user::{User, UserRole},
        vendor::{BankDetails, PostalAddress, TaxDetails, Vendor, VendorDocuments, VendorStatus},
    },
    store::{SeedStore, USERS, VENDORS},
};

const BANK_NAME: &str = "Fake Bank";
const IFSC_CODE: &str = "FAKE0001";
const BRANCH_NAME: &str = "Main Branch";

#[derive(Debug, Default)]
pub struct SeededVendors {
    /// Accounts with role `vendor`, one per profile.
    pub user_ids: Vec<ObjectId>,
    pub vendor_ids: Vec<ObjectId>,
}

fn postal_address<R: Rng + ?Sized>(rng: &mut R) -> PostalAddress {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    PostalAddress {
        street: format!("{number} {street}"),
        city: CityName().fake_with_rng(rng),
        state: StateName().fake_with_rng(rng),
        zip_code: ZipCode().fake_with_rng(rng),
        country: CountryName().fake_with_rng(rng),
    }
}

fn account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "PK{:02}FAKE{:016}",
        rng.random_range(10..100),
        rng.random_range(0..10_000_000_000_000_000u64)
    )
}

/// Builds an approved, verified shop profile owned by the account `owner_id`.
pub fn build_vendor<R: Rng + ?Sized>(rng: &mut R, owner: &User, owner_id: ObjectId) -> SeedResult<Vendor> {
    let company: String = CompanyName().fake_with_rng(rng);
    let timestamp = now();

    let vendor = Vendor {
        id: None,
        user: owner_id,
        business_name: format!("{company} LLC"),
        shop_name: company,
        business_type: "Company".to_string(),
        business_category: Category::ALL.choose(rng).copied().unwrap_or(Category::Men),
        business_description: Paragraph(2..4).fake_with_rng(rng),
        established_year: rng.random_range(1990..=2023),
        contact_person: owner.name.clone(),
        phone_number: PhoneNumber().fake_with_rng(rng),
        alternate_phone: PhoneNumber().fake_with_rng(rng),
        email: owner.email.clone(),
        business_address: postal_address(rng),
        pickup_address: postal_address(rng),
        bank_details: BankDetails {
            account_holder_name: owner.name.clone(),
            account_number: account_number(rng),
            bank_name: BANK_NAME.to_string(),
            ifsc_code: IFSC_CODE.to_string(),
            branch_name: BRANCH_NAME.to_string(),
        },
        tax_details: TaxDetails {
            gst_number: format!("GST{}", rng.random_range(10_000..=99_999)),
            pan_number: format!("PAN{}", rng.random_range(10_000..=99_999)),
            ntn_number: format!("NTN{}", rng.random_range(1_000_000..=9_999_999)),
        },
        documents: VendorDocuments::all_pending(),
        status: VendorStatus::Approved,
        is_active: true,
        is_verified: true,
        total_products: 0,
        created_at: timestamp,
        updated_at: timestamp,
    };
    vendor.validate()?;
    Ok(vendor)
}

/// Creates `count` vendor accounts and their shop profiles.
///
/// Each owning account is written on its own first, since the profile
/// must carry the id the store assigns to it. The profiles then go out
/// as one batch.
pub async fn seed_vendors<S, R>(
    store: &S,
    count: usize,
    password: &SharedPassword,
    emails: &mut UniqueEmails,
    rng: &mut R,
) -> SeedResult<SeededVendors>
where
    S: SeedStore,
    R: Rng + ?Sized,
{
    let mut seeded = SeededVendors::default();
    let mut profiles = Vec::with_capacity(count);

    for _ in 0..count {
        let owner = build_account(rng, emails, password, UserRole::Vendor)?;
        let owner_id = store.insert_one(USERS, &owner).await?;
        log::debug!("Inserted vendor account {} ({})", owner.email, owner_id);

        profiles.push(build_vendor(rng, &owner, owner_id)?);
        seeded.user_ids.push(owner_id);
    }

    if profiles.is_empty() {
        return Ok(seeded);
    }

    seeded.vendor_ids = store.insert_many(VENDORS, &profiles).await?;
    log::info!("Inserted {} vendor profiles", seeded.vendor_ids.len());
    println!("Created {} vendors.", seeded.vendor_ids.len());
    Ok(seeded)
}
