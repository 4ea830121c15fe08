//! The seeding run: wipe the storefront collections, then refill them with
//! customers, vendors and products that reference each other.
//!
//! Phases run strictly in order (clear, users, vendors, products) and the
//! first store error ends the run. Nothing is wrapped in a transaction, so a
//! failure part way through leaves whatever was already written.

pub mod products;
pub mod users;
pub mod vendors;

use rand::Rng;

use crate::{
    error::SeedResult,
    store::{SeedStore, PRODUCTS, USERS, VENDORS},
};
use products::ProductOutcome;
use users::{SharedPassword, UniqueEmails};

pub const DEFAULT_USER_COUNT: usize = 20;
pub const DEFAULT_VENDOR_COUNT: usize = 10;
pub const DEFAULT_PRODUCT_COUNT: usize = 50;
pub const DEFAULT_PASSWORD: &str = "password123";

#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub users: usize,
    pub vendors: usize,
    pub products: usize,
    /// Plaintext shared by every seeded account, customers and vendors alike.
    pub password: String,
    pub hash_cost: u32,
}

impl Default for SeedPlan {
    fn default() -> Self {
        SeedPlan {
            users: DEFAULT_USER_COUNT,
            vendors: DEFAULT_VENDOR_COUNT,
            products: DEFAULT_PRODUCT_COUNT,
            password: DEFAULT_PASSWORD.to_string(),
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub vendor_users: usize,
    pub vendors: usize,
    pub products: usize,
    pub products_skipped: bool,
}

impl SeedReport {
    pub fn total_users(&self) -> usize {
        self.users + self.vendor_users
    }
}

async fn clear<S: SeedStore>(store: &S) -> SeedResult<()> {
    for collection in [USERS, VENDORS, PRODUCTS] {
        let removed = store.clear(collection).await?;
        log::info!("Cleared {} documents from {}", removed, collection);
    }
    println!("Cleared existing data.");
    Ok(())
}

pub async fn run<S, R>(store: &S, plan: &SeedPlan, rng: &mut R) -> SeedResult<SeedReport>
where
    S: SeedStore,
    R: Rng + ?Sized,
{
    clear(store).await?;

    println!("Seeding Users...");
    let password = SharedPassword::hash(&plan.password, plan.hash_cost)?;
    let mut emails = UniqueEmails::default();
    let user_ids = users::seed_users(store, plan.users, &password, &mut emails, rng).await?;

    println!("Seeding Vendors...");
    let seeded = vendors::seed_vendors(store, plan.vendors, &password, &mut emails, rng).await?;

    println!("Seeding Products...");
    let outcome = products::seed_products(store, plan.products, &seeded.vendor_ids, rng).await?;

    let report = SeedReport {
        users: user_ids.len(),
        vendor_users: seeded.user_ids.len(),
        vendors: seeded.vendor_ids.len(),
        products: match outcome {
            ProductOutcome::Created(count) => count,
            ProductOutcome::NoVendors => 0,
        },
        products_skipped: outcome == ProductOutcome::NoVendors,
    };

    if !report.products_skipped {
        println!("Seeding Completed!");
    }
    log::info!("Seed run finished: {:?}", report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::error::SeedError;
    use crate::store::memory::MemoryStore;
    use mongodb::bson::doc;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn fast_plan() -> SeedPlan {
        SeedPlan {
            hash_cost: 4,
            ..SeedPlan::default()
        }
    }

    #[tokio::test]
    async fn default_plan_fills_all_three_collections() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(2024);

        let report = run(&store, &fast_plan(), &mut rng).await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                users: 20,
                vendor_users: 10,
                vendors: 10,
                products: 50,
                products_skipped: false,
            }
        );
        assert_eq!(report.total_users(), 30);
        assert_eq!(store.count(USERS), 30);
        assert_eq!(store.count(VENDORS), 10);
        assert_eq!(store.count(PRODUCTS), 50);
    }

    #[tokio::test]
    async fn references_resolve_and_emails_are_unique() {
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(77);
        run(&store, &fast_plan(), &mut rng).await.unwrap();

        let users = store.documents(USERS);
        let emails: HashSet<&str> = users.iter().map(|u| u.get_str("email").unwrap()).collect();
        assert_eq!(emails.len(), users.len());

        let vendor_accounts: HashSet<_> = users
            .iter()
            .filter(|u| u.get_str("role").unwrap() == "vendor")
            .map(|u| u.get_object_id("_id").unwrap())
            .collect();
        let vendors = store.documents(VENDORS);
        for vendor in &vendors {
            assert!(vendor_accounts.contains(&vendor.get_object_id("user").unwrap()));
        }

        let vendor_ids: HashSet<_> = vendors.iter().map(|v| v.get_object_id("_id").unwrap()).collect();
        for product in store.documents(PRODUCTS) {
            assert!(vendor_ids.contains(&product.get_object_id("vendor").unwrap()));

            let category = Category::ALL
                .into_iter()
                .find(|c| c.as_str() == product.get_str("topCategory").unwrap())
                .expect("category from the fixed set");
            let image = product.get_str("image").unwrap();
            assert!(category.image_pool().contains(&image));
            let images = product.get_array("images").unwrap();
            assert_eq!(images.len(), 1);
            assert_eq!(images[0].as_str(), Some(image));
        }
    }

    #[tokio::test]
    async fn rerunning_replaces_instead_of_accumulating() {
        let store = MemoryStore::new();
        store
            .insert_one(PRODUCTS, &doc! { "title": "stale listing" })
            .await
            .unwrap();
        let plan = SeedPlan {
            users: 3,
            vendors: 2,
            products: 6,
            ..fast_plan()
        };
        let mut rng = StdRng::seed_from_u64(5);

        run(&store, &plan, &mut rng).await.unwrap();
        run(&store, &plan, &mut rng).await.unwrap();

        assert_eq!(store.count(USERS), 5);
        assert_eq!(store.count(VENDORS), 2);
        assert_eq!(store.count(PRODUCTS), 6);
        assert!(store
            .documents(PRODUCTS)
            .iter()
            .all(|p| p.get_str("title").unwrap() != "stale listing"));
    }

    #[tokio::test]
    async fn no_vendors_means_no_products() {
        let store = MemoryStore::new();
        let plan = SeedPlan {
            vendors: 0,
            ..fast_plan()
        };
        let mut rng = StdRng::seed_from_u64(6);

        let report = run(&store, &plan, &mut rng).await.unwrap();

        assert!(report.products_skipped);
        assert_eq!(report.products, 0);
        assert_eq!(store.count(USERS), 20);
        assert_eq!(store.count(PRODUCTS), 0);
    }

    #[tokio::test]
    async fn store_failure_halts_and_keeps_earlier_phases() {
        let store = MemoryStore::new();
        store.fail_inserts_into(PRODUCTS);
        let mut rng = StdRng::seed_from_u64(7);

        let err = run(&store, &fast_plan(), &mut rng).await.unwrap_err();

        assert!(matches!(err, SeedError::Database(_)));
        assert_eq!(store.count(USERS), 30);
        assert_eq!(store.count(VENDORS), 10);
        assert_eq!(store.count(PRODUCTS), 0);
    }
}
