use fake::{
    faker::{
        company::en::{Bs, CatchPhrase},
        lorem::en::Paragraph,
    },
    Fake,
};
use mongodb::bson::oid::ObjectId;
use rand::{seq::IndexedRandom, Rng};
use validator::Validate;

use crate::{
    catalog::{Category, PLACEHOLDER_SUB_CATEGORY},
    error::SeedResult,
    models::{now, product::Product},
    store::{SeedStore, PRODUCTS, VENDORS},
};

const PRICE_RANGE: std::ops::RangeInclusive<i32> = 1_000..=50_000;
const STOCK_RANGE: std::ops::RangeInclusive<i32> = 10..=100;
const MAX_DISCOUNT: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOutcome {
    Created(usize),
    /// No vendor existed to own the products, so none were written.
    NoVendors,
}

fn pick_colors<R: Rng + ?Sized>(rng: &mut R, category: Category) -> Vec<String> {
    let palette = category.colors();
    let count = rng.random_range(1..=palette.len());
    palette
        .choose_multiple(rng, count)
        .map(|color| color.to_string())
        .collect()
}

/// A contiguous run of the category's sizes, smallest first.
fn pick_sizes<R: Rng + ?Sized>(rng: &mut R, category: Category) -> Vec<String> {
    let run = category.sizes();
    let start = rng.random_range(0..run.len());
    let end = rng.random_range(start..run.len());
    run.iter()
        .skip(start)
        .take(end - start + 1)
        .map(|size| size.to_string())
        .collect()
}

/// Builds one listing for `vendor` in a randomly chosen category, with an
/// image drawn from that category's curated pool.
pub fn build_product<R: Rng + ?Sized>(rng: &mut R, vendor: ObjectId) -> SeedResult<Product> {
    let category = Category::ALL.choose(rng).copied().unwrap_or(Category::Men);
    let image = category
        .image_pool()
        .choose(rng)
        .map(|url| url.to_string())
        .unwrap_or_default();

    let price = f64::from(rng.random_range(PRICE_RANGE));
    let discount = rng.random_range(0..=MAX_DISCOUNT);
    let original_price = (price * 100.0 / f64::from(100 - discount)).round();
    let average_rating = (rng.random_range(3.5..=5.0_f64) * 10.0).round() / 10.0;
    let timestamp = now();

    let product = Product {
        id: None,
        title: CatchPhrase().fake_with_rng(rng),
        subtitle: Bs().fake_with_rng(rng),
        description: Paragraph(3..6).fake_with_rng(rng),
        price,
        original_price,
        discount,
        top_category: category,
        sub_category: PLACEHOLDER_SUB_CATEGORY.to_string(),
        colors: pick_colors(rng, category),
        sizes: pick_sizes(rng, category),
        stock: rng.random_range(STOCK_RANGE),
        vendor,
        average_rating,
        total_reviews: rng.random_range(0..=50),
        is_approved: true,
        is_active: true,
        is_new: rng.random_bool(0.3),
        is_featured: rng.random_bool(0.2),
        images: vec![image.clone()],
        image,
        created_at: timestamp,
        updated_at: timestamp,
    };
    product.validate()?;
    Ok(product)
}

/// Creates `count` products spread over `vendor_ids`.
///
/// With no ids from this run, falls back to whatever vendors the store
/// already holds. With none at all, reports it and writes nothing.
pub async fn seed_products<S, R>(
    store: &S,
    count: usize,
    vendor_ids: &[ObjectId],
    rng: &mut R,
) -> SeedResult<ProductOutcome>
where
    S: SeedStore,
    R: Rng + ?Sized,
{
    let owners = if vendor_ids.is_empty() {
        log::info!("No vendors created in this run, looking up existing ones");
        store.ids(VENDORS).await?
    } else {
        vendor_ids.to_vec()
    };

    if owners.is_empty() {
        log::warn!("Skipping products: the vendors collection is empty");
        println!("No vendors found to assign products to.");
        return Ok(ProductOutcome::NoVendors);
    }

    let products = (0..count)
        .map(|_| {
            let vendor = owners[rng.random_range(0..owners.len())];
            build_product(rng, vendor)
        })
        .collect::<SeedResult<Vec<_>>>()?;

    if products.is_empty() {
        return Ok(ProductOutcome::Created(0));
    }

    let ids = store.insert_many(PRODUCTS, &products).await?;
    log::info!("Inserted {} products across {} vendors", ids.len(), owners.len());
    println!("Created {} products.", ids.len());
    Ok(ProductOutcome::Created(ids.len()))
}
