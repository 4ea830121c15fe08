use bcrypt::hash;
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use mongodb::bson::oid::ObjectId;
use rand::Rng;
use std::collections::HashSet;
use validator::Validate;

use crate::{
    error::SeedResult,
    models::{
        now,
        user::{AccountStatus, User, UserRole},
    },
    store::{SeedStore, USERS},
};

/// Faker draws tried before falling back to a numbered address.
const MAX_EMAIL_ATTEMPTS: usize = 20;

/// One bcrypt hash shared by every account seeded in a run.
#[derive(Debug, Clone)]
pub struct SharedPassword {
    hash: String,
}

impl SharedPassword {
    pub fn hash(password: &str, cost: u32) -> SeedResult<Self> {
        Ok(SharedPassword {
            hash: hash(password, cost)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

/// Hands out lowercase email addresses, never the same one twice.
#[derive(Debug, Default)]
pub struct UniqueEmails {
    issued: HashSet<String>,
}

impl UniqueEmails {
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        for _ in 0..MAX_EMAIL_ATTEMPTS {
            let candidate = SafeEmail().fake_with_rng::<String, _>(rng).to_lowercase();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }

        let base = SafeEmail().fake_with_rng::<String, _>(rng).to_lowercase();
        let (local, domain) = base.split_once('@').unwrap_or((base.as_str(), "example.com"));
        let mut suffix = 1;
        loop {
            let candidate = format!("{local}.{suffix}@{domain}");
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// Builds a verified, approved account that can sign in straight away.
pub fn build_account<R: Rng + ?Sized>(
    rng: &mut R,
    emails: &mut UniqueEmails,
    password: &SharedPassword,
    role: UserRole,
) -> SeedResult<User> {
    let timestamp = now();
    let user = User {
        id: None,
        name: Name().fake_with_rng(rng),
        email: emails.next(rng),
        password: password.as_str().to_string(),
        role,
        status: AccountStatus::Active,
        is_email_verified: true,
        is_approved: true,
        addresses: Vec::new(),
        created_at: timestamp,
        updated_at: timestamp,
    };
    user.validate()?;
    Ok(user)
}

pub async fn seed_users<S, R>(
    store: &S,
    count: usize,
    password: &SharedPassword,
    emails: &mut UniqueEmails,
    rng: &mut R,
) -> SeedResult<Vec<ObjectId>>
where
    S: SeedStore,
    R: Rng + ?Sized,
{
    let users = (0..count)
        .map(|_| build_account(rng, emails, password, UserRole::User))
        .collect::<SeedResult<Vec<_>>>()?;

    if users.is_empty() {
        return Ok(Vec::new());
    }

    let ids = store.insert_many(USERS, &users).await?;
    log::info!("Inserted {} customer accounts", ids.len());
    println!("Created {} users.", ids.len());
    Ok(ids)
}
