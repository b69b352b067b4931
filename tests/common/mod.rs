//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use fittrack::adapters::sqlite::{
    all_embedded_migrations, create_test_pool, Migrator, SqliteUserRepository,
};
use fittrack::domain::models::{Badge, User};
use fittrack::domain::ports::{BadgeStore, UserRepository};

/// In-memory badge store double with switchable failure modes and call
/// counters, standing in for the remote badge service.
#[derive(Default)]
pub struct MockBadgeStore {
    badges: Mutex<Vec<Badge>>,
    pub award_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    fail_award: AtomicBool,
    fail_list: AtomicBool,
}

impl MockBadgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_award(&self, fail: bool) {
        self.fail_award.store(fail, Ordering::SeqCst);
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_everything(&self) {
        self.fail_award(true);
        self.fail_list(true);
    }

    pub fn award_call_count(&self) -> usize {
        self.award_calls.load(Ordering::SeqCst)
    }

    pub fn stored_badges(&self) -> Vec<Badge> {
        self.badges.lock().unwrap().clone()
    }
}

#[async_trait]
impl BadgeStore for MockBadgeStore {
    async fn award(&self, user_id: Uuid, name: &str, icon_url: &str) -> Result<Badge> {
        self.award_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_award.load(Ordering::SeqCst) {
            return Err(anyhow!("badge service unavailable"));
        }
        let badge = Badge {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon_url: icon_url.to_string(),
            user_id,
        };
        self.badges.lock().unwrap().push(badge.clone());
        Ok(badge)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Badge>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(anyhow!("badge service unavailable"));
        }
        Ok(self
            .badges
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, badge_id: Uuid) -> Result<()> {
        let mut badges = self.badges.lock().unwrap();
        let before = badges.len();
        badges.retain(|b| b.id != badge_id);
        if badges.len() == before {
            return Err(anyhow!("badge not found"));
        }
        Ok(())
    }
}

/// Fresh in-memory database with the full schema applied.
pub async fn setup_pool() -> SqlitePool {
    let pool = create_test_pool().await.expect("test pool");
    Migrator::new(pool.clone())
        .run_embedded_migrations(all_embedded_migrations())
        .await
        .expect("migrations");
    pool
}

/// Insert and return a user (goals and workouts carry a foreign key to it).
pub async fn seed_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(username);
    SqliteUserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("seed user");
    user
}
