//! src/repository.rs
use crate::domain::User;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Port through which the use case reaches the mailing-list store.
///
/// The in-memory implementation below backs the tests and the default
/// wiring; a durable store implements the same contract on top of its own
/// storage and concurrency control (e.g. a unique constraint on the email
/// column).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Appends the user to the store, keeping insertion order.
    async fn add(&self, user: User) -> Result<(), anyhow::Error>;

    /// Returns the first stored entry whose email matches exactly.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, anyhow::Error>;

    /// Returns all stored entries in insertion order.
    async fn find_all_users(&self) -> Result<Vec<User>, anyhow::Error>;
}

/// Keeps the mailing list in a `Vec` for the lifetime of the process.
/// Nothing survives a restart, and concurrent writers are only serialized by
/// the mutex, not isolated from each other.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: User) -> Result<(), anyhow::Error> {
        self.users.lock().await.push(user);
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|user| user.email.as_ref() == email).cloned())
    }

    async fn find_all_users(&self) -> Result<Vec<User>, anyhow::Error> {
        Ok(self.users.lock().await.clone())
    }
}
