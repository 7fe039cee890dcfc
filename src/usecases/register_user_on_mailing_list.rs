//! src/usecases/register_user_on_mailing_list.rs
use crate::domain::{user_email, user_name, User, UserData, UserEmail, UserName};
use crate::repository::UserRepository;
use std::sync::Arc;

#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] user_name::Error),
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] user_email::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Validates a raw name/email pair and appends it to the mailing list.
pub struct RegisterUserOnMailingList {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserOnMailingList {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// The name is checked before the email, so a request failing both
    /// checks reports the name error. Registering an email that is already
    /// on the list is allowed; lookups return the earliest entry.
    #[tracing::instrument(
        name = "Registering user on the mailing list",
        skip(self, data),
        fields(user_name = %data.name, user_email = %data.email)
    )]
    pub async fn perform(&self, data: UserData) -> Result<User, RegisterError> {
        let name = UserName::parse(data.name)?;
        let email = UserEmail::parse(data.email)?;

        let user = User { name, email };
        self.repository.add(user.clone()).await?;

        Ok(user)
    }
}
