//! src/domain/user.rs
use crate::domain::{UserEmail, UserName};
use serde::Serialize;

/// A name/email pair exactly as it arrived from the outside world, before
/// any validation has run.
#[derive(Debug, Clone)]
pub struct UserData {
    pub name: String,
    pub email: String,
}

/// A mailing-list entry. Both fields have been through `parse`, so holding a
/// `User` is proof the data is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: UserName,
    pub email: UserEmail,
}
