//! src/usecases/mod.rs
mod register_user_on_mailing_list;
pub use register_user_on_mailing_list::{RegisterError, RegisterUserOnMailingList};
