//! src/domain/user_email.rs
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An email must not be empty")]
    Empty,
    #[error("An email must not be more than 320 characters long")]
    TooLong,
    #[error("An email must have a local part and a domain separated by '@'")]
    MissingAtSign,
    #[error("The local part of an email must not be empty")]
    EmptyLocalPart,
    #[error("The local part of an email must not be more than 64 characters long")]
    LocalPartTooLong,
    #[error("The local part of an email contains invalid characters")]
    InvalidLocalPart,
    #[error("The domain of an email must not be empty")]
    EmptyDomain,
    #[error("The domain of an email must not be more than 255 characters long")]
    DomainTooLong,
    #[error("The domain of an email is not a valid host name")]
    InvalidDomain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        if s.len() > 320 {
            return Err(Error::TooLong);
        }

        let (local, domain) = s.split_once('@').ok_or(Error::MissingAtSign)?;

        if local.is_empty() {
            return Err(Error::EmptyLocalPart);
        }
        if local.len() > 64 {
            return Err(Error::LocalPartTooLong);
        }
        if !is_valid_local_part(local) {
            return Err(Error::InvalidLocalPart);
        }

        if domain.is_empty() {
            return Err(Error::EmptyDomain);
        }
        if domain.len() > 255 {
            return Err(Error::DomainTooLong);
        }
        if !is_valid_domain(domain) {
            return Err(Error::InvalidDomain);
        }

        Ok(Self(s))
    }
}

/// Dot-separated atoms of ASCII alphanumerics and the usual unquoted
/// punctuation; no empty atoms, so no leading, trailing or doubled dots.
fn is_valid_local_part(local: &str) -> bool {
    let is_valid_char =
        |c: char| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c);
    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_valid_char))
}

/// Host name grammar: at least two labels separated by '.', each between 1
/// and 63 characters of ASCII alphanumerics and hyphens, with no hyphen at
/// either end of a label. A second '@' always fails here.
fn is_valid_domain(domain: &str) -> bool {
    let is_valid_label = |label: &str| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    };
    domain.contains('.') && domain.split('.').all(is_valid_label)
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
