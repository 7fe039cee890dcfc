//! src/domain/user_name.rs
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("A name must not be empty")]
    Empty,
    #[error("A name must be at least 2 characters long")]
    TooShort,
    #[error("A name must not be more than 256 graphemes long")]
    TooLong,
    #[error("A name must not contain any of the following characters: '/' '(' ')' '\"' '<' '>' '\\' '{{' '}}'")]
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserName(String);

impl UserName {
    pub fn parse(s: String) -> Result<Self, Error> {
        let is_empty_or_whitespace = s.trim().is_empty();
        if is_empty_or_whitespace {
            return Err(Error::Empty);
        }

        // Lengths are counted in graphemes, not bytes, so that a name like
        // `a̐` counts as one character.
        let length = s.graphemes(true).count();
        if length < 2 {
            return Err(Error::TooShort);
        }
        if length > 256 {
            return Err(Error::TooLong);
        }

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));
        if contains_forbidden_characters {
            return Err(Error::InvalidCharacters);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
