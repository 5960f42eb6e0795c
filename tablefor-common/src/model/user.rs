use crate::model::Id;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use thiserror::Error;

pub const USERNAME_MAX_LEN: usize = 30;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct UserMarker;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Author {
    pub id: Id<UserMarker>,
    pub username: Username,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The username is invalid: {0}")]
pub struct InvalidUsernameError(String);

impl Username {
    pub fn new(username: String) -> Result<Self, InvalidUsernameError> {
        let length = username.chars().count();
        if (1..=USERNAME_MAX_LEN).contains(&length) {
            Ok(Username(username))
        } else {
            Err(InvalidUsernameError(username))
        }
    }

    #[must_use]
    pub fn new_unchecked(username: &str) -> Self {
        Self::new(username.to_owned()).expect("Username was invalid.")
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        Username::new(inner)
            .map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"Username"))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::user::{USERNAME_MAX_LEN, Username};

    #[test]
    fn username_length_limits() {
        assert!(Username::new("User1".to_owned()).is_ok());
        assert!(Username::new("B".to_owned()).is_ok());
        assert!(Username::new("x".repeat(USERNAME_MAX_LEN)).is_ok());

        assert!(Username::new(String::new()).is_err());
        assert!(Username::new("x".repeat(USERNAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn username_counts_chars_not_bytes() {
        assert!(Username::new("ü".repeat(USERNAME_MAX_LEN)).is_ok());
    }
}
