pub mod place;
pub mod post;
pub mod user;

use crate::model::{post::InvalidCaptionError, user::InvalidUsernameError};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use std::{fmt::Display, marker::PhantomData};
use thiserror::Error;

pub const DOCUMENT_ID_MAX_LEN: usize = 1500;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum ModelValidationError {
    #[error(transparent)]
    DocumentId(#[from] InvalidDocumentIdError),
    #[error(transparent)]
    Username(#[from] InvalidUsernameError),
    #[error(transparent)]
    Caption(#[from] InvalidCaptionError),
}

/// Backend-assigned document id, typed by the collection it belongs to.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<Marker>(String, #[serde(skip)] PhantomData<Marker>);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The document id is invalid: {0}")]
pub struct InvalidDocumentIdError(String);

impl<Marker> Id<Marker> {
    pub fn new(id: String) -> Result<Self, InvalidDocumentIdError> {
        if !id.is_empty() && id.len() <= DOCUMENT_ID_MAX_LEN && !id.contains('/') {
            Ok(Self(id, PhantomData))
        } else {
            Err(InvalidDocumentIdError(id))
        }
    }

    #[must_use]
    pub fn new_unchecked(id: &str) -> Self {
        Self::new(id.to_owned()).expect("Document id was invalid.")
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

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'de, Marker> Deserialize<'de> for Id<Marker> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        Id::new(inner).map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"Id"))
    }
}
