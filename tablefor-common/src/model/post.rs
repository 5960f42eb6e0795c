use crate::model::Id;
use crate::model::place::PlaceMarker;
use crate::model::user::Author;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use thiserror::Error;
use time::UtcDateTime;

pub const CAPTION_MAX_LEN: usize = 280;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// A stored post. `created_at` is assigned by the backend at write time
/// and is never set locally.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub author: Author,
    pub caption: Caption,
    pub place: Id<PlaceMarker>,
    pub created_at: UtcDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct CreatePost {
    pub author: Author,
    pub caption: Caption,
    pub place: Id<PlaceMarker>,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Caption(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The caption is invalid: {0}")]
pub struct InvalidCaptionError(String);

impl Caption {
    pub fn new(caption: String) -> Result<Self, InvalidCaptionError> {
        let length = caption.chars().count();
        if (1..=CAPTION_MAX_LEN).contains(&length) {
            Ok(Caption(caption))
        } else {
            Err(InvalidCaptionError(caption))
        }
    }

    #[must_use]
    pub fn new_unchecked(caption: &str) -> Self {
        Self::new(caption.to_owned()).expect("Caption was invalid.")
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

impl<'de> Deserialize<'de> for Caption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        Caption::new(inner).map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"Caption"))
    }
}
