//! Wire representation of the hosted document database's REST surface:
//! tagged values, documents, commit writes, and the mapping between post
//! documents and the domain model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tablefor_common::model::{
    Id, ModelValidationError,
    post::{Caption, CreatePost, Post},
    user::{Author, Username},
};
use thiserror::Error;
use time::{OffsetDateTime, UtcDateTime};

pub const POSTS_COLLECTION: &str = "posts";

pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_AUTHOR_USERNAME: &str = "authorUsername";
pub const FIELD_CAPTION: &str = "caption";
pub const FIELD_PLACE_ID: &str = "placeId";
pub const FIELD_TIME_OPEN: &str = "timeOpen";

/// Sentinel the backend replaces with the commit's request time.
pub const SERVER_REQUEST_TIME: &str = "REQUEST_TIME";

/// A field value in its tagged wire form, e.g. `{"stringValue": "hi"}`.
/// Integers are carried as decimal strings on the wire.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Value {
    #[serde(rename = "nullValue")]
    Null(()),
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    #[serde(rename = "integerValue", with = "integer_string")]
    Integer(i64),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "timestampValue", with = "time::serde::rfc3339")]
    Timestamp(OffsetDateTime),
    #[serde(rename = "stringValue")]
    String(String),
}

mod integer_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name; the document id is the last path segment.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Body of a commit call: document writes applied atomically.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub writes: Vec<Write>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Write {
    pub update: WriteDocument,
    pub update_transforms: Vec<FieldTransform>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteDocument {
    pub name: String,
    pub fields: BTreeMap<String, Value>,
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTransform {
    pub field_path: &'static str,
    pub set_to_server_value: &'static str,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    #[serde(default)]
    pub write_results: Vec<WriteResult>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub commit_time: Option<OffsetDateTime>,
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub update_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub transform_results: Vec<Value>,
}

impl CommitResponse {
    /// The server-assigned time of the first write's first transform,
    /// falling back to the commit time.
    #[must_use]
    pub fn server_timestamp(&self) -> Option<OffsetDateTime> {
        self.write_results
            .first()
            .and_then(|result| result.transform_results.first())
            .and_then(|value| match value {
                Value::Timestamp(timestamp) => Some(*timestamp),
                _ => None,
            })
            .or(self.commit_time)
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum DocumentDataError {
    #[error("Document {document} is missing field {field}")]
    MissingField { document: String, field: &'static str },
    #[error("Document {document} field {field} has the wrong type")]
    WrongType { document: String, field: &'static str },
    #[error("Commit of {document} returned no server timestamp")]
    MissingServerTimestamp { document: String },
    #[error("Document contained an invalid value: {0}")]
    Data(#[from] ModelValidationError),
}

impl Document {
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn string_field(&self, field: &'static str) -> Result<&str, DocumentDataError> {
        match self.fields.get(field) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(DocumentDataError::WrongType {
                document: self.name.clone(),
                field,
            }),
            None => Err(DocumentDataError::MissingField {
                document: self.name.clone(),
                field,
            }),
        }
    }

    fn timestamp_field(&self, field: &'static str) -> Result<OffsetDateTime, DocumentDataError> {
        match self.fields.get(field) {
            Some(Value::Timestamp(timestamp)) => Ok(*timestamp),
            Some(_) => Err(DocumentDataError::WrongType {
                document: self.name.clone(),
                field,
            }),
            None => Err(DocumentDataError::MissingField {
                document: self.name.clone(),
                field,
            }),
        }
    }
}

#[must_use]
pub fn post_fields(post: &CreatePost) -> BTreeMap<String, Value> {
    BTreeMap::from([
        (
            FIELD_USER_ID.to_owned(),
            Value::String(post.author.id.get().to_owned()),
        ),
        (
            FIELD_AUTHOR_USERNAME.to_owned(),
            Value::String(post.author.username.get().to_owned()),
        ),
        (
            FIELD_CAPTION.to_owned(),
            Value::String(post.caption.get().to_owned()),
        ),
        (
            FIELD_PLACE_ID.to_owned(),
            Value::String(post.place.get().to_owned()),
        ),
    ])
}

/// The commit write for a new post: its four string fields plus the
/// transform assigning `timeOpen` to the server's request time.
#[must_use]
pub fn post_write(name: String, post: &CreatePost) -> Write {
    Write {
        update: WriteDocument {
            name,
            fields: post_fields(post),
        },
        update_transforms: vec![FieldTransform {
            field_path: FIELD_TIME_OPEN,
            set_to_server_value: SERVER_REQUEST_TIME,
        }],
    }
}

impl TryFrom<Document> for Post {
    type Error = DocumentDataError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let id = Id::new(document.id().to_owned()).map_err(ModelValidationError::from)?;
        let author = Author {
            id: Id::new(document.string_field(FIELD_USER_ID)?.to_owned())
                .map_err(ModelValidationError::from)?,
            username: Username::new(document.string_field(FIELD_AUTHOR_USERNAME)?.to_owned())
                .map_err(ModelValidationError::from)?,
        };
        let caption = Caption::new(document.string_field(FIELD_CAPTION)?.to_owned())
            .map_err(ModelValidationError::from)?;
        let place = Id::new(document.string_field(FIELD_PLACE_ID)?.to_owned())
            .map_err(ModelValidationError::from)?;
        let created_at = UtcDateTime::from(document.timestamp_field(FIELD_TIME_OPEN)?);

        Ok(Post {
            id,
            author,
            caption,
            place,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{
        CommitRequest, CommitResponse, Document, DocumentDataError, FIELD_CAPTION, FIELD_TIME_OPEN,
        FIELD_USER_ID, Value, post_fields, post_write,
    };
    use serde_json::json;
    use tablefor_common::model::{
        Id,
        post::{Caption, CreatePost, Post},
        user::{Author, Username},
    };
    use time::macros::{datetime, utc_datetime};

    #[test]
    fn value_wire_shapes() {
        assert_eq!(
            serde_json::to_value(Value::String("hi".to_owned())).unwrap(),
            json!({ "stringValue": "hi" })
        );
        assert_eq!(
            serde_json::to_value(Value::Integer(42)).unwrap(),
            json!({ "integerValue": "42" })
        );
        assert_eq!(
            serde_json::to_value(Value::Boolean(true)).unwrap(),
            json!({ "booleanValue": true })
        );
        assert_eq!(
            serde_json::to_value(Value::Null(())).unwrap(),
            json!({ "nullValue": null })
        );
    }

    #[test]
    fn value_deserializes_from_wire_shapes() {
        let value: Value = serde_json::from_value(json!({ "integerValue": "-7" })).unwrap();
        assert_eq!(value, Value::Integer(-7));

        let value: Value =
            serde_json::from_value(json!({ "timestampValue": "2026-03-01T12:00:00Z" })).unwrap();
        assert_eq!(value, Value::Timestamp(datetime!(2026-03-01 12:00:00 UTC)));

        assert!(serde_json::from_value::<Value>(json!({ "integerValue": "abc" })).is_err());
    }

    #[test]
    fn value_roundtrips() {
        let values = [
            Value::Null(()),
            Value::Boolean(false),
            Value::Integer(i64::MIN),
            Value::String("\u{bf}Por Qu\u{e9} No?".to_owned()),
            Value::Timestamp(datetime!(2026-08-24 09:30:00 UTC)),
        ];
        for value in values {
            let encoded = serde_json::to_string(&value).unwrap();
            let decoded: Value = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, value);
        }
    }

    fn sample_document() -> Document {
        serde_json::from_value(json!({
            "name": "projects/demo/databases/(default)/documents/posts/8GmAX3qKzQw1",
            "fields": {
                "userId": { "stringValue": "demo-user-1" },
                "authorUsername": { "stringValue": "User1" },
                "caption": { "stringValue": "Finally tried this place - amazing!" },
                "placeId": { "stringValue": "place-001" },
                "timeOpen": { "timestampValue": "2026-08-24T10:00:00Z" },
            },
            "createTime": "2026-08-24T10:00:00Z",
            "updateTime": "2026-08-24T10:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn document_id_is_last_path_segment() {
        assert_eq!(sample_document().id(), "8GmAX3qKzQw1");
    }

    #[test]
    fn document_converts_to_post() {
        let post = Post::try_from(sample_document()).unwrap();

        assert_eq!(post.id, Id::new_unchecked("8GmAX3qKzQw1"));
        assert_eq!(post.author.id, Id::new_unchecked("demo-user-1"));
        assert_eq!(post.author.username, Username::new_unchecked("User1"));
        assert_eq!(post.caption.get(), "Finally tried this place - amazing!");
        assert_eq!(post.place, Id::new_unchecked("place-001"));
        assert_eq!(post.created_at, utc_datetime!(2026-08-24 10:00:00));
    }

    #[test]
    fn document_without_caption_is_rejected() {
        let mut document = sample_document();
        document.fields.remove(FIELD_CAPTION);

        let error = Post::try_from(document).unwrap_err();
        assert!(matches!(
            error,
            DocumentDataError::MissingField {
                field: FIELD_CAPTION,
                ..
            }
        ));
    }

    #[test]
    fn document_without_time_open_is_rejected() {
        let mut document = sample_document();
        document.fields.remove(FIELD_TIME_OPEN);

        let error = Post::try_from(document).unwrap_err();
        assert!(matches!(
            error,
            DocumentDataError::MissingField {
                field: FIELD_TIME_OPEN,
                ..
            }
        ));
    }

    #[test]
    fn document_with_non_timestamp_time_open_is_rejected() {
        let mut document = sample_document();
        document
            .fields
            .insert(FIELD_TIME_OPEN.to_owned(), Value::String("later".to_owned()));

        let error = Post::try_from(document).unwrap_err();
        assert!(matches!(
            error,
            DocumentDataError::WrongType {
                field: FIELD_TIME_OPEN,
                ..
            }
        ));
    }

    fn sample_create_post() -> CreatePost {
        CreatePost {
            author: Author {
                id: Id::new_unchecked("demo-user-2"),
                username: Username::new_unchecked("User2"),
            },
            caption: Caption::new_unchecked("Great spot for dinner with friends!"),
            place: Id::new_unchecked("place-002"),
        }
    }

    #[test]
    fn create_post_maps_to_wire_fields() {
        let fields = post_fields(&sample_create_post());

        assert_eq!(
            fields.get(FIELD_USER_ID),
            Some(&Value::String("demo-user-2".to_owned()))
        );
        assert_eq!(
            fields.get("authorUsername"),
            Some(&Value::String("User2".to_owned()))
        );
        assert_eq!(
            fields.get(FIELD_CAPTION),
            Some(&Value::String("Great spot for dinner with friends!".to_owned()))
        );
        assert_eq!(
            fields.get("placeId"),
            Some(&Value::String("place-002".to_owned()))
        );
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn post_commit_writes_the_time_open_transform() {
        let name =
            "projects/demo/databases/(default)/documents/posts/newpost123456789012".to_owned();
        let request = CommitRequest {
            writes: vec![post_write(name, &sample_create_post())],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "writes": [{
                    "update": {
                        "name": "projects/demo/databases/(default)/documents/posts/newpost123456789012",
                        "fields": {
                            "userId": { "stringValue": "demo-user-2" },
                            "authorUsername": { "stringValue": "User2" },
                            "caption": { "stringValue": "Great spot for dinner with friends!" },
                            "placeId": { "stringValue": "place-002" },
                        },
                    },
                    "updateTransforms": [{
                        "fieldPath": "timeOpen",
                        "setToServerValue": "REQUEST_TIME",
                    }],
                }],
            })
        );
    }

    #[test]
    fn commit_response_yields_the_transform_timestamp() {
        let response: CommitResponse = serde_json::from_value(json!({
            "writeResults": [{
                "updateTime": "2026-08-24T10:00:01Z",
                "transformResults": [{ "timestampValue": "2026-08-24T10:00:00Z" }],
            }],
            "commitTime": "2026-08-24T10:00:01Z",
        }))
        .unwrap();

        assert_eq!(
            response.server_timestamp(),
            Some(datetime!(2026-08-24 10:00:00 UTC))
        );
    }

    #[test]
    fn commit_response_falls_back_to_commit_time() {
        let response: CommitResponse = serde_json::from_value(json!({
            "writeResults": [{ "updateTime": "2026-08-24T10:00:01Z" }],
            "commitTime": "2026-08-24T10:00:01Z",
        }))
        .unwrap();

        assert_eq!(
            response.server_timestamp(),
            Some(datetime!(2026-08-24 10:00:01 UTC))
        );

        assert_eq!(CommitResponse::default().server_timestamp(), None);
    }
}
