use crate::data;
use futures::future::try_join_all;
use tablefor_common::model::{
    Id, ModelValidationError,
    post::{CreatePost, Post, PostMarker},
};
use tablefor_db::{
    client::{DbClient, DbError},
    document::Document,
};
use tracing::info;

/// The backend operations the reseed needs, so the run can be driven
/// against something other than the live client in tests.
pub trait PostsStore {
    async fn list_posts(&self) -> Result<Vec<Document>, DbError>;
    async fn delete_post(&self, id: &Id<PostMarker>) -> Result<(), DbError>;
    async fn create_post(&self, post: &CreatePost) -> Result<Post, DbError>;
}

impl PostsStore for DbClient {
    async fn list_posts(&self) -> Result<Vec<Document>, DbError> {
        DbClient::list_posts(self).await
    }

    async fn delete_post(&self, id: &Id<PostMarker>) -> Result<(), DbError> {
        DbClient::delete_post(self, id).await
    }

    async fn create_post(&self, post: &CreatePost) -> Result<Post, DbError> {
        DbClient::create_post(self, post).await
    }
}

/// Deletes every existing post, then inserts the sample set. Destructive
/// and unrecoverable; any backend error aborts the run where it stands.
pub async fn reseed(store: &impl PostsStore) -> Result<(), DbError> {
    clear_posts(store).await?;

    info!("Starting to add test posts");
    for post in data::plan() {
        let created = store.create_post(&post).await?;
        info!(id = %created.id, author = %created.author.username.get(), "Created post");
    }

    info!("Test posts added successfully");
    Ok(())
}

/// Fetches all posts and fans out one delete per document, waiting for
/// every deletion before returning. A single failure fails the whole
/// phase, so no insert happens after a partial delete.
async fn clear_posts(store: &impl PostsStore) -> Result<(), DbError> {
    info!("Clearing existing posts");

    let documents = store.list_posts().await?;
    let ids = documents
        .iter()
        .map(|document| Id::<PostMarker>::new(document.id().to_owned()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ModelValidationError::from)?;

    try_join_all(ids.iter().map(|id| store.delete_post(id))).await?;

    info!(count = ids.len(), "Deleted posts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::data;
    use crate::seed::{PostsStore, reseed};
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use tablefor_common::model::{
        Id,
        post::{CreatePost, Post, PostMarker},
    };
    use tablefor_db::{
        client::DbError,
        document::{Document, DocumentDataError, FIELD_CAPTION},
    };
    use time::macros::utc_datetime;

    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    enum Event {
        Delete,
        Create,
    }

    struct RecordingStore {
        existing: Vec<Document>,
        fail_deletes: bool,
        events: Mutex<Vec<Event>>,
    }

    impl RecordingStore {
        fn new(existing: Vec<Document>, fail_deletes: bool) -> Self {
            Self {
                existing,
                fail_deletes,
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PostsStore for RecordingStore {
        async fn list_posts(&self) -> Result<Vec<Document>, DbError> {
            Ok(self.existing.clone())
        }

        async fn delete_post(&self, id: &Id<PostMarker>) -> Result<(), DbError> {
            if self.fail_deletes {
                return Err(DbError::Data(DocumentDataError::MissingField {
                    document: id.get().to_owned(),
                    field: FIELD_CAPTION,
                }));
            }
            self.events.lock().unwrap().push(Event::Delete);
            Ok(())
        }

        async fn create_post(&self, post: &CreatePost) -> Result<Post, DbError> {
            self.events.lock().unwrap().push(Event::Create);
            Ok(Post {
                id: Id::new_unchecked("created-post"),
                author: post.author.clone(),
                caption: post.caption.clone(),
                place: post.place.clone(),
                created_at: utc_datetime!(2026-08-24 10:00:00),
            })
        }
    }

    fn document(id: &str) -> Document {
        Document {
            name: format!("projects/demo/databases/(default)/documents/posts/{id}"),
            fields: BTreeMap::new(),
            create_time: None,
            update_time: None,
        }
    }

    #[tokio::test]
    async fn reseed_clears_everything_then_inserts_the_whole_plan() {
        let store = RecordingStore::new(vec![document("old-1"), document("old-2")], false);

        reseed(&store).await.unwrap();

        let events = store.events();
        let deletes = events.iter().filter(|&&e| e == Event::Delete).count();
        let creates = events.iter().filter(|&&e| e == Event::Create).count();
        assert_eq!(deletes, 2);
        assert_eq!(creates, data::plan().len());

        let first_create = events.iter().position(|&e| e == Event::Create).unwrap();
        assert!(events[..first_create].iter().all(|&e| e == Event::Delete));
    }

    #[tokio::test]
    async fn failing_delete_aborts_before_any_insert() {
        let store = RecordingStore::new(vec![document("old-1")], true);

        let result = reseed(&store).await;

        assert!(result.is_err());
        assert!(!store.events().contains(&Event::Create));
    }

    #[tokio::test]
    async fn empty_collection_skips_straight_to_inserts() {
        let store = RecordingStore::new(Vec::new(), false);

        reseed(&store).await.unwrap();

        let events = store.events();
        assert!(events.iter().all(|&e| e == Event::Create));
        assert_eq!(events.len(), data::plan().len());
    }
}
