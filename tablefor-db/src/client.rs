use crate::document::{
    CommitRequest, CommitResponse, Document, DocumentDataError, ListDocumentsResponse,
    POSTS_COLLECTION, post_write,
};
use rand::Rng;
use reqwest::{Response, StatusCode};
use tablefor_common::model::{
    Id, ModelValidationError,
    post::{CreatePost, Post, PostMarker},
};
use thiserror::Error;
use time::UtcDateTime;
use url::Url;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

const API_ROOT: &str = "https://firestore.googleapis.com/v1/";
const LIST_PAGE_SIZE: &str = "300";

const DOCUMENT_ID_LEN: usize = 20;
const DOCUMENT_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Error sending request: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Error building request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("Backend replied with status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("A document in the database was invalid: {0}")]
    Data(#[from] DocumentDataError),
}

impl From<ModelValidationError> for DbError {
    fn from(value: ModelValidationError) -> Self {
        DbError::Data(DocumentDataError::from(value))
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct DbConfig {
    pub project_id: String,
    pub api_key: String,
}

/// Client for the hosted document database's REST surface. Holds the
/// project's documents root and authenticates every call with the API
/// key as a query parameter.
#[derive(Clone, Debug)]
pub struct DbClient {
    http: reqwest::Client,
    /// Resource name prefix, `projects/{id}/databases/(default)/documents`.
    documents_name: String,
    documents_url: Url,
    commit_url: Url,
    api_key: String,
}

impl DbClient {
    pub fn new(config: DbConfig) -> Result<Self> {
        let documents_name = format!(
            "projects/{}/databases/(default)/documents",
            config.project_id
        );
        let documents_url = Url::parse(&format!("{API_ROOT}{documents_name}/"))?;
        let commit_url = Url::parse(&format!("{API_ROOT}{documents_name}:commit"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            documents_name,
            documents_url,
            commit_url,
            api_key: config.api_key,
        })
    }

    fn with_key(&self, mut url: Url) -> Url {
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }

    fn posts_url(&self) -> Result<Url> {
        Ok(self.with_key(self.documents_url.join(POSTS_COLLECTION)?))
    }

    fn post_url(&self, id: &Id<PostMarker>) -> Result<Url> {
        Ok(self.with_key(self.documents_url.join(&format!("{POSTS_COLLECTION}/{id}"))?))
    }

    fn post_name(&self, id: &Id<PostMarker>) -> String {
        format!("{}/{POSTS_COLLECTION}/{id}", self.documents_name)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(DbError::Status { status, message })
    }

    /// Enumerates every document in the posts collection, following page
    /// tokens until the listing is exhausted.
    pub async fn list_posts(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.posts_url()?;
            {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("pageSize", LIST_PAGE_SIZE);
                if let Some(token) = &page_token {
                    pairs.append_pair("pageToken", token);
                }
            }

            let response = self.http.get(url).send().await?;
            let response = Self::check_status(response).await?;
            let page: ListDocumentsResponse = response.json().await?;

            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(documents)
    }

    pub async fn delete_post(&self, id: &Id<PostMarker>) -> Result<()> {
        let url = self.post_url(id)?;

        let response = self.http.delete(url).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Creates a post under a freshly generated id via a commit that also
    /// transforms `timeOpen` to the server's request time. The returned
    /// post's `created_at` is that server-assigned timestamp.
    pub async fn create_post(&self, post: &CreatePost) -> Result<Post> {
        let id =
            Id::<PostMarker>::new(generate_document_id()).map_err(ModelValidationError::from)?;
        let name = self.post_name(&id);
        let request = CommitRequest {
            writes: vec![post_write(name.clone(), post)],
        };

        let url = self.with_key(self.commit_url.clone());
        let response = self.http.post(url).json(&request).send().await?;
        let response = Self::check_status(response).await?;
        let commit: CommitResponse = response.json().await?;

        let created_at = commit
            .server_timestamp()
            .map(UtcDateTime::from)
            .ok_or(DocumentDataError::MissingServerTimestamp { document: name })?;

        Ok(Post {
            id,
            author: post.author.clone(),
            caption: post.caption.clone(),
            place: post.place.clone(),
            created_at,
        })
    }
}

/// Random document id in the backend's auto-id format, 20 alphanumeric
/// characters.
fn generate_document_id() -> String {
    let mut rng = rand::rng();
    (0..DOCUMENT_ID_LEN)
        .map(|_| char::from(DOCUMENT_ID_ALPHABET[rng.random_range(0..DOCUMENT_ID_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::client::{DOCUMENT_ID_LEN, DbClient, DbConfig, generate_document_id};
    use tablefor_common::model::{Id, post::PostMarker};

    fn client() -> DbClient {
        DbClient::new(DbConfig {
            project_id: "demo-project".to_owned(),
            api_key: "test-key".to_owned(),
        })
        .unwrap()
    }

    #[test]
    fn posts_url_targets_the_posts_collection() {
        let url = client().posts_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents/posts?key=test-key"
        );
    }

    #[test]
    fn post_url_appends_the_document_id() {
        let id = Id::new_unchecked("8GmAX3qKzQw1");
        let url = client().post_url(&id).unwrap();
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents/posts/8GmAX3qKzQw1?key=test-key"
        );
    }

    #[test]
    fn commit_url_targets_the_commit_rpc() {
        let url = client().with_key(client().commit_url.clone());
        assert_eq!(
            url.as_str(),
            "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)/documents:commit?key=test-key"
        );
    }

    #[test]
    fn generated_document_ids_are_valid_and_distinct() {
        let first = generate_document_id();
        let second = generate_document_id();

        assert_eq!(first.chars().count(), DOCUMENT_ID_LEN);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(Id::<PostMarker>::new(first.clone()).is_ok());
        assert_ne!(first, second);
    }
}
