//! Remote store client for Aurora.
//!
//! Defines the [`RemoteStore`] trait (the full surface the sync manager is
//! allowed to touch) and [`RestStore`], a PostgREST-style HTTP client for a
//! hosted relational backend. All operations are owner-scoped: the backend
//! enforces row ownership from the bearer token, and insert payloads carry
//! an explicit `owner_id`.

use reqwest::{Client, StatusCode};

use crate::types::bookmark::{Bookmark, Folder, BookmarkDraft, NewBookmark, NewFolder};
use crate::types::errors::StoreError;

/// Trait defining the remote store operations over the `bookmarks` and
/// `folders` collections.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Fetches every bookmark owned by the current user, newest first.
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError>;
    /// Inserts a bookmark; the store assigns `id` and `created_at`.
    async fn insert_bookmark(&self, record: NewBookmark) -> Result<Bookmark, StoreError>;
    /// Overwrites the editable fields of an existing bookmark.
    async fn update_bookmark(&self, id: &str, fields: BookmarkDraft) -> Result<(), StoreError>;
    async fn delete_bookmark(&self, id: &str) -> Result<(), StoreError>;

    /// Fetches every folder owned by the current user, ordered by name.
    async fn list_folders(&self) -> Result<Vec<Folder>, StoreError>;
    /// Inserts a folder and returns the stored record (with its new id).
    async fn insert_folder(&self, record: NewFolder) -> Result<Folder, StoreError>;
    async fn delete_folder(&self, id: &str) -> Result<(), StoreError>;
}

/// HTTP client for a PostgREST-style backend (`/rest/v1/{collection}`).
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str, access_token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn request(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            Err(StoreError::NotFound(body))
        } else {
            Err(StoreError::Backend(format!("{}: {}", status, body)))
        }
    }

    /// Runs a PATCH/DELETE against `?id=eq.{id}` and maps a zero-row result
    /// to `NotFound`. PostgREST answers 200 with an empty representation
    /// when the filter matched nothing, so affected rows are counted from
    /// the returned representation.
    async fn execute_row_op(
        &self,
        req: reqwest::RequestBuilder,
        id: &str,
    ) -> Result<(), StoreError> {
        let resp = self
            .request(req)
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = Self::check_status(resp).await?;
        let rows: Vec<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        if rows.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        order: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}?select=*&order={}", self.collection_url(collection), order);
        let resp = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = Self::check_status(resp).await?;
        resp.json().await.map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn insert_one<T, R>(&self, collection: &str, record: &T) -> Result<R, StoreError>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let resp = self
            .request(self.client.post(self.collection_url(collection)))
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let resp = Self::check_status(resp).await?;
        let mut rows: Vec<R> = resp
            .json()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        if rows.is_empty() {
            return Err(StoreError::Backend(format!(
                "insert into {} returned no representation",
                collection
            )));
        }
        Ok(rows.remove(0))
    }
}

impl RemoteStore for RestStore {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, StoreError> {
        self.fetch_list("bookmarks", "created_at.desc").await
    }

    async fn insert_bookmark(&self, record: NewBookmark) -> Result<Bookmark, StoreError> {
        self.insert_one("bookmarks", &record).await
    }

    async fn update_bookmark(&self, id: &str, fields: BookmarkDraft) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.collection_url("bookmarks"), id);
        self.execute_row_op(self.client.patch(&url).json(&fields), id)
            .await
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.collection_url("bookmarks"), id);
        self.execute_row_op(self.client.delete(&url), id).await
    }

    async fn list_folders(&self) -> Result<Vec<Folder>, StoreError> {
        self.fetch_list("folders", "name.asc").await
    }

    async fn insert_folder(&self, record: NewFolder) -> Result<Folder, StoreError> {
        self.insert_one("folders", &record).await
    }

    async fn delete_folder(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.collection_url("folders"), id);
        self.execute_row_op(self.client.delete(&url), id).await
    }
}
