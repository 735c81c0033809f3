//! Data client for the social media API.
//!
//! Wraps the three read endpoints and the two fan-out operations built on
//! them. Every operation is all-or-nothing: a single failed request fails
//! the whole call and no partial collection is returned.

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::config::DashboardConfig;
use crate::error::{classify_http_error, ApiError, ApiResult, NetworkError};
use crate::models::{Comment, CommentsResponse, Post, PostsResponse, User, UsersResponse};
use crate::traits::{Headers, HttpClient, HttpError};

/// Every endpoint answers with JSON.
const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

/// Longest slice of an error body kept in a `NetworkError::HttpStatus`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the users/posts/comments API.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over any [`HttpClient`].
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Create the production client (reqwest, configured timeout).
    pub fn from_config(config: &DashboardConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(config.base_url.clone(), Arc::new(http)))
    }

    /// Fetch the user directory, ordered by ascending numeric id.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let response: UsersResponse = self.get_json("users", "/users").await?;
        Ok(response.into_users())
    }

    /// Fetch the posts authored by one user.
    pub async fn list_user_posts(&self, user_id: &str) -> ApiResult<Vec<Post>> {
        let path = format!("/users/{}/posts", urlencoding::encode(user_id));
        let response: PostsResponse = self.get_json("posts", &path).await?;
        Ok(response.posts)
    }

    /// Fetch the directory, then every user's posts concurrently.
    pub async fn list_all_posts(&self) -> ApiResult<Vec<Post>> {
        let users = self.list_users().await?;
        self.posts_for_users(&users).await
    }

    /// Fetch and concatenate the posts of the given users concurrently.
    ///
    /// The first failure aborts the batch.
    pub async fn posts_for_users(&self, users: &[User]) -> ApiResult<Vec<Post>> {
        let batches = try_join_all(users.iter().map(|user| self.list_user_posts(&user.id))).await?;
        let posts: Vec<Post> = batches.into_iter().flatten().collect();
        debug!("Fetched {} posts for {} users", posts.len(), users.len());
        Ok(posts)
    }

    /// Fetch the comments on one post.
    pub async fn list_post_comments(&self, post_id: u64) -> ApiResult<Vec<Comment>> {
        let path = format!("/posts/{}/comments", post_id);
        let response: CommentsResponse = self.get_json("comments", &path).await?;
        Ok(response.comments)
    }

    /// Comment count per post id, fetched concurrently for all posts.
    ///
    /// The first failure aborts the batch.
    pub async fn comment_counts(&self, posts: &[Post]) -> ApiResult<HashMap<u64, usize>> {
        let counts = try_join_all(posts.iter().map(|post| async move {
            let comments = self.list_post_comments(post.id).await?;
            Ok::<_, ApiError>((post.id, comments.len()))
        }))
        .await?;
        Ok(counts.into_iter().collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut headers = Headers::new();
        headers.insert(ACCEPT_JSON.0.to_string(), ACCEPT_JSON.1.to_string());

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| classify_http_error(e, &url))?;

        if !response.is_success() {
            let message: String = response.text_lossy().chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(NetworkError::HttpStatus {
                url,
                status: response.status,
                message,
            }
            .into());
        }

        response
            .json::<T>()
            .map_err(|e| ApiError::malformed(resource, e))
    }
}
