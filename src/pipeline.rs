//! Fetch + aggregate pipeline for each view.
//!
//! A pipeline run is one fetch cycle: it either produces the complete view
//! payload or fails with the first error, never a partial result.

use std::sync::Arc;

use crate::aggregate::{compute_top_users, compute_trending, enrich_posts};
use crate::client::ApiClient;
use crate::config::DashboardConfig;
use crate::controller::ViewKind;
use crate::error::ApiResult;
use crate::models::{EnrichedPost, UserWithCount};
use crate::traits::ImageSource;

/// Payload produced by one successful fetch cycle.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ViewData {
    TopUsers(Vec<UserWithCount>),
    Posts(Vec<EnrichedPost>),
}

impl ViewData {
    /// Number of rows the view will display.
    pub fn len(&self) -> usize {
        match self {
            ViewData::TopUsers(users) => users.len(),
            ViewData::Posts(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the fetch cycles for all views against one API client.
#[derive(Clone)]
pub struct Pipeline {
    client: ApiClient,
    images: Arc<dyn ImageSource>,
    top_users_limit: usize,
    image_size: (u32, u32),
}

impl Pipeline {
    pub fn new(client: ApiClient, images: Arc<dyn ImageSource>, config: &DashboardConfig) -> Self {
        Self {
            client,
            images,
            top_users_limit: config.top_users_limit,
            image_size: (config.image_width, config.image_height),
        }
    }

    /// Run the cycle for `view`.
    pub async fn load(&self, view: ViewKind) -> ApiResult<ViewData> {
        match view {
            ViewKind::TopUsers => self.load_top_users().await.map(ViewData::TopUsers),
            ViewKind::Trending => self.load_trending().await.map(ViewData::Posts),
            ViewKind::Feed => self.load_feed().await.map(ViewData::Posts),
        }
    }

    /// Directory + all posts, ranked by post count.
    pub async fn load_top_users(&self) -> ApiResult<Vec<UserWithCount>> {
        let users = self.client.list_users().await?;
        let posts = self.client.posts_for_users(&users).await?;
        Ok(compute_top_users(
            &users,
            &posts,
            self.top_users_limit,
            self.images.as_ref(),
        ))
    }

    /// Posts sharing the highest comment count.
    pub async fn load_trending(&self) -> ApiResult<Vec<EnrichedPost>> {
        let enriched = self.load_enriched().await?;
        Ok(compute_trending(&enriched))
    }

    /// Every post, newest first.
    pub async fn load_feed(&self) -> ApiResult<Vec<EnrichedPost>> {
        self.load_enriched().await
    }

    async fn load_enriched(&self) -> ApiResult<Vec<EnrichedPost>> {
        let users = self.client.list_users().await?;
        let posts = self.client.posts_for_users(&users).await?;
        let counts = self.client.comment_counts(&posts).await?;
        Ok(enrich_posts(
            &users,
            &posts,
            &counts,
            self.images.as_ref(),
            self.image_size,
        ))
    }
}
