use serde::{Deserialize, Serialize};

use super::User;

/// A post as returned by `GET /users/{id}/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub userid: u64,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, userid: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            userid,
            content: content.into(),
        }
    }
}

/// A comment as returned by `GET /posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub postid: u64,
    pub content: String,
}

/// A post joined with its author, comment count and card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: Post,
    pub user: User,
    pub comment_count: usize,
    pub image_url: String,
}

impl EnrichedPost {
    pub fn id(&self) -> u64 {
        self.post.id
    }
}
