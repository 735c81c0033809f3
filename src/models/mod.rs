//! Data models for the remote API and the derived view records.

mod post;
mod responses;
mod user;

pub use post::{Comment, EnrichedPost, Post};
pub use responses::{CommentsResponse, PostsResponse, UsersResponse};
pub use user::{User, UserWithCount, UNKNOWN_USER_NAME};
